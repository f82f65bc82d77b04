//! Error types for range construction and mutation.
//!
//! Queries (`find_closest_value`, `is_in_range`, bounds) are total and never
//! fail. Every precondition is checked when a range is built or when one of
//! its tunable parameters is replaced.

use thiserror::Error;

/// Errors arising from range construction, mutation, or configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A discrete range was given no admissible values.
    #[error("discrete range must have at least one value")]
    EmptyDomain,
    /// A composite range was given no member ranges.
    #[error("composite range must have at least one member")]
    EmptyComposite,
    /// The range parameters are inconsistent (`min > max`, a non-positive
    /// step, unsorted discrete values, ...).
    #[error("invalid range configuration: {reason}")]
    InvalidConfiguration {
        /// What went wrong.
        reason: String,
    },
}

impl RangeError {
    /// Shorthand for [`RangeError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the two empty-collection variants.
    pub fn is_empty_domain(&self) -> bool {
        matches!(self, Self::EmptyDomain | Self::EmptyComposite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = RangeError::invalid("min 10 is greater than max 2");
        assert_eq!(
            err.to_string(),
            "invalid range configuration: min 10 is greater than max 2"
        );
    }

    #[test]
    fn empty_variants_are_distinct() {
        assert_ne!(RangeError::EmptyDomain, RangeError::EmptyComposite);
        assert!(RangeError::EmptyDomain.is_empty_domain());
        assert!(RangeError::EmptyComposite.is_empty_domain());
        assert!(!RangeError::invalid("x").is_empty_domain());
    }
}
