//! The core `Range` trait.

use gamut_core::RangeInstanceId;
use std::fmt;

/// Central abstraction over a domain of admissible values.
///
/// Every backend answers the same two questions: is a value inside the
/// domain, and which admissible value is closest to an arbitrary query.
/// Backends differ only in how they store the domain and how they search
/// it. [`CompositeRange`](crate::CompositeRange) holds `Box<dyn Range<T>>`
/// members, so the trait is object safe.
///
/// # Invariants
///
/// - `min_value() <= max_value()`, enforced at construction.
/// - `is_in_range(find_closest_value(v))` for every ordered `v`. The one
///   exception is a [`LinearDiscreteRange`](crate::LinearDiscreteRange)
///   anchored at [`StepAnchor::Origin`](crate::StepAnchor::Origin) whose
///   bounds are not multiples of its step.
/// - Queries are total: they never fail and never allocate beyond small
///   transient buffers.
///
/// Unordered floating-point inputs (NaN) fall outside the contract.
pub trait Range<T: Copy + PartialOrd>: fmt::Debug {
    /// Smallest admissible value.
    fn min_value(&self) -> T;

    /// Largest admissible value.
    fn max_value(&self) -> T;

    /// Whether `value` lies inside the domain.
    ///
    /// Default implementation checks `min_value() <= value <= max_value()`.
    /// Backends whose domain has holes override this.
    fn is_in_range(&self, value: T) -> bool {
        self.min_value() <= value && value <= self.max_value()
    }

    /// The admissible value nearest to `value`, per backend-specific rules.
    fn find_closest_value(&self, value: T) -> T;

    /// Whether `value` is already admissible: in range, and its own
    /// closest value.
    fn is_correct(&self, value: T) -> bool {
        self.is_in_range(value) && self.find_closest_value(value) == value
    }

    /// Unique instance identifier for this range object.
    fn instance_id(&self) -> RangeInstanceId;
}
