//! Declarative range configuration.
//!
//! [`RangeConfig`] describes a range tree as plain data, so it can be
//! loaded from JSON (or any serde format) and built in one call.
//! [`validate()`](RangeConfig::validate) checks every node up front;
//! [`build()`](RangeConfig::build) constructs the boxed range.
//!
//! ```
//! use gamut_range::{Range, RangeConfig};
//!
//! let config: RangeConfig<f32> = serde_json::from_str(r#"{
//!     "kind": "composite",
//!     "members": [
//!         { "kind": "continuous", "min": 2.35, "max": 800.0 },
//!         { "kind": "linear_discrete", "min": 900.0, "max": 1000.0, "step": 1.0 }
//!     ]
//! }"#).unwrap();
//!
//! let range = config.build().unwrap();
//! assert_eq!(range.find_closest_value(905.5), 906.0);
//! ```

use crate::anchor::StepAnchor;
use crate::composite::CompositeRange;
use crate::continuous::{check_bounds, ContinuousRange};
use crate::discrete_set::{check_values, DiscreteSetRange};
use crate::linear_discrete::{check_finite_span, check_step, LinearDiscreteRange};
use crate::range::Range;
use gamut_core::{Distance, RangeError};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Serializable description of a range, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeConfig<F> {
    /// A [`ContinuousRange`] over `[min, max]`.
    Continuous {
        /// Lower bound.
        min: F,
        /// Upper bound.
        max: F,
    },
    /// A [`DiscreteSetRange`] over ascending `values`.
    DiscreteSet {
        /// Admissible values, ascending.
        values: Vec<F>,
    },
    /// A [`LinearDiscreteRange`] from `min` to `max` by `step`.
    LinearDiscrete {
        /// Lower bound.
        min: F,
        /// Upper bound.
        max: F,
        /// Spacing between admissible values.
        step: F,
        /// Grid anchor. Defaults to [`StepAnchor::Origin`].
        #[serde(default)]
        anchor: StepAnchor,
    },
    /// A [`CompositeRange`] over `members`.
    Composite {
        /// Member range descriptions.
        members: Vec<RangeConfig<F>>,
    },
}

impl<F> RangeConfig<F>
where
    F: Float + Distance + 'static,
{
    /// Check every node of the tree without building anything.
    pub fn validate(&self) -> Result<(), RangeError> {
        match self {
            Self::Continuous { min, max } => check_bounds(*min, *max),
            Self::DiscreteSet { values } => check_values(values),
            Self::LinearDiscrete { min, max, step, .. } => {
                check_step(*step)?;
                check_finite_span(*min, *max)?;
                check_bounds(*min, *max)
            }
            Self::Composite { members } => {
                if members.is_empty() {
                    return Err(RangeError::EmptyComposite);
                }
                members.iter().try_for_each(Self::validate)
            }
        }
    }

    /// Build the described range.
    pub fn build(&self) -> Result<Box<dyn Range<F>>, RangeError> {
        let range: Box<dyn Range<F>> = match self {
            Self::Continuous { min, max } => Box::new(ContinuousRange::new(*min, *max)?),
            Self::DiscreteSet { values } => {
                Box::new(DiscreteSetRange::new(values.iter().copied())?)
            }
            Self::LinearDiscrete {
                min,
                max,
                step,
                anchor,
            } => Box::new(LinearDiscreteRange::new(*min, *max, *step)?.with_anchor(*anchor)),
            Self::Composite { members } => {
                let members = members
                    .iter()
                    .map(Self::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(CompositeRange::new(members)?)
            }
        };
        log::debug!("built {} from {}", range.instance_id(), self.kind());
        Ok(range)
    }

    /// The `kind` tag of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Continuous { .. } => "continuous",
            Self::DiscreteSet { .. } => "discrete_set",
            Self::LinearDiscrete { .. } => "linear_discrete",
            Self::Composite { .. } => "composite",
        }
    }
}
