//! Grid anchoring for stepped ranges.

use serde::{Deserialize, Serialize};

/// Where the step grid of a [`LinearDiscreteRange`](crate::LinearDiscreteRange)
/// is anchored.
///
/// # Examples
///
/// ```
/// use gamut_range::{LinearDiscreteRange, Range, StepAnchor};
///
/// // min = 0.25 is not a multiple of the step.
/// let origin = LinearDiscreteRange::new(0.25f32, 10.0, 1.0).unwrap();
/// let minimum = LinearDiscreteRange::new(0.25f32, 10.0, 1.0)
///     .unwrap()
///     .with_anchor(StepAnchor::Minimum);
///
/// // Grid {0, 1, 2, ...}: snaps to 3.
/// assert_eq!(origin.find_closest_value(3.2), 3.0);
/// // Grid {0.25, 1.25, 2.25, ...}: snaps to 3.25.
/// assert_eq!(minimum.find_closest_value(3.2), 3.25);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAnchor {
    /// Grid points are the multiples of the step: `{k * step}`.
    ///
    /// If `min` is not itself a multiple of the step, values near `min`
    /// can snap to a grid point below it.
    #[default]
    Origin,
    /// Grid points are `{min + k * step}`, clipped to `max`.
    Minimum,
}
