//! Evenly stepped floating-point range.

use crate::anchor::StepAnchor;
use crate::continuous::{check_bounds, ContinuousRange};
use crate::range::Range;
use gamut_core::{
    ChangeNotifier, ListenerId, PropertyChanged, RangeError, RangeInstanceId, RangeProperty,
};
use num_traits::Float;
use std::fmt;

/// A floating-point range whose admissible values are spaced by a fixed step.
///
/// Closest-value search is O(1) step quantization instead of a scan:
/// queries outside `[min, max]` clamp to the nearest bound; queries inside
/// round to the nearest grid point, with a remainder of exactly half a step
/// rounding up. Where the grid sits is chosen by [`StepAnchor`].
///
/// With the default [`StepAnchor::Origin`] the remainder is taken with `%`,
/// whose sign follows the dividend, so negative queries round toward zero
/// unless they are already on the grid.
///
/// # Examples
///
/// ```
/// use gamut_range::{LinearDiscreteRange, Range};
///
/// let range = LinearDiscreteRange::new(900.0f32, 1000.0, 1.0).unwrap();
/// assert_eq!(range.find_closest_value(905.5), 906.0);
/// assert_eq!(range.find_closest_value(905.4), 905.0);
/// assert_eq!(range.find_closest_value(12.0), 900.0);
/// assert!(range.is_correct(906.0));
/// assert!(!range.is_correct(905.5));
/// ```
#[derive(Debug)]
pub struct LinearDiscreteRange<F = f32> {
    bounds: ContinuousRange<F>,
    step: F,
    anchor: StepAnchor,
    notifier: ChangeNotifier,
}

impl<F> LinearDiscreteRange<F>
where
    F: Float + fmt::Debug,
{
    /// Create a new stepped range anchored at the origin.
    ///
    /// Returns `Err(RangeError::InvalidConfiguration)` if `min > max`, a
    /// bound or the span `max - min` is not finite, or `step` is not a
    /// finite positive number. The step does not have to divide `max - min`.
    pub fn new(min: F, max: F, step: F) -> Result<Self, RangeError> {
        check_step(step)?;
        check_finite_span(min, max)?;
        Ok(Self {
            bounds: ContinuousRange::new(min, max)?,
            step,
            anchor: StepAnchor::Origin,
            notifier: ChangeNotifier::new(),
        })
    }

    /// Builder: set the grid anchor.
    pub fn with_anchor(mut self, anchor: StepAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The grid anchor.
    pub fn anchor(&self) -> StepAnchor {
        self.anchor
    }

    /// The step between admissible values.
    pub fn value_step(&self) -> F {
        self.step
    }

    /// Replace the step and notify listeners.
    ///
    /// On error the range is left unchanged and no notification fires.
    pub fn set_value_step(&mut self, step: F) -> Result<(), RangeError> {
        check_step(step)?;
        self.step = step;
        self.notifier.notify(&PropertyChanged {
            range: self.bounds.instance_id(),
            property: RangeProperty::ValueStep,
        });
        Ok(())
    }

    /// Register a listener fired after [`set_value_step`](Self::set_value_step).
    pub fn on_change<L>(&mut self, listener: L) -> ListenerId
    where
        L: FnMut(&PropertyChanged) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

/// Check that `step` is finite and strictly positive.
pub(crate) fn check_step<F>(step: F) -> Result<(), RangeError>
where
    F: Float + fmt::Debug,
{
    if step.is_finite() && step > F::zero() {
        Ok(())
    } else {
        log::debug!("rejecting value step {step:?}");
        Err(RangeError::invalid(format!(
            "value step must be finite and positive, got {step:?}"
        )))
    }
}

/// Check that both bounds and the span between them are finite.
///
/// Grid arithmetic works on `value - min`, which must not overflow.
pub(crate) fn check_finite_span<F>(min: F, max: F) -> Result<(), RangeError>
where
    F: Float + fmt::Debug,
{
    if min.is_finite() && max.is_finite() && (max - min).is_finite() {
        Ok(())
    } else {
        log::debug!("rejecting stepped range bounds {min:?}, {max:?}");
        Err(RangeError::invalid(format!(
            "stepped range bounds {min:?} and {max:?} must have a finite span"
        )))
    }
}

/// Round `value` to the nearest multiple of `step`, half rounding up.
///
/// Uses the truncated remainder, so a negative `value` never rounds away
/// from zero.
#[inline]
fn snap_to_step<F: Float>(value: F, step: F) -> F {
    let remainder = value % step;
    let base = value - remainder;
    if remainder >= step / (F::one() + F::one()) {
        base + step
    } else {
        base
    }
}

impl<F> Clone for LinearDiscreteRange<F>
where
    F: Float + fmt::Debug,
{
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds.clone(),
            step: self.step,
            anchor: self.anchor,
            notifier: ChangeNotifier::new(),
        }
    }
}

impl<F> Range<F> for LinearDiscreteRange<F>
where
    F: Float + fmt::Debug,
{
    fn min_value(&self) -> F {
        self.bounds.min_value()
    }

    fn max_value(&self) -> F {
        self.bounds.max_value()
    }

    fn find_closest_value(&self, value: F) -> F {
        let min = self.bounds.min_value();
        let max = self.bounds.max_value();
        if value < min || value > max {
            return self.bounds.clamp(value);
        }
        match self.anchor {
            StepAnchor::Origin => snap_to_step(value, self.step),
            StepAnchor::Minimum => {
                let mut snapped = min + snap_to_step(value - min, self.step);
                if snapped > max {
                    snapped = snapped - self.step;
                }
                self.bounds.clamp(snapped)
            }
        }
    }

    fn instance_id(&self) -> RangeInstanceId {
        self.bounds.instance_id()
    }
}
