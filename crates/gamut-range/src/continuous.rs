//! Closed interval `[min, max]`.

use crate::range::Range;
use gamut_core::{RangeError, RangeInstanceId};
use std::cmp::Ordering;
use std::fmt;

/// A continuous range: every value in `[min, max]` is admissible.
///
/// # Examples
///
/// ```
/// use gamut_range::{ContinuousRange, Range};
///
/// let range = ContinuousRange::new(2, 10).unwrap();
/// assert_eq!(range.find_closest_value(1), 2);
/// assert_eq!(range.find_closest_value(15), 10);
/// assert_eq!(range.find_closest_value(5), 5);
/// assert!(range.is_correct(5));
/// ```
#[derive(Debug)]
pub struct ContinuousRange<T> {
    min: T,
    max: T,
    instance_id: RangeInstanceId,
}

impl<T> ContinuousRange<T>
where
    T: Copy + PartialOrd + fmt::Debug,
{
    /// Create a new range over `[min, max]`.
    ///
    /// Returns `Err(RangeError::InvalidConfiguration)` if `min > max` or the
    /// bounds are unordered (a NaN bound).
    pub fn new(min: T, max: T) -> Result<Self, RangeError> {
        check_bounds(min, max)?;
        Ok(Self {
            min,
            max,
            instance_id: RangeInstanceId::next(),
        })
    }

    /// Length of the interval, `max - min`.
    pub fn span(&self) -> T
    where
        T: std::ops::Sub<Output = T>,
    {
        self.max - self.min
    }

    /// Clamp `value` into `[min, max]`.
    #[inline]
    pub(crate) fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Check that `min <= max`.
pub(crate) fn check_bounds<T>(min: T, max: T) -> Result<(), RangeError>
where
    T: PartialOrd + fmt::Debug,
{
    match min.partial_cmp(&max) {
        Some(Ordering::Less | Ordering::Equal) => Ok(()),
        Some(Ordering::Greater) => {
            log::debug!("rejecting range bounds: min {min:?} > max {max:?}");
            Err(RangeError::invalid(format!(
                "min {min:?} is greater than max {max:?}"
            )))
        }
        None => {
            log::debug!("rejecting unordered range bounds {min:?}, {max:?}");
            Err(RangeError::invalid(format!(
                "bounds {min:?} and {max:?} are not ordered"
            )))
        }
    }
}

impl<T> Clone for ContinuousRange<T>
where
    T: Copy,
{
    fn clone(&self) -> Self {
        Self {
            min: self.min,
            max: self.max,
            instance_id: RangeInstanceId::next(),
        }
    }
}

impl<T> Range<T> for ContinuousRange<T>
where
    T: Copy + PartialOrd + fmt::Debug,
{
    fn min_value(&self) -> T {
        self.min
    }

    fn max_value(&self) -> T {
        self.max
    }

    fn find_closest_value(&self, value: T) -> T {
        self.clamp(value)
    }

    fn instance_id(&self) -> RangeInstanceId {
        self.instance_id
    }
}
