//! Explicit ascending set of admissible values.

use crate::range::Range;
use gamut_core::distance::nearest;
use gamut_core::{
    ChangeNotifier, Distance, ListenerId, PropertyChanged, RangeError, RangeInstanceId,
    RangeProperty,
};
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Inline capacity of the value buffer; larger sets spill to the heap.
const INLINE_VALUES: usize = 8;

/// A range whose admissible values are an explicit ascending sequence.
///
/// Closest-value search scans the whole sequence and ranks elements by
/// [`Distance`]. Among equidistant elements the first one in sequence order
/// wins, so for `{1, 5, 9}` the query `7` resolves to `5`.
///
/// Containment uses the bounds (`first <= v <= last`), like every other
/// range; use [`contains`](Self::contains) for exact membership.
///
/// # Examples
///
/// ```
/// use gamut_range::{DiscreteSetRange, Range};
///
/// let set = DiscreteSetRange::new([1, 5, 9]).unwrap();
/// assert_eq!(set.min_value(), 1);
/// assert_eq!(set.max_value(), 9);
/// assert_eq!(set.find_closest_value(6), 5);
/// assert_eq!(set.find_closest_value(7), 5);
/// assert!(set.is_correct(9));
/// assert!(!set.is_correct(6));
/// ```
#[derive(Debug)]
pub struct DiscreteSetRange<T> {
    values: SmallVec<[T; INLINE_VALUES]>,
    notifier: ChangeNotifier,
    instance_id: RangeInstanceId,
}

impl<T: Distance> DiscreteSetRange<T> {
    /// Create a range over an ascending (non-decreasing) sequence.
    ///
    /// Returns `Err(RangeError::EmptyDomain)` if `values` is empty, or
    /// `Err(RangeError::InvalidConfiguration)` if it is not ascending.
    pub fn new(values: impl IntoIterator<Item = T>) -> Result<Self, RangeError> {
        let values: SmallVec<[T; INLINE_VALUES]> = values.into_iter().collect();
        check_values(&values)?;
        Ok(Self {
            values,
            notifier: ChangeNotifier::new(),
            instance_id: RangeInstanceId::next(),
        })
    }

    /// Create a range from values in any order. Duplicates are dropped.
    ///
    /// Still fails on an empty input, or if a value is unordered (NaN).
    pub fn from_unsorted(values: impl IntoIterator<Item = T>) -> Result<Self, RangeError> {
        let mut values: SmallVec<[T; INLINE_VALUES]> = values.into_iter().collect();
        // The sort needs a total order.
        if let Some(v) = values.iter().find(|v| v.partial_cmp(v).is_none()) {
            log::debug!("rejecting unordered discrete value {v:?}");
            return Err(RangeError::invalid(format!(
                "discrete value {v:?} is not ordered"
            )));
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        values.dedup();
        Self::new(values)
    }

    /// The admissible values, ascending.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of admissible values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always returns `false`: construction rejects an empty set.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `value` is exactly one of the admissible values.
    pub fn contains(&self, value: T) -> bool {
        self.values.iter().any(|v| *v == value)
    }

    /// Replace the admissible values and notify listeners.
    ///
    /// Validated like [`new`](Self::new). On error the range is left
    /// unchanged and no notification fires.
    pub fn set_values(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), RangeError> {
        let values: SmallVec<[T; INLINE_VALUES]> = values.into_iter().collect();
        check_values(&values)?;
        self.values = values;
        self.notifier.notify(&PropertyChanged {
            range: self.instance_id,
            property: RangeProperty::DiscreteValues,
        });
        Ok(())
    }

    /// Register a listener fired after [`set_values`](Self::set_values).
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChanged) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

/// Check that `values` is non-empty and ascending.
pub(crate) fn check_values<T: Distance>(values: &[T]) -> Result<(), RangeError> {
    if values.is_empty() {
        log::debug!("rejecting empty discrete value set");
        return Err(RangeError::EmptyDomain);
    }
    let out_of_order = values.windows(2).position(|w| {
        !matches!(
            w[0].partial_cmp(&w[1]),
            Some(Ordering::Less | Ordering::Equal)
        )
    });
    if let Some(i) = out_of_order {
        log::debug!(
            "rejecting discrete values: {:?} precedes {:?} at index {i}",
            values[i],
            values[i + 1]
        );
        return Err(RangeError::invalid(format!(
            "discrete values must be ascending, found {:?} before {:?}",
            values[i],
            values[i + 1]
        )));
    }
    // A single unordered value passes the pairwise check.
    if values[0].partial_cmp(&values[0]).is_none() {
        return Err(RangeError::invalid(format!(
            "discrete value {:?} is not ordered",
            values[0]
        )));
    }
    Ok(())
}

impl<T: Distance> Clone for DiscreteSetRange<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            notifier: ChangeNotifier::new(),
            instance_id: RangeInstanceId::next(),
        }
    }
}

impl<T: Distance> Range<T> for DiscreteSetRange<T> {
    fn min_value(&self) -> T {
        self.values[0]
    }

    fn max_value(&self) -> T {
        self.values[self.values.len() - 1]
    }

    fn find_closest_value(&self, value: T) -> T {
        nearest(value, self.values[0], self.values[1..].iter().copied())
    }

    fn instance_id(&self) -> RangeInstanceId {
        self.instance_id
    }
}
