//! Union of arbitrary ranges.

use crate::range::Range;
use gamut_core::distance::nearest;
use gamut_core::{Distance, RangeError, RangeInstanceId};

/// The union of N member ranges, presented as a single range.
///
/// # Semantics
///
/// - **Bounds**: `min_value` is the smallest member minimum and `max_value`
///   the largest member maximum, recomputed on every call. Member order
///   does not matter.
/// - **Containment**: a value is in range iff at least one member contains
///   it. The members need not be contiguous, so the union may have holes
///   between its bounds.
/// - **Closest value**: every member proposes its own closest value (see
///   [`candidates`](Self::candidates)) and the candidate nearest to the
///   query wins. Equidistant candidates resolve to the earliest member.
///
/// Members are `Box<dyn Range<T>>`, so backends can be mixed freely and
/// composites can be nested.
///
/// # Examples
///
/// ```
/// use gamut_range::{CompositeRange, ContinuousRange, LinearDiscreteRange, Range};
///
/// let composite = CompositeRange::new(vec![
///     Box::new(ContinuousRange::new(2.35f32, 800.0).unwrap()),
///     Box::new(LinearDiscreteRange::new(900.0f32, 1000.0, 1.0).unwrap()),
/// ])
/// .unwrap();
///
/// // 800 is 105.5 away, the stepped member's 906 only 0.5.
/// assert_eq!(composite.find_closest_value(905.5), 906.0);
/// assert_eq!(composite.find_closest_value(830.0), 800.0);
/// assert!(!composite.is_in_range(850.0));
/// assert_eq!(composite.min_value(), 2.35);
/// assert_eq!(composite.max_value(), 1000.0);
/// ```
#[derive(Debug)]
pub struct CompositeRange<T = f32>
where
    T: Distance,
{
    members: Vec<Box<dyn Range<T>>>,
    instance_id: RangeInstanceId,
}

impl<T: Distance> CompositeRange<T> {
    /// Create a composite from its member ranges.
    ///
    /// Returns `Err(RangeError::EmptyComposite)` if `members` is empty.
    pub fn new(members: Vec<Box<dyn Range<T>>>) -> Result<Self, RangeError> {
        if members.is_empty() {
            log::debug!("rejecting composite range with no members");
            return Err(RangeError::EmptyComposite);
        }
        Ok(Self {
            members,
            instance_id: RangeInstanceId::next(),
        })
    }

    /// Number of member ranges.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always returns `false`: construction rejects an empty member list.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Access the i-th member.
    pub fn member(&self, i: usize) -> Option<&dyn Range<T>> {
        self.members.get(i).map(|m| &**m)
    }

    /// Iterate over the members in order.
    pub fn members(&self) -> impl Iterator<Item = &dyn Range<T>> + '_ {
        self.members.iter().map(|m| &**m)
    }

    /// Lazily yield each member's closest value to `value`, in member order.
    ///
    /// Each member is queried only when the iterator is advanced.
    pub fn candidates(&self, value: T) -> impl Iterator<Item = T> + '_ {
        self.candidates_from(0, value)
    }

    fn candidates_from(&self, start: usize, value: T) -> impl Iterator<Item = T> + '_ {
        self.members[start..].iter().map(move |member| {
            let candidate = member.find_closest_value(value);
            log::trace!(
                "{}: member {} proposes {candidate:?} for {value:?}",
                self.instance_id,
                member.instance_id()
            );
            candidate
        })
    }
}

impl<T: Distance> Range<T> for CompositeRange<T> {
    fn min_value(&self) -> T {
        self.members[1..]
            .iter()
            .map(|m| m.min_value())
            .fold(self.members[0].min_value(), |acc, v| if v < acc { v } else { acc })
    }

    fn max_value(&self) -> T {
        self.members[1..]
            .iter()
            .map(|m| m.max_value())
            .fold(self.members[0].max_value(), |acc, v| if v > acc { v } else { acc })
    }

    fn is_in_range(&self, value: T) -> bool {
        self.members.iter().any(|m| m.is_in_range(value))
    }

    fn find_closest_value(&self, value: T) -> T {
        let first = self.members[0].find_closest_value(value);
        let closest = nearest(value, first, self.candidates_from(1, value));
        log::trace!("{}: closest to {value:?} is {closest:?}", self.instance_id);
        closest
    }

    fn instance_id(&self) -> RangeInstanceId {
        self.instance_id
    }
}
