//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`RangeInstanceId`] allocation.
static RANGE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a range object.
///
/// Allocated from a monotonic atomic counter via [`RangeInstanceId::next`].
/// Two distinct ranges always have different IDs, even if they describe the
/// same domain. Change events carry the ID so a listener subscribed to
/// several ranges can tell them apart.
///
/// Cloning a range allocates a fresh ID: a clone is a separate object with
/// its own listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeInstanceId(u64);

impl RangeInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Uses `Relaxed` ordering: uniqueness is all that matters, the value
    /// carries no happens-before relationship with anything else.
    pub fn next() -> Self {
        Self(RANGE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RangeInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range#{}", self.0)
    }
}

/// Handle returned when subscribing to a [`ChangeNotifier`](crate::ChangeNotifier).
///
/// IDs are unique within one notifier and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
