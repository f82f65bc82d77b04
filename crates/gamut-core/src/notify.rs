//! Change notification for ranges with tunable parameters.
//!
//! Only the ranges that expose a mutator carry a [`ChangeNotifier`]: the
//! step of a linear discrete range and the value set of a discrete set
//! range. Listeners are plain callbacks invoked synchronously, after the
//! new value is in place, in registration order.

use crate::id::{ListenerId, RangeInstanceId};
use indexmap::IndexMap;
use std::fmt;

/// A range parameter that can be replaced after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeProperty {
    /// The increment of a linear discrete range.
    ValueStep,
    /// The admissible value sequence of a discrete set range.
    DiscreteValues,
}

impl fmt::Display for RangeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueStep => write!(f, "value_step"),
            Self::DiscreteValues => write!(f, "discrete_values"),
        }
    }
}

/// Event delivered to listeners after a property has been replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyChanged {
    /// The range whose property changed.
    pub range: RangeInstanceId,
    /// Which property changed.
    pub property: RangeProperty,
}

type Listener = Box<dyn FnMut(&PropertyChanged)>;

/// Registry of change listeners.
///
/// Cloning a notifier yields an empty registry: listeners belong to the
/// object they subscribed to, not to its copies.
///
/// # Examples
///
/// ```
/// use gamut_core::{ChangeNotifier, PropertyChanged, RangeInstanceId, RangeProperty};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let mut notifier = ChangeNotifier::new();
/// let seen = Rc::clone(&hits);
/// let id = notifier.subscribe(move |_| seen.set(seen.get() + 1));
///
/// let event = PropertyChanged {
///     range: RangeInstanceId::next(),
///     property: RangeProperty::ValueStep,
/// };
/// notifier.notify(&event);
/// assert_eq!(hits.get(), 1);
///
/// assert!(notifier.unsubscribe(id));
/// notifier.notify(&event);
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: IndexMap<ListenerId, Listener>,
    next_id: u64,
}

impl ChangeNotifier {
    /// Create a notifier with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns the handle used to remove it.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChanged) + 'static,
    {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    ///
    /// The remaining listeners keep their relative order.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    /// Deliver `event` to every listener in registration order.
    pub fn notify(&mut self, event: &PropertyChanged) {
        log::debug!(
            "{} changed {}, notifying {} listener(s)",
            event.range,
            event.property,
            self.listeners.len()
        );
        for listener in self.listeners.values_mut() {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Clone for ChangeNotifier {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
