//! Test utilities and fixtures for gamut development.
//!
//! Provides [`init_logging`] for tests that want to see library log output,
//! a [`RecordingListener`] that captures change events, and the standard
//! range fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{boxed, canonical_composite, mixed_composite, CANONICAL_QUERY};

use gamut_core::PropertyChanged;
use std::cell::RefCell;
use std::rc::Rc;

/// Install `env_logger` in test mode. Safe to call from every test.
///
/// Verbosity follows `RUST_LOG`, e.g. `RUST_LOG=gamut_range=trace`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Captures every [`PropertyChanged`] event it is subscribed to.
///
/// Clones share the same event log, so keep one handle for assertions and
/// hand [`callback`](RecordingListener::callback) to the range.
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<PropertyChanged>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this recorder's log.
    pub fn callback(&self) -> impl FnMut(&PropertyChanged) + 'static {
        let events = Rc::clone(&self.events);
        move |event| events.borrow_mut().push(*event)
    }

    /// Snapshot of the events recorded so far, oldest first.
    pub fn events(&self) -> Vec<PropertyChanged> {
        self.events.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
