//! Core types and traits for gamut ranges.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental pieces shared by every range backend: the error type,
//! instance and listener IDs, the [`Distance`] metric, and the change
//! notification hook used by ranges with tunable parameters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod error;
pub mod id;
pub mod notify;

pub use distance::Distance;
pub use error::RangeError;
pub use id::{ListenerId, RangeInstanceId};
pub use notify::{ChangeNotifier, PropertyChanged, RangeProperty};
