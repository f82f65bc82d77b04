//! Gamut: ranges over ordered values with closest-value search.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gamut sub-crates. For most users, adding `gamut` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gamut::prelude::*;
//!
//! // A continuous band with a stepped band above it.
//! let range = CompositeRange::new(vec![
//!     Box::new(ContinuousRange::new(2.35f32, 800.0).unwrap()),
//!     Box::new(LinearDiscreteRange::new(900.0f32, 1000.0, 1.0).unwrap()),
//! ])
//! .unwrap();
//!
//! assert_eq!(range.find_closest_value(905.5), 906.0);
//! assert_eq!(range.find_closest_value(-4.0), 2.35);
//! assert!(range.is_correct(500.0));
//! assert!(!range.is_in_range(850.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gamut-core` | Errors, IDs, the distance metric, change notification |
//! | [`range`] | `gamut-range` | The `Range` trait, backends, and configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and traits (`gamut-core`).
///
/// Contains [`types::RangeError`], [`types::Distance`], and the change
/// notification types ([`types::ChangeNotifier`], [`types::PropertyChanged`]).
pub use gamut_core as types;

/// Range backends and configuration (`gamut-range`).
///
/// Provides the [`range::Range`] trait and concrete backends:
/// [`range::ContinuousRange`], [`range::DiscreteSetRange`],
/// [`range::LinearDiscreteRange`], and [`range::CompositeRange`].
pub use gamut_range as range;

/// Common imports for typical gamut usage.
///
/// ```rust
/// use gamut::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gamut_core::{Distance, ListenerId, PropertyChanged, RangeInstanceId, RangeProperty};

    // Errors
    pub use gamut_core::RangeError;

    // Ranges
    pub use gamut_range::{
        CompositeRange, ContinuousRange, DiscreteSetRange, LinearDiscreteRange, Range,
        RangeConfig, StepAnchor,
    };
}
