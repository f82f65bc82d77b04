//! Range backends with closest-value search.
//!
//! This crate defines the [`Range`] trait, the single query contract shared
//! by every kind of admissible-value domain, along with its backends.
//!
//! # Backends
//!
//! - [`ContinuousRange`]: the closed interval `[min, max]`
//! - [`DiscreteSetRange`]: an explicit ascending set of values
//! - [`LinearDiscreteRange`]: evenly spaced floating-point steps, see [`StepAnchor`]
//! - [`CompositeRange`]: the union of other ranges, nestable
//!
//! # Configuration
//!
//! A whole range tree can be described as data with [`RangeConfig`] and
//! built in one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod anchor;
pub mod composite;
pub mod config;
pub mod continuous;
pub mod discrete_set;
pub mod linear_discrete;
pub mod range;

#[cfg(test)]
pub(crate) mod compliance;

pub use anchor::StepAnchor;
pub use composite::CompositeRange;
pub use config::RangeConfig;
pub use continuous::ContinuousRange;
pub use discrete_set::DiscreteSetRange;
pub use linear_discrete::LinearDiscreteRange;
pub use range::Range;
