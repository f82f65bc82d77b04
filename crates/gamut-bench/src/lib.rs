//! Benchmark profiles for gamut ranges.
//!
//! Provides pre-built ranges and query sets shared by the criterion benches:
//!
//! - [`dense_set`]: a discrete set with a few thousand unevenly spaced values
//! - [`stepped_profile`]: a wide stepped range with a fine step
//! - [`wide_composite`]: a composite of many alternating members
//! - [`query_values`]: deterministic queries spread over an interval

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gamut_core::RangeError;
use gamut_range::{
    CompositeRange, ContinuousRange, DiscreteSetRange, LinearDiscreteRange, Range, StepAnchor,
};

/// A sorted discrete set of `count` values with gaps between 1 and 8.
pub fn dense_set(count: usize) -> Result<DiscreteSetRange<f64>, RangeError> {
    let mut acc = 0.0;
    let values = (0..count as u64).map(|i| {
        acc += 1.0 + (i.wrapping_mul(6364136223846793007) >> 61) as f64;
        acc
    });
    DiscreteSetRange::new(values.collect::<Vec<_>>())
}

/// `{0, 0.01, ..., 10000}` anchored at its minimum.
pub fn stepped_profile() -> Result<LinearDiscreteRange<f64>, RangeError> {
    Ok(LinearDiscreteRange::new(0.0, 10_000.0, 0.01)?.with_anchor(StepAnchor::Minimum))
}

/// A composite of `members` ranges laid out every 100 units, cycling through
/// continuous, discrete and stepped members.
pub fn wide_composite(members: usize) -> Result<CompositeRange<f64>, RangeError> {
    let mut boxed: Vec<Box<dyn Range<f64>>> = Vec::with_capacity(members);
    for i in 0..members {
        let lo = i as f64 * 100.0;
        let member: Box<dyn Range<f64>> = match i % 3 {
            0 => Box::new(ContinuousRange::new(lo, lo + 40.0)?),
            1 => Box::new(DiscreteSetRange::new([lo, lo + 10.0, lo + 35.0, lo + 60.0])?),
            _ => Box::new(LinearDiscreteRange::new(lo, lo + 50.0, 2.5)?),
        };
        boxed.push(member);
    }
    CompositeRange::new(boxed)
}

/// `count` deterministic pseudo-random queries in `[lo, hi)`.
pub fn query_values(count: usize, lo: f64, hi: f64) -> Vec<f64> {
    (0..count as u64)
        .map(|i| {
            let bits = i.wrapping_mul(1442695040888963407) >> 11;
            lo + (bits as f64 / (1u64 << 53) as f64) * (hi - lo)
        })
        .collect()
}
