//! Reusable range fixtures.
//!
//! - [`canonical_composite`]: a continuous range and a stepped range with a
//!   gap between them, queried at [`CANONICAL_QUERY`].
//! - [`mixed_composite`]: one member of each leaf backend.

use gamut_range::{CompositeRange, ContinuousRange, DiscreteSetRange, LinearDiscreteRange, Range};

/// The query value used with [`canonical_composite`]; its closest value is `906`.
pub const CANONICAL_QUERY: f32 = 905.5;

/// Box a range as a composite member.
pub fn boxed<T, R>(range: R) -> Box<dyn Range<T>>
where
    T: Copy + PartialOrd,
    R: Range<T> + 'static,
{
    Box::new(range)
}

/// `[2.35, 800] ∪ {900, 901, ..., 1000}`.
pub fn canonical_composite() -> CompositeRange<f32> {
    CompositeRange::new(vec![
        boxed(ContinuousRange::new(2.35f32, 800.0).unwrap()),
        boxed(LinearDiscreteRange::new(900.0f32, 1000.0, 1.0).unwrap()),
    ])
    .unwrap()
}

/// `[0, 10] ∪ {20, 25, 40} ∪ {50, 52, ..., 60}`.
pub fn mixed_composite() -> CompositeRange<f64> {
    CompositeRange::new(vec![
        boxed(ContinuousRange::new(0.0, 10.0).unwrap()),
        boxed(DiscreteSetRange::new([20.0, 25.0, 40.0]).unwrap()),
        boxed(LinearDiscreteRange::new(50.0, 60.0, 2.0).unwrap()),
    ])
    .unwrap()
}
