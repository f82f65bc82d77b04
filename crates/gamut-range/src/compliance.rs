//! Range trait compliance test helpers.
//!
//! These functions verify that a Range implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (continuous, discrete set, linear discrete, composite).
//!
//! The fixed-point check assumes the range's bounds are themselves
//! admissible grid points; stepped ranges under test must be built that way.

use crate::range::Range;
use std::fmt::Debug;

/// `count` evenly spaced sample values over `[lo, hi]`.
pub fn samples(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    assert!(count >= 2, "need at least two samples");
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| lo + (hi - lo) * (i as f64 / last))
        .collect()
}

/// Assert that `min_value() <= max_value()`.
pub fn assert_bounds_ordered<T>(range: &dyn Range<T>)
where
    T: Copy + PartialOrd + Debug,
{
    let (min, max) = (range.min_value(), range.max_value());
    assert!(min <= max, "min_value {min:?} > max_value {max:?}");
}

/// Assert that the closest value is always inside the range.
pub fn assert_closest_is_in_range<T>(range: &dyn Range<T>, samples: &[T])
where
    T: Copy + PartialOrd + Debug,
{
    for &v in samples {
        let c = range.find_closest_value(v);
        assert!(
            range.is_in_range(c),
            "find_closest_value({v:?}) = {c:?} is not in range"
        );
    }
}

/// Assert that a closest value is its own closest value.
pub fn assert_closest_is_fixed_point<T>(range: &dyn Range<T>, samples: &[T])
where
    T: Copy + PartialOrd + Debug,
{
    for &v in samples {
        let c = range.find_closest_value(v);
        let cc = range.find_closest_value(c);
        assert!(
            cc == c,
            "find_closest_value({v:?}) = {c:?}, but find_closest_value({c:?}) = {cc:?}"
        );
    }
}

/// Assert that `is_correct` holds for every closest value.
pub fn assert_closest_is_correct<T>(range: &dyn Range<T>, samples: &[T])
where
    T: Copy + PartialOrd + Debug,
{
    for &v in samples {
        let c = range.find_closest_value(v);
        assert!(range.is_correct(c), "is_correct({c:?}) is false");
    }
}

/// Assert that queries beyond the bounds snap to the bounds.
pub fn assert_outliers_snap_to_bounds<T>(range: &dyn Range<T>, samples: &[T])
where
    T: Copy + PartialOrd + Debug,
{
    let (min, max) = (range.min_value(), range.max_value());
    for &v in samples {
        if v < min {
            let c = range.find_closest_value(v);
            assert!(c == min, "find_closest_value({v:?}) = {c:?}, expected min {min:?}");
        } else if v > max {
            let c = range.find_closest_value(v);
            assert!(c == max, "find_closest_value({v:?}) = {c:?}, expected max {max:?}");
        }
    }
}

/// Assert that `is_correct(v)` agrees with its definition.
pub fn assert_is_correct_consistent<T>(range: &dyn Range<T>, samples: &[T])
where
    T: Copy + PartialOrd + Debug,
{
    for &v in samples {
        let expected = range.is_in_range(v) && range.find_closest_value(v) == v;
        assert_eq!(range.is_correct(v), expected, "is_correct({v:?}) mismatch");
    }
}

/// Run all compliance checks on a range.
pub fn run_full_compliance<T>(range: &dyn Range<T>, samples: &[T])
where
    T: Copy + PartialOrd + Debug,
{
    assert_bounds_ordered(range);
    assert_closest_is_in_range(range, samples);
    assert_closest_is_fixed_point(range, samples);
    assert_closest_is_correct(range, samples);
    assert_outliers_snap_to_bounds(range, samples);
    assert_is_correct_consistent(range, samples);
}
