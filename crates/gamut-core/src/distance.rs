//! Numeric distance between values of an ordered type.
//!
//! Closest-value searches over discrete sets and composites rank candidates
//! by [`Distance::distance`]. The ordering comparator alone is not a metric:
//! a three-way comparison only says *which side* a value is on, never *how
//! far*, so every searchable value type must supply a real distance.

use std::fmt;

/// An ordered value type with a numeric distance.
///
/// Implementations must satisfy `a.distance(a) == 0`, symmetry
/// (`a.distance(b) == b.distance(a)`), and monotonicity along the order
/// (`a <= b <= c` implies `a.distance(b) <= a.distance(c)`).
///
/// Provided for every primitive integer (via `abs_diff`, so the result never
/// overflows) and for `f32`/`f64` (`|a - b|`).
///
/// # Examples
///
/// ```
/// use gamut_core::Distance;
///
/// assert_eq!(3i32.distance(-4), 7u32);
/// assert_eq!(2.5f32.distance(1.0), 1.5);
/// ```
pub trait Distance: Copy + PartialOrd + fmt::Debug {
    /// The distance type. Unsigned for integers, `Self` for floats.
    type Output: Copy + PartialOrd + fmt::Debug;

    /// Distance between `self` and `other`.
    fn distance(self, other: Self) -> Self::Output;
}

macro_rules! impl_distance_int {
    ($($t:ty => $out:ty),* $(,)?) => {
        $(
            impl Distance for $t {
                type Output = $out;

                #[inline]
                fn distance(self, other: Self) -> $out {
                    self.abs_diff(other)
                }
            }
        )*
    };
}

impl_distance_int!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
);

macro_rules! impl_distance_float {
    ($($t:ty),*) => {
        $(
            impl Distance for $t {
                type Output = $t;

                #[inline]
                fn distance(self, other: Self) -> $t {
                    (self - other).abs()
                }
            }
        )*
    };
}

impl_distance_float!(f32, f64);

/// Pick the candidate nearest to `value`.
///
/// `first` seeds the search, so there is always an answer. A later candidate
/// replaces the current best only when it is *strictly* closer: among
/// equidistant candidates the first one in iteration order wins.
///
/// # Examples
///
/// ```
/// use gamut_core::distance::nearest;
///
/// // 5 and 9 are both 2 away from 7; 5 comes first.
/// assert_eq!(nearest(7, 1, [5, 9]), 5);
/// assert_eq!(nearest(8, 1, [5, 9]), 9);
/// ```
pub fn nearest<T, I>(value: T, first: T, rest: I) -> T
where
    T: Distance,
    I: IntoIterator<Item = T>,
{
    let mut best = first;
    let mut best_distance = value.distance(first);
    for candidate in rest {
        let d = value.distance(candidate);
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn integer_distance_does_not_overflow() {
        assert_eq!(i8::MIN.distance(i8::MAX), 255u8);
        assert_eq!(u64::MAX.distance(0), u64::MAX);
    }

    #[test]
    fn float_distance_is_absolute() {
        assert_eq!(800.0f32.distance(905.5), 105.5);
        assert_eq!(906.0f32.distance(905.5), 0.5);
        assert_eq!((-1.0f64).distance(1.0), 2.0);
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        assert_eq!(nearest(7, 5, [9]), 5);
        assert_eq!(nearest(7, 9, [5]), 9);
    }

    #[test]
    fn nearest_with_no_rest_returns_first() {
        assert_eq!(nearest(100, 3, std::iter::empty()), 3);
    }

    proptest! {
        #[test]
        fn integer_distance_is_symmetric(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(a.distance(b), b.distance(a));
            prop_assert_eq!(a.distance(a), 0);
        }

        #[test]
        fn nearest_matches_exhaustive_minimum(
            value in -1000i64..1000,
            first in -1000i64..1000,
            rest in proptest::collection::vec(-1000i64..1000, 0..16),
        ) {
            let got = nearest(value, first, rest.iter().copied());
            let best = std::iter::once(first)
                .chain(rest.iter().copied())
                .map(|c| value.distance(c))
                .min()
                .unwrap();
            prop_assert_eq!(value.distance(got), best);
            // First minimal candidate in iteration order.
            let expected = std::iter::once(first)
                .chain(rest.iter().copied())
                .find(|c| value.distance(*c) == best)
                .unwrap();
            prop_assert_eq!(got, expected);
        }
    }
}
