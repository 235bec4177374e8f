//! Numeric element types accepted by the sparsification routines

use std::cmp::Ordering;
use std::fmt::Debug;

/// A dense-vector element that can be ranked by value and zeroed
///
/// Ranking uses `PartialOrd`. Unordered pairs (NaN) compare as equal, so
/// where a NaN lands in a selection is unspecified.
pub trait Element: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Additive identity written into non-selected positions
    const ZERO: Self;

    /// Total comparison used by the selection backends
    #[inline]
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Whether this value is exactly zero
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

macro_rules! impl_element {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_element! {
    f32 => 0.0,
    f64 => 0.0,
    i32 => 0,
    i64 => 0,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_constants() {
        assert_eq!(f32::ZERO, 0.0);
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(i32::ZERO, 0);
        assert_eq!(i64::ZERO, 0);
    }

    #[test]
    fn test_rank_cmp_by_value_not_magnitude() {
        assert_eq!((-4.0f32).rank_cmp(&1.0), Ordering::Less);
        assert_eq!(5i64.rank_cmp(&-10), Ordering::Greater);
    }

    #[test]
    fn test_rank_cmp_nan_is_equal() {
        assert_eq!(f32::NAN.rank_cmp(&1.0), Ordering::Equal);
        assert_eq!(1.0f64.rank_cmp(&f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!((-0.0f32).is_zero());
        assert!(!f64::MIN_POSITIVE.is_zero());
    }
}
