//! Signed element distances.
//!
//! Every cursor names the integer type used to measure how far apart two of
//! its positions are. Raw addresses use `isize`.

use core::fmt::Debug;

/// Signed distance between two positions of one range.
pub trait Difference: Copy + Ord + Debug + 'static {
    const ZERO: Self;

    /// Convert an element count.
    ///
    /// Counts above `Self::MAX` break the cursor contract: debug builds
    /// panic, release builds saturate.
    fn from_count(n: usize) -> Self;

    /// Convert to an element count. Negative distances map to zero.
    fn to_count(self) -> usize;

    /// Absolute value as an element count.
    fn magnitude(self) -> usize;
}

macro_rules! impl_difference {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Difference for $ty {
                const ZERO: Self = 0;

                #[inline(always)]
                fn from_count(n: usize) -> Self {
                    let fitted = <$ty>::try_from(n);
                    debug_assert!(fitted.is_ok(), "count {n} does not fit in {}", stringify!($ty));
                    fitted.unwrap_or(<$ty>::MAX)
                }

                #[inline(always)]
                fn to_count(self) -> usize {
                    usize::try_from(self).unwrap_or(0)
                }

                #[inline(always)]
                fn magnitude(self) -> usize {
                    self.unsigned_abs() as usize
                }
            }
        )*
    };
}

impl_difference!(i8, i16, i32, i64, isize);
