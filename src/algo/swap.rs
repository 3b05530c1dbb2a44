//! Element exchange.

use core::ptr;

use crate::category::{ReadCursor, WriteCursor};

/// Exchange the objects at two positions. The positions may be equal.
///
/// # Safety
///
/// Both positions hold live objects.
#[inline]
pub unsafe fn iter_swap<A, B>(a: &A, b: &B)
where
    A: WriteCursor,
    B: WriteCursor<Value = A::Value>,
{
    // SAFETY: forwarded from the caller; `ptr::swap` permits overlap.
    unsafe { ptr::swap(a.get_mut(), b.get_mut()) }
}

/// Exchange `[first1, last1)` with the same-length range at `first2`.
///
/// Returns the end of the second range.
///
/// # Safety
///
/// Both ranges hold live objects and do not overlap.
pub unsafe fn swap_ranges<I1, I2>(first1: I1, last1: I1, first2: I2) -> I2
where
    I1: ReadCursor + WriteCursor,
    I2: WriteCursor<Value = I1::Value>,
{
    let (mut first1, mut first2) = (first1, first2);
    while first1 != last1 {
        // SAFETY: forwarded from the caller.
        unsafe { iter_swap(&first1, &first2) };
        first1.step();
        first2.step();
    }
    first2
}
