//! Fill family.

use core::{mem, ptr};

use super::assign_clone;
use super::dispatch::Strategy;
use crate::category::{ForwardTag, ReadCursor, Refines, WriteCursor};
use crate::construct::offset;
use crate::detect::Element;
use crate::primitives::Difference;

/// Assign `value` to `n` consecutive live objects starting at `first`.
///
/// Returns `first + n`. One-byte [`Element::BYTE_FILL`] types on contiguous
/// cursors are filled with a single `memset`.
///
/// ```
/// let mut buf = [0u8; 5];
/// unsafe { tola_seq::algo::fill_n(buf.as_mut_ptr(), 5, &0xAB) };
/// assert_eq!(buf, [0xAB; 5]);
/// ```
///
/// # Safety
///
/// `first` is followed by at least `n` live objects.
pub unsafe fn fill_n<O>(first: O, n: usize, value: &O::Value) -> O
where
    O: WriteCursor,
    O::Value: Element + Clone,
{
    match const { Strategy::fill::<O>() } {
        Strategy::Block => {
            debug_assert_eq!(mem::size_of::<O::Value>(), 1);
            if n != 0 {
                // SAFETY: BYTE_FILL types are one byte wide with every bit
                // pattern valid; `first` addresses `n` adjacent slots.
                unsafe {
                    let byte = *ptr::from_ref(value).cast::<u8>();
                    ptr::write_bytes(first.get_mut().cast::<u8>(), byte, n);
                }
            }
            offset(&first, n)
        }
        Strategy::Counted | Strategy::Stepwise => {
            let mut first = first;
            for _ in 0..n {
                // SAFETY: `first` is inside the range (caller).
                unsafe { assign_clone(first.get_mut(), value) };
                first.step();
            }
            first
        }
    }
}

/// Assign `value` to every live object in `[first, last)`.
///
/// Random-access cursors delegate to [`fill_n`].
///
/// # Safety
///
/// `[first, last)` is a valid range of live objects.
pub unsafe fn fill<O>(first: O, last: O, value: &O::Value)
where
    O: ReadCursor + WriteCursor,
    O::Category: Refines<ForwardTag>,
    O::Value: Element + Clone,
{
    match const { Strategy::fill::<O>() } {
        Strategy::Block | Strategy::Counted => {
            let n = first.distance(&last).to_count();
            // SAFETY: forwarded from the caller.
            unsafe { fill_n(first, n, value) };
        }
        Strategy::Stepwise => {
            let mut first = first;
            while first != last {
                // SAFETY: `first` is inside the range (caller).
                unsafe { assign_clone(first.get_mut(), value) };
                first.step();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_words() {
        let mut buf = [0i32; 6];
        let first = buf.as_mut_ptr();
        unsafe { fill(first, first.add(6), &7) };
        assert_eq!(buf, [7; 6]);
    }

    #[test]
    fn test_fill_n_zero_is_noop() {
        let mut buf = [3i8; 2];
        let first = buf.as_mut_ptr();
        let end = unsafe { fill_n(first, 0, &-1) };
        assert_eq!(end, first);
        assert_eq!(buf, [3, 3]);
    }

    #[test]
    fn test_fill_n_signed_bytes() {
        let mut buf = [0i8; 4];
        let first = buf.as_mut_ptr();
        let end = unsafe { fill_n(first, 3, &-2) };
        assert_eq!(end, unsafe { first.add(3) });
        assert_eq!(buf, [-2, -2, -2, 0]);
    }
}
