//! Move family.
//!
//! A moved-from source position keeps a valid value: `Default::default()` on
//! the element-wise paths, the untouched original on the block path (only
//! relocatable, i.e. `Copy`, element types get there).

use core::ptr;

use super::assign_take;
use super::copy::block_len;
use super::dispatch::Strategy;
use crate::category::{BidirectionalCursor, ReadCursor, WriteCursor};
use crate::construct::offset;
use crate::detect::Element;
use crate::primitives::Difference;

/// Move `[first, last)` onto the live objects starting at `result`.
///
/// Returns the position after the last element written.
///
/// # Safety
///
/// Same contract as [`copy`](super::copy()); additionally the source range
/// must be writable.
pub unsafe fn move_range<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor + WriteCursor,
    O: WriteCursor<Value = I::Value>,
    I::Value: Element + Default,
{
    match const { Strategy::transfer::<I, O>() } {
        Strategy::Block => {
            let n = block_len(&first, &last);
            if n != 0 {
                // SAFETY: contiguous relocatable elements, memmove semantics.
                unsafe { ptr::copy(first.get(), result.get_mut(), n) };
            }
            offset(&result, n)
        }
        Strategy::Counted => {
            let n = first.distance(&last).to_count();
            let (mut first, mut result) = (first, result);
            for _ in 0..n {
                // SAFETY: both positions are inside their ranges (caller).
                unsafe { assign_take(result.get_mut(), first.get_mut()) };
                first.step();
                result.step();
            }
            result
        }
        Strategy::Stepwise => {
            let (mut first, mut result) = (first, result);
            while first != last {
                // SAFETY: as above.
                unsafe { assign_take(result.get_mut(), first.get_mut()) };
                first.step();
                result.step();
            }
            result
        }
    }
}

/// Move `[first, last)` onto `[result - n, result)`, last element first.
///
/// Returns the start of the written range.
///
/// # Safety
///
/// Same contract as [`copy_backward`](super::copy_backward); additionally
/// the source range must be writable.
pub unsafe fn move_backward<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor + WriteCursor + BidirectionalCursor,
    O: WriteCursor<Value = I::Value> + BidirectionalCursor,
    I::Value: Element + Default,
{
    match const { Strategy::transfer::<I, O>() } {
        Strategy::Block => {
            let n = block_len(&first, &last);
            let mut result = result;
            result.retreat(O::Difference::from_count(n));
            if n != 0 {
                // SAFETY: contiguous relocatable elements, memmove semantics.
                unsafe { ptr::copy(first.get(), result.get_mut(), n) };
            }
            result
        }
        Strategy::Counted => {
            let n = first.distance(&last).to_count();
            let (mut last, mut result) = (last, result);
            for _ in 0..n {
                last.step_back();
                result.step_back();
                // SAFETY: both positions are inside their ranges (caller).
                unsafe { assign_take(result.get_mut(), last.get_mut()) };
            }
            result
        }
        Strategy::Stepwise => {
            let (mut last, mut result) = (last, result);
            while first != last {
                last.step_back();
                result.step_back();
                // SAFETY: as above.
                unsafe { assign_take(result.get_mut(), last.get_mut()) };
            }
            result
        }
    }
}
