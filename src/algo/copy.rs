//! Copy family.

use core::ptr;

use super::assign_clone;
use super::dispatch::Strategy;
use crate::category::{BidirectionalCursor, ReadCursor, WriteCursor};
use crate::construct::offset;
use crate::detect::Element;
use crate::primitives::Difference;

/// Copy `[first, last)` onto the live objects starting at `result`.
///
/// Returns the position after the last element written. An empty range
/// returns `result` unchanged.
///
/// ```
/// let src = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// let mut dst = [0; 5];
/// unsafe {
///     let first = src.as_ptr();
///     tola_seq::algo::copy(first, first.add(5), dst.as_mut_ptr());
/// }
/// assert_eq!(dst, [1, 2, 3, 4, 5]);
/// ```
///
/// # Safety
///
/// - `[first, last)` is a valid range of live objects.
/// - `result` is followed by at least as many live objects.
/// - The ranges do not overlap, or `result` lies before `first`.
pub unsafe fn copy<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    I::Value: Element + Clone,
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
                unsafe { assign_clone(result.get_mut(), first.get()) };
                first.step();
                result.step();
            }
            result
        }
        Strategy::Stepwise => {
            let (mut first, mut result) = (first, result);
            while first != last {
                // SAFETY: as above.
                unsafe { assign_clone(result.get_mut(), first.get()) };
                first.step();
                result.step();
            }
            result
        }
    }
}

/// Copy `[first, last)` onto `[result - n, result)`, last element first.
///
/// Returns the start of the written range. Safe for a rightward shift
/// within one buffer (destination after source).
///
/// # Safety
///
/// - `[first, last)` is a valid range of live objects.
/// - `result` is preceded by at least as many live objects.
/// - The ranges do not overlap, or the destination lies after the source.
pub unsafe fn copy_backward<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor + BidirectionalCursor,
    O: WriteCursor<Value = I::Value> + BidirectionalCursor,
    I::Value: Element + Clone,
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
            let (mut last, mut result) = (last, result);
            for _ in 0..first.distance(&last).to_count() {
                last.step_back();
                result.step_back();
                // SAFETY: both positions are inside their ranges (caller).
                unsafe { assign_clone(result.get_mut(), last.get()) };
            }
            result
        }
        Strategy::Stepwise => {
            let (mut last, mut result) = (last, result);
            while first != last {
                last.step_back();
                result.step_back();
                // SAFETY: as above.
                unsafe { assign_clone(result.get_mut(), last.get()) };
            }
            result
        }
    }
}

/// Copy the elements of `[first, last)` that satisfy `pred`.
///
/// `result` advances once per copied element; the returned position is one
/// past the last write.
///
/// # Safety
///
/// Same as [`copy`], with room for every matching element.
pub unsafe fn copy_if<I, O, P>(first: I, last: I, result: O, mut pred: P) -> O
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    I::Value: Clone,
    P: FnMut(&I::Value) -> bool,
{
    let (mut first, mut result) = (first, result);
    while first != last {
        // SAFETY: `first` is inside its range (caller).
        if pred(unsafe { &*first.get() }) {
            unsafe { assign_clone(result.get_mut(), first.get()) };
            result.step();
        }
        first.step();
    }
    result
}

/// Copy `n` elements starting at `first`.
///
/// Returns the end positions of both ranges. Random-access sources delegate
/// to [`copy`] and so reach the block path.
///
/// # Safety
///
/// `first` and `result` are each followed by `n` live objects; overlap as
/// in [`copy`].
pub unsafe fn copy_n<I, O>(first: I, n: usize, result: O) -> (I, O)
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    I::Value: Element + Clone,
{
    match const { Strategy::traverse::<I>() } {
        Strategy::Block | Strategy::Counted => {
            let last = offset(&first, n);
            // SAFETY: forwarded from the caller.
            let result = unsafe { copy(first, last.clone(), result) };
            (last, result)
        }
        Strategy::Stepwise => {
            let (mut first, mut result) = (first, result);
            for _ in 0..n {
                // SAFETY: forwarded from the caller.
                unsafe { assign_clone(result.get_mut(), first.get()) };
                first.step();
                result.step();
            }
            (first, result)
        }
    }
}

/// Element count of a block range, checked for orientation in debug builds.
#[inline(always)]
pub(crate) fn block_len<I: ReadCursor>(first: &I, last: &I) -> usize {
    let n = first.distance(last);
    debug_assert!(n >= I::Difference::ZERO, "range end precedes its start");
    n.to_count()
}
