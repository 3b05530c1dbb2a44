//! Construct into raw storage from a source range.

use core::convert::Infallible;
use core::{mem, ptr};

use super::guard::Constructed;
use crate::algo;
use crate::category::{ForwardTag, ReadCursor, Refines, WriteCursor};
use crate::detect::Element;
use crate::primitives::Difference;

// =============================================================================
// copy
// =============================================================================

/// Clone `[first, last)` into the raw storage at `result`.
///
/// Returns the position after the last constructed element. If a `clone`
/// panics, every element constructed by this call is dropped before the
/// panic continues.
///
/// # Safety
///
/// - `[first, last)` is a valid range of live objects.
/// - `result` is followed by at least as many raw, writable slots that do
///   not overlap the source.
pub unsafe fn uninitialized_copy<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    O::Category: Refines<ForwardTag>,
    I::Value: Element + Clone,
{
    if const { <I::Value as Element>::RELOCATABLE } {
        // SAFETY: relocatable types have no drop glue; assignment into raw
        // slots is a plain write.
        return unsafe { algo::copy(first, last, result) };
    }
    // SAFETY: forwarded from the caller.
    let Ok(end) = unsafe {
        try_uninitialized_copy_with(first, last, result, |v| Ok::<_, Infallible>(v.clone()))
    };
    end
}

/// Clone `n` elements starting at `first` into the raw storage at `result`.
///
/// # Safety
///
/// Same as [`uninitialized_copy`] with the source given by count.
pub unsafe fn uninitialized_copy_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    O::Category: Refines<ForwardTag>,
    I::Value: Element + Clone,
{
    if const { <I::Value as Element>::RELOCATABLE } {
        // SAFETY: as in `uninitialized_copy`.
        return unsafe { algo::copy_n(first, n, result) }.1;
    }
    // SAFETY: forwarded from the caller.
    let Ok(end) = unsafe {
        try_uninitialized_copy_n_with(first, n, result, |v| Ok::<_, Infallible>(v.clone()))
    };
    end
}

/// Construct one destination element per source element from `make`.
///
/// On the first `Err` the elements already constructed by this call are
/// dropped and the error is returned unchanged.
///
/// # Safety
///
/// Same as [`uninitialized_copy`].
pub unsafe fn try_uninitialized_copy_with<I, O, E, F>(
    first: I,
    last: I,
    result: O,
    mut make: F,
) -> Result<O, E>
where
    I: ReadCursor,
    O: WriteCursor,
    O::Category: Refines<ForwardTag>,
    F: FnMut(&I::Value) -> Result<O::Value, E>,
{
    let mut guard = Constructed::new(result);
    let mut first = first;
    while first != last {
        // SAFETY: `first` is inside its range and the next destination slot
        // is raw (caller).
        unsafe { guard.try_push_with(|| make(&*first.get()))? };
        first.step();
    }
    Ok(guard.finish())
}

/// Counted form of [`try_uninitialized_copy_with`].
///
/// # Safety
///
/// Same as [`uninitialized_copy_n`].
pub unsafe fn try_uninitialized_copy_n_with<I, O, E, F>(
    first: I,
    n: usize,
    result: O,
    mut make: F,
) -> Result<O, E>
where
    I: ReadCursor,
    O: WriteCursor,
    O::Category: Refines<ForwardTag>,
    F: FnMut(&I::Value) -> Result<O::Value, E>,
{
    let mut guard = Constructed::new(result);
    let mut first = first;
    for _ in 0..n {
        // SAFETY: as in `try_uninitialized_copy_with`.
        unsafe { guard.try_push_with(|| make(&*first.get()))? };
        first.step();
    }
    Ok(guard.finish())
}

// =============================================================================
// move
// =============================================================================

/// Move `[first, last)` into the raw storage at `result`.
///
/// Sources keep `Default::default()` and are not dropped. Relocatable
/// elements are copied bitwise and stay unchanged.
///
/// # Safety
///
/// Same as [`uninitialized_copy`]; the source range must also be writable.
pub unsafe fn uninitialized_move<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor + WriteCursor,
    O: WriteCursor<Value = I::Value>,
    O::Category: Refines<ForwardTag>,
    I::Value: Element + Default,
{
    if const { <I::Value as Element>::RELOCATABLE } {
        // SAFETY: a bitwise copy of a `Copy` value leaves the source valid.
        return unsafe { uninitialized_relocate(first, last, result) };
    }
    // SAFETY: forwarded from the caller.
    let Ok(end) = unsafe {
        try_uninitialized_move_with(first, last, result, |v| Ok::<_, Infallible>(mem::take(v)))
    };
    end
}

/// Counted form of [`uninitialized_move`].
///
/// # Safety
///
/// Same as [`uninitialized_move`] with the source given by count.
pub unsafe fn uninitialized_move_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: ReadCursor + WriteCursor,
    O: WriteCursor<Value = I::Value>,
    O::Category: Refines<ForwardTag>,
    I::Value: Element + Default,
{
    if const { <I::Value as Element>::RELOCATABLE } {
        // SAFETY: as in `uninitialized_move`.
        return unsafe { uninitialized_relocate_n(first, n, result) };
    }
    // SAFETY: forwarded from the caller.
    let Ok(end) = unsafe {
        try_uninitialized_move_n_with(first, n, result, |v| Ok::<_, Infallible>(mem::take(v)))
    };
    end
}

/// Construct one destination element per source element from `make`, which
/// may take from the source.
///
/// On `Err` the destination is rolled back; sources already visited keep
/// whatever `make` left in them.
///
/// # Safety
///
/// Same as [`uninitialized_move`].
pub unsafe fn try_uninitialized_move_with<I, O, E, F>(
    first: I,
    last: I,
    result: O,
    mut make: F,
) -> Result<O, E>
where
    I: ReadCursor + WriteCursor,
    O: WriteCursor,
    O::Category: Refines<ForwardTag>,
    F: FnMut(&mut I::Value) -> Result<O::Value, E>,
{
    let mut guard = Constructed::new(result);
    let mut first = first;
    while first != last {
        // SAFETY: as in `try_uninitialized_copy_with`; the source is writable.
        unsafe { guard.try_push_with(|| make(&mut *first.get_mut()))? };
        first.step();
    }
    Ok(guard.finish())
}

/// Counted form of [`try_uninitialized_move_with`].
///
/// # Safety
///
/// Same as [`uninitialized_move_n`].
pub unsafe fn try_uninitialized_move_n_with<I, O, E, F>(
    first: I,
    n: usize,
    result: O,
    mut make: F,
) -> Result<O, E>
where
    I: ReadCursor + WriteCursor,
    O: WriteCursor,
    O::Category: Refines<ForwardTag>,
    F: FnMut(&mut I::Value) -> Result<O::Value, E>,
{
    let mut guard = Constructed::new(result);
    let mut first = first;
    for _ in 0..n {
        // SAFETY: as in `try_uninitialized_move_with`.
        unsafe { guard.try_push_with(|| make(&mut *first.get_mut()))? };
        first.step();
    }
    Ok(guard.finish())
}

// =============================================================================
// relocate
// =============================================================================

/// Bitwise-move `[first, last)` into the raw storage at `result`.
///
/// Afterwards the source slots are logically uninitialized: the caller must
/// neither drop nor read them again. Never fails.
///
/// # Safety
///
/// - `[first, last)` is a valid range of live objects that nothing else will
///   drop.
/// - `result` is followed by at least as many raw slots that do not overlap
///   the source.
pub unsafe fn uninitialized_relocate<I, O>(first: I, last: I, result: O) -> O
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    O::Category: Refines<ForwardTag>,
{
    if I::CONTIGUOUS && O::CONTIGUOUS {
        let n = first.distance(&last).to_count();
        // SAFETY: forwarded from the caller.
        return unsafe { uninitialized_relocate_n(first, n, result) };
    }
    let (mut first, mut result) = (first, result);
    while first != last {
        // SAFETY: each source slot is read exactly once.
        unsafe { result.get_mut().write(first.get().read()) };
        first.step();
        result.step();
    }
    result
}

/// Counted form of [`uninitialized_relocate`].
///
/// # Safety
///
/// Same as [`uninitialized_relocate`] with the source given by count.
pub unsafe fn uninitialized_relocate_n<I, O>(first: I, n: usize, result: O) -> O
where
    I: ReadCursor,
    O: WriteCursor<Value = I::Value>,
    O::Category: Refines<ForwardTag>,
{
    if I::CONTIGUOUS && O::CONTIGUOUS {
        if n != 0 {
            // SAFETY: contiguous, non-overlapping (caller).
            unsafe { ptr::copy_nonoverlapping(first.get(), result.get_mut(), n) };
        }
        return crate::construct::offset(&result, n);
    }
    let (mut first, mut result) = (first, result);
    for _ in 0..n {
        // SAFETY: each source slot is read exactly once.
        unsafe { result.get_mut().write(first.get().read()) };
        first.step();
        result.step();
    }
    result
}
