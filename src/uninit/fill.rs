//! Construct copies of one value into raw storage.

use core::convert::Infallible;

use super::guard::Constructed;
use crate::algo;
use crate::category::{ForwardTag, ReadCursor, Refines, WriteCursor};
use crate::detect::Element;

/// Clone `value` into every raw slot of `[first, last)`.
///
/// # Safety
///
/// `[first, last)` is a valid range of raw, writable slots.
pub unsafe fn uninitialized_fill<O>(first: O, last: O, value: &O::Value)
where
    O: ReadCursor + WriteCursor,
    O::Category: Refines<ForwardTag>,
    O::Value: Element + Clone,
{
    if const { <O::Value as Element>::RELOCATABLE } {
        // SAFETY: relocatable types have no drop glue.
        return unsafe { algo::fill(first, last, value) };
    }
    // SAFETY: forwarded from the caller.
    let Ok(()) = unsafe {
        try_uninitialized_fill_with(first, last, || Ok::<_, Infallible>(value.clone()))
    };
}

/// Clone `value` into `n` raw slots starting at `first`.
///
/// Returns `first + n`.
///
/// # Safety
///
/// `first` is followed by at least `n` raw, writable slots.
pub unsafe fn uninitialized_fill_n<O>(first: O, n: usize, value: &O::Value) -> O
where
    O: WriteCursor,
    O::Category: Refines<ForwardTag>,
    O::Value: Element + Clone,
{
    if const { <O::Value as Element>::RELOCATABLE } {
        // SAFETY: as in `uninitialized_fill`.
        return unsafe { algo::fill_n(first, n, value) };
    }
    // SAFETY: forwarded from the caller.
    let Ok(end) = unsafe {
        try_uninitialized_fill_n_with(first, n, || Ok::<_, Infallible>(value.clone()))
    };
    end
}

/// Fill `[first, last)` with values produced by `make`, in forward order.
///
/// On the first `Err` the slots constructed by this call are dropped and the
/// error is returned unchanged.
///
/// # Safety
///
/// Same as [`uninitialized_fill`].
pub unsafe fn try_uninitialized_fill_with<O, E, F>(first: O, last: O, mut make: F) -> Result<(), E>
where
    O: ReadCursor + WriteCursor,
    O::Category: Refines<ForwardTag>,
    F: FnMut() -> Result<O::Value, E>,
{
    let mut guard = Constructed::new(first.clone());
    let mut first = first;
    while first != last {
        // SAFETY: `first` addresses the guard's next raw slot.
        unsafe { guard.try_push_with(&mut make)? };
        first.step();
    }
    guard.finish();
    Ok(())
}

/// Counted form of [`try_uninitialized_fill_with`]. Returns `first + n`.
///
/// # Safety
///
/// Same as [`uninitialized_fill_n`].
pub unsafe fn try_uninitialized_fill_n_with<O, E, F>(first: O, n: usize, mut make: F) -> Result<O, E>
where
    O: WriteCursor,
    O::Category: Refines<ForwardTag>,
    F: FnMut() -> Result<O::Value, E>,
{
    let mut guard = Constructed::new(first);
    for _ in 0..n {
        // SAFETY: the guard's next slot is inside the range (caller).
        unsafe { guard.try_push_with(&mut make)? };
    }
    Ok(guard.finish())
}
