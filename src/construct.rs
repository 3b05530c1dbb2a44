//! # Layer 3: Object Lifecycle Primitives
//!
//! Build one object in a raw slot, tear down one object or a range.
//!
//! Teardown is skipped at compile time for types without drop glue: the
//! `needs_drop` check sits in a `const` block, so the loops below are never
//! instantiated for such types.

use core::{mem, ptr};

use crate::category::{Cursor, ReadCursor, WriteCursor};
use crate::primitives::Difference;

// =============================================================================
// Construction
// =============================================================================

/// Move `value` into the raw slot.
///
/// # Safety
///
/// `slot` must be valid for writes and properly aligned. Whatever it held is
/// overwritten without being dropped.
#[inline(always)]
pub unsafe fn construct<T>(slot: *mut T, value: T) {
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(value) }
}

/// Default-construct into the raw slot.
///
/// # Safety
///
/// Same as [`construct`].
#[inline]
pub unsafe fn construct_default<T: Default>(slot: *mut T) {
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(T::default()) }
}

/// Copy-construct `source` into the raw slot.
///
/// # Safety
///
/// Same as [`construct`].
#[inline]
pub unsafe fn construct_clone<T: Clone>(slot: *mut T, source: &T) {
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(source.clone()) }
}

/// Construct into the raw slot from a constructor closure.
///
/// If `make` panics nothing is written and the slot stays uninitialized.
///
/// # Safety
///
/// Same as [`construct`].
#[inline]
pub unsafe fn construct_with<T, F>(slot: *mut T, make: F)
where
    F: FnOnce() -> T,
{
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(make()) }
}

/// Construct into the raw slot from a fallible constructor.
///
/// On `Err` the slot stays uninitialized and the error is returned as-is.
///
/// # Safety
///
/// Same as [`construct`].
#[inline]
pub unsafe fn try_construct_with<T, E, F>(slot: *mut T, make: F) -> Result<(), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let value = make()?;
    // SAFETY: forwarded from the caller.
    unsafe { slot.write(value) };
    Ok(())
}

// =============================================================================
// Destruction
// =============================================================================

/// Drop the object in `slot`. A null slot is ignored.
///
/// # Safety
///
/// A non-null `slot` must hold a live object that nothing else will drop.
#[inline]
pub unsafe fn destroy<T>(slot: *mut T) {
    if const { !mem::needs_drop::<T>() } {
        return;
    }
    if !slot.is_null() {
        // SAFETY: forwarded from the caller.
        unsafe { ptr::drop_in_place(slot) }
    }
}

/// Drop every object in `[first, last)`, in forward order.
///
/// # Safety
///
/// Every position in the range must hold a live object that nothing else
/// will drop.
pub unsafe fn destroy_range<I>(first: I, last: I)
where
    I: ReadCursor + WriteCursor,
{
    if const { !mem::needs_drop::<I::Value>() } {
        return;
    }
    if I::CONTIGUOUS {
        let n = first.distance(&last).to_count();
        // SAFETY: contiguous cursors address `n` adjacent live slots.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first.get_mut(), n)) }
    } else {
        let mut first = first;
        while first != last {
            // SAFETY: forwarded from the caller.
            unsafe { ptr::drop_in_place(first.get_mut()) };
            first.step();
        }
    }
}

/// Drop `n` objects starting at `first`, in forward order.
///
/// # Safety
///
/// The first `n` positions must hold live objects that nothing else will
/// drop.
pub unsafe fn destroy_n<I>(first: I, n: usize)
where
    I: WriteCursor,
{
    if const { !mem::needs_drop::<I::Value>() } {
        return;
    }
    if I::CONTIGUOUS {
        // SAFETY: contiguous cursors address `n` adjacent live slots.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first.get_mut(), n)) }
    } else {
        let mut first = first;
        for _ in 0..n {
            // SAFETY: forwarded from the caller.
            unsafe { ptr::drop_in_place(first.get_mut()) };
            first.step();
        }
    }
}

/// Advance a copy of `cursor` by an element count.
#[inline(always)]
pub(crate) fn offset<I: Cursor>(cursor: &I, n: usize) -> I {
    let mut cursor = cursor.clone();
    cursor.advance(I::Difference::from_count(n));
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::mem::MaybeUninit;

    struct Noisy<'a>(&'a Cell<usize>);

    impl Drop for Noisy<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_construct_variants() {
        let mut slot = MaybeUninit::<u64>::uninit();
        unsafe {
            construct(slot.as_mut_ptr(), 9);
            assert_eq!(slot.assume_init(), 9);
            construct_default(slot.as_mut_ptr());
            assert_eq!(slot.assume_init(), 0);
            construct_clone(slot.as_mut_ptr(), &41);
            assert_eq!(slot.assume_init(), 41);
            construct_with(slot.as_mut_ptr(), || 6 * 7);
            assert_eq!(slot.assume_init(), 42);
        }
    }

    #[test]
    fn test_try_construct_leaves_slot_untouched_on_error() {
        let mut slot = MaybeUninit::<u32>::new(5);
        let result = unsafe { try_construct_with(slot.as_mut_ptr(), || Err::<u32, _>("boom")) };
        assert_eq!(result, Err("boom"));
        assert_eq!(unsafe { slot.assume_init() }, 5);
    }

    #[test]
    fn test_destroy_one_and_null() {
        let drops = Cell::new(0);
        let mut slot = MaybeUninit::new(Noisy(&drops));
        unsafe {
            destroy(slot.as_mut_ptr());
            destroy::<Noisy<'_>>(ptr::null_mut());
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_destroy_range_and_n() {
        let drops = Cell::new(0);
        let mut slots = [
            MaybeUninit::new(Noisy(&drops)),
            MaybeUninit::new(Noisy(&drops)),
            MaybeUninit::new(Noisy(&drops)),
            MaybeUninit::new(Noisy(&drops)),
        ];
        let base = slots.as_mut_ptr() as *mut Noisy<'_>;
        unsafe {
            destroy_range(base, base.add(3));
            assert_eq!(drops.get(), 3);
            destroy_n(base.add(3), 1);
        }
        assert_eq!(drops.get(), 4);
    }
}
