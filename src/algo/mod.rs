//! # Layer 4: Capability-Dispatched Algorithm Core
//!
//! Assignment-style range algorithms: every destination position already
//! holds a live object, which gets overwritten. Constructing into raw storage
//! is [`crate::uninit`]'s job.
//!
//! ## Module Structure
//!
//! ```text
//! algo/
//! ├── dispatch.rs - Strategy enum and its resolution rules
//! ├── copy.rs     - copy, copy_backward, copy_if, copy_n
//! ├── moves.rs    - move_range, move_backward
//! ├── compare.rs  - equal, mismatch, lexicographical_compare, max, min
//! ├── fill.rs     - fill, fill_n
//! └── swap.rs     - iter_swap, swap_ranges
//! ```
//!
//! ## Failure
//!
//! Nothing here intercepts a panicking `clone`, comparison or predicate: the
//! destination is left partially assigned and the panic continues.

pub mod compare;
pub mod copy;
pub mod dispatch;
pub mod fill;
pub mod moves;
pub mod swap;

pub use compare::{
    equal, equal_by, lexicographical_compare, lexicographical_compare_by,
    lexicographical_compare_bytes, max, max_by, min, min_by, mismatch, mismatch_by,
};
pub use copy::{copy, copy_backward, copy_if, copy_n};
pub use dispatch::Strategy;
pub use fill::{fill, fill_n};
pub use moves::{move_backward, move_range};
pub use swap::{iter_swap, swap_ranges};

use core::mem;

/// `*dst = (*src).clone()` without holding both borrows at once, so `dst`
/// and `src` may alias.
#[inline(always)]
pub(crate) unsafe fn assign_clone<T: Clone>(dst: *mut T, src: *const T) {
    // SAFETY: both slots hold live values (caller).
    let value = unsafe { (*src).clone() };
    unsafe { *dst = value };
}

/// `*dst = take(*src)`; `src` keeps a default value.
#[inline(always)]
pub(crate) unsafe fn assign_take<T: Default>(dst: *mut T, src: *mut T) {
    // SAFETY: both slots hold live values (caller).
    let value = unsafe { mem::take(&mut *src) };
    unsafe { *dst = value };
}
