//! # Layer 5: Uninitialized-Range Lifecycle Manager
//!
//! Build objects into raw storage with all-or-nothing semantics: on return
//! the requested extent is either fully constructed or fully raw again.
//!
//! ## Resolution
//!
//! ```text
//! RELOCATABLE element ──► algo::{copy, fill, ...} straight onto the raw slots
//! otherwise           ──► one construction at a time through a guard
//! ```
//!
//! ## Failure
//!
//! | Kind | Entry points | Rollback |
//! |------|--------------|----------|
//! | typed `Err(E)` | `try_uninitialized_*_with` | eager, then `Err(E)` returned as-is |
//! | panic | every entry point | guard `Drop` during unwind |
//!
//! Rollback drops the constructed prefix in forward order.
//!
//! ```
//! use core::mem::MaybeUninit;
//! use tola_seq::uninit::try_uninitialized_fill_n_with;
//!
//! let mut slots = [const { MaybeUninit::<String>::uninit() }; 4];
//! let mut next = 0;
//! let result = unsafe {
//!     try_uninitialized_fill_n_with(slots.as_mut_ptr().cast::<String>(), 4, || {
//!         next += 1;
//!         if next == 3 { Err("no third") } else { Ok(next.to_string()) }
//!     })
//! };
//! assert_eq!(result.err(), Some("no third"));
//! ```

mod guard;

pub mod copy;
pub mod fill;

pub use copy::{
    try_uninitialized_copy_n_with, try_uninitialized_copy_with, try_uninitialized_move_n_with,
    try_uninitialized_move_with, uninitialized_copy, uninitialized_copy_n, uninitialized_move,
    uninitialized_move_n, uninitialized_relocate, uninitialized_relocate_n,
};
pub use fill::{
    try_uninitialized_fill_n_with, try_uninitialized_fill_with, uninitialized_fill,
    uninitialized_fill_n,
};
