#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables Global, RawBlock and Element impls for heap types
// - tracing: default, emits storage and rollback events

//! # tola-seq
//!
//! Sequence algorithms over raw memory and cursors of any capability.
//!
//! **Capability-dispatched copy, move, fill and compare for Rust.**
//!
//! ## Architecture
//!
//! Every algorithm picks its strategy at compile time from two independent
//! facts: what the cursor can do, and whether the element type may be moved
//! as raw bytes.
//!
//! ### 1. Capability
//! Cursor types carry a capability tag. Tags form a refinement chain plus a
//! separate write-only tag:
//!
//! ```text
//! Input ⊂ Forward ⊂ Bidirectional ⊂ RandomAccess        Output
//! ```
//!
//! Raw addresses (`*const T`, `*mut T`) are random-access and contiguous.
//!
//! ### 2. Relocation
//! [`Element::RELOCATABLE`](detect::Element::RELOCATABLE) marks types whose
//! copy is a byte copy. It is detected from `Copy` via **Autoref/Method
//! Priority**, so no specialization is needed.
//!
//! ### 3. Dispatch
//!
//! ```text
//! contiguous & relocatable ──► Block     one memmove / memset
//! random access            ──► Counted   loop over the distance
//! otherwise                ──► Stepwise  loop until first == last
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Difference                                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Category            Layer 2: Detect                     |
//! |  - Tags, Cursor traits        - Detect<T>, Element, element!      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Construct  ->  Layer 4: Algo  ->  Layer 5: Uninit       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 6: Storage                                                 |
//! |  - RawStorage, Global, RawBlock                                   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_seq::prelude::*;
//!
//! let src = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let mut dst = [0; 5];
//! unsafe {
//!     let first = src.as_ptr();
//!     copy(first, first.add(5), dst.as_mut_ptr());
//! }
//! assert_eq!(dst, [1, 2, 3, 4, 5]);
//! ```

// Allow `::tola_seq` to work inside the crate itself
extern crate self as tola_seq;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Diagnostics shim
// =============================================================================
//
// Textually scoped: must stay above the module declarations.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Classification
// =============================================================================
pub mod category;

// =============================================================================
// Layer 2: Element Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 3: Object Lifecycle
// =============================================================================
pub mod construct;

// =============================================================================
// Layer 4: Algorithm Core
// =============================================================================
pub mod algo;

// =============================================================================
// Layer 5: Uninitialized Ranges
// =============================================================================
pub mod uninit;

// =============================================================================
// Layer 6: Raw Storage
// =============================================================================
pub mod storage;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use category::{Category, Cursor, Traits, TraitsInfo, traits_of};
pub use detect::Element;
pub use primitives::{Absent, Bool, Present};

// Re-export proc-macros
pub use macros::Element;

/// Common items for cursor algorithms.
pub mod prelude {
    pub use crate::algo::{
        copy, copy_backward, copy_if, copy_n, equal, equal_by, fill, fill_n, iter_swap,
        lexicographical_compare, lexicographical_compare_by, lexicographical_compare_bytes, max,
        max_by, min, min_by, mismatch, mismatch_by, move_backward, move_range, swap_ranges,
    };
    pub use crate::category::{
        BidirectionalCursor, BidirectionalTag, Cursor, ForwardTag, InputTag, OutputTag,
        RandomAccessCursor, RandomAccessTag, ReadCursor, Refines, WriteCursor,
    };
    pub use crate::construct::{construct, destroy, destroy_n, destroy_range};
    pub use crate::detect::Element;
    pub use crate::uninit::{
        uninitialized_copy, uninitialized_copy_n, uninitialized_fill, uninitialized_fill_n,
        uninitialized_move, uninitialized_move_n, uninitialized_relocate,
    };
    pub use macros::Element;
    // Note: element!, is_cursor! are #[macro_export] so they're at crate root
}
