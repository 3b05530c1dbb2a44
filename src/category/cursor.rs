//! Cursor traits and raw-address cursors.
//!
//! A cursor is a position inside a range. Reading and writing go through raw
//! pointers handed out by [`ReadCursor::get`] and [`WriteCursor::get_mut`]; the
//! algorithms that dereference them are `unsafe fn` and carry the range
//! preconditions.
//!
//! | Trait | Adds |
//! |-------|------|
//! | [`Cursor`] | tag, value, difference, `step`, `advance` |
//! | [`ReadCursor`] | equality, `get`, `distance` |
//! | [`WriteCursor`] | `get_mut` |
//! | [`BidirectionalCursor`] | `step_back`, `retreat` |
//! | [`RandomAccessCursor`] | `at` |

use core::mem;

use super::tag::{BidirectionalTag, RandomAccessTag, Refines, Tag};
use crate::primitives::Difference;

/// A traversal position.
///
/// # Safety
///
/// Implementors must keep their promises about layout and cost:
/// - `CONTIGUOUS` may only be `true` when successive positions address
///   adjacent slots of `Value`, so that `n` elements starting at a position
///   form one block of `n * size_of::<Value>()` bytes.
/// - The length of every range the cursor walks fits in `Difference`.
/// - When `Category` refines [`RandomAccessTag`], `advance` and
///   [`ReadCursor::distance`] must run in constant time and agree with
///   repeated stepping.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a cursor",
    label = "no capability tag can be derived for this type",
    note = "implement `Cursor` for the handle type, or use a raw address (`*const T` / `*mut T`)"
)]
pub unsafe trait Cursor: Clone {
    /// Capability tag, fixed at the type's definition.
    type Category: Tag;
    /// Element type addressed by the cursor.
    type Value;
    /// Signed distance between two positions.
    type Difference: Difference;

    /// Positions address adjacent element slots.
    const CONTIGUOUS: bool = false;

    /// Move to the next position.
    fn step(&mut self);

    /// Move forward by `n` positions.
    #[inline]
    fn advance(&mut self, n: Self::Difference) {
        for _ in 0..n.to_count() {
            self.step();
        }
    }
}

/// A cursor whose element can be read and whose positions can be compared.
pub trait ReadCursor: Cursor + PartialEq {
    /// Address of the current element.
    fn get(&self) -> *const Self::Value;

    /// Number of steps from `self` to `last`.
    ///
    /// Walks the range unless the cursor overrides it.
    #[inline]
    fn distance(&self, last: &Self) -> Self::Difference {
        let mut cursor = self.clone();
        let mut n = 0usize;
        while cursor != *last {
            cursor.step();
            n += 1;
        }
        Self::Difference::from_count(n)
    }
}

/// A cursor whose element slot can be written.
pub trait WriteCursor: Cursor {
    /// Address of the current element slot.
    fn get_mut(&self) -> *mut Self::Value;
}

/// A cursor that can step backward.
pub trait BidirectionalCursor: Cursor<Category: Refines<BidirectionalTag>> {
    /// Move to the previous position.
    fn step_back(&mut self);

    /// Move backward by `n` positions.
    #[inline]
    fn retreat(&mut self, n: Self::Difference) {
        for _ in 0..n.to_count() {
            self.step_back();
        }
    }
}

/// A cursor with constant-time offset and distance.
pub trait RandomAccessCursor:
    BidirectionalCursor<Category: Refines<RandomAccessTag>> + ReadCursor
{
    /// The position `n` steps ahead (negative `n` steps back).
    #[inline]
    fn at(&self, n: Self::Difference) -> Self {
        let mut cursor = self.clone();
        if n >= Self::Difference::ZERO {
            cursor.advance(n);
        } else {
            cursor.retreat(Self::Difference::from_count(n.magnitude()));
        }
        cursor
    }
}

// =============================================================================
// Raw addresses
// =============================================================================

macro_rules! impl_raw_cursor {
    ($ptr:ty) => {
        // SAFETY: successive positions are adjacent `T` slots and every
        // operation below is O(1).
        unsafe impl<T> Cursor for $ptr {
            type Category = RandomAccessTag;
            type Value = T;
            type Difference = isize;

            const CONTIGUOUS: bool = true;

            #[inline(always)]
            fn step(&mut self) {
                const { assert!(mem::size_of::<T>() != 0, "raw-address cursors need sized elements") };
                *self = self.wrapping_add(1);
            }

            #[inline(always)]
            fn advance(&mut self, n: isize) {
                *self = self.wrapping_offset(n);
            }
        }

        impl<T> ReadCursor for $ptr {
            #[inline(always)]
            fn get(&self) -> *const T {
                *self as *const T
            }

            #[inline(always)]
            fn distance(&self, last: &Self) -> isize {
                let size = const {
                    assert!(mem::size_of::<T>() != 0, "raw-address cursors need sized elements");
                    mem::size_of::<T>() as isize
                };
                (last.addr() as isize).wrapping_sub(self.addr() as isize) / size
            }
        }

        impl<T> BidirectionalCursor for $ptr {
            #[inline(always)]
            fn step_back(&mut self) {
                *self = self.wrapping_sub(1);
            }

            #[inline(always)]
            fn retreat(&mut self, n: isize) {
                *self = self.wrapping_offset(n.wrapping_neg());
            }
        }

        impl<T> RandomAccessCursor for $ptr {
            #[inline(always)]
            fn at(&self, n: isize) -> Self {
                self.wrapping_offset(n)
            }
        }
    };
}

impl_raw_cursor!(*const T);
impl_raw_cursor!(*mut T);

impl<T> WriteCursor for *mut T {
    #[inline(always)]
    fn get_mut(&self) -> *mut T {
        *self
    }
}

// =============================================================================
// Free helpers
// =============================================================================

/// Number of steps from `first` to `last`.
///
/// Constant time for random-access cursors, a walk otherwise.
#[inline]
pub fn distance<I: ReadCursor>(first: &I, last: &I) -> I::Difference {
    first.distance(last)
}

/// Move `cursor` forward by `n` positions.
#[inline]
pub fn advance<I: Cursor>(cursor: &mut I, n: I::Difference) {
    cursor.advance(n);
}
