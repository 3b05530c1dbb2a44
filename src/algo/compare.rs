//! Comparison family.
//!
//! Read-only traversals. Random-access sources loop over a precomputed
//! count; everything else walks until the first range is exhausted.
//! Contiguous `u8` ranges are ordered with one `memcmp`.

use core::cmp::Ordering;
use core::slice;

use super::copy::block_len;
use super::dispatch::Strategy;
use crate::category::ReadCursor;
use crate::detect::Element;
use crate::primitives::Difference;

// =============================================================================
// equal / mismatch
// =============================================================================

/// `true` if `[first1, last1)` equals the same-length range at `first2`.
///
/// # Safety
///
/// `[first1, last1)` is a valid range and `first2` is followed by at least as
/// many readable elements.
pub unsafe fn equal<I1, I2>(first1: I1, last1: I1, first2: I2) -> bool
where
    I1: ReadCursor,
    I2: ReadCursor,
    I1::Value: PartialEq<I2::Value>,
{
    // SAFETY: forwarded from the caller.
    unsafe { equal_by(first1, last1, first2, |a, b| a == b) }
}

/// [`equal`] with a caller-supplied equivalence.
///
/// # Safety
///
/// Same as [`equal`].
pub unsafe fn equal_by<I1, I2, F>(first1: I1, last1: I1, first2: I2, pred: F) -> bool
where
    I1: ReadCursor,
    I2: ReadCursor,
    F: FnMut(&I1::Value, &I2::Value) -> bool,
{
    // SAFETY: forwarded from the caller.
    let (first1, _) = unsafe { mismatch_by(first1, last1.clone(), first2, pred) };
    first1 == last1
}

/// First position where `[first1, last1)` and the range at `first2` differ.
///
/// Returns `(last1, first2 + n)` when no difference exists.
///
/// # Safety
///
/// Same as [`equal`].
pub unsafe fn mismatch<I1, I2>(first1: I1, last1: I1, first2: I2) -> (I1, I2)
where
    I1: ReadCursor,
    I2: ReadCursor,
    I1::Value: PartialEq<I2::Value>,
{
    // SAFETY: forwarded from the caller.
    unsafe { mismatch_by(first1, last1, first2, |a, b| a == b) }
}

/// [`mismatch`] with a caller-supplied equivalence.
///
/// # Safety
///
/// Same as [`equal`].
pub unsafe fn mismatch_by<I1, I2, F>(first1: I1, last1: I1, first2: I2, mut pred: F) -> (I1, I2)
where
    I1: ReadCursor,
    I2: ReadCursor,
    F: FnMut(&I1::Value, &I2::Value) -> bool,
{
    let (mut first1, mut first2) = (first1, first2);
    match const { Strategy::traverse::<I1>() } {
        Strategy::Block | Strategy::Counted => {
            for _ in 0..first1.distance(&last1).to_count() {
                // SAFETY: both positions are inside their ranges (caller).
                if !pred(unsafe { &*first1.get() }, unsafe { &*first2.get() }) {
                    break;
                }
                first1.step();
                first2.step();
            }
        }
        Strategy::Stepwise => {
            while first1 != last1 {
                // SAFETY: as above.
                if !pred(unsafe { &*first1.get() }, unsafe { &*first2.get() }) {
                    break;
                }
                first1.step();
                first2.step();
            }
        }
    }
    (first1, first2)
}

// =============================================================================
// lexicographical_compare
// =============================================================================

/// `true` if `[first1, last1)` orders strictly before `[first2, last2)`.
///
/// A proper prefix orders first; two empty ranges are not less. Contiguous
/// ranges of [`Element::BYTE_ORDER`] values go through
/// [`lexicographical_compare_bytes`].
///
/// # Safety
///
/// Both ranges are valid ranges of readable elements.
pub unsafe fn lexicographical_compare<I1, I2>(first1: I1, last1: I1, first2: I2, last2: I2) -> bool
where
    I1: ReadCursor,
    I2: ReadCursor<Value = I1::Value>,
    I1::Value: Element + PartialOrd,
{
    match const { Strategy::compare::<I1, I2>() } {
        Strategy::Block => {
            let (n1, n2) = (block_len(&first1, &last1), block_len(&first2, &last2));
            let (p1, p2) = (first1.get().cast::<u8>(), first2.get().cast::<u8>());
            // SAFETY: contiguous one-byte elements ordered as unsigned bytes;
            // ranges forwarded from the caller.
            unsafe { lexicographical_compare_bytes(p1, p1.wrapping_add(n1), p2, p2.wrapping_add(n2)) }
        }
        // SAFETY: forwarded from the caller.
        _ => unsafe { lexicographical_compare_by(first1, last1, first2, last2, |a, b| a < b) },
    }
}

/// [`lexicographical_compare`] under a caller-supplied strict ordering.
///
/// # Safety
///
/// Same as [`lexicographical_compare`].
pub unsafe fn lexicographical_compare_by<I1, I2, F>(
    first1: I1,
    last1: I1,
    first2: I2,
    last2: I2,
    mut less: F,
) -> bool
where
    I1: ReadCursor,
    I2: ReadCursor<Value = I1::Value>,
    F: FnMut(&I1::Value, &I1::Value) -> bool,
{
    let (mut first1, mut first2) = (first1, first2);
    match const { Strategy::traverse_pair::<I1, I2>() } {
        Strategy::Block | Strategy::Counted => {
            let len1 = first1.distance(&last1).to_count();
            let len2 = first2.distance(&last2).to_count();
            for _ in 0..len1.min(len2) {
                // SAFETY: both positions are inside their ranges (caller).
                let (a, b) = unsafe { (&*first1.get(), &*first2.get()) };
                if less(a, b) {
                    return true;
                }
                if less(b, a) {
                    return false;
                }
                first1.step();
                first2.step();
            }
            len1 < len2
        }
        Strategy::Stepwise => {
            while first1 != last1 && first2 != last2 {
                // SAFETY: as above.
                let (a, b) = unsafe { (&*first1.get(), &*first2.get()) };
                if less(a, b) {
                    return true;
                }
                if less(b, a) {
                    return false;
                }
                first1.step();
                first2.step();
            }
            first1 == last1 && first2 != last2
        }
    }
}

/// Byte-wise [`lexicographical_compare`]: one `memcmp` over the common
/// length, then the shorter range orders first.
///
/// # Safety
///
/// Both ranges are valid, non-null byte ranges.
pub unsafe fn lexicographical_compare_bytes(
    first1: *const u8,
    last1: *const u8,
    first2: *const u8,
    last2: *const u8,
) -> bool {
    let len1 = first1.distance(&last1).to_count();
    let len2 = first2.distance(&last2).to_count();
    let common = len1.min(len2);
    // SAFETY: forwarded from the caller.
    let (a, b) = unsafe {
        (
            slice::from_raw_parts(first1, common),
            slice::from_raw_parts(first2, common),
        )
    };
    match a.cmp(b) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => len1 < len2,
    }
}

// =============================================================================
// max / min
// =============================================================================

/// The greater of two values; `lhs` on a tie.
#[inline]
pub fn max<'a, T: PartialOrd>(lhs: &'a T, rhs: &'a T) -> &'a T {
    max_by(lhs, rhs, |a, b| a < b)
}

/// [`max`] under a caller-supplied strict ordering.
#[inline]
pub fn max_by<'a, T, F>(lhs: &'a T, rhs: &'a T, mut less: F) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    if less(lhs, rhs) { rhs } else { lhs }
}

/// The lesser of two values; `lhs` on a tie.
#[inline]
pub fn min<'a, T: PartialOrd>(lhs: &'a T, rhs: &'a T) -> &'a T {
    min_by(lhs, rhs, |a, b| a < b)
}

/// [`min`] under a caller-supplied strict ordering.
#[inline]
pub fn min_by<'a, T, F>(lhs: &'a T, rhs: &'a T, mut less: F) -> &'a T
where
    F: FnMut(&T, &T) -> bool,
{
    if less(rhs, lhs) { rhs } else { lhs }
}
