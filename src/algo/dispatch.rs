//! Strategy selection.
//!
//! Every algorithm resolves one [`Strategy`] per instantiation inside a
//! `const` block and `match`es on it:
//!
//! ```text
//! contiguous src & dst + relocatable ──► Block     (one memmove / memset)
//! contiguous u8 on both sides         ──► Block     (one memcmp)
//! tag refines RandomAccess            ──► Counted   (loop over distance)
//! otherwise                           ──► Stepwise  (loop until first == last)
//! ```

use crate::category::{Category, Cursor, Tag};
use crate::detect::Element;

/// How a range operation walks its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One raw block operation sized by element count.
    Block,
    /// Loop over a precomputed element count.
    Counted,
    /// Loop until the first cursor reaches the last.
    Stepwise,
}

impl Strategy {
    /// Resolve from the three facts that drive dispatch.
    pub const fn resolve(category: Category, contiguous: bool, raw_ok: bool) -> Self {
        if contiguous && raw_ok {
            Strategy::Block
        } else if category.refines(Category::RandomAccess) {
            Strategy::Counted
        } else {
            Strategy::Stepwise
        }
    }

    /// Element transfer from `I` to `O` (copy and move families).
    pub const fn transfer<I, O>() -> Self
    where
        I: Cursor,
        O: Cursor<Value = I::Value>,
        I::Value: Element,
    {
        Self::resolve(
            <I::Category as Tag>::CATEGORY,
            I::CONTIGUOUS && O::CONTIGUOUS,
            <I::Value as Element>::RELOCATABLE,
        )
    }

    /// Filling the positions of `O` with one value.
    pub const fn fill<O>() -> Self
    where
        O: Cursor,
        O::Value: Element,
    {
        Self::resolve(
            <O::Category as Tag>::CATEGORY,
            O::CONTIGUOUS,
            <O::Value as Element>::BYTE_FILL,
        )
    }

    /// Read-only traversal of `I` (comparison family); capability only.
    pub const fn traverse<I: Cursor>() -> Self {
        Self::resolve(<I::Category as Tag>::CATEGORY, false, false)
    }

    /// Ordering two ranges: one `memcmp` for contiguous unsigned bytes,
    /// otherwise a paired traversal.
    pub const fn compare<I1, I2>() -> Self
    where
        I1: Cursor,
        I2: Cursor<Value = I1::Value>,
        I1::Value: Element,
    {
        if I1::CONTIGUOUS && I2::CONTIGUOUS && <I1::Value as Element>::BYTE_ORDER {
            Strategy::Block
        } else {
            Self::traverse_pair::<I1, I2>()
        }
    }

    /// Paired read-only traversal: counted only when both sides allow it.
    pub const fn traverse_pair<I1: Cursor, I2: Cursor>() -> Self {
        match (Self::traverse::<I1>(), Self::traverse::<I2>()) {
            (Strategy::Counted, Strategy::Counted) => Strategy::Counted,
            _ => Strategy::Stepwise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(Strategy::resolve(Category::RandomAccess, true, true), Strategy::Block);
        assert_eq!(Strategy::resolve(Category::RandomAccess, true, false), Strategy::Counted);
        assert_eq!(Strategy::resolve(Category::Bidirectional, false, true), Strategy::Stepwise);
        assert_eq!(Strategy::resolve(Category::Forward, true, true), Strategy::Block);
    }

    #[test]
    fn test_raw_addresses() {
        assert_eq!(Strategy::transfer::<*const u32, *mut u32>(), Strategy::Block);
        assert_eq!(Strategy::fill::<*mut u8>(), Strategy::Block);
        assert_eq!(Strategy::fill::<*mut u32>(), Strategy::Counted);
        assert_eq!(Strategy::traverse::<*const u8>(), Strategy::Counted);
        assert_eq!(Strategy::compare::<*const u8, *mut u8>(), Strategy::Block);
        assert_eq!(Strategy::compare::<*const i8, *const i8>(), Strategy::Counted);
        assert_eq!(Strategy::compare::<*const u32, *const u32>(), Strategy::Counted);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_non_relocatable_elements_count() {
        use alloc::string::String;
        assert_eq!(Strategy::transfer::<*const String, *mut String>(), Strategy::Counted);
    }
}
