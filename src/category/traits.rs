//! The traits bundle of a cursor type.
//!
//! For any cursor `I` the bundle is `(category, value, difference, pointer,
//! reference)`. It is available three ways:
//!
//! - type aliases ([`CategoryOf`], [`ValueOf`], ...) for signatures,
//! - constants on [`Traits<I>`] for `const` contexts,
//! - a runtime descriptor from [`traits_of`] for diagnostics.
//!
//! ```
//! use tola_seq::category::{Category, Traits};
//!
//! assert_eq!(Traits::<*const u32>::CATEGORY, Category::RandomAccess);
//! assert!(Traits::<*mut u32>::IS_BIDIRECTIONAL);
//! ```

use core::any::type_name;
use core::marker::PhantomData;

use super::cursor::Cursor;
use super::tag::{Category, Tag};
use crate::primitives::Bool;

/// Capability tag of `I`.
pub type CategoryOf<I> = <I as Cursor>::Category;
/// Element type of `I`.
pub type ValueOf<I> = <I as Cursor>::Value;
/// Difference type of `I`.
pub type DifferenceOf<I> = <I as Cursor>::Difference;
/// Pointer type of `I`.
pub type PointerOf<I> = *const <I as Cursor>::Value;
/// Reference type of `I`.
pub type ReferenceOf<'a, I> = &'a <I as Cursor>::Value;

/// Compile-time view of a cursor's bundle.
pub struct Traits<I>(PhantomData<I>);

macro_rules! refinement_consts {
    ($($tag:ident => $konst:ident),* $(,)?) => {
        impl<I: Cursor> Traits<I> {
            $(
                #[doc = concat!("Tag of `I` refines `", stringify!($tag), "`.")]
                pub const $konst: bool = <<I::Category as Tag>::$tag as Bool>::VALUE;
            )*
        }
    };
}

refinement_consts! {
    Input => IS_INPUT,
    Output => IS_OUTPUT,
    Forward => IS_FORWARD,
    Bidirectional => IS_BIDIRECTIONAL,
    RandomAccess => IS_RANDOM_ACCESS,
}

impl<I: Cursor> Traits<I> {
    pub const CATEGORY: Category = <I::Category as Tag>::CATEGORY;
    pub const CONTIGUOUS: bool = I::CONTIGUOUS;

    /// Does the tag of `I` refine `category`?
    pub const fn refines(category: Category) -> bool {
        Self::CATEGORY.refines(category)
    }
}

/// Runtime descriptor of a cursor's bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitsInfo {
    pub category: Category,
    pub value: &'static str,
    pub difference: &'static str,
    pub pointer: &'static str,
    pub reference: &'static str,
    pub contiguous: bool,
}

/// Describe the bundle of `I`.
pub fn traits_of<I: Cursor>() -> TraitsInfo {
    TraitsInfo {
        category: Traits::<I>::CATEGORY,
        value: type_name::<ValueOf<I>>(),
        difference: type_name::<DifferenceOf<I>>(),
        pointer: type_name::<PointerOf<I>>(),
        reference: type_name::<ReferenceOf<'_, I>>(),
        contiguous: Traits::<I>::CONTIGUOUS,
    }
}

/// Check if a concrete type is a cursor.
///
/// Uses the "Inherent Const Fallback" pattern, so it only answers for
/// concrete types. In generic code, bound on [`Cursor`] instead.
///
/// ```
/// use tola_seq::is_cursor;
///
/// assert!(is_cursor!(*const u8));
/// assert!(!is_cursor!(String));
/// ```
#[macro_export]
macro_rules! is_cursor {
    ($T:ty) => {{
        struct __Probe<T>(core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: $crate::category::Cursor> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_address_bundle() {
        let info = traits_of::<*mut u16>();
        assert_eq!(info.category, Category::RandomAccess);
        assert_eq!(info.value, "u16");
        assert_eq!(info.difference, "isize");
        assert_eq!(info.pointer, "*const u16");
        assert_eq!(info.reference, "&u16");
        assert!(info.contiguous);
    }

    #[test]
    fn test_const_and_mut_classify_alike() {
        assert_eq!(Traits::<*const i64>::CATEGORY, Traits::<*mut i64>::CATEGORY);
        assert!(Traits::<*const i64>::IS_RANDOM_ACCESS);
        assert!(Traits::<*mut i64>::IS_RANDOM_ACCESS);
        assert!(!Traits::<*const i64>::IS_OUTPUT);
    }

    #[test]
    fn test_is_cursor_probe() {
        assert!(is_cursor!(*const u8));
        assert!(is_cursor!(*mut String));
        assert!(!is_cursor!(u8));
        assert!(!is_cursor!(&'static [u8]));
    }
}
