//! Element classification: the relocability axis.
//!
//! Algorithms that move values between slots pick a raw block transfer only
//! when the element type says it is safe to. The facts live on [`Element`]
//! as associated constants, so every decision is made per instantiation.

/// Layout facts about an element type.
///
/// Both constants default to `false`, which is always correct: the
/// element-wise paths never depend on them.
///
/// Use [`element!`](crate::element) or `#[derive(Element)]` for your own
/// types; both detect relocation from `Copy`.
///
/// # Safety
///
/// - `RELOCATABLE` may only be `true` when a bitwise copy of a value is
///   indistinguishable from `clone`, and overwriting a value needs no drop.
///   In practice that means the type is `Copy`.
/// - `BYTE_FILL` may only be `true` for one-byte, `RELOCATABLE`, non-boolean
///   integral types, where writing the value's byte repeatedly is the same as
///   assigning the value repeatedly.
/// - `BYTE_ORDER` may only be `true` for one-byte types whose `PartialOrd`
///   agrees with unsigned byte order, so a range compares like `memcmp`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no element classification",
    label = "relocation support for `{Self}` is unknown",
    note = "add `#[derive(Element)]`, or `tola_seq::element!({Self});` for a concrete type"
)]
pub unsafe trait Element: Sized {
    /// Raw block transfer is equivalent to clone-then-forget.
    const RELOCATABLE: bool = false;
    /// One-byte non-boolean integral; fill can use `write_bytes`.
    const BYTE_FILL: bool = false;
    /// Ordered as an unsigned byte; comparison can use `memcmp`.
    const BYTE_ORDER: bool = false;
}

/// Declare [`Element`] for concrete types, detecting relocation from `Copy`.
///
/// ```
/// #[derive(Clone, Copy)]
/// struct Pixel(u8, u8, u8);
///
/// struct Handle(String);
///
/// tola_seq::element!(Pixel, Handle);
///
/// use tola_seq::detect::Element;
/// assert!(<Pixel as Element>::RELOCATABLE);
/// assert!(!<Handle as Element>::RELOCATABLE);
/// ```
#[macro_export]
macro_rules! element {
    ($($T:ty),+ $(,)?) => {
        $(
            // SAFETY: relocation is only claimed for `Copy` types.
            unsafe impl $crate::detect::Element for $T {
                const RELOCATABLE: bool = {
                    #[allow(unused_imports)]
                    use $crate::detect::CopyFallback;
                    $crate::detect::Detect::<$T>::IS_COPY
                };
            }
        )+
    };
}

// =============================================================================
// Core types
// =============================================================================

macro_rules! relocatable {
    ($($T:ty),* $(,)?) => {
        $(
            // SAFETY: `Copy` primitive.
            unsafe impl Element for $T {
                const RELOCATABLE: bool = true;
            }
        )*
    };
}

relocatable!(
    (), bool, char,
    u16, u32, u64, u128, usize,
    i16, i32, i64, i128, isize,
    f32, f64,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroIsize,
    core::time::Duration,
);

// SAFETY: one-byte integers, every bit pattern is a valid value. Only `u8`
// orders like `memcmp`.
unsafe impl Element for u8 {
    const RELOCATABLE: bool = true;
    const BYTE_FILL: bool = true;
    const BYTE_ORDER: bool = true;
}

// SAFETY: as above.
unsafe impl Element for i8 {
    const RELOCATABLE: bool = true;
    const BYTE_FILL: bool = true;
}

// SAFETY: shared references and raw pointers are `Copy`.
unsafe impl<T: ?Sized> Element for &T {
    const RELOCATABLE: bool = true;
}
unsafe impl<T: ?Sized> Element for *const T {
    const RELOCATABLE: bool = true;
}
unsafe impl<T: ?Sized> Element for *mut T {
    const RELOCATABLE: bool = true;
}
unsafe impl<T: ?Sized> Element for core::marker::PhantomData<T> {
    const RELOCATABLE: bool = true;
}

// SAFETY: not `Copy`; keeps the defaults.
unsafe impl<T: ?Sized> Element for &mut T {}

// SAFETY: the wrappers below clone and drop exactly like their contents.
unsafe impl<T: Element, const N: usize> Element for [T; N] {
    const RELOCATABLE: bool = T::RELOCATABLE;
}
unsafe impl<T: Element> Element for Option<T> {
    const RELOCATABLE: bool = T::RELOCATABLE;
}
unsafe impl<T: Element> Element for core::num::Wrapping<T> {
    const RELOCATABLE: bool = T::RELOCATABLE;
}
unsafe impl<T: Element> Element for core::cmp::Reverse<T> {
    const RELOCATABLE: bool = T::RELOCATABLE;
}

macro_rules! tuple_element {
    ($($name:ident),+) => {
        // SAFETY: a tuple is relocatable when every field is.
        unsafe impl<$($name: Element),+> Element for ($($name,)+) {
            const RELOCATABLE: bool = true $(&& $name::RELOCATABLE)+;
        }
    };
}

tuple_element!(A);
tuple_element!(A, B);
tuple_element!(A, B, C);
tuple_element!(A, B, C, D);
tuple_element!(A, B, C, D, E);
tuple_element!(A, B, C, D, E, F);

// =============================================================================
// Alloc types
// =============================================================================

#[cfg(feature = "alloc")]
mod alloc_types {
    use super::Element;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    // SAFETY: owning types, never relocatable.
    unsafe impl Element for String {}
    unsafe impl<T> Element for Vec<T> {}
    unsafe impl<T: ?Sized> Element for Box<T> {}
    unsafe impl<T: ?Sized> Element for Rc<T> {}
    unsafe impl<T: ?Sized> Element for Arc<T> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_flags() {
        assert!(<u32 as Element>::RELOCATABLE);
        assert!(<u8 as Element>::BYTE_FILL);
        assert!(<i8 as Element>::BYTE_FILL);
        assert!(!<bool as Element>::BYTE_FILL);
        assert!(!<u16 as Element>::BYTE_FILL);
        assert!(<u8 as Element>::BYTE_ORDER);
        assert!(!<i8 as Element>::BYTE_ORDER);
        assert!(!<bool as Element>::BYTE_ORDER);
    }

    #[test]
    fn test_composite_flags() {
        assert!(<[u16; 4] as Element>::RELOCATABLE);
        assert!(<(u8, i64, char) as Element>::RELOCATABLE);
        assert!(<Option<f64> as Element>::RELOCATABLE);
        assert!(!<&mut u8 as Element>::RELOCATABLE);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_owning_types_are_not_relocatable() {
        use alloc::string::String;
        use alloc::vec::Vec;
        assert!(!<String as Element>::RELOCATABLE);
        assert!(!<Vec<u8> as Element>::RELOCATABLE);
        assert!(!<(u8, String) as Element>::RELOCATABLE);
        assert!(!<[String; 2] as Element>::RELOCATABLE);
    }

    #[test]
    fn test_element_macro_detects_copy() {
        #[derive(Clone, Copy)]
        struct Point {
            _x: i32,
            _y: i32,
        }

        #[derive(Clone)]
        struct Tagged {
            _id: u32,
        }

        crate::element!(Point, Tagged);

        assert!(<Point as Element>::RELOCATABLE);
        assert!(!<Tagged as Element>::RELOCATABLE);
        assert!(!<Tagged as Element>::BYTE_FILL);
    }
}
