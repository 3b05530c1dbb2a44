//! `Copy` probe for concrete element types.
//!
//! `Detect::<X>::IS_COPY` resolves to an inherent const when `X: Copy` and to
//! the `CopyFallback` trait const otherwise. Inherent items win over trait
//! items, so the probe needs no specialization:
//!
//! ```text
//! Detect<X>::IS_COPY ──► impl<T: Copy> Detect<T> { IS_COPY = true }   if X: Copy
//!                    └─► CopyFallback::IS_COPY = false                 otherwise
//! ```
//!
//! The fallback trait must be in scope at the use site; `element!` and
//! `#[derive(Element)]` import it themselves.
//!
//! Only concrete types get an exact answer. Inside generic code the bound is
//! unknown and the fallback wins, which keeps relocation off: the
//! element-wise path is always correct.

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

/// Generate fallback trait + inherent const for a marker trait.
macro_rules! impl_detect {
    ($Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
            impl<T> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
        }
    };
}

impl_detect!(Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_copy() {
        assert!(Detect::<u32>::IS_COPY);
        assert!(Detect::<(u8, char)>::IS_COPY);
        assert!(!Detect::<NotCopy>::IS_COPY);
    }

    #[derive(Clone)]
    struct NotCopy;
}
