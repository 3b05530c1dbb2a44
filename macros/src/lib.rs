//! Procedural macros for tola-seq element classification
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Element)]` | struct/enum/union | Classify an element type for relocation |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Copy, Element)]
//! struct Rgb(u8, u8, u8);
//!
//! // Raw block transfers are now used for `Rgb` ranges.
//! assert!(<Rgb as tola_seq::detect::Element>::RELOCATABLE);
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod element;

/// Implement `tola_seq::detect::Element` for a type.
///
/// `RELOCATABLE` is detected from `Copy` on the concrete type. Generic
/// types whose `Copy` impl depends on their parameters stay
/// non-relocatable, which only costs the fast path.
#[proc_macro_derive(Element)]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    element::expand_derive_element(input).into()
}
