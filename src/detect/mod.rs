//! # Layer 2: Element Detection
//!
//! Compile-time facts about element types, the second dispatch axis next to
//! cursor capability.
//!
//! ## Public API
//!
//! ```ignore
//! use tola_seq::detect::Element;
//!
//! #[derive(Clone, Copy, Element)]
//! struct Rgb(u8, u8, u8);
//!
//! assert!(<Rgb as Element>::RELOCATABLE);
//! ```
//!
//! `needs_drop` already answers the teardown question, so only relocation
//! and byte-fill eligibility are recorded here.

pub mod autoref;
pub mod element;

pub use autoref::{CopyFallback, Detect};
pub use element::Element;
