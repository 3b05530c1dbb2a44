//! # Layer 1: Capability Classification
//!
//! Cursor capability taxonomy and the traits bundle.
//!
//! ## Module Structure
//!
//! ```text
//! category/
//! ├── tag.rs    - Category enum, tag types, Refines bound
//! ├── cursor.rs - Cursor trait hierarchy, raw-address cursors
//! └── traits.rs - Traits bundle (aliases, consts, traits_of, is_cursor!)
//! ```

pub mod cursor;
pub mod tag;
pub mod traits;

pub use cursor::{
    BidirectionalCursor, Cursor, RandomAccessCursor, ReadCursor, WriteCursor, advance, distance,
};
pub use tag::{
    BidirectionalTag, Category, ForwardTag, InputTag, OutputTag, RandomAccessTag, Refines, Tag,
};
pub use traits::{
    CategoryOf, DifferenceOf, PointerOf, ReferenceOf, Traits, TraitsInfo, ValueOf, traits_of,
};
