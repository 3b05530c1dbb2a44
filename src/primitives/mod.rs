//! # Layer 0: Primitives
//!
//! Basic building blocks shared by every other layer:
//! - `bool.rs`: Type-level booleans (Present/Absent).
//! - `difference.rs`: Signed distance types used by cursors.

pub mod bool;
pub mod difference;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use difference::Difference;
