//! Type-level booleans.
//!
//! Capability tags answer "does this tag refine X" with `Present`/`Absent`,
//! so the answer works as a trait bound (`Tag<Forward = Present>`) and, via
//! [`Bool::VALUE`], as a constant.

/// Type-level boolean.
pub trait Bool: 'static + Copy + Default {
    const VALUE: bool;
}

/// Type-level true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
}

impl Bool for Absent {
    const VALUE: bool = false;
}
