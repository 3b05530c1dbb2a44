//! Capability tags.
//!
//! The taxonomy is a refinement chain plus one unrelated tag:
//!
//! ```text
//! Input ⊂ Forward ⊂ Bidirectional ⊂ RandomAccess        Output
//! ```
//!
//! Each tag is a zero-sized type implementing [`Tag`]. The tag answers
//! "do I refine X" both as a type-level [`Bool`] (usable in bounds via
//! [`Refines`]) and as a plain [`Category`] value (usable in `const` blocks).

use core::fmt;

use crate::primitives::{Absent, Bool, Present};

// =============================================================================
// Category (value level)
// =============================================================================

/// Closed set of traversal capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single forward pass, read only.
    Input,
    /// Single forward pass, write only. Unrelated to the other four.
    Output,
    /// Forward stepping, multiple passes.
    Forward,
    /// Forward and backward stepping.
    Bidirectional,
    /// Constant-time offset and subtraction.
    RandomAccess,
}

impl Category {
    /// All categories, weakest first.
    pub const ALL: [Category; 5] = [
        Category::Input,
        Category::Output,
        Category::Forward,
        Category::Bidirectional,
        Category::RandomAccess,
    ];

    /// Does `self` refine (or equal) `other`?
    pub const fn refines(self, other: Category) -> bool {
        match (self, other) {
            (Category::Output, Category::Output) => true,
            (Category::Output, _) | (_, Category::Output) => false,
            (this, other) => this.rank() >= other.rank(),
        }
    }

    // Position on the input chain; Output never reaches this.
    const fn rank(self) -> u8 {
        match self {
            Category::Input | Category::Output => 0,
            Category::Forward => 1,
            Category::Bidirectional => 2,
            Category::RandomAccess => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Input => "input",
            Category::Output => "output",
            Category::Forward => "forward",
            Category::Bidirectional => "bidirectional",
            Category::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tag (type level)
// =============================================================================

/// A capability tag type.
///
/// The five associated [`Bool`]s record which tags this one refines.
pub trait Tag: 'static + Copy + Default + fmt::Debug {
    const CATEGORY: Category;

    type Input: Bool;
    type Output: Bool;
    type Forward: Bool;
    type Bidirectional: Bool;
    type RandomAccess: Bool;
}

macro_rules! define_tag {
    (
        $(#[$meta:meta])*
        $name:ident => $category:ident {
            input: $input:ty,
            output: $output:ty,
            forward: $forward:ty,
            bidirectional: $bidi:ty,
            random_access: $random:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Tag for $name {
            const CATEGORY: Category = Category::$category;
            type Input = $input;
            type Output = $output;
            type Forward = $forward;
            type Bidirectional = $bidi;
            type RandomAccess = $random;
        }
    };
}

define_tag! {
    /// Read-only, single pass.
    InputTag => Input {
        input: Present, output: Absent, forward: Absent,
        bidirectional: Absent, random_access: Absent,
    }
}

define_tag! {
    /// Write-only, single pass.
    OutputTag => Output {
        input: Absent, output: Present, forward: Absent,
        bidirectional: Absent, random_access: Absent,
    }
}

define_tag! {
    /// Multi-pass forward traversal.
    ForwardTag => Forward {
        input: Present, output: Absent, forward: Present,
        bidirectional: Absent, random_access: Absent,
    }
}

define_tag! {
    /// Forward and backward stepping.
    BidirectionalTag => Bidirectional {
        input: Present, output: Absent, forward: Present,
        bidirectional: Present, random_access: Absent,
    }
}

define_tag! {
    /// Constant-time offset and distance.
    RandomAccessTag => RandomAccess {
        input: Present, output: Absent, forward: Present,
        bidirectional: Present, random_access: Present,
    }
}

// =============================================================================
// Refines (bound form)
// =============================================================================

/// `Self` refines (or equals) the tag `T`.
#[diagnostic::on_unimplemented(
    message = "capability tag `{Self}` does not refine `{T}`",
    label = "this cursor is too weak for the requested operation",
    note = "the refinement chain is Input < Forward < Bidirectional < RandomAccess; Output is separate"
)]
pub trait Refines<T: Tag>: Tag {}

impl<A: Tag<Input = Present>> Refines<InputTag> for A {}
impl<A: Tag<Output = Present>> Refines<OutputTag> for A {}
impl<A: Tag<Forward = Present>> Refines<ForwardTag> for A {}
impl<A: Tag<Bidirectional = Present>> Refines<BidirectionalTag> for A {}
impl<A: Tag<RandomAccess = Present>> Refines<RandomAccessTag> for A {}
