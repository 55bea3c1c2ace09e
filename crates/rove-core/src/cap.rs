//! Capability tags and the refinement order between them.
//!
//! Each cursor type names exactly one tag as its `Cap` associated
//! type. The tags are zero-sized, carry no runtime state, and exist
//! purely so algorithm crates can select an implementation tier at
//! compile time. [`Level`] is the runtime-queryable mirror of the tag,
//! used by diagnostics and tests; dispatch itself never touches it.

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Input {}
    impl Sealed for super::Output {}
    impl Sealed for super::Forward {}
    impl Sealed for super::Bidirectional {}
    impl Sealed for super::RandomAccess {}
}

/// The capability a cursor supports, as an ordered value.
///
/// `Input` and `Output` are both minimal and incomparable; above them
/// the levels refine linearly: `Forward` ⊂ `Bidirectional` ⊂
/// `RandomAccess`. Use [`Level::satisfies`] for the
/// "usable where at least L is required" relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Single-pass read-only traversal.
    Input,
    /// Single-pass write-only traversal.
    Output,
    /// Multi-pass forward traversal with position equality.
    Forward,
    /// Forward plus single-step backward traversal.
    Bidirectional,
    /// Bidirectional plus O(1) jumps and position subtraction.
    RandomAccess,
}

impl Level {
    /// Rank within the read-side refinement chain, if the level is on it.
    fn read_rank(self) -> Option<u8> {
        match self {
            Level::Input => Some(0),
            Level::Forward => Some(1),
            Level::Bidirectional => Some(2),
            Level::RandomAccess => Some(3),
            Level::Output => None,
        }
    }

    /// Whether a cursor at this level is substitutable where `required`
    /// is demanded. Refinement is covariant: every level satisfies
    /// itself and everything below it on its chain.
    pub fn satisfies(self, required: Level) -> bool {
        if self == required {
            return true;
        }
        match (self.read_rank(), required.read_rank()) {
            (Some(have), Some(need)) => have >= need,
            _ => false,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Input => "input",
            Level::Output => "output",
            Level::Forward => "forward",
            Level::Bidirectional => "bidirectional",
            Level::RandomAccess => "random-access",
        };
        f.write_str(name)
    }
}

/// Compile-time capability descriptor.
///
/// Implemented only by the five tag types in this module; the trait is
/// sealed. Tags are never stored and never constructed at runtime by
/// the algorithm crates — they exist to be named in trait bounds.
pub trait Capability: sealed::Sealed + Copy + Default + fmt::Debug + 'static {
    /// The level this tag describes.
    const LEVEL: Level;
}

/// Tag for single-pass read-only cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input;

/// Tag for single-pass write-only cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Output;

/// Tag for multi-pass forward cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Forward;

/// Tag for bidirectional cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bidirectional;

/// Tag for random-access cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomAccess;

impl Capability for Input {
    const LEVEL: Level = Level::Input;
}

impl Capability for Output {
    const LEVEL: Level = Level::Output;
}

impl Capability for Forward {
    const LEVEL: Level = Level::Forward;
}

impl Capability for Bidirectional {
    const LEVEL: Level = Level::Bidirectional;
}

impl Capability for RandomAccess {
    const LEVEL: Level = Level::RandomAccess;
}
