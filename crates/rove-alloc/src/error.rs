//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when acquiring typed memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The request describes zero bytes of storage — a zero-length
    /// block, or any block of a zero-sized element type. Zero-sized
    /// access needs no memory; callers use a dangling pointer.
    ZeroSized,
    /// The element count overflows the address space when multiplied
    /// by the element size.
    LayoutOverflow {
        /// Number of elements requested.
        count: usize,
    },
    /// The global allocator returned null.
    Exhausted {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSized => {
                write!(f, "zero-sized allocation request")
            }
            Self::LayoutOverflow { count } => {
                write!(f, "layout overflow: {count} elements exceed the address space")
            }
            Self::Exhausted { bytes } => {
                write!(f, "allocator exhausted: {bytes} bytes unavailable")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            AllocError::Exhausted { bytes: 64 }.to_string(),
            "allocator exhausted: 64 bytes unavailable"
        );
        assert!(AllocError::LayoutOverflow { count: usize::MAX }
            .to_string()
            .contains("layout overflow"));
    }
}
