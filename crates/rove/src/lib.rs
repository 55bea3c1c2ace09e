//! Rove: capability-dispatched cursor traversal, bulk transfer, and
//! raw-memory construction.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Rove sub-crates. For most users, adding `rove` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rove::prelude::*;
//!
//! // Walk a slice through cursors and measure it.
//! let data = [1u32, 2, 3, 4, 5];
//! let (first, last) = SliceCursor::span(&data);
//! assert_eq!(distance(first, &last), 5);
//!
//! // Copy between buffers; contiguous plain-data ranges collapse to
//! // one block move, everything else is assigned element by element.
//! let mut dst = [0u32; 5];
//! let out = SliceCursorMut::start(&mut dst);
//! copy(first, &last, out);
//! assert_eq!(dst, data);
//!
//! // Walk the same range in reverse without touching the storage.
//! let rev = Rev::new(last);
//! assert_eq!(rev.get(), 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`cursor`] | `rove-core` | Capability tags, the cursor trait family, slice cursors, [`cursor::Rev`], distance/advance |
//! | [`algo`] | `rove-algo` | Bulk copy/move/fill and range comparison |
//! | [`uninit`] | `rove-uninit` | In-place construction with rollback over raw storage |
//! | [`alloc`] | `rove-alloc` | Single-type raw-memory acquire/release and [`alloc::Buffer`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Capability tags, cursor traits, and adaptors (`rove-core`).
///
/// The trait family ([`cursor::Cursor`], [`cursor::ReadCursor`],
/// [`cursor::WriteCursor`], [`cursor::TakeCursor`] and the multi-pass
/// refinements) fixes each cursor's capability at compile time; the
/// algorithms in [`algo`] dispatch on it.
pub use rove_core as cursor;

/// Bulk transfer and comparison over cursor ranges (`rove-algo`).
///
/// [`algo::copy`], [`algo::copy_backward`], [`algo::move_range`],
/// [`algo::fill_n`], [`algo::mismatch`],
/// [`algo::lexicographical_compare`] and friends, each with a
/// raw-block tier for contiguous plain-data ranges.
pub use rove_algo as algo;

/// Exception-safe construction over uninitialized storage
/// (`rove-uninit`).
///
/// Single-slot placement ([`uninit::construct`]), guarded bulk
/// construction ([`uninit::copy_init`], [`uninit::fill_init`],
/// [`uninit::take_init`]), relocation, and teardown.
pub use rove_uninit as uninit;

/// Single-type raw-memory acquire/release (`rove-alloc`).
///
/// [`alloc::TypedAlloc`] for bare blocks, [`alloc::Buffer`] for an
/// owned allocation with a tracked initialized prefix.
pub use rove_alloc as alloc;

/// Common imports for typical Rove usage.
///
/// ```rust
/// use rove::prelude::*;
/// ```
///
/// This imports the cursor trait family, the capability tags, the
/// slice cursors and the reverse adaptor, the traversal helpers, and
/// the bulk algorithms.
pub mod prelude {
    // Cursor traits and capability tags
    pub use rove_core::{
        advance, distance, BackCursor, Bidirectional, BidirCursor, Capability, Cursor, Forward,
        ForwardCursor, Input, Level, Output, RandomAccess, RandomCursor, ReadCursor, Rev,
        SliceCursor, SliceCursorMut, TakeCursor, Transfer, WriteCursor,
    };

    // Bulk transfer and comparison
    pub use rove_algo::{
        copy, copy_backward, copy_if, copy_n, cursor_swap, equal, equal_by, fill, fill_n,
        lexicographical_compare, lexicographical_compare_by, mismatch, mismatch_by, move_backward,
        move_range,
    };

    // Guarded construction over raw storage
    pub use rove_uninit::{construct, copy_init, fill_init, move_init, take_init, InitGuard};

    // Typed allocation
    pub use rove_alloc::{AllocError, Buffer, TypedAlloc};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_round_trip() {
        let src = [3u8, 1, 4, 1, 5];
        let (first, last) = SliceCursor::span(&src);
        let mut dst = [0u8; 5];
        copy(first, &last, SliceCursorMut::start(&mut dst));
        assert_eq!(dst, src);
        assert!(equal(first, &last, SliceCursor::start(&dst)));
    }
}
