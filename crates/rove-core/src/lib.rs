//! Capability-classified cursors over sequential storage.
//!
//! This is the leaf crate of the Rove workspace. It defines the
//! fundamental abstractions the algorithm crates build on:
//!
//! - [`cap`] — the five capability tags and their linear refinement
//!   order. A cursor's capability is an associated type, fixed at
//!   compile time, and never inspected per element.
//! - [`traits`] — the cursor trait family. Refinement is trait
//!   inheritance: implementing [`RandomCursor`] makes a cursor usable
//!   anywhere a weaker capability is required.
//! - [`transfer`] — element transfer classes. Types declare whether
//!   raw bit duplication may stand in for their `Clone`/assignment
//!   logic; the default is "no".
//! - [`slice`] — concrete cursors over contiguous storage, the
//!   address-like family that feeds the raw-block fast paths.
//! - [`reverse`] — the reverse-traversal adaptor.
//! - [`step`] — capability-dispatched `distance` and `advance`.
//!
//! # Capability dispatch
//!
//! Algorithms with tiered implementations dispatch on the cursor's
//! `Cap` associated type through per-tag traits (see [`step`] for the
//! pattern). Resolution happens at monomorphization; a cursor type
//! that satisfies none of the required traits is a hard build error,
//! never a silent downgrade.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

pub mod cap;
pub mod reverse;
pub mod slice;
pub mod step;
pub mod traits;
pub mod transfer;

pub use cap::{Bidirectional, Capability, Forward, Input, Level, Output, RandomAccess};
pub use reverse::Rev;
pub use slice::{SliceCursor, SliceCursorMut};
pub use step::{advance, distance};
pub use traits::{
    BackCursor, BidirCursor, Cursor, ForwardCursor, RandomCursor, ReadCursor, TakeCursor,
    WriteCursor,
};
pub use transfer::Transfer;
