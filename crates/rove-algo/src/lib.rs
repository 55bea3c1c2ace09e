//! Bulk transfer and comparison algorithms over Rove cursors.
//!
//! Every transfer algorithm here comes in up to three tiers, selected
//! entirely at compile time:
//!
//! 1. an element-wise loop driven by cursor inequality — the
//!    correctness baseline for any capable cursor;
//! 2. a trip-count loop for random-access sources, identical in
//!    behavior, chosen through the capability tag;
//! 3. a raw-block memory operation, chosen only when both endpoints
//!    answer the contiguity probe and the element's
//!    [`Transfer`](rove_core::Transfer) flags permit it. The raw tier
//!    is required to be byte-identical to tier 1 on the destination;
//!    the property tests in this crate pin that equivalence.
//!
//! # Overlap contracts
//!
//! Forward copies handle ranges that shift elements left (destination
//! starts at or before the source); [`copy_backward`] and
//! [`move_backward`] handle right shifts. Picking the wrong direction
//! for an overlapping pair silently duplicates elements — it is a
//! documented caller contract, not something the loops guard against.
//!
//! Comparison functions walk the first range and never check the
//! second range's length; the second sequence must be at least as
//! long, again a caller contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

mod base;
mod cmp;
mod copy;
mod fill;

pub use base::cursor_swap;
pub use cmp::{
    equal, equal_by, lexicographical_compare, lexicographical_compare_by, mismatch, mismatch_by,
};
pub use copy::{
    copy, copy_backward, copy_if, copy_n, move_backward, move_range, CopyBackStep, CopyNStep,
    CopyStep, MoveBackStep, MoveStep,
};
pub use fill::{fill, fill_n, FillStep};
