//! Small cursor utilities kept beside the transfer algorithms.
//!
//! Scalar `min`/`max` have no business being redefined here — Rust's
//! `core::cmp` already provides them — so the only survivor is the
//! element swap between two cursor positions.

use rove_core::traits::{TakeCursor, WriteCursor};

/// Swap the elements under two cursors, which may point into
/// different sequences of the same element type.
pub fn cursor_swap<A, B>(a: &mut A, b: &mut B)
where
    A: TakeCursor + WriteCursor,
    B: TakeCursor + WriteCursor<Item = A::Item>,
{
    let va = a.take();
    let vb = b.take();
    a.put(vb);
    b.put(va);
}
