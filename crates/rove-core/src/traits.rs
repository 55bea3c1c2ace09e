//! The cursor trait family.
//!
//! A cursor is a position-like handle over a sequence. The traits here
//! split its powers into small single-purpose pieces:
//!
//! - [`Cursor`] — stepping and identity of the element type;
//! - [`ReadCursor`] / [`WriteCursor`] / [`TakeCursor`] — how
//!   dereferencing behaves (copy-out read, write-through, destructive
//!   read);
//! - [`ForwardCursor`] / [`BackCursor`] / [`BidirCursor`] /
//!   [`RandomCursor`] — traversal power, matching the capability tags
//!   in [`crate::cap`].
//!
//! A cursor's declared `Cap` must agree with the traversal traits it
//! implements: a cursor tagged [`RandomAccess`](crate::RandomAccess)
//! that does not implement [`RandomCursor`] fails the algorithm
//! crates' trait bounds outright. That hard error is deliberate —
//! capability extraction never guesses.
//!
//! Distances are uniformly `isize`: pointer-difference width, wide
//! enough for any in-memory sequence.

use crate::cap::Capability;

/// A position over a sequence that can move forward one element.
///
/// Cursors own no resources; dropping one has no effect on the
/// sequence. Stepping past the end of the underlying sequence is a
/// caller error, checked by debug assertions in the concrete cursors
/// and never in release builds.
pub trait Cursor {
    /// The element type the cursor traverses.
    type Item;

    /// The capability tag for this cursor type, fixed for its lifetime.
    type Cap: Capability;

    /// Move one position forward.
    fn step(&mut self);

    /// Move `n` positions forward.
    ///
    /// The default walks `n` single steps; contiguous cursors override
    /// it with an O(1) index bump.
    fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Contiguity probe for the raw-block fast paths.
    ///
    /// Cursors over address-like storage return the address of the
    /// current position; everything else keeps the conservative
    /// default of `None` and flows through the element-wise tiers.
    ///
    /// An implementation returning `Some` promises that the addresses
    /// of any valid cursor range over the same sequence lie in one
    /// allocation, densely packed by `size_of::<Item>()`.
    fn raw(&self) -> Option<*const Self::Item> {
        None
    }
}

/// Read access: copy the current element out.
///
/// `get` returns a clone rather than a reference. Several cursors over
/// the same storage may be live at once (a span's first/last pair, or
/// any clone of a mutable cursor), so no borrow of the storage may
/// escape a call — a returned reference could still be held while a
/// sibling cursor writes the same slot.
pub trait ReadCursor: Cursor {
    /// The element at the current position, cloned out.
    fn get(&self) -> Self::Item
    where
        Self::Item: Clone;
}

/// Write access: assign through the current position.
pub trait WriteCursor: Cursor {
    /// Overwrite the element at the current position. Does not advance.
    fn put(&mut self, value: Self::Item);

    /// Mutable counterpart of [`Cursor::raw`], same promises.
    fn raw_mut(&mut self) -> Option<*mut Self::Item> {
        None
    }
}

/// Destructive read: move the current element out.
///
/// What remains in the vacated slot is the implementation's business
/// (the slice cursors leave `Default::default()`); callers must treat
/// it as unspecified, matching moved-from semantics everywhere else in
/// the workspace.
pub trait TakeCursor: Cursor {
    /// Move the element at the current position out. Does not advance.
    fn take(&mut self) -> Self::Item;
}

/// Multi-pass forward traversal: the cursor can be saved, compared,
/// and re-walked.
pub trait ForwardCursor: ReadCursor + Clone + PartialEq {}

/// Single-step backward traversal.
///
/// Separate from [`BidirCursor`] so write-only destinations (which
/// cannot satisfy the read bound) can still walk backward, as the
/// backward copy algorithms require.
pub trait BackCursor: Cursor {
    /// Move one position backward.
    fn step_back(&mut self);

    /// Move `n` positions backward. Same override contract as
    /// [`Cursor::step_n`].
    fn step_back_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step_back();
        }
    }
}

/// Bidirectional traversal with read access.
pub trait BidirCursor: ForwardCursor + BackCursor {
    /// The element immediately before the current position, cloned
    /// out. Same no-escaping-borrow contract as [`ReadCursor::get`].
    ///
    /// This is what the reverse adaptor dereferences through; it must
    /// equal the element a `step_back` would land on.
    fn peek_prev(&self) -> Self::Item
    where
        Self::Item: Clone;
}

/// Random access: O(1) jumps and position subtraction.
pub trait RandomCursor: BidirCursor {
    /// Move `n` positions forward (negative `n` moves backward), O(1).
    fn offset(&mut self, n: isize);

    /// `self − other` in elements, O(1).
    ///
    /// Negative when `self` precedes `other`; the caller is
    /// responsible for ordering the operands, nothing is validated.
    fn delta(&self, other: &Self) -> isize;
}
