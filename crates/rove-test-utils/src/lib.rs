//! Instrumented element types and capability wrappers for Rove tests.
//!
//! Provides element types that count constructions and teardowns
//! ([`Tally`]/[`DropTally`]), a clone that fails on cue
//! ([`ExplodingClone`]), a droppable-in-name-only type ([`NoDrop`]),
//! and wrappers that re-expose a strong cursor at a weaker capability
//! ([`ForwardOnly`], [`BidirOnly`]) so tests can drive every dispatch
//! tier of the algorithm crates.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

use rove_core::cap::{Bidirectional, Forward};
use rove_core::traits::{
    BackCursor, BidirCursor, Cursor, ForwardCursor, ReadCursor, TakeCursor, WriteCursor,
};
use rove_core::Transfer;

#[derive(Default)]
struct TallyCounts {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Shared construction/teardown counter for [`DropTally`] elements.
#[derive(Clone, Default)]
pub struct Tally {
    counts: Rc<TallyCounts>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a counted element. Counts as one construction.
    pub fn make(&self, id: u32) -> DropTally {
        self.counts.created.set(self.counts.created.get() + 1);
        DropTally {
            counts: Rc::clone(&self.counts),
            id,
        }
    }

    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Constructions minus teardowns.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// An element that reports its construction and teardown to a [`Tally`].
pub struct DropTally {
    counts: Rc<TallyCounts>,
    id: u32,
}

impl DropTally {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for DropTally {
    fn clone(&self) -> Self {
        self.counts.created.set(self.counts.created.get() + 1);
        Self {
            counts: Rc::clone(&self.counts),
            id: self.id,
        }
    }
}

impl Drop for DropTally {
    fn drop(&mut self) {
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}

impl PartialEq for DropTally {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[allow(unsafe_code)]
// SAFETY: owns a shared counter; every flag stays at the conservative
// default.
unsafe impl Transfer for DropTally {}

/// A cloneable element whose clone panics once a shared fuse runs out.
///
/// `ExplodingClone::arm(k)` yields a prototype whose first `k` clones
/// succeed; clone `k + 1` panics. All clones share the fuse.
pub struct ExplodingClone {
    fuse: Rc<Cell<usize>>,
    pub marker: u32,
}

impl ExplodingClone {
    pub fn arm(clones_before_panic: usize) -> Self {
        Self {
            fuse: Rc::new(Cell::new(clones_before_panic)),
            marker: 0,
        }
    }

    /// Clones still permitted before the panic.
    pub fn remaining(&self) -> usize {
        self.fuse.get()
    }
}

impl Clone for ExplodingClone {
    fn clone(&self) -> Self {
        let left = self.fuse.get();
        if left == 0 {
            panic!("ExplodingClone fuse ran out");
        }
        self.fuse.set(left - 1);
        Self {
            fuse: Rc::clone(&self.fuse),
            marker: self.marker,
        }
    }
}

#[allow(unsafe_code)]
// SAFETY: conservative defaults only.
unsafe impl Transfer for ExplodingClone {}

/// A plain value with no drop glue, for the destroy-is-free property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDrop(pub u32);

#[allow(unsafe_code)]
// SAFETY: a bare `u32` wrapper, `Copy`, no ownership semantics.
unsafe impl Transfer for NoDrop {
    const BITWISE: bool = true;
}

/// Re-expose a cursor at forward capability, hiding any stronger
/// powers it has — including the contiguity probe, so algorithms fall
/// back to their element-wise tiers.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardOnly<C>(pub C);

impl<C: Cursor> Cursor for ForwardOnly<C> {
    type Item = C::Item;
    type Cap = Forward;

    fn step(&mut self) {
        self.0.step();
    }
    // Default `step_n` and `raw`: walk per element, probe to None.
}

impl<C: ReadCursor> ReadCursor for ForwardOnly<C> {
    fn get(&self) -> C::Item
    where
        C::Item: Clone,
    {
        self.0.get()
    }
}

impl<C: WriteCursor> WriteCursor for ForwardOnly<C> {
    fn put(&mut self, value: C::Item) {
        self.0.put(value);
    }
    // Default `raw_mut` stays None.
}

impl<C: TakeCursor> TakeCursor for ForwardOnly<C> {
    fn take(&mut self) -> C::Item {
        self.0.take()
    }
}

impl<C: ReadCursor + Clone + PartialEq> ForwardCursor for ForwardOnly<C> {}

/// Re-expose a cursor at bidirectional capability.
#[derive(Clone, Debug, PartialEq)]
pub struct BidirOnly<C>(pub C);

impl<C: Cursor> Cursor for BidirOnly<C> {
    type Item = C::Item;
    type Cap = Bidirectional;

    fn step(&mut self) {
        self.0.step();
    }
}

impl<C: ReadCursor> ReadCursor for BidirOnly<C> {
    fn get(&self) -> C::Item
    where
        C::Item: Clone,
    {
        self.0.get()
    }
}

impl<C: WriteCursor> WriteCursor for BidirOnly<C> {
    fn put(&mut self, value: C::Item) {
        self.0.put(value);
    }
}

impl<C: TakeCursor> TakeCursor for BidirOnly<C> {
    fn take(&mut self) -> C::Item {
        self.0.take()
    }
}

impl<C: ReadCursor + Clone + PartialEq> ForwardCursor for BidirOnly<C> {}

impl<C: BackCursor> BackCursor for BidirOnly<C> {
    fn step_back(&mut self) {
        self.0.step_back();
    }
}

impl<C: BidirCursor> BidirCursor for BidirOnly<C> {
    fn peek_prev(&self) -> C::Item
    where
        C::Item: Clone,
    {
        self.0.peek_prev()
    }
}
