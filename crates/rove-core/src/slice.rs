//! Cursors over contiguous storage.
//!
//! These are the address-like cursor family: both cursors here are
//! always classified [`RandomAccess`] and answer the contiguity
//! probes, which is what lets the algorithm crates reach their
//! raw-block tiers.
//!
//! [`SliceCursorMut`] is raw-pointer based internally so that two
//! clones of the same cursor can coexist (one walking a range start,
//! one marking its end). Writes go through raw pointers and never
//! materialize overlapping `&mut` references; reads clone the element
//! out, so no shared reference into the storage survives a call
//! either.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use crate::cap::RandomAccess;
use crate::traits::{
    BackCursor, BidirCursor, Cursor, ForwardCursor, RandomCursor, ReadCursor, TakeCursor,
    WriteCursor,
};

/// Read-only random-access cursor over a shared slice.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("len", &self.slice.len())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element of `slice`.
    pub fn start(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Cursor one past the last element of `slice`.
    pub fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// `(start, end)` cursor pair over `slice`.
    pub fn span(slice: &'a [T]) -> (Self, Self) {
        (Self::start(slice), Self::end(slice))
    }

    /// Index of the current position within the slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn same_slice(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
            && self.slice.len() == other.slice.len()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_slice(other) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    /// Position order. `None` for cursors over different slices.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_slice(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    type Item = T;
    type Cap = RandomAccess;

    fn step(&mut self) {
        debug_assert!(self.pos < self.slice.len(), "stepped past the end");
        self.pos += 1;
    }

    fn step_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.slice.len(), "stepped past the end");
        self.pos += n;
    }

    fn raw(&self) -> Option<*const T> {
        // SAFETY: pos <= len always holds, so the offset stays within
        // the slice's allocation (one-past-end included).
        Some(unsafe { self.slice.as_ptr().add(self.pos) })
    }
}

impl<T> ReadCursor for SliceCursor<'_, T> {
    fn get(&self) -> T
    where
        T: Clone,
    {
        self.slice[self.pos].clone()
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BackCursor for SliceCursor<'_, T> {
    fn step_back(&mut self) {
        debug_assert!(self.pos > 0, "stepped before the start");
        self.pos -= 1;
    }

    fn step_back_n(&mut self, n: usize) {
        debug_assert!(self.pos >= n, "stepped before the start");
        self.pos -= n;
    }
}

impl<T> BidirCursor for SliceCursor<'_, T> {
    fn peek_prev(&self) -> T
    where
        T: Clone,
    {
        self.slice[self.pos - 1].clone()
    }
}

impl<T> RandomCursor for SliceCursor<'_, T> {
    fn offset(&mut self, n: isize) {
        let pos = self.pos as isize + n;
        debug_assert!(0 <= pos && pos <= self.slice.len() as isize);
        self.pos = pos as usize;
    }

    fn delta(&self, other: &Self) -> isize {
        debug_assert!(self.same_slice(other));
        self.pos as isize - other.pos as isize
    }
}

/// Mutable random-access cursor over exclusively borrowed storage.
///
/// Cloning is allowed — a cursor pair bounding a range is two clones —
/// so the cursor keeps a raw base pointer plus an index instead of a
/// `&mut` borrow. All element access happens through raw pointers.
pub struct SliceCursorMut<'a, T> {
    base: *mut T,
    len: usize,
    pos: usize,
    _storage: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Cursor at the first element of `slice`.
    ///
    /// Takes the whole `&mut` borrow; use [`Self::span`] when an end
    /// cursor is needed too.
    pub fn start(slice: &'a mut [T]) -> Self {
        let (start, _end) = Self::span(slice);
        start
    }

    /// `(start, end)` cursor pair over `slice`.
    pub fn span(slice: &'a mut [T]) -> (Self, Self) {
        let base = slice.as_mut_ptr();
        let len = slice.len();
        let start = Self {
            base,
            len,
            pos: 0,
            _storage: PhantomData,
        };
        let end = Self {
            base,
            len,
            pos: len,
            _storage: PhantomData,
        };
        (start, end)
    }

    /// Index of the current position within the storage.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn same_storage(&self, other: &Self) -> bool {
        self.base == other.base && self.len == other.len
    }
}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("len", &self.len)
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> Clone for SliceCursorMut<'_, T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            len: self.len,
            pos: self.pos,
            _storage: PhantomData,
        }
    }
}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_storage(other) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursorMut<'_, T> {}

impl<T> PartialOrd for SliceCursorMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_storage(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    type Item = T;
    type Cap = RandomAccess;

    fn step(&mut self) {
        debug_assert!(self.pos < self.len, "stepped past the end");
        self.pos += 1;
    }

    fn step_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.len, "stepped past the end");
        self.pos += n;
    }

    fn raw(&self) -> Option<*const T> {
        // SAFETY: pos <= len, so the offset stays within the borrowed
        // storage (one-past-end included).
        Some(unsafe { self.base.add(self.pos) as *const T })
    }
}

impl<T> ReadCursor for SliceCursorMut<'_, T> {
    fn get(&self) -> T
    where
        T: Clone,
    {
        assert!(self.pos < self.len, "dereferenced an end cursor");
        // SAFETY: pos < len, and the slot holds an initialized element
        // of the exclusively borrowed storage. The shared reference is
        // confined to this call, so a sibling clone writing the slot
        // later can never invalidate a borrow held by the caller.
        unsafe { (*self.base.add(self.pos)).clone() }
    }
}

impl<T> WriteCursor for SliceCursorMut<'_, T> {
    fn put(&mut self, value: T) {
        assert!(self.pos < self.len, "wrote through an end cursor");
        // SAFETY: pos < len. Place assignment through the raw pointer
        // drops the old element and stores the new one; no reference
        // to the slot outlives this statement.
        unsafe {
            *self.base.add(self.pos) = value;
        }
    }

    fn raw_mut(&mut self) -> Option<*mut T> {
        // SAFETY: same bound argument as `raw`.
        Some(unsafe { self.base.add(self.pos) })
    }
}

impl<T: Default> TakeCursor for SliceCursorMut<'_, T> {
    /// Moves the element out, leaving `Default::default()` behind.
    fn take(&mut self) -> T {
        assert!(self.pos < self.len, "took through an end cursor");
        // SAFETY: pos < len; `mem::replace` keeps the slot initialized.
        unsafe { mem::replace(&mut *self.base.add(self.pos), T::default()) }
    }
}

impl<T> ForwardCursor for SliceCursorMut<'_, T> {}

impl<T> BackCursor for SliceCursorMut<'_, T> {
    fn step_back(&mut self) {
        debug_assert!(self.pos > 0, "stepped before the start");
        self.pos -= 1;
    }

    fn step_back_n(&mut self, n: usize) {
        debug_assert!(self.pos >= n, "stepped before the start");
        self.pos -= n;
    }
}

impl<T> BidirCursor for SliceCursorMut<'_, T> {
    fn peek_prev(&self) -> T
    where
        T: Clone,
    {
        assert!(0 < self.pos && self.pos <= self.len);
        // SAFETY: pos - 1 < len; same borrow argument as `get`.
        unsafe { (*self.base.add(self.pos - 1)).clone() }
    }
}

impl<T> RandomCursor for SliceCursorMut<'_, T> {
    fn offset(&mut self, n: isize) {
        let pos = self.pos as isize + n;
        debug_assert!(0 <= pos && pos <= self.len as isize);
        self.pos = pos as usize;
    }

    fn delta(&self, other: &Self) -> isize {
        debug_assert!(self.same_storage(other));
        self.pos as isize - other.pos as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_cursor_walks_in_order() {
        let data = [1, 2, 3];
        let (mut cur, end) = SliceCursor::span(&data);
        let mut seen = Vec::new();
        while cur != end {
            seen.push(cur.get());
            cur.step();
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn cursors_over_different_slices_never_compare_equal() {
        let a = [1, 2];
        let b = [1, 2];
        assert_ne!(SliceCursor::start(&a), SliceCursor::start(&b));
        assert_eq!(SliceCursor::start(&a).partial_cmp(&SliceCursor::start(&b)), None);
    }

    #[test]
    fn random_access_jumps_and_subtracts() {
        let data = [10, 20, 30, 40];
        let (mut cur, end) = SliceCursor::span(&data);
        cur.offset(3);
        assert_eq!(cur.get(), 40);
        assert_eq!(end.delta(&cur), 1);
        cur.offset(-2);
        assert_eq!(cur.get(), 20);
    }

    #[test]
    fn mut_cursor_writes_through() {
        let mut data = [0u32; 3];
        let (mut cur, _end) = SliceCursorMut::span(&mut data);
        cur.put(7);
        cur.step();
        cur.put(8);
        assert_eq!(data, [7, 8, 0]);
    }

    #[test]
    fn mut_cursor_take_leaves_default() {
        let mut data = [String::from("a"), String::from("b")];
        let mut cur = SliceCursorMut::start(&mut data);
        let taken = cur.take();
        assert_eq!(taken, "a");
        assert_eq!(data[0], "");
    }

    #[test]
    fn raw_probe_tracks_position() {
        let data = [1u8, 2, 3];
        let (mut cur, end) = SliceCursor::span(&data);
        let p0 = cur.raw().unwrap();
        cur.step();
        let p1 = cur.raw().unwrap();
        assert_eq!(p1 as usize - p0 as usize, 1);
        assert_eq!(end.raw().unwrap() as usize - p0 as usize, 3);
    }

    #[test]
    fn peek_prev_sees_the_element_behind() {
        let data = [5, 6, 7];
        let mut cur = SliceCursor::end(&data);
        assert_eq!(cur.peek_prev(), 7);
        cur.step_back();
        assert_eq!(cur.peek_prev(), 6);
    }

    #[test]
    fn mut_cursor_reads_are_copies_not_views() {
        let mut data = [1u32, 2, 3];
        let (a, _end) = SliceCursorMut::span(&mut data);
        let mut b = a.clone();
        // The read result is an owned value, so it stays valid while a
        // sibling cursor overwrites the slot it came from.
        let before = a.get();
        b.put(9);
        assert_eq!(before, 1);
        assert_eq!(a.get(), 9);
    }

    #[test]
    #[should_panic(expected = "dereferenced an end cursor")]
    fn mut_end_cursor_get_panics() {
        let mut data = [1];
        let (_start, end) = SliceCursorMut::span(&mut data);
        let _ = end.get();
    }
}
