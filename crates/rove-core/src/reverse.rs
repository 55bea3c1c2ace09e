//! Reverse-traversal adaptor.
//!
//! [`Rev`] wraps any bidirectional-or-stronger cursor and walks it in
//! the opposite direction. The adaptor keeps the classic one-ahead
//! representation: a reverse cursor at position `i` holds its base at
//! position `i + 1` and dereferences to the element just before the
//! base. That lets a reverse range cover the whole sequence without
//! ever positioning the base before its start.

use std::cmp::Ordering;

use crate::traits::{
    BackCursor, BidirCursor, Cursor, ForwardCursor, RandomCursor, ReadCursor, TakeCursor,
    WriteCursor,
};

/// A cursor that traverses its base cursor's sequence backward.
///
/// Advancing the adaptor steps the base backward and vice versa.
/// Equality compares base positions directly; ordering (where the base
/// supports it) is inverted, since moving "forward" through a reverse
/// range regresses the base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rev<C> {
    base: C,
}

impl<C> Rev<C> {
    /// Wrap `base`. The new cursor dereferences to the element
    /// immediately before `base`'s position.
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// The underlying cursor, by reference.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwrap back to the underlying cursor.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: PartialOrd> PartialOrd for Rev<C> {
    /// Inverse of the base ordering.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<C: BackCursor> Cursor for Rev<C> {
    type Item = C::Item;
    type Cap = C::Cap;

    fn step(&mut self) {
        self.base.step_back();
    }

    fn step_n(&mut self, n: usize) {
        self.base.step_back_n(n);
    }
}

impl<C: BidirCursor> ReadCursor for Rev<C> {
    fn get(&self) -> C::Item
    where
        C::Item: Clone,
    {
        self.base.peek_prev()
    }
}

impl<C: BidirCursor> ForwardCursor for Rev<C> {}

impl<C: BidirCursor> BackCursor for Rev<C> {
    fn step_back(&mut self) {
        self.base.step();
    }

    fn step_back_n(&mut self, n: usize) {
        self.base.step_n(n);
    }
}

impl<C: BidirCursor> BidirCursor for Rev<C> {
    fn peek_prev(&self) -> C::Item
    where
        C::Item: Clone,
    {
        // The element before the reverse position is the one the base
        // currently points at.
        self.base.get()
    }
}

impl<C: RandomCursor> RandomCursor for Rev<C> {
    fn offset(&mut self, n: isize) {
        self.base.offset(-n);
    }

    fn delta(&self, other: &Self) -> isize {
        other.base.delta(&self.base)
    }
}

impl<C> WriteCursor for Rev<C>
where
    C: WriteCursor + BackCursor,
{
    fn put(&mut self, value: C::Item) {
        self.base.step_back();
        self.base.put(value);
        self.base.step();
    }
}

impl<C> TakeCursor for Rev<C>
where
    C: TakeCursor + BackCursor,
{
    fn take(&mut self) -> C::Item {
        self.base.step_back();
        let value = self.base.take();
        self.base.step();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{SliceCursor, SliceCursorMut};
    use proptest::prelude::*;

    fn collect<C: ForwardCursor<Item = i32>>(mut cur: C, end: &C) -> Vec<i32> {
        let mut out = Vec::new();
        while cur != *end {
            out.push(cur.get());
            cur.step();
        }
        out
    }

    #[test]
    fn reverse_walks_backward() {
        let data = [1, 2, 3, 4];
        let (start, end) = SliceCursor::span(&data);
        let rstart = Rev::new(end);
        let rend = Rev::new(start);
        assert_eq!(collect(rstart, &rend), vec![4, 3, 2, 1]);
    }

    #[test]
    fn double_reverse_restores_the_original_walk() {
        let data = [1, 2, 3, 4];
        let (start, end) = SliceCursor::span(&data);
        let rrstart = Rev::new(Rev::new(start.clone()));
        let rrend = Rev::new(Rev::new(end));
        assert_eq!(collect(rrstart, &rrend), collect(start, &SliceCursor::end(&data)));
    }

    #[test]
    fn random_access_arithmetic_is_sign_inverted() {
        let data = [10, 20, 30, 40, 50];
        let (start, end) = SliceCursor::span(&data);
        let mut rev = Rev::new(end);
        rev.offset(2);
        assert_eq!(rev.get(), 30);
        let rend = Rev::new(start);
        assert_eq!(rend.delta(&rev), 3);
    }

    #[test]
    fn ordering_is_inverted_equality_is_not() {
        let data = [1, 2, 3];
        let (start, end) = SliceCursor::span(&data);
        let ra = Rev::new(end);
        let rb = Rev::new(start.clone());
        // Base end > base start, so reversed: ra < rb.
        assert!(ra < rb);
        assert_eq!(Rev::new(start.clone()), Rev::new(start));
    }

    proptest! {
        #[test]
        fn reverse_walk_matches_reversed_iteration(
            data in proptest::collection::vec(any::<i32>(), 0..64),
        ) {
            let (start, end) = SliceCursor::span(&data);
            let walked = collect(Rev::new(end), &Rev::new(start));
            let expected: Vec<i32> = data.iter().rev().copied().collect();
            prop_assert_eq!(walked, expected);
        }

        #[test]
        fn double_reverse_is_identity(
            data in proptest::collection::vec(any::<i32>(), 0..64),
        ) {
            let (start, end) = SliceCursor::span(&data);
            let walked = collect(Rev::new(Rev::new(start)), &Rev::new(Rev::new(end)));
            prop_assert_eq!(walked, data);
        }
    }

    #[test]
    fn reverse_write_targets_the_element_before_the_base() {
        let mut data = [0, 0, 0];
        let (_start, end) = SliceCursorMut::span(&mut data);
        let mut rev = Rev::new(end);
        rev.put(9); // last element
        rev.step();
        rev.put(8); // middle element
        assert_eq!(data, [0, 8, 9]);
    }
}
