//! Copy and move over cursor ranges.

use std::mem;
use std::ptr;

use rove_core::cap::{Bidirectional, Forward, Input, RandomAccess};
use rove_core::traits::{BackCursor, Cursor, RandomCursor, ReadCursor, TakeCursor, WriteCursor};
use rove_core::Transfer;

/// Address and element count of `[first, last)` if both endpoints
/// probe contiguous. `None` for zero-sized element types — there is
/// nothing a block transfer could express for them.
pub(crate) fn raw_span<S: Cursor>(first: &S, last: &S) -> Option<(*const S::Item, usize)> {
    if mem::size_of::<S::Item>() == 0 {
        return None;
    }
    let start = first.raw()?;
    let end = last.raw()?;
    Some((start, (end as usize - start as usize) / mem::size_of::<S::Item>()))
}

/// Tag-level element tiers of [`copy`].
pub trait CopyStep<S: Cursor> {
    /// Copy `[first, last)` to `out`, returning the advanced `out`.
    fn copy<D>(first: S, last: &S, out: D) -> D
    where
        D: WriteCursor<Item = S::Item>,
        S::Item: Clone;
}

macro_rules! copy_walk {
    ($($tag:ty),*) => {
        $(
            impl<S> CopyStep<S> for $tag
            where
                S: ReadCursor<Cap = $tag> + PartialEq,
            {
                fn copy<D>(mut first: S, last: &S, mut out: D) -> D
                where
                    D: WriteCursor<Item = S::Item>,
                    S::Item: Clone,
                {
                    while first != *last {
                        out.put(first.get());
                        first.step();
                        out.step();
                    }
                    out
                }
            }
        )*
    };
}

copy_walk!(Input, Forward, Bidirectional);

impl<S> CopyStep<S> for RandomAccess
where
    S: RandomCursor<Cap = RandomAccess>,
{
    fn copy<D>(mut first: S, last: &S, mut out: D) -> D
    where
        D: WriteCursor<Item = S::Item>,
        S::Item: Clone,
    {
        // Trip count instead of an inequality test per element.
        let n = last.delta(&first);
        for _ in 0..n {
            out.put(first.get());
            first.step();
            out.step();
        }
        out
    }
}

/// Copy `[first, last)` to the range starting at `out`; returns `out`
/// advanced past the last element written.
///
/// Safe for overlapping ranges when the destination starts at or
/// before the source (left shift); use [`copy_backward`] for right
/// shifts. The destination must have room for the whole range.
pub fn copy<S, D>(first: S, last: &S, mut out: D) -> D
where
    S: ReadCursor,
    D: WriteCursor<Item = S::Item>,
    S::Item: Clone + Transfer,
    S::Cap: CopyStep<S>,
{
    if S::Item::BITWISE {
        if let Some((src, n)) = raw_span(&first, last) {
            if let Some(dst) = out.raw_mut() {
                // SAFETY: both endpoints probed contiguous, so
                // `[src, src + n)` is a live range; the destination
                // cursor promises `n` writable slots (caller
                // contract); BITWISE licenses overwriting without
                // running per-element logic. `ptr::copy` tolerates
                // the permitted overlap direction.
                unsafe {
                    ptr::copy(src, dst, n);
                }
                out.step_n(n);
                return out;
            }
        }
    }
    <S::Cap as CopyStep<S>>::copy(first, last, out)
}

/// Tag-level element tiers of [`copy_backward`].
pub trait CopyBackStep<S: Cursor> {
    /// Copy `[first, last)` to the range ending at `out`, high end
    /// first, returning `out` moved back past the first element
    /// written.
    fn copy_backward<D>(first: &S, last: S, out: D) -> D
    where
        D: WriteCursor<Item = S::Item> + BackCursor,
        S::Item: Clone;
}

impl<S> CopyBackStep<S> for Bidirectional
where
    S: ReadCursor<Cap = Bidirectional> + BackCursor + PartialEq,
{
    fn copy_backward<D>(first: &S, mut last: S, mut out: D) -> D
    where
        D: WriteCursor<Item = S::Item> + BackCursor,
        S::Item: Clone,
    {
        while *first != last {
            last.step_back();
            out.step_back();
            out.put(last.get());
        }
        out
    }
}

impl<S> CopyBackStep<S> for RandomAccess
where
    S: RandomCursor<Cap = RandomAccess>,
{
    fn copy_backward<D>(first: &S, mut last: S, mut out: D) -> D
    where
        D: WriteCursor<Item = S::Item> + BackCursor,
        S::Item: Clone,
    {
        let n = last.delta(first);
        for _ in 0..n {
            last.step_back();
            out.step_back();
            out.put(last.get());
        }
        out
    }
}

/// Copy `[first, last)` into the range *ending* at `out`, processing
/// from the high end down; returns `out` moved back to the start of
/// the written range.
///
/// This is the right-shift-safe direction for overlapping ranges.
pub fn copy_backward<S, D>(first: &S, last: S, mut out: D) -> D
where
    S: ReadCursor,
    D: WriteCursor<Item = S::Item> + BackCursor,
    S::Item: Clone + Transfer,
    S::Cap: CopyBackStep<S>,
{
    if S::Item::BITWISE {
        if let Some((src, n)) = raw_span(first, &last) {
            if let Some(dst_end) = out.raw_mut() {
                // SAFETY: `out` marks one past the destination's high
                // end, so the block lands in `[dst_end - n, dst_end)`;
                // otherwise as in `copy`.
                unsafe {
                    ptr::copy(src, dst_end.sub(n), n);
                }
                out.step_back_n(n);
                return out;
            }
        }
    }
    <S::Cap as CopyBackStep<S>>::copy_backward(first, last, out)
}

/// Tag-level element tiers of [`copy_n`].
pub trait CopyNStep<S: Cursor> {
    /// Copy `n` elements from `first` to `out`, returning both
    /// advanced cursors.
    fn copy_n<D>(first: S, n: usize, out: D) -> (S, D)
    where
        D: WriteCursor<Item = S::Item>,
        S::Item: Clone + Transfer;
}

macro_rules! copy_n_walk {
    ($($tag:ty),*) => {
        $(
            impl<S> CopyNStep<S> for $tag
            where
                S: ReadCursor<Cap = $tag>,
            {
                fn copy_n<D>(mut first: S, n: usize, mut out: D) -> (S, D)
                where
                    D: WriteCursor<Item = S::Item>,
                    S::Item: Clone + Transfer,
                {
                    for _ in 0..n {
                        out.put(first.get());
                        first.step();
                        out.step();
                    }
                    (first, out)
                }
            }
        )*
    };
}

copy_n_walk!(Input, Forward, Bidirectional);

impl<S> CopyNStep<S> for RandomAccess
where
    S: RandomCursor<Cap = RandomAccess>,
{
    fn copy_n<D>(first: S, n: usize, out: D) -> (S, D)
    where
        D: WriteCursor<Item = S::Item>,
        S::Item: Clone + Transfer,
    {
        // Materialize the end cursor and reuse `copy`, raw tier
        // included.
        let mut last = first.clone();
        last.offset(n as isize);
        let out = copy(first, &last, out);
        (last, out)
    }
}

/// Copy `n` elements starting at `first` to `out`; returns the source
/// cursor past the last element read and the destination cursor past
/// the last element written.
pub fn copy_n<S, D>(first: S, n: usize, out: D) -> (S, D)
where
    S: ReadCursor,
    D: WriteCursor<Item = S::Item>,
    S::Item: Clone + Transfer,
    S::Cap: CopyNStep<S>,
{
    <S::Cap as CopyNStep<S>>::copy_n(first, n, out)
}

/// Copy the elements of `[first, last)` satisfying `pred` to `out`,
/// packed; returns `out` past the last element written.
pub fn copy_if<S, D, P>(mut first: S, last: &S, mut out: D, mut pred: P) -> D
where
    S: ReadCursor + PartialEq,
    D: WriteCursor<Item = S::Item>,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    while first != *last {
        let value = first.get();
        if pred(&value) {
            out.put(value);
            out.step();
        }
        first.step();
    }
    out
}

/// Tag-level element tiers of [`move_range`].
pub trait MoveStep<S: Cursor> {
    /// Move `[first, last)` to `out`, returning the advanced `out`.
    fn move_range<D>(first: S, last: &S, out: D) -> D
    where
        D: WriteCursor<Item = S::Item>;
}

macro_rules! move_walk {
    ($($tag:ty),*) => {
        $(
            impl<S> MoveStep<S> for $tag
            where
                S: TakeCursor<Cap = $tag> + PartialEq,
            {
                fn move_range<D>(mut first: S, last: &S, mut out: D) -> D
                where
                    D: WriteCursor<Item = S::Item>,
                {
                    while first != *last {
                        out.put(first.take());
                        first.step();
                        out.step();
                    }
                    out
                }
            }
        )*
    };
}

move_walk!(Input, Forward, Bidirectional);

impl<S> MoveStep<S> for RandomAccess
where
    S: TakeCursor + RandomCursor<Cap = RandomAccess>,
{
    fn move_range<D>(mut first: S, last: &S, mut out: D) -> D
    where
        D: WriteCursor<Item = S::Item>,
    {
        let n = last.delta(&first);
        for _ in 0..n {
            out.put(first.take());
            first.step();
            out.step();
        }
        out
    }
}

/// Move `[first, last)` to the range starting at `out`; returns `out`
/// advanced past the last element written.
///
/// Source elements are left in whatever moved-from state the cursor's
/// [`take`](TakeCursor::take) produces — on the raw tier they are not
/// touched at all. Either way the state is unspecified to callers.
/// Overlap contract as for [`copy`].
pub fn move_range<S, D>(first: S, last: &S, mut out: D) -> D
where
    S: TakeCursor,
    D: WriteCursor<Item = S::Item>,
    S::Item: Transfer,
    S::Cap: MoveStep<S>,
{
    if S::Item::BITWISE {
        if let Some((src, n)) = raw_span(&first, last) {
            if let Some(dst) = out.raw_mut() {
                // SAFETY: as in `copy`; BITWISE makes bit duplication
                // a complete move and leaves the source bytes valid.
                unsafe {
                    ptr::copy(src, dst, n);
                }
                out.step_n(n);
                return out;
            }
        }
    }
    <S::Cap as MoveStep<S>>::move_range(first, last, out)
}

/// Tag-level element tiers of [`move_backward`].
pub trait MoveBackStep<S: Cursor> {
    /// Move `[first, last)` to the range ending at `out`, high end
    /// first, returning `out` moved back past the first element
    /// written.
    fn move_backward<D>(first: &S, last: S, out: D) -> D
    where
        D: WriteCursor<Item = S::Item> + BackCursor;
}

impl<S> MoveBackStep<S> for Bidirectional
where
    S: TakeCursor<Cap = Bidirectional> + BackCursor + PartialEq,
{
    fn move_backward<D>(first: &S, mut last: S, mut out: D) -> D
    where
        D: WriteCursor<Item = S::Item> + BackCursor,
    {
        while *first != last {
            last.step_back();
            out.step_back();
            out.put(last.take());
        }
        out
    }
}

impl<S> MoveBackStep<S> for RandomAccess
where
    S: TakeCursor + RandomCursor<Cap = RandomAccess>,
{
    fn move_backward<D>(first: &S, mut last: S, mut out: D) -> D
    where
        D: WriteCursor<Item = S::Item> + BackCursor,
    {
        let n = last.delta(first);
        for _ in 0..n {
            last.step_back();
            out.step_back();
            out.put(last.take());
        }
        out
    }
}

/// Move `[first, last)` into the range *ending* at `out`, high end
/// first; returns `out` moved back to the start of the written range.
///
/// The right-shift-safe counterpart of [`move_range`].
pub fn move_backward<S, D>(first: &S, last: S, mut out: D) -> D
where
    S: TakeCursor,
    D: WriteCursor<Item = S::Item> + BackCursor,
    S::Item: Transfer,
    S::Cap: MoveBackStep<S>,
{
    if S::Item::BITWISE {
        if let Some((src, n)) = raw_span(first, &last) {
            if let Some(dst_end) = out.raw_mut() {
                // SAFETY: as in `copy_backward`.
                unsafe {
                    ptr::copy(src, dst_end.sub(n), n);
                }
                out.step_back_n(n);
                return out;
            }
        }
    }
    <S::Cap as MoveBackStep<S>>::move_backward(first, last, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_core::slice::{SliceCursor, SliceCursorMut};

    #[test]
    fn copy_bitwise_hits_the_raw_tier_with_same_result() {
        let src = [1u32, 2, 3, 4, 5];
        let mut dst = [0u32; 5];
        let (first, last) = SliceCursor::span(&src);
        let out = SliceCursorMut::start(&mut dst);
        let out = copy(first, &last, out);
        assert_eq!(out.position(), 5);
        assert_eq!(dst, src);
    }

    #[test]
    fn copy_elementwise_for_owning_types() {
        let src = [String::from("a"), String::from("b")];
        let mut dst = [String::new(), String::new()];
        let (first, last) = SliceCursor::span(&src);
        let out = SliceCursorMut::start(&mut dst);
        copy(first, &last, out);
        assert_eq!(dst, src);
    }

    #[test]
    fn copy_empty_range_writes_nothing() {
        let src: [u32; 0] = [];
        let mut dst = [7u32; 3];
        let (first, last) = SliceCursor::span(&src);
        let out = copy(first, &last, SliceCursorMut::start(&mut dst));
        assert_eq!(out.position(), 0);
        assert_eq!(dst, [7, 7, 7]);
    }

    #[test]
    fn copy_backward_right_shifts_in_place() {
        // Shift [1,2,3] right by two inside one buffer: the overlap
        // case that demands the backward direction.
        let mut buf = [1u32, 2, 3, 0, 0];
        let (start, end) = SliceCursorMut::span(&mut buf);
        let mut src_last = start.clone();
        src_last.offset(3);
        let out = copy_backward(&start, src_last, end);
        assert_eq!(out.position(), 2);
        assert_eq!(buf, [1, 2, 1, 2, 3]);
    }

    #[test]
    fn copy_forward_left_shifts_in_place() {
        let mut buf = [0u32, 0, 1, 2, 3];
        let (start, end) = SliceCursorMut::span(&mut buf);
        let mut src_first = start.clone();
        src_first.offset(2);
        copy(src_first, &end, start);
        assert_eq!(buf[..3], [1, 2, 3]);
    }

    #[test]
    fn copy_n_returns_both_advanced_cursors() {
        let src = [9u8, 8, 7, 6];
        let mut dst = [0u8; 4];
        let first = SliceCursor::start(&src);
        let (src_end, dst_end) = copy_n(first, 3, SliceCursorMut::start(&mut dst));
        assert_eq!(src_end.position(), 3);
        assert_eq!(dst_end.position(), 3);
        assert_eq!(dst, [9, 8, 7, 0]);
    }

    #[test]
    fn copy_if_packs_matches() {
        let src = [1i32, -2, 3, -4, 5];
        let mut dst = [0i32; 5];
        let (first, last) = SliceCursor::span(&src);
        let out = copy_if(first, &last, SliceCursorMut::start(&mut dst), |v| *v > 0);
        assert_eq!(out.position(), 3);
        assert_eq!(dst[..3], [1, 3, 5]);
    }

    #[test]
    fn move_range_takes_out_of_the_source() {
        let mut src = [String::from("x"), String::from("y")];
        let mut dst = [String::new(), String::new()];
        let (first, last) = SliceCursorMut::span(&mut src);
        move_range(first, &last, SliceCursorMut::start(&mut dst));
        assert_eq!(dst, [String::from("x"), String::from("y")]);
        // Moved-from slots hold the cursor's replacement value.
        assert_eq!(src, [String::new(), String::new()]);
    }

    #[test]
    fn move_backward_right_shifts_owning_elements() {
        let mut buf = [
            String::from("a"),
            String::from("b"),
            String::new(),
        ];
        let (start, end) = SliceCursorMut::span(&mut buf);
        let mut src_last = start.clone();
        src_last.offset(2);
        move_backward(&start, src_last, end);
        assert_eq!(buf[1], "a");
        assert_eq!(buf[2], "b");
    }
}
