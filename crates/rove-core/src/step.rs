//! Capability-dispatched `distance` and `advance`.
//!
//! These two follow the dispatch pattern the algorithm crates reuse:
//! a per-tag trait ([`WalkDistance`], [`WalkAdvance`]) is implemented
//! *by the tag types* for cursors declaring that tag, and the public
//! function routes through `C::Cap`. Since a cursor names exactly one
//! tag, the impls never overlap, and the whole choice resolves at
//! monomorphization — there is no per-element or even per-call runtime
//! check.

use crate::cap::{Bidirectional, Forward, Input, Output, RandomAccess};
use crate::traits::{BackCursor, Cursor, RandomCursor};

/// Tag-level implementation of [`distance`].
pub trait WalkDistance<C: Cursor> {
    /// Steps from `first` to `last`.
    fn distance(first: C, last: &C) -> isize;
}

/// Tag-level implementation of [`advance`].
pub trait WalkAdvance<C: Cursor> {
    /// Move `cursor` by `n` positions.
    fn advance(cursor: &mut C, n: isize);
}

macro_rules! walk_distance {
    ($($tag:ty),*) => {
        $(
            impl<C> WalkDistance<C> for $tag
            where
                C: Cursor<Cap = $tag> + PartialEq,
            {
                fn distance(mut first: C, last: &C) -> isize {
                    let mut n = 0;
                    while first != *last {
                        first.step();
                        n += 1;
                    }
                    n
                }
            }
        )*
    };
}

walk_distance!(Input, Forward, Bidirectional);

impl<C> WalkDistance<C> for RandomAccess
where
    C: RandomCursor<Cap = RandomAccess>,
{
    fn distance(first: C, last: &C) -> isize {
        last.delta(&first)
    }
}

macro_rules! walk_advance_forward_only {
    ($($tag:ty),*) => {
        $(
            impl<C> WalkAdvance<C> for $tag
            where
                C: Cursor<Cap = $tag>,
            {
                fn advance(cursor: &mut C, n: isize) {
                    debug_assert!(n >= 0, "single-pass cursors only advance forward");
                    for _ in 0..n {
                        cursor.step();
                    }
                }
            }
        )*
    };
}

walk_advance_forward_only!(Input, Output, Forward);

impl<C> WalkAdvance<C> for Bidirectional
where
    C: BackCursor<Cap = Bidirectional>,
{
    fn advance(cursor: &mut C, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                cursor.step();
            }
        } else {
            for _ in 0..-n {
                cursor.step_back();
            }
        }
    }
}

impl<C> WalkAdvance<C> for RandomAccess
where
    C: RandomCursor<Cap = RandomAccess>,
{
    fn advance(cursor: &mut C, n: isize) {
        cursor.offset(n);
    }
}

/// Number of forward steps from `first` to `last`.
///
/// O(n) counted walk below random access — `last` must be reachable
/// from `first` by repeated stepping. O(1) subtraction for
/// random-access cursors, where an inverted range yields a negative
/// result; ordering the operands is the caller's responsibility and is
/// not validated.
pub fn distance<C>(first: C, last: &C) -> isize
where
    C: Cursor,
    C::Cap: WalkDistance<C>,
{
    <C::Cap as WalkDistance<C>>::distance(first, last)
}

/// Move `cursor` by `n` positions.
///
/// Below bidirectional, only `n >= 0` is meaningful (debug-asserted,
/// never checked in release builds). Bidirectional cursors walk
/// backward for negative `n`; random-access cursors jump in O(1)
/// regardless of sign.
pub fn advance<C>(cursor: &mut C, n: isize)
where
    C: Cursor,
    C::Cap: WalkAdvance<C>,
{
    <C::Cap as WalkAdvance<C>>::advance(cursor, n);
}
