//! Sequence comparison: equality, divergence, lexicographic order.
//!
//! All functions here walk the first range; `equal`, `equal_by`,
//! `mismatch`, and `mismatch_by` never examine the second range's
//! length, so it must be at least as long as the first — a caller
//! contract, not a runtime check.

use std::cmp::Ordering;
use std::slice;

use crate::copy::raw_span;
use rove_core::traits::ReadCursor;
use rove_core::Transfer;

/// Whether `[first1, last1)` equals the same-length prefix of the
/// sequence starting at `first2`. Early-exits on the first
/// inequality.
pub fn equal<A, B>(mut first1: A, last1: &A, mut first2: B) -> bool
where
    A: ReadCursor + PartialEq,
    B: ReadCursor,
    A::Item: Clone + PartialEq<B::Item>,
    B::Item: Clone,
{
    while first1 != *last1 {
        if first1.get() != first2.get() {
            return false;
        }
        first1.step();
        first2.step();
    }
    true
}

/// [`equal`] under a caller-supplied equivalence predicate.
pub fn equal_by<A, B, F>(mut first1: A, last1: &A, mut first2: B, mut eq: F) -> bool
where
    A: ReadCursor + PartialEq,
    B: ReadCursor,
    A::Item: Clone,
    B::Item: Clone,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    while first1 != *last1 {
        if !eq(&first1.get(), &first2.get()) {
            return false;
        }
        first1.step();
        first2.step();
    }
    true
}

/// First position where the two sequences diverge, as a cursor pair.
///
/// Returns `(last1, second-at-same-offset)` when no divergence exists
/// within the first range.
pub fn mismatch<A, B>(mut first1: A, last1: &A, mut first2: B) -> (A, B)
where
    A: ReadCursor + PartialEq,
    B: ReadCursor,
    A::Item: Clone + PartialEq<B::Item>,
    B::Item: Clone,
{
    while first1 != *last1 && first1.get() == first2.get() {
        first1.step();
        first2.step();
    }
    (first1, first2)
}

/// [`mismatch`] under a caller-supplied equivalence predicate.
pub fn mismatch_by<A, B, F>(mut first1: A, last1: &A, mut first2: B, mut eq: F) -> (A, B)
where
    A: ReadCursor + PartialEq,
    B: ReadCursor,
    A::Item: Clone,
    B::Item: Clone,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    while first1 != *last1 && eq(&first1.get(), &first2.get()) {
        first1.step();
        first2.step();
    }
    (first1, first2)
}

/// Whether `[first1, last1)` sorts strictly before `[first2, last2)`.
///
/// Standard lexicographic rules: the first unequal element pair
/// decides; a strict prefix sorts before the longer sequence; equal
/// sequences are not "before". Unsigned-byte sequences
/// ([`Transfer::BYTE_ORDER`]) over contiguous storage collapse to a
/// raw byte comparison, which is required to agree with the generic
/// path — any divergence is a bug here, not a representation choice.
pub fn lexicographical_compare<A, B>(mut first1: A, last1: &A, mut first2: B, last2: &B) -> bool
where
    A: ReadCursor + PartialEq,
    B: ReadCursor + PartialEq,
    A::Item: Clone + PartialOrd<B::Item> + Transfer,
    B::Item: Clone + Transfer,
{
    if A::Item::BYTE_ORDER && B::Item::BYTE_ORDER {
        if let (Some((p1, n1)), Some((p2, n2))) =
            (raw_span(&first1, last1), raw_span(&first2, last2))
        {
            // SAFETY: BYTE_ORDER promises one-byte elements whose
            // order is unsigned byte order, so both ranges reread as
            // byte slices; `[u8]` ordering is exactly the lexicographic
            // rule with the prefix tie-break.
            let a = unsafe { slice::from_raw_parts(p1 as *const u8, n1) };
            let b = unsafe { slice::from_raw_parts(p2 as *const u8, n2) };
            return a < b;
        }
    }
    while first1 != *last1 && first2 != *last2 {
        let (a, b) = (first1.get(), first2.get());
        if a < b {
            return true;
        }
        if a > b {
            return false;
        }
        first1.step();
        first2.step();
    }
    first1 == *last1 && first2 != *last2
}

/// [`lexicographical_compare`] under a caller-supplied ordering.
pub fn lexicographical_compare_by<A, B, F>(
    mut first1: A,
    last1: &A,
    mut first2: B,
    last2: &B,
    mut compare: F,
) -> bool
where
    A: ReadCursor + PartialEq,
    B: ReadCursor + PartialEq,
    A::Item: Clone,
    B::Item: Clone,
    F: FnMut(&A::Item, &B::Item) -> Ordering,
{
    while first1 != *last1 && first2 != *last2 {
        match compare(&first1.get(), &first2.get()) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
        first1.step();
        first2.step();
    }
    first1 == *last1 && first2 != *last2
}
