//! Cross-tier equivalence properties.
//!
//! Every fast path must be observationally identical to the
//! element-wise walk it replaces. The wrappers from `rove-test-utils`
//! re-tag slice cursors at lower capabilities and hide the contiguity
//! probe, forcing the walking tiers over the same storage.

use proptest::prelude::*;
use rove_algo::{copy, copy_backward, lexicographical_compare, mismatch};
use rove_core::slice::{SliceCursor, SliceCursorMut};
use rove_core::traits::ReadCursor;
use rove_core::{advance, distance, Transfer};
use rove_test_utils::{BidirOnly, ForwardOnly};

/// A one-byte plain-data element that takes the bitwise copy tier but
/// not the byte-order comparison tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
struct Cell(u8);

// SAFETY: transparent over `u8`, no ownership semantics.
unsafe impl Transfer for Cell {
    const BITWISE: bool = true;
}

proptest! {
    #[test]
    fn copy_tiers_agree_for_bytes(src in proptest::collection::vec(any::<u8>(), 0..257)) {
        let mut block = vec![0u8; src.len()];
        let mut walked = vec![0u8; src.len()];
        let (first, last) = SliceCursor::span(&src);
        copy(first, &last, SliceCursorMut::start(&mut block));
        copy(
            ForwardOnly(first),
            &ForwardOnly(last),
            ForwardOnly(SliceCursorMut::start(&mut walked)),
        );
        prop_assert_eq!(&block, &src);
        prop_assert_eq!(&block, &walked);
    }

    #[test]
    fn copy_tiers_agree_for_one_byte_newtypes(
        bytes in proptest::collection::vec(any::<u8>(), 0..257),
    ) {
        let src: Vec<Cell> = bytes.iter().copied().map(Cell).collect();
        let mut block = vec![Cell(0); src.len()];
        let mut walked = vec![Cell(0); src.len()];
        let (first, last) = SliceCursor::span(&src);
        copy(first, &last, SliceCursorMut::start(&mut block));
        copy(
            ForwardOnly(first),
            &ForwardOnly(last),
            ForwardOnly(SliceCursorMut::start(&mut walked)),
        );
        prop_assert_eq!(&block, &src);
        prop_assert_eq!(&block, &walked);
    }

    #[test]
    fn backward_tiers_agree(src in proptest::collection::vec(any::<u32>(), 0..129)) {
        let mut block = vec![0u32; src.len()];
        let mut walked = vec![0u32; src.len()];
        let (first, last) = SliceCursor::span(&src);
        copy_backward(&first, last, SliceCursorMut::span(&mut block).1);
        copy_backward(
            &BidirOnly(first),
            BidirOnly(last),
            BidirOnly(SliceCursorMut::span(&mut walked).1),
        );
        prop_assert_eq!(&block, &src);
        prop_assert_eq!(&block, &walked);
    }

    #[test]
    fn copy_then_copy_backward_round_trips(
        src in proptest::collection::vec(any::<u16>(), 0..129),
    ) {
        let mut staging = vec![0u16; src.len()];
        let mut restored = vec![0u16; src.len()];
        let (first, last) = SliceCursor::span(&src);
        copy(first, &last, SliceCursorMut::start(&mut staging));
        let (sf, sl) = SliceCursor::span(&staging);
        copy_backward(&sf, sl, SliceCursorMut::span(&mut restored).1);
        prop_assert_eq!(&restored, &src);
    }

    #[test]
    fn lex_compare_tiers_agree(
        a in proptest::collection::vec(any::<u8>(), 0..65),
        b in proptest::collection::vec(any::<u8>(), 0..65),
    ) {
        let (f1, l1) = SliceCursor::span(&a);
        let (f2, l2) = SliceCursor::span(&b);
        let byte_tier = lexicographical_compare(f1, &l1, f2, &l2);
        let walk_tier = lexicographical_compare(
            ForwardOnly(f1),
            &ForwardOnly(l1),
            ForwardOnly(f2),
            &ForwardOnly(l2),
        );
        prop_assert_eq!(byte_tier, walk_tier);
        prop_assert_eq!(byte_tier, a < b);
    }

    #[test]
    fn mismatch_reports_the_first_divergence(
        src in proptest::collection::vec(any::<u8>(), 1..129),
        k in any::<prop::sample::Index>(),
    ) {
        let k = k.index(src.len());
        let mut other = src.clone();
        other[k] ^= 0xff;
        let (f1, l1) = SliceCursor::span(&src);
        let f2 = SliceCursor::start(&other);
        let (at1, at2) = mismatch(f1, &l1, f2);
        prop_assert_eq!(at1.position(), k);
        prop_assert_eq!(at2.position(), k);
        prop_assert_eq!(at1.get() ^ 0xff, at2.get());
    }

    #[test]
    fn mismatch_of_identical_ranges_reaches_both_ends(
        src in proptest::collection::vec(any::<u8>(), 0..65),
    ) {
        let copy_of = src.clone();
        let (f1, l1) = SliceCursor::span(&src);
        let f2 = SliceCursor::start(&copy_of);
        let (at1, at2) = mismatch(f1, &l1, f2);
        prop_assert_eq!(at1.position(), src.len());
        prop_assert_eq!(at2.position(), src.len());
    }

    #[test]
    fn distance_and_advance_agree_across_capabilities(
        n in 0usize..200,
        k in 0usize..200,
    ) {
        let data = vec![0u8; n];
        let (first, last) = SliceCursor::span(&data);
        prop_assert_eq!(distance(first, &last), n as isize);
        prop_assert_eq!(
            distance(ForwardOnly(first), &ForwardOnly(last)),
            n as isize
        );
        prop_assert_eq!(
            distance(BidirOnly(first), &BidirOnly(last)),
            n as isize
        );

        let k = k.min(n) as isize;
        let mut jumped = first;
        advance(&mut jumped, k);
        let mut stepped = ForwardOnly(first);
        advance(&mut stepped, k);
        prop_assert_eq!(jumped.position(), stepped.0.position());
    }
}
