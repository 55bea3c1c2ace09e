//! Failure-path properties: a panic mid-construction must leave the
//! destination fully raw, with every built element torn down.

use std::mem::MaybeUninit;
use std::panic::{catch_unwind, AssertUnwindSafe};

use proptest::prelude::*;
use rove_core::Transfer;
use rove_test_utils::{DropTally, ExplodingClone, NoDrop, Tally};
use rove_uninit::{copy_init, destroy_slice, fill_init};

/// A tallied element whose clone panics once the shared fuse runs out.
/// The fuse is consulted first, so the panicking element never counts
/// as created.
struct Primed {
    fuse: ExplodingClone,
    tag: DropTally,
}

impl Clone for Primed {
    fn clone(&self) -> Self {
        Self {
            fuse: self.fuse.clone(),
            tag: self.tag.clone(),
        }
    }
}

// SAFETY: conservative defaults only.
unsafe impl Transfer for Primed {}

fn primed_source(tally: &Tally, n: usize, clones_allowed: usize) -> Vec<Primed> {
    // Building the source itself costs one fuse clone per element.
    let proto = ExplodingClone::arm(n + clones_allowed);
    (0..n)
        .map(|i| Primed {
            fuse: proto.clone(),
            tag: tally.make(i as u32),
        })
        .collect()
}

proptest! {
    // Each case burns a fuse, so keep the exploration tight.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn copy_init_rolls_back_at_any_failure_point(
        n in 1usize..24,
        k in any::<prop::sample::Index>(),
    ) {
        let k = k.index(n);
        let tally = Tally::new();
        let src = primed_source(&tally, n, k);

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let mut dst: Vec<MaybeUninit<Primed>> = Vec::new();
            dst.resize_with(n, MaybeUninit::uninit);
            copy_init(&src, &mut dst);
        }));

        prop_assert!(outcome.is_err());
        // k clones succeeded before the panic, and the guard tore all
        // k of them down; the source elements stay live.
        prop_assert_eq!(tally.created(), n + k);
        prop_assert_eq!(tally.dropped(), k);
        prop_assert_eq!(tally.live(), n);
    }

    #[test]
    fn fill_init_rolls_back_at_any_failure_point(
        n in 1usize..24,
        k in any::<prop::sample::Index>(),
    ) {
        let k = k.index(n);
        let tally = Tally::new();
        let proto = ExplodingClone::arm(k);
        let value = Primed {
            fuse: proto,
            tag: tally.make(0),
        };

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let mut dst: Vec<MaybeUninit<Primed>> = Vec::new();
            dst.resize_with(n, MaybeUninit::uninit);
            fill_init(&mut dst, &value);
        }));

        prop_assert!(outcome.is_err());
        prop_assert_eq!(tally.created(), 1 + k);
        prop_assert_eq!(tally.dropped(), k);
    }

    #[test]
    fn copy_init_with_enough_fuse_completes(n in 0usize..24) {
        let tally = Tally::new();
        let src = primed_source(&tally, n, n);

        let mut dst: Vec<MaybeUninit<Primed>> = Vec::new();
        dst.resize_with(n, MaybeUninit::uninit);
        copy_init(&src, &mut dst);

        prop_assert_eq!(tally.created(), 2 * n);
        prop_assert_eq!(tally.dropped(), 0);
        // SAFETY: copy_init returned, so every slot is live.
        unsafe { destroy_slice(&mut dst) };
        prop_assert_eq!(tally.dropped(), n);
    }
}

#[test]
fn destroy_over_plain_data_performs_no_teardown() {
    let mut slots: Vec<MaybeUninit<NoDrop>> = Vec::new();
    slots.resize_with(64, MaybeUninit::uninit);
    let built = fill_init(&mut slots, &NoDrop(7));
    assert!(built.iter().all(|v| *v == NoDrop(7)));
    // Pin the gate the teardown path branches on: no drop glue means
    // `destroy_slice` must compile to nothing for this element type.
    assert!(!std::mem::needs_drop::<NoDrop>());
    // SAFETY: every slot was initialized by the fill.
    unsafe { destroy_slice(&mut slots) };
}
