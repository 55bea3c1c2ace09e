//! Range and counted fill.

use std::ptr;

use rove_core::cap::{Bidirectional, Forward, RandomAccess};
use rove_core::traits::{Cursor, RandomCursor, WriteCursor};
use rove_core::Transfer;

/// Tag-level element tiers of [`fill`].
pub trait FillStep<D: Cursor> {
    /// Assign `value` to every position in `[first, last)`.
    fn fill(first: D, last: &D, value: D::Item)
    where
        D: WriteCursor,
        D::Item: Clone + Transfer;
}

macro_rules! fill_walk {
    ($($tag:ty),*) => {
        $(
            impl<D> FillStep<D> for $tag
            where
                D: WriteCursor<Cap = $tag> + PartialEq,
            {
                fn fill(mut first: D, last: &D, value: D::Item)
                where
                    D: WriteCursor,
                    D::Item: Clone + Transfer,
                {
                    while first != *last {
                        first.put(value.clone());
                        first.step();
                    }
                }
            }
        )*
    };
}

fill_walk!(Forward, Bidirectional);

impl<D> FillStep<D> for RandomAccess
where
    D: WriteCursor + RandomCursor<Cap = RandomAccess>,
{
    fn fill(first: D, last: &D, value: D::Item)
    where
        D: WriteCursor,
        D::Item: Clone + Transfer,
    {
        // Route through the counted form, which owns the byte-set
        // tier.
        let n = last.delta(&first);
        fill_n(first, n as usize, value);
    }
}

/// Assign `value` to every position in `[first, last)`.
pub fn fill<D>(first: D, last: &D, value: D::Item)
where
    D: WriteCursor,
    D::Item: Clone + Transfer,
    D::Cap: FillStep<D>,
{
    <D::Cap as FillStep<D>>::fill(first, last, value);
}

/// Assign `value` to the `n` positions starting at `first`; returns
/// the cursor past the last position written.
///
/// `n == 0` writes nothing and returns `first` unchanged. One-byte
/// integral element types with [`Transfer::BYTE_SET`] set collapse to
/// a single memory-set when the destination probes contiguous; `bool`
/// never does, keeping its representation semantics out of this
/// crate's hands.
pub fn fill_n<D>(mut first: D, n: usize, value: D::Item) -> D
where
    D: WriteCursor,
    D::Item: Clone + Transfer,
{
    if D::Item::BYTE_SET && n > 0 {
        if let Some(dst) = first.raw_mut() {
            // SAFETY: BYTE_SET promises a one-byte representation
            // whose repeated byte equals element-wise assignment; the
            // destination cursor promises `n` writable slots (caller
            // contract).
            unsafe {
                let byte = *(&value as *const D::Item as *const u8);
                ptr::write_bytes(dst, byte, n);
            }
            first.step_n(n);
            return first;
        }
    }
    for _ in 0..n {
        first.put(value.clone());
        first.step();
    }
    first
}
