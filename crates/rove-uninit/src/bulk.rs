//! Bulk construction into uninitialized ranges.
//!
//! Every clone-driven routine here runs behind an [`InitGuard`]: a
//! panic inside `Clone::clone` (or a cursor's `take`) unwinds through
//! the guard, which drops the prefix already built and leaves the
//! destination fully raw. Relocation ([`move_init`]) is a bitwise
//! transfer with no failure point, so it carries no guard.

use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

use rove_core::traits::TakeCursor;
use rove_core::Transfer;

use crate::guard::InitGuard;

/// Clone-constructs `src` into the front of `dst`, returning the
/// initialized prefix.
///
/// Panics if `dst` is shorter than `src`. Elements whose clone is a
/// bitwise copy ([`Transfer::BITWISE`]) are duplicated in one block
/// copy; everything else is cloned one slot at a time behind a
/// rollback guard, so a clone panic leaves `dst` fully raw.
pub fn copy_init<'d, T>(src: &[T], dst: &'d mut [MaybeUninit<T>]) -> &'d mut [T]
where
    T: Clone + Transfer,
{
    assert!(
        dst.len() >= src.len(),
        "destination shorter than source ({} < {})",
        dst.len(),
        src.len()
    );
    let n = src.len();
    let out = dst.as_mut_ptr() as *mut T;
    // SAFETY: `dst` is a live mutable borrow covering at least `n`
    // slots, and `src` is a distinct shared borrow, so the ranges
    // cannot overlap.
    unsafe { copy_init_n(src.as_ptr(), n, out) };
    // SAFETY: the first `n` slots are now initialized.
    unsafe { slice::from_raw_parts_mut(out, n) }
}

/// Clone-constructs `n` elements from `src` into `dst`.
///
/// On a clone panic the destination prefix built so far is destroyed
/// before the panic propagates.
///
/// # Safety
///
/// `src` must be valid for reading `n` elements, `dst` valid and
/// aligned for writing `n`, and the two ranges must not overlap.
pub unsafe fn copy_init_n<T>(src: *const T, n: usize, dst: *mut T)
where
    T: Clone + Transfer,
{
    if T::BITWISE {
        // SAFETY: BITWISE promises clone is indistinguishable from a
        // bit copy; validity and disjointness are the caller's
        // contract.
        unsafe { ptr::copy_nonoverlapping(src, dst, n) };
        return;
    }
    // SAFETY: `dst` is valid for `n` writes per the caller; the guard
    // is only ever advanced over slots written below.
    let mut guard = unsafe { InitGuard::new(dst) };
    for i in 0..n {
        // SAFETY: `i < n` on both sides.
        unsafe { ptr::write(dst.add(i), (*src.add(i)).clone()) };
        guard.advance();
    }
    guard.disarm();
}

/// Clone-constructs `value` into every slot of `dst`, returning the
/// initialized slice.
///
/// One-byte element types with [`Transfer::BYTE_SET`] collapse to a
/// single memory-set; otherwise each slot gets its own clone behind a
/// rollback guard.
pub fn fill_init<'d, T>(dst: &'d mut [MaybeUninit<T>], value: &T) -> &'d mut [T]
where
    T: Clone + Transfer,
{
    let n = dst.len();
    let out = dst.as_mut_ptr() as *mut T;
    // SAFETY: `dst` is a live mutable borrow covering `n` slots.
    unsafe { fill_init_n(out, n, value) };
    // SAFETY: every slot is now initialized.
    unsafe { slice::from_raw_parts_mut(out, n) }
}

/// Clone-constructs `value` into the `n` slots starting at `dst`.
///
/// # Safety
///
/// `dst` must be valid and aligned for writing `n` elements, none of
/// which alias `value`.
pub unsafe fn fill_init_n<T>(dst: *mut T, n: usize, value: &T)
where
    T: Clone + Transfer,
{
    if T::BYTE_SET && n > 0 {
        // SAFETY: BYTE_SET promises a one-byte representation whose
        // repeated byte equals element-wise assignment; validity is
        // the caller's contract.
        unsafe {
            let byte = *(value as *const T as *const u8);
            ptr::write_bytes(dst, byte, n);
        }
        return;
    }
    // SAFETY: `dst` is valid for `n` writes per the caller.
    let mut guard = unsafe { InitGuard::new(dst) };
    for i in 0..n {
        // SAFETY: `i < n`.
        unsafe { ptr::write(dst.add(i), value.clone()) };
        guard.advance();
    }
    guard.disarm();
}

/// Relocates `src` into the front of `dst`, returning the initialized
/// prefix. The source values are consumed; `src`'s memory must be
/// treated as uninitialized afterwards.
///
/// Relocation is a plain bit copy for every type, so this cannot fail
/// partway and needs no guard.
///
/// Panics if `dst` is shorter than `src`.
///
/// # Safety
///
/// The caller must not let the values in `src` drop or be read again;
/// ownership has moved into `dst`.
pub unsafe fn move_init<'d, T>(src: &mut [T], dst: &'d mut [MaybeUninit<T>]) -> &'d mut [T] {
    assert!(
        dst.len() >= src.len(),
        "destination shorter than source ({} < {})",
        dst.len(),
        src.len()
    );
    let n = src.len();
    let out = dst.as_mut_ptr() as *mut T;
    // SAFETY: distinct borrows cannot overlap; forwarding the caller's
    // no-reuse contract.
    unsafe { move_init_n(src.as_ptr(), n, out) };
    // SAFETY: the first `n` slots are now initialized.
    unsafe { slice::from_raw_parts_mut(out, n) }
}

/// Relocates `n` elements from `src` into `dst` by bit copy.
///
/// # Safety
///
/// `src` must hold `n` initialized elements that the caller treats as
/// uninitialized afterwards, `dst` must be valid and aligned for `n`
/// writes, and the ranges must not overlap.
pub unsafe fn move_init_n<T>(src: *const T, n: usize, dst: *mut T) {
    // SAFETY: Rust moves are bitwise; validity, disjointness, and the
    // transfer of ownership are the caller's contract.
    unsafe { ptr::copy_nonoverlapping(src, dst, n) };
}

/// Takes one element per slot of `dst` out of the cursor, constructing
/// them in place; returns the advanced cursor and the initialized
/// slice.
///
/// If a `take` panics — the source type's business, not this crate's —
/// the destination prefix built so far is destroyed and the panic
/// propagates; source elements already consumed are not restored.
pub fn take_init<'d, S>(
    mut first: S,
    dst: &'d mut [MaybeUninit<S::Item>],
) -> (S, &'d mut [S::Item])
where
    S: TakeCursor,
{
    let n = dst.len();
    let out = dst.as_mut_ptr() as *mut S::Item;
    // SAFETY: `dst` is a live mutable borrow covering `n` slots.
    let mut guard = unsafe { InitGuard::new(out) };
    for i in 0..n {
        let value = first.take();
        // SAFETY: `i < n`.
        unsafe { ptr::write(out.add(i), value) };
        guard.advance();
        first.step();
    }
    guard.disarm();
    // SAFETY: every slot is now initialized.
    (first, unsafe { slice::from_raw_parts_mut(out, n) })
}
