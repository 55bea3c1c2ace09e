//! Single-value placement and teardown.

use std::mem::{self, MaybeUninit};
use std::ptr;

/// Writes `value` into `slot` and returns a reference to the now
/// initialized contents.
///
/// Any value previously written to `slot` is overwritten without being
/// dropped; `MaybeUninit` never runs drop glue on its contents.
pub fn construct<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Writes the value produced by `make` into `slot`.
///
/// The producer runs before any write happens, so a panic inside it
/// leaves `slot` untouched.
pub fn construct_with<T>(slot: &mut MaybeUninit<T>, make: impl FnOnce() -> T) -> &mut T {
    slot.write(make())
}

/// Writes `T::default()` into `slot`.
pub fn construct_default<T: Default>(slot: &mut MaybeUninit<T>) -> &mut T {
    slot.write(T::default())
}

/// Writes `value` to the memory `dst` points at.
///
/// # Safety
///
/// `dst` must be valid for writes and properly aligned for `T`. The
/// previous contents, if any, are not dropped.
pub unsafe fn construct_at<T>(dst: *mut T, value: T) {
    // SAFETY: validity and alignment are the caller's contract.
    unsafe { ptr::write(dst, value) };
}

/// Tears down the value in `slot`, returning the slot to the raw state.
///
/// For types without drop glue this is a no-op.
///
/// # Safety
///
/// `slot` must actually hold an initialized value.
pub unsafe fn destroy<T>(slot: &mut MaybeUninit<T>) {
    if mem::needs_drop::<T>() {
        // SAFETY: initialization is the caller's contract; after the
        // drop the slot is raw again, which is exactly what
        // MaybeUninit represents.
        unsafe { slot.assume_init_drop() };
    }
}

/// Drops the value `dst` points at, if `T` has drop glue.
///
/// # Safety
///
/// `dst` must point at a properly aligned, initialized `T` that is not
/// referenced elsewhere. After the call the memory is uninitialized.
pub unsafe fn destroy_at<T>(dst: *mut T) {
    if mem::needs_drop::<T>() {
        // SAFETY: per the caller's contract.
        unsafe { ptr::drop_in_place(dst) };
    }
}

/// Drops the `n` values starting at `first`, leaving the range raw.
///
/// The drop-glue check happens once for the entire range, not once per
/// element, so a range of plain-data values costs nothing to tear
/// down.
///
/// # Safety
///
/// `first` must point at `n` contiguous, initialized, properly aligned
/// values of `T` that nothing else references.
pub unsafe fn destroy_range<T>(first: *mut T, n: usize) {
    if mem::needs_drop::<T>() && n > 0 {
        // SAFETY: per the caller's contract.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, n)) };
    }
}

/// Drops every value in `slots`, leaving the whole slice raw.
///
/// # Safety
///
/// Every slot in the slice must hold an initialized value.
pub unsafe fn destroy_slice<T>(slots: &mut [MaybeUninit<T>]) {
    // SAFETY: forwarding the caller's contract; a slice of
    // MaybeUninit<T> has the same layout as a slice of T.
    unsafe { destroy_range(slots.as_mut_ptr() as *mut T, slots.len()) };
}
