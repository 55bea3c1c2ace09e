//! Rollback for partially built ranges.

use std::mem;
use std::ptr;

/// Tracks the initialized prefix of a destination range and tears it
/// down on unwind.
///
/// A bulk construction loop advances the guard after each successful
/// placement. If a later clone or producer panics, the guard's `Drop`
/// runs during unwinding and drops exactly the prefix built so far, in
/// place. Once the whole range is built the loop calls [`disarm`] and
/// ownership of the values passes to the caller.
///
/// [`disarm`]: InitGuard::disarm
pub struct InitGuard<T> {
    first: *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    /// Starts guarding the range beginning at `first`, with nothing
    /// initialized yet.
    ///
    /// # Safety
    ///
    /// `first` must point at writable storage for `T` that stays valid
    /// for as long as the guard lives, and every slot the guard is
    /// advanced over must actually have been initialized.
    pub unsafe fn new(first: *mut T) -> Self {
        Self {
            first,
            initialized: 0,
        }
    }

    /// Records one more initialized slot.
    pub fn advance(&mut self) {
        self.initialized += 1;
    }

    /// Number of slots built so far.
    pub fn initialized(&self) -> usize {
        self.initialized
    }

    /// Hands the built prefix to the caller; the guard no longer drops
    /// anything.
    pub fn disarm(self) {
        mem::forget(self);
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() && self.initialized > 0 {
            // SAFETY: `new`'s contract says the first `initialized`
            // slots hold live values that nothing else owns.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.first, self.initialized));
            }
        }
    }
}
