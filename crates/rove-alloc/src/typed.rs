//! The per-type allocator front end.

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::AllocError;

/// Acquires and releases blocks of raw `T` storage from the global
/// allocator.
///
/// The allocator is stateless; it exists to fix the element type so
/// every request is sized and aligned correctly, and to report
/// failures as values instead of aborting. Returned blocks are
/// uninitialized — construction is the caller's (or `rove-uninit`'s)
/// business, and every `deallocate` must match an earlier `allocate`
/// with the same count.
pub struct TypedAlloc<T> {
    _marker: PhantomData<T>,
}

impl<T> TypedAlloc<T> {
    /// A new allocator handle.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Acquires raw storage for `n` elements.
    ///
    /// Zero-sized requests (`n == 0`, or any count of a zero-sized
    /// element type) are refused with [`AllocError::ZeroSized`]: they
    /// describe no memory, and the global allocator's contract forbids
    /// passing it a zero-size layout.
    pub fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Layout::array::<T>(n).map_err(|_| AllocError::LayoutOverflow { count: n })?;
        if layout.size() == 0 {
            return Err(AllocError::ZeroSized);
        }
        // SAFETY: the layout has nonzero size, checked above.
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr as *mut T).ok_or(AllocError::Exhausted {
            bytes: layout.size(),
        })
    }

    /// Releases a block previously acquired for `n` elements.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`allocate`](Self::allocate) on this
    /// element type with the same `n`, must not have been released
    /// already, and the block must hold no live values the caller
    /// still owns.
    pub unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        let layout = match Layout::array::<T>(n) {
            Ok(layout) => layout,
            // The block came from an allocate(n) that succeeded.
            Err(_) => unreachable!("deallocate count never matched an allocation"),
        };
        // SAFETY: same pointer, same layout as the acquisition.
        unsafe { alloc::dealloc(ptr.as_ptr() as *mut u8, layout) };
    }

    /// Acquires storage for a single element.
    pub fn allocate_one(&self) -> Result<NonNull<T>, AllocError> {
        self.allocate(1)
    }

    /// Releases a single-element block.
    ///
    /// # Safety
    ///
    /// As for [`deallocate`](Self::deallocate) with `n == 1`.
    pub unsafe fn deallocate_one(&self, ptr: NonNull<T>) {
        // SAFETY: forwarded contract.
        unsafe { self.deallocate(ptr, 1) };
    }

    /// Size of one element in bytes.
    pub const fn element_size(&self) -> usize {
        mem::size_of::<T>()
    }
}

impl<T> Default for TypedAlloc<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedAlloc<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TypedAlloc<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedAlloc")
            .field("element_size", &self.element_size())
            .finish()
    }
}
