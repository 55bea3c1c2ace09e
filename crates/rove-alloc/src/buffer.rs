//! An owned block of raw slots with a tracked initialized prefix.

use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;
use std::slice;

use rove_core::Transfer;
use rove_uninit::{copy_init, destroy_range, fill_init};

use crate::error::AllocError;
use crate::typed::TypedAlloc;

/// A fixed-capacity allocation of `T` slots, initialized from the
/// front.
///
/// The buffer owns its memory and its invariant: slots `0..len` hold
/// live values, slots `len..capacity` are raw. Every operation either
/// preserves that split or moves it, and `Drop` destroys exactly the
/// live prefix before releasing the block. Capacity never grows; this
/// is a construction site, not a container.
pub struct Buffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: TypedAlloc<T>,
}

impl<T> Buffer<T> {
    /// Acquires a buffer of `capacity` raw slots.
    ///
    /// Zero-sized storage (zero capacity, or a zero-sized element
    /// type) needs no allocation and always succeeds.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        let alloc = TypedAlloc::new();
        let ptr = if mem::size_of::<T>() == 0 || capacity == 0 {
            NonNull::dangling()
        } else {
            alloc.allocate(capacity)?
        };
        Ok(Self {
            ptr,
            capacity,
            len: 0,
            alloc,
        })
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of leading slots holding live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slot is initialized.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw tail: slots `len..capacity`, ready for construction.
    pub fn spare(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: the tail lies inside the owned allocation; raw slots
        // are exactly what MaybeUninit exposes.
        unsafe {
            slice::from_raw_parts_mut(
                self.ptr.as_ptr().add(self.len) as *mut MaybeUninit<T>,
                self.capacity - self.len,
            )
        }
    }

    /// Declares `additional` more leading spare slots initialized.
    ///
    /// # Safety
    ///
    /// The caller must have constructed values in the first
    /// `additional` slots of [`spare`](Self::spare), and
    /// `len + additional` must not exceed the capacity.
    pub unsafe fn assume_init(&mut self, additional: usize) {
        debug_assert!(self.len + additional <= self.capacity);
        self.len += additional;
    }

    /// Clone-constructs `src` onto the end of the live prefix.
    ///
    /// Panics if the spare tail is shorter than `src`. A clone panic
    /// rolls the tail back to raw; the prefix already live is
    /// untouched.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone + Transfer,
    {
        let n = src.len();
        copy_init(src, self.spare());
        // SAFETY: copy_init returned, so `n` tail slots are live.
        unsafe { self.assume_init(n) };
    }

    /// Clone-constructs `n` copies of `value` onto the end of the live
    /// prefix.
    ///
    /// Panics if fewer than `n` spare slots remain.
    pub fn extend_fill(&mut self, n: usize, value: &T)
    where
        T: Clone + Transfer,
    {
        let spare = self.spare();
        assert!(
            spare.len() >= n,
            "spare tail shorter than fill count ({} < {n})",
            spare.len()
        );
        fill_init(&mut spare[..n], value);
        // SAFETY: fill_init returned, so `n` tail slots are live.
        unsafe { self.assume_init(n) };
    }

    /// Moves one value onto the end of the live prefix.
    ///
    /// Panics if the buffer is full.
    pub fn push(&mut self, value: T) {
        assert!(self.len < self.capacity, "buffer is full");
        // SAFETY: slot `len` lies inside the allocation and is raw.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// The live prefix.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots 0..len are live by the buffer invariant.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The live prefix, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, and we hold the unique borrow.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Destroys the live prefix, returning every slot to raw.
    pub fn clear(&mut self) {
        let live = self.len;
        // The invariant is restored before any drop glue runs, so a
        // panicking element drop cannot double-destroy on unwind.
        self.len = 0;
        // SAFETY: the first `live` slots held values nothing else owns.
        unsafe { destroy_range(self.ptr.as_ptr(), live) };
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        self.clear();
        if mem::size_of::<T>() != 0 && self.capacity != 0 {
            // SAFETY: the block came from this allocator with this
            // capacity and now holds no live values.
            unsafe { self.alloc.deallocate(self.ptr, self.capacity) };
        }
    }
}

impl<T> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .finish()
    }
}
