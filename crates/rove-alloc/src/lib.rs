//! Single-type raw-memory acquire and release.
//!
//! [`TypedAlloc`] turns the global allocator into a per-type service:
//! it sizes and aligns requests from the element type and hands back
//! `NonNull<T>` blocks that carry no initialization. [`Buffer`] is the
//! owning convenience over it — one allocation of `n` raw slots with a
//! tracked initialized prefix, torn down and released on drop.
//!
//! Nothing here constructs elements; that is `rove-uninit`'s job, and
//! [`Buffer`] drives its guarded bulk routines for its extend
//! operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

mod buffer;
mod error;
mod typed;

pub use buffer::Buffer;
pub use error::AllocError;
pub use typed::TypedAlloc;
