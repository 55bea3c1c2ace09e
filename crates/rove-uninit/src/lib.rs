//! In-place construction over uninitialized storage, with rollback.
//!
//! Containers that separate capacity from length need to build values in
//! raw memory, and they need the build to be exception safe: if the
//! seventeenth clone panics, the sixteen values already written must be
//! torn down before the panic propagates, because the caller only ever
//! sees storage that is either fully initialized or fully raw.
//!
//! This crate provides that discipline in three layers:
//!
//! - [`construct`]/[`destroy`] place and tear down single values,
//!   skipping teardown entirely for types without drop glue.
//! - [`InitGuard`] tracks a growing initialized prefix and, on unwind,
//!   drops exactly that prefix in place.
//! - The bulk routines ([`copy_init`], [`fill_init`], [`move_init`],
//!   [`take_init`] and their counted variants) drive a guard across a
//!   destination range, upgrading clone-based paths to a raw byte copy
//!   when the element type and both cursors permit it.
//!
//! Relocation by [`move_init`] is a bitwise transfer and cannot fail
//! partway, so it never needs a guard; the clone- and take-based paths
//! are the ones that carry rollback.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

mod bulk;
mod construct;
mod guard;

pub use bulk::{
    copy_init, copy_init_n, fill_init, fill_init_n, move_init, move_init_n, take_init,
};
pub use construct::{
    construct, construct_at, construct_default, construct_with, destroy, destroy_at, destroy_range,
    destroy_slice,
};
pub use guard::InitGuard;
