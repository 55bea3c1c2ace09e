//! Benchmark fixtures for the Rove cursor and raw-memory library.
//!
//! Provides deterministic sequence builders shared by the bench
//! targets: a plain-data range that takes the raw-block tiers and a
//! clone-counting range that forces the element-wise tiers.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Element count used by the reference transfer benchmarks.
pub const REFERENCE_LEN: usize = 64 * 1024;

/// A deterministic `u32` ramp of `n` elements.
pub fn ramp_u32(n: usize) -> Vec<u32> {
    (0..n).map(|i| i as u32).collect()
}

/// A deterministic byte pattern of `n` elements, period 251.
pub fn pattern_u8(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 251) as u8).collect()
}

/// Short heap-owning strings, so every transfer goes element by
/// element.
pub fn strings(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i:06}")).collect()
}
