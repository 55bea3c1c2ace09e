//! Element transfer classes.
//!
//! The bulk algorithms have raw-memory fast tiers that substitute a
//! block operation for per-element logic. Whether that substitution is
//! observable depends on the element type, and only the type's author
//! knows; [`Transfer`] is where they say so. Every flag defaults to
//! the conservative answer, so a type that declares nothing opts into
//! nothing:
//!
//! ```
//! # use rove_core::Transfer;
//! struct Tagged(String);
//! // Element-wise everywhere; one line, no flags.
//! unsafe impl Transfer for Tagged {}
//! ```

/// Declares which raw-memory substitutions are sound for a type.
///
/// # Safety
///
/// Each flag set to `true` is a promise the algorithm crates turn into
/// unchecked memory operations:
///
/// - `BITWISE`: duplicating the raw bytes of a value is
///   indistinguishable from `Clone`-then-assign, and discarding the
///   original bytes after duplication leaks nothing. In practice this
///   means the type is `Copy`-like with no ownership or invariant
///   bookkeeping.
/// - `BYTE_SET`: the type is one byte in size and filling a range with
///   a repeated byte of a value's representation equals assigning that
///   value element-wise. `bool` deliberately never sets this — its
///   in-memory representation is not something this crate speculates
///   about.
/// - `BYTE_ORDER`: the type is one byte in size and its `Ord` agrees
///   with unsigned byte-wise comparison. Among the primitives that is
///   `u8` alone (`i8` orders sign-first, not byte-first).
///
/// A wrong `true` is undefined behavior; leaving everything at the
/// default is always sound.
pub unsafe trait Transfer {
    /// Raw bit duplication may replace clone-assignment.
    const BITWISE: bool = false;
    /// `fill` may be a repeated single-byte memory set.
    const BYTE_SET: bool = false;
    /// Lexicographic comparison may be raw unsigned byte comparison.
    const BYTE_ORDER: bool = false;
}

macro_rules! bitwise_transfer {
    ($($t:ty),* $(,)?) => {
        $(
            // SAFETY: plain scalar, `Copy`, no ownership semantics.
            unsafe impl Transfer for $t {
                const BITWISE: bool = true;
            }
        )*
    };
}

bitwise_transfer!(
    u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, f32, f64, char, bool, ()
);

// SAFETY: one-byte unsigned scalar; `Ord` is exactly byte order.
unsafe impl Transfer for u8 {
    const BITWISE: bool = true;
    const BYTE_SET: bool = true;
    const BYTE_ORDER: bool = true;
}

// SAFETY: one-byte scalar; byte-set fills are representation-faithful,
// but signed ordering disagrees with byte ordering, so no BYTE_ORDER.
unsafe impl Transfer for i8 {
    const BITWISE: bool = true;
    const BYTE_SET: bool = true;
}

// SAFETY: copying a shared reference duplicates the borrow, which is
// exactly what `Clone` does for `&T`.
unsafe impl<T: ?Sized> Transfer for &T {
    const BITWISE: bool = true;
}

// SAFETY: an array is bitwise-transferable exactly when its element
// is; no extra state lives between the elements.
unsafe impl<T: Transfer, const N: usize> Transfer for [T; N] {
    const BITWISE: bool = T::BITWISE;
}

// Conservative declarations for common owning std types, so they can
// flow through the bounded algorithms on the element-wise tiers.

// SAFETY: all flags stay false.
unsafe impl Transfer for String {}
// SAFETY: all flags stay false.
unsafe impl<T> Transfer for Vec<T> {}
// SAFETY: all flags stay false.
unsafe impl<T: ?Sized> Transfer for Box<T> {}
// SAFETY: all flags stay false. `Option<T>` of a bitwise `T` may well
// be bitwise too, but `Transfer` does not imply `Copy`, so the
// conservative answer stands.
unsafe impl<T> Transfer for Option<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_bitwise() {
        assert!(u8::BITWISE);
        assert!(u64::BITWISE);
        assert!(i32::BITWISE);
        assert!(f64::BITWISE);
        assert!(<[u32; 4]>::BITWISE);
    }

    #[test]
    fn byte_set_is_u8_and_i8_only() {
        assert!(u8::BYTE_SET);
        assert!(i8::BYTE_SET);
        assert!(!bool::BYTE_SET);
        assert!(!u16::BYTE_SET);
        assert!(!char::BYTE_SET);
    }

    #[test]
    fn byte_order_is_u8_only() {
        assert!(u8::BYTE_ORDER);
        assert!(!i8::BYTE_ORDER);
        assert!(!bool::BYTE_ORDER);
    }

    #[test]
    fn owning_types_stay_elementwise() {
        assert!(!String::BITWISE);
        assert!(!Vec::<u8>::BITWISE);
        assert!(!Option::<u8>::BITWISE);
        assert!(!<[String; 2]>::BITWISE);
    }
}
