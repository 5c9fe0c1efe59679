//! Constant-time operations to prevent timing attacks
//!
//! Byte-level helpers sit on top of `subtle`. The word-level masks are used
//! by the digit arithmetic, where a selection mask of all ones or all zeros
//! is applied with `&` rather than a branch.

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal. Slices of different length compare
/// unequal; the length itself is not treated as secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a `Choice`
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// All-ones word mask (`-1`) if `a == b`, zero otherwise
#[inline(always)]
pub fn word_eq_mask(a: i64, b: i64) -> i64 {
    let x = a ^ b;
    !((x | x.wrapping_neg()) >> 63)
}

/// Word mask from a single bit: `-1` for 1, `0` for 0
#[inline(always)]
pub fn word_bit_mask(bit: i64) -> i64 {
    (bit & 1).wrapping_neg()
}
