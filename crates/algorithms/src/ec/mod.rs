//! Elliptic curve groups
//!
//! One generic point type, [`Ecp`], covers the three curve shapes in use:
//!
//! - short Weierstrass `y^2 = x^3 - 3x + b` in homogeneous projective
//!   coordinates with complete addition formulas
//! - twisted Edwards `a x^2 + y^2 = 1 + d x^2 y^2` in projective coordinates
//! - Montgomery `y^2 = x^3 + A x^2 + x`, x-only with a ladder
//!
//! A curve is a zero-sized marker type implementing [`CurveConfig`] (and the
//! [`FieldConfig`] of its base field). Scalars are plain [`Big`] integers.

use core::fmt;

use crate::arith::{Big, Chunk, FieldConfig};
use crate::hash::HashFunction;

mod c25519;
mod ed25519;
mod goldilocks;
mod nist256;
mod point;

pub use c25519::C25519;
pub use ed25519::Ed25519;
pub use goldilocks::Goldilocks;
pub use nist256::Nist256;
pub use point::Ecp;

/// Curve equation family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveType {
    Weierstrass,
    Edwards,
    Montgomery,
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CurveType::Weierstrass => "weierstrass",
            CurveType::Edwards => "edwards",
            CurveType::Montgomery => "montgomery",
        };
        f.write_str(s)
    }
}

/// Compile-time description of a curve over the field `Self`
///
/// Weierstrass curves must have `a = -3`. For Edwards curves `CURVE_B`
/// holds `d`; for Montgomery curves it is unused.
pub trait CurveConfig<const N: usize>: FieldConfig<N> {
    const CURVETYPE: CurveType;
    const CURVE_A: isize;
    const CURVE_B: [Chunk; N];
    /// Prime order of the base point
    const CURVE_ORDER: [Chunk; N];
    const CURVE_GX: [Chunk; N];
    /// Unused on Montgomery curves
    const CURVE_GY: [Chunk; N];
    const CURVE_COF: isize;
    /// Symmetric key length for the ECIES and ECDH key derivations
    const AESKEY: usize;
    const NAME: &'static str;

    /// Hash paired with the curve for signatures and key derivation
    type Hash: HashFunction;

    /// Order of the base point as an integer
    fn order() -> Big<N> {
        Big::from_limbs(Self::CURVE_ORDER)
    }
}

pub type Nist256Point = Ecp<5, Nist256>;
pub type Ed25519Point = Ecp<5, Ed25519>;
pub type C25519Point = Ecp<5, C25519>;
pub type GoldilocksPoint = Ecp<9, Goldilocks>;
