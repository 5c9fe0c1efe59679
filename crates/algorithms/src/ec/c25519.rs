//! Montgomery form of Curve25519

use super::ed25519::{MODULUS_25519, ORDER_25519, R2MODP_25519};
use super::{CurveConfig, CurveType};
use crate::arith::{Chunk, FieldConfig, ModType};
use crate::hash::Sha256;

/// `y^2 = x^3 + 486662 x^2 + x` over `2^255 - 19`
#[derive(Clone, Copy, Debug)]
pub struct C25519;

impl FieldConfig<5> for C25519 {
    const MODBITS: usize = 255;
    const MODTYPE: ModType = ModType::PseudoMersenne;
    const MODULUS: [Chunk; 5] = MODULUS_25519;
    const R2MODP: [Chunk; 5] = R2MODP_25519;
    const MCONST: Chunk = 19;
}

impl CurveConfig<5> for C25519 {
    const CURVETYPE: CurveType = CurveType::Montgomery;
    const CURVE_A: isize = 486662;
    const CURVE_B: [Chunk; 5] = [0; 5];
    const CURVE_ORDER: [Chunk; 5] = ORDER_25519;
    const CURVE_GX: [Chunk; 5] = [0x9, 0x0, 0x0, 0x0, 0x0];
    const CURVE_GY: [Chunk; 5] = [0; 5];
    const CURVE_COF: isize = 8;
    const AESKEY: usize = 16;
    const NAME: &'static str = "C25519";

    type Hash = Sha256;
}
