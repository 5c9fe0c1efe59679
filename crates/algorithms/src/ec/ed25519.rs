//! Edwards form of Curve25519

use super::{CurveConfig, CurveType};
use crate::arith::{Chunk, FieldConfig, ModType};
use crate::hash::Sha256;

/// `-x^2 + y^2 = 1 + d x^2 y^2` over `2^255 - 19`
#[derive(Clone, Copy, Debug)]
pub struct Ed25519;

pub(super) const MODULUS_25519: [Chunk; 5] = [
    0xFFFFFFFFFFFFED,
    0xFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFF,
    0x7FFFFFFF,
];
pub(super) const R2MODP_25519: [Chunk; 5] = [0xA4000000000000, 0x5, 0x0, 0x0, 0x0];
pub(super) const ORDER_25519: [Chunk; 5] = [
    0x12631A5CF5D3ED,
    0xF9DEA2F79CD658,
    0x14DE,
    0x0,
    0x10000000,
];

impl FieldConfig<5> for Ed25519 {
    const MODBITS: usize = 255;
    const MODTYPE: ModType = ModType::PseudoMersenne;
    const MODULUS: [Chunk; 5] = MODULUS_25519;
    const R2MODP: [Chunk; 5] = R2MODP_25519;
    const MCONST: Chunk = 19;
}

impl CurveConfig<5> for Ed25519 {
    const CURVETYPE: CurveType = CurveType::Edwards;
    const CURVE_A: isize = -1;
    const CURVE_B: [Chunk; 5] = [
        0xEB4DCA135978A3,
        0xA4D4141D8AB75,
        0x797779E8980070,
        0x2B6FFE738CC740,
        0x52036CEE,
    ];
    const CURVE_ORDER: [Chunk; 5] = ORDER_25519;
    const CURVE_GX: [Chunk; 5] = [
        0x562D608F25D51A,
        0xC7609525A7B2C9,
        0x31FDD6DC5C692C,
        0xCD6E53FEC0A4E2,
        0x216936D3,
    ];
    const CURVE_GY: [Chunk; 5] = [
        0x66666666666658,
        0x66666666666666,
        0x66666666666666,
        0x66666666666666,
        0x66666666,
    ];
    const CURVE_COF: isize = 8;
    const AESKEY: usize = 16;
    const NAME: &'static str = "ED25519";

    type Hash = Sha256;
}
