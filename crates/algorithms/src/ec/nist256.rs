//! NIST P-256

use super::{CurveConfig, CurveType};
use crate::arith::{Chunk, FieldConfig, ModType};
use crate::hash::Sha256;

/// NIST P-256 (secp256r1)
#[derive(Clone, Copy, Debug)]
pub struct Nist256;

impl FieldConfig<5> for Nist256 {
    const MODBITS: usize = 256;
    const MODTYPE: ModType = ModType::NotSpecial;
    const MODULUS: [Chunk; 5] = [0xFFFFFFFFFFFFFF, 0xFFFFFFFFFF, 0x0, 0x1000000, 0xFFFFFFFF];
    const R2MODP: [Chunk; 5] = [
        0x3000000050000,
        0x0,
        0xFFFFFBFFFFFFFA,
        0xFFFAFFFFFFFEFF,
        0x2FFFF,
    ];
    const MCONST: Chunk = 0x1;
}

impl CurveConfig<5> for Nist256 {
    const CURVETYPE: CurveType = CurveType::Weierstrass;
    const CURVE_A: isize = -3;
    const CURVE_B: [Chunk; 5] = [
        0xCE3C3E27D2604B,
        0x6B0CC53B0F63B,
        0x55769886BC651D,
        0xAA3A93E7B3EBBD,
        0x5AC635D8,
    ];
    const CURVE_ORDER: [Chunk; 5] = [
        0xB9CAC2FC632551,
        0xFAADA7179E84F3,
        0xFFFFFFFFFFBCE6,
        0xFFFFFF,
        0xFFFFFFFF,
    ];
    const CURVE_GX: [Chunk; 5] = [
        0xA13945D898C296,
        0x7D812DEB33A0F4,
        0xE563A440F27703,
        0xE12C4247F8BCE6,
        0x6B17D1F2,
    ];
    const CURVE_GY: [Chunk; 5] = [
        0xB6406837BF51F5,
        0x33576B315ECECB,
        0x4A7C0F9E162BCE,
        0xFE1A7F9B8EE7EB,
        0x4FE342E2,
    ];
    const CURVE_COF: isize = 1;
    const AESKEY: usize = 16;
    const NAME: &'static str = "NIST256";

    type Hash = Sha256;
}
