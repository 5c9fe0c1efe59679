//! Ed448-Goldilocks

use super::{CurveConfig, CurveType};
use crate::arith::{Chunk, FieldConfig, ModType};
use crate::hash::Sha512;

/// `x^2 + y^2 = 1 - 39081 x^2 y^2` over `2^448 - 2^224 - 1`
#[derive(Clone, Copy, Debug)]
pub struct Goldilocks;

impl FieldConfig<9> for Goldilocks {
    const MODBITS: usize = 448;
    const MODTYPE: ModType = ModType::GeneralisedMersenne;
    const MODULUS: [Chunk; 9] = [
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0x0,
    ];
    const R2MODP: [Chunk; 9] = [0x0, 0x0, 0x2, 0x0, 0x0, 0x0, 0x3, 0x0, 0x0];
    const MCONST: Chunk = 0x1;
}

impl CurveConfig<9> for Goldilocks {
    const CURVETYPE: CurveType = CurveType::Edwards;
    const CURVE_A: isize = 1;
    const CURVE_B: [Chunk; 9] = [
        0xFFFFFFFFFF6756,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0x0,
    ];
    const CURVE_ORDER: [Chunk; 9] = [
        0x78C292AB5844F3,
        0xC2728DC58F5523,
        0x49AED63690216C,
        0x7CCA23E9C44EDB,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0x3FFFFFFFFFFFFF,
        0x0,
    ];
    const CURVE_GX: [Chunk; 9] = [
        0x26A82BC70CC05E,
        0x80E18B00938E26,
        0xF72AB66511433B,
        0xA3D3A46412AE1A,
        0xF1767EA6DE324,
        0x36DA9E14657047,
        0xED221D15A622BF,
        0x4F1970C66BED0D,
        0x0,
    ];
    const CURVE_GY: [Chunk; 9] = [
        0x8795BF230FA14,
        0x132C4ED7C8AD98,
        0x1CE67C39C4FDBD,
        0x5A0C2D73AD3FF,
        0xA3984087789C1E,
        0xC7624BEA73736C,
        0x248876203756C9,
        0x693F46716EB6BC,
        0x0,
    ];
    const CURVE_COF: isize = 4;
    const AESKEY: usize = 32;
    const NAME: &'static str = "GOLDILOCKS";

    type Hash = Sha512;
}
