//! GHASH universal hash over GF(2^128)
//!
//! Blocks are `u128` values in GCM's big-endian, bit-reflected order. The
//! key `H` is expanded into the 128 values `H * x^i`; a multiplication
//! then XORs in one table entry per bit of the operand under a mask, so the
//! running time and access pattern do not depend on data or key.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Reduction constant for x^128 + x^7 + x^2 + x + 1
const R: u128 = 0xE1 << 120;

/// GHASH accumulator keyed by `H`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    table: [u128; 128],
    acc: u128,
}

impl GHash {
    pub fn new(h: &[u8; 16]) -> Self {
        let mut table = [0u128; 128];
        let mut v = u128::from_be_bytes(*h);
        for t in table.iter_mut() {
            *t = v;
            let lsb = (v & 1).wrapping_neg();
            v = (v >> 1) ^ (R & lsb);
        }
        Self { table, acc: 0 }
    }

    /// `x * H` in constant time
    pub fn mul_h(&self, x: u128) -> u128 {
        let mut z = 0u128;
        for (i, t) in self.table.iter().enumerate() {
            let bit = (x >> (127 - i)) & 1;
            z ^= t & bit.wrapping_neg();
        }
        z
    }

    /// Absorb one block; a short block is zero-padded
    pub fn update_block(&mut self, block: &[u8]) {
        let mut b = [0u8; 16];
        b[..block.len()].copy_from_slice(block);
        self.acc = self.mul_h(self.acc ^ u128::from_be_bytes(b));
    }

    /// Absorb `data` as a sequence of zero-padded blocks
    pub fn update_padded(&mut self, data: &[u8]) {
        for chunk in data.chunks(16) {
            self.update_block(chunk);
        }
    }

    pub fn value(&self) -> [u8; 16] {
        self.acc.to_be_bytes()
    }

    pub fn reset(&mut self) {
        self.acc = 0;
    }
}
