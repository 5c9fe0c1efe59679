//! AES block cipher (FIPS 197)
//!
//! The S-box is computed arithmetically (inversion in GF(2^8) followed by
//! the affine map) instead of being looked up, so no memory access depends
//! on key or data bytes. One key schedule type serves all three key sizes;
//! the round count follows from the key length.

#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use common::security::SecretBuffer;
use params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockCipher;
use crate::error::{Error, Result};

/// Round constants for the key schedule
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Round keys for the largest schedule, 15 x 16 bytes
const MAX_SCHEDULE: usize = 240;

/// Multiply in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a >> 7;
        a <<= 1;
        a ^= hi.wrapping_neg() & 0x1B;
        b >>= 1;
    }
    p
}

/// `x^254`, the inverse of `x` (zero maps to zero)
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    gf_inv(y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6))
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

#[inline(always)]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ ((byte >> 7).wrapping_neg() & 0x1B)
}

fn sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = sbox(*b);
    }
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for b in state.iter_mut() {
        *b = inv_sbox(*b);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Row `r` moves left by `r` columns; the state is column-major
fn shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = t[4 * ((c + r) % 4) + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let t = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * ((c + r) % 4) + r] = t[4 * c + r];
        }
    }
}

fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = xtime(s0) ^ xtime(s1) ^ s1 ^ s2 ^ s3;
        col[1] = s0 ^ xtime(s1) ^ xtime(s2) ^ s2 ^ s3;
        col[2] = s0 ^ s1 ^ xtime(s2) ^ xtime(s3) ^ s3;
        col[3] = xtime(s0) ^ s0 ^ s1 ^ s2 ^ xtime(s3);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
        col[0] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
        col[1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
        col[2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
        col[3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
    }
}

fn add_round_key(state: &mut [u8; 16], rk: &[u8]) {
    for (s, k) in state.iter_mut().zip(rk) {
        *s ^= *k;
    }
}

/// Expanded AES key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesCipher {
    round_keys: SecretBuffer<MAX_SCHEDULE>,
    rounds: usize,
}

impl AesCipher {
    /// Number of rounds: 10, 12 or 14
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Key length in bytes
    pub fn key_len(&self) -> usize {
        4 * (self.rounds - 6)
    }

    fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys.as_ref()[16 * round..16 * round + 16]
    }
}

impl BlockCipher for AesCipher {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn new(key: &[u8]) -> Result<Self> {
        let nk = match key.len() {
            AES128_KEY_SIZE | AES192_KEY_SIZE | AES256_KEY_SIZE => key.len() / 4,
            n => {
                return Err(Error::Length {
                    context: "AES key",
                    expected: AES128_KEY_SIZE,
                    actual: n,
                })
            }
        };
        let rounds = nk + 6;
        let words = 4 * (rounds + 1);

        let mut w = [0u32; MAX_SCHEDULE / 4];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            w[i] = internal::endian::u32_from_be_bytes(chunk);
        }
        for i in nk..words {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }

        let mut round_keys = SecretBuffer::<MAX_SCHEDULE>::zeroed();
        for (dst, word) in round_keys
            .as_mut_slice()
            .chunks_exact_mut(4)
            .zip(w.iter().take(words))
        {
            dst.copy_from_slice(&word.to_be_bytes());
        }
        w.zeroize();

        Ok(Self { round_keys, rounds })
    }

    fn encrypt_block(&self, block: &mut [u8; 16]) {
        let nr = self.rounds;
        add_round_key(block, self.round_key(0));
        for round in 1..nr {
            sub_bytes(block);
            shift_rows(block);
            mix_columns(block);
            add_round_key(block, self.round_key(round));
        }
        sub_bytes(block);
        shift_rows(block);
        add_round_key(block, self.round_key(nr));
    }

    fn decrypt_block(&self, block: &mut [u8; 16]) {
        let nr = self.rounds;
        add_round_key(block, self.round_key(nr));
        for round in (1..nr).rev() {
            inv_shift_rows(block);
            inv_sub_bytes(block);
            add_round_key(block, self.round_key(round));
            inv_mix_columns(block);
        }
        inv_shift_rows(block);
        inv_sub_bytes(block);
        add_round_key(block, self.round_key(0));
    }

    fn name(&self) -> &'static str {
        match self.rounds {
            10 => "AES-128",
            12 => "AES-192",
            _ => "AES-256",
        }
    }
}

impl core::fmt::Debug for AesCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AesCipher({})", self.name())
    }
}

#[cfg(test)]
mod tests;
