//! SHA-1 (FIPS 180-4)
//!
//! Only kept for PKCS#1 v1.5 DigestInfo, OAEP with SHA-1 and the PBKDF2
//! reference vectors. Not collision resistant.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use common::EphemeralSecret;
use params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};

use super::HashFunction;
use crate::error::Result;
use crate::types::Digest;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

/// SHA-1 state
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: [u8; SHA1_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sha1 {
    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut w = EphemeralSecret::new([0u32; 80]);
        for i in 0..16 {
            w[i] = BigEndian::read_u32(&block[4 * i..]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;
        for (i, wi) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), K[0]),
                1 => (b ^ c ^ d, K[1]),
                2 => ((b & c) | (b & d) | (c & d), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
    }

    fn reset(&mut self) {
        self.zeroize();
        self.state = H0;
    }
}

impl HashFunction for Sha1 {
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;

    fn new() -> Self {
        Sha1 {
            state: H0,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn update(&mut self, mut input: &[u8]) -> Result<&mut Self> {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA1_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            self.total_bytes = self.total_bytes.wrapping_add(fill as u64);
            input = &input[fill..];
            if self.buffer_idx == SHA1_BLOCK_SIZE {
                Self::compress(&mut self.state, &self.buffer);
                self.buffer_idx = 0;
            }
        }
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let bit_len = self.total_bytes.wrapping_mul(8);
        self.buffer[self.buffer_idx] = 0x80;
        self.buffer[self.buffer_idx + 1..].fill(0);
        if self.buffer_idx >= SHA1_BLOCK_SIZE - 8 {
            Self::compress(&mut self.state, &self.buffer);
            self.buffer.fill(0);
        }
        BigEndian::write_u64(&mut self.buffer[SHA1_BLOCK_SIZE - 8..], bit_len);
        Self::compress(&mut self.state, &self.buffer);

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        self.reset();
        Ok(Digest::new(out))
    }

    fn name() -> &'static str {
        "SHA-1"
    }
}
