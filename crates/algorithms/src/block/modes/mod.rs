//! Chaining modes over AES
//!
//! [`Aes`] is a resettable context that processes one 16-byte block per
//! call and carries the chaining register between calls, so long messages
//! can be streamed block by block.

use params::utils::symmetric::AES_BLOCK_SIZE;
use subtle::{ConstantTimeEq, ConstantTimeLess};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::aes::AesCipher;
use super::BlockCipher;
use crate::error::{validate, Error, Result};

/// Chaining mode of an [`Aes`] context
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub enum Mode {
    Ecb,
    Cbc,
    /// Counter mode with a 128-bit big-endian counter
    Ctr,
}

/// AES context with a chaining register
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    cipher: AesCipher,
    mode: Mode,
    f: [u8; AES_BLOCK_SIZE],
}

impl Aes {
    /// Expand `key` and load `iv` (zero if absent) into the register
    pub fn init(mode: Mode, key: &[u8], iv: Option<&[u8; AES_BLOCK_SIZE]>) -> Result<Self> {
        let mut a = Self {
            cipher: AesCipher::new(key)?,
            mode,
            f: [0; AES_BLOCK_SIZE],
        };
        a.reset(mode, iv);
        Ok(a)
    }

    /// Change mode and reload the register, keeping the key
    pub fn reset(&mut self, mode: Mode, iv: Option<&[u8; AES_BLOCK_SIZE]>) {
        self.mode = mode;
        self.f = iv.copied().unwrap_or([0; AES_BLOCK_SIZE]);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current chaining register
    pub fn getreg(&self) -> [u8; AES_BLOCK_SIZE] {
        self.f
    }

    fn increment(&mut self) {
        for b in self.f.iter_mut().rev() {
            *b = b.wrapping_add(1);
            if *b != 0 {
                break;
            }
        }
    }

    /// Encrypt one block in place
    pub fn encrypt(&mut self, buff: &mut [u8; AES_BLOCK_SIZE]) {
        match self.mode {
            Mode::Ecb => self.cipher.encrypt_block(buff),
            Mode::Cbc => {
                for (b, f) in buff.iter_mut().zip(self.f) {
                    *b ^= f;
                }
                self.cipher.encrypt_block(buff);
                self.f = *buff;
            }
            Mode::Ctr => {
                let mut st = self.f;
                self.cipher.encrypt_block(&mut st);
                for (b, s) in buff.iter_mut().zip(st) {
                    *b ^= s;
                }
                st.zeroize();
                self.increment();
            }
        }
    }

    /// Decrypt one block in place
    pub fn decrypt(&mut self, buff: &mut [u8; AES_BLOCK_SIZE]) {
        match self.mode {
            Mode::Ecb => self.cipher.decrypt_block(buff),
            Mode::Cbc => {
                let st = *buff;
                self.cipher.decrypt_block(buff);
                for (b, f) in buff.iter_mut().zip(self.f) {
                    *b ^= f;
                }
                self.f = st;
            }
            Mode::Ctr => self.encrypt(buff),
        }
    }

    /// Wipe the key schedule and register
    pub fn end(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for Aes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes({}, {:?})", self.cipher.name(), self.mode)
    }
}

/// Ciphertext length for a `plen`-byte message under PKCS#7 padding
pub fn cbc_iv0_len(plen: usize) -> usize {
    (plen / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE
}

/// AES-CBC with a zero IV and PKCS#7 padding
///
/// Writes [`cbc_iv0_len`]`(m.len())` bytes into `c` and returns that length.
pub fn cbc_iv0_encrypt(key: &[u8], m: &[u8], c: &mut [u8]) -> Result<usize> {
    let clen = cbc_iv0_len(m.len());
    validate::min_length("CBC-IV0 output", c.len(), clen)?;
    let mut a = Aes::init(Mode::Cbc, key, None)?;

    let pad = (clen - m.len()) as u8;
    let mut buff = [0u8; AES_BLOCK_SIZE];
    for (i, out) in c[..clen].chunks_exact_mut(AES_BLOCK_SIZE).enumerate() {
        let start = i * AES_BLOCK_SIZE;
        for (j, b) in buff.iter_mut().enumerate() {
            *b = m.get(start + j).copied().unwrap_or(pad);
        }
        a.encrypt(&mut buff);
        out.copy_from_slice(&buff);
    }
    a.end();
    buff.zeroize();
    Ok(clen)
}

/// Inverse of [`cbc_iv0_encrypt`]; returns the plaintext length written to `m`
///
/// A ciphertext that is empty, not block-aligned, or badly padded is a
/// decryption error. The padding bytes are checked in constant time.
pub fn cbc_iv0_decrypt(key: &[u8], c: &[u8], m: &mut [u8]) -> Result<usize> {
    if c.is_empty() {
        return Err(Error::Processing {
            operation: "CBC-IV0",
            details: "empty ciphertext",
        });
    }
    validate::block_multiple("CBC-IV0 ciphertext", c.len(), AES_BLOCK_SIZE)?;
    validate::min_length("CBC-IV0 output", m.len(), c.len())?;
    let mut a = Aes::init(Mode::Cbc, key, None)?;

    let mut buff = [0u8; AES_BLOCK_SIZE];
    for (inp, out) in c
        .chunks_exact(AES_BLOCK_SIZE)
        .zip(m.chunks_exact_mut(AES_BLOCK_SIZE))
    {
        buff.copy_from_slice(inp);
        a.decrypt(&mut buff);
        out.copy_from_slice(&buff);
    }
    a.end();

    // buff holds the last block
    let pad = buff[AES_BLOCK_SIZE - 1];
    let mut ok = !pad.ct_eq(&0) & !(AES_BLOCK_SIZE as u8).ct_lt(&pad);
    for (i, b) in buff.iter().enumerate() {
        // bytes at index >= 16 - pad must equal pad
        let in_pad = !((i as u8).ct_lt(&(AES_BLOCK_SIZE as u8).wrapping_sub(pad)));
        let good = b.ct_eq(&pad) | !in_pad;
        ok &= good;
    }
    buff.zeroize();
    if !bool::from(ok) {
        m[..c.len()].zeroize();
        return Err(Error::Processing {
            operation: "CBC-IV0",
            details: "invalid padding",
        });
    }
    Ok(c.len() - pad as usize)
}
