//! Block ciphers and their chaining modes
//!
//! [`aes::AesCipher`] is the raw AES permutation for 128, 192 and 256-bit
//! keys. [`modes::Aes`] wraps it in a resettable ECB/CBC/CTR context, and
//! [`modes::cbc_iv0_encrypt`] / [`modes::cbc_iv0_decrypt`] give the padded
//! zero-IV CBC used by ECIES.

use crate::error::Result;

pub mod aes;
pub mod modes;

pub use aes::AesCipher;
pub use modes::{cbc_iv0_decrypt, cbc_iv0_encrypt, cbc_iv0_len, Aes, Mode};

/// A keyed block permutation
pub trait BlockCipher: Sized {
    const BLOCK_SIZE: usize;

    /// Expand `key`; fails on an unsupported key length
    fn new(key: &[u8]) -> Result<Self>;

    fn encrypt_block(&self, block: &mut [u8; 16]);

    fn decrypt_block(&self, block: &mut [u8; 16]);

    fn name(&self) -> &'static str;
}
