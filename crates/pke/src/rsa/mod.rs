//! RSA encryption with EME-OAEP padding
//!
//! The label is optional and hashed into the encoding. Decoding failures
//! all surface as one decryption error so the padding checks do not act
//! as an oracle.

use algorithms::error::Error as PrimitiveError;
use algorithms::rsa::{oaep_decode, oaep_encode, RsaPrivateKey, RsaPublicKey};
use algorithms::{validate, HashFunction};
use params::traditional::rsa::RSA_MAX_BYTE_LENGTH;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
mod scheme;
#[cfg(feature = "alloc")]
pub use scheme::{RsaCiphertext, RsaOaep};

/// Longest message that fits a `256 * FL`-bit modulus with hash `H`
pub fn max_message_len<H: HashFunction, const FL: usize>() -> usize {
    RsaPublicKey::<FL>::BYTES.saturating_sub(2 * H::OUTPUT_SIZE + 2)
}

/// OAEP-encode `m` and apply the public operation, writing exactly the
/// modulus size into `c`
pub fn oaep_encrypt<H: HashFunction, const FL: usize, R: RngCore + CryptoRng>(
    pk: &RsaPublicKey<FL>,
    m: &[u8],
    label: Option<&[u8]>,
    rng: &mut R,
    c: &mut [u8],
) -> Result<()> {
    let len = RsaPublicKey::<FL>::BYTES;
    validate::max_length("RSA modulus", len, RSA_MAX_BYTE_LENGTH)?;
    validate::length("RSA ciphertext", c.len(), len)?;

    let mut block = [0u8; RSA_MAX_BYTE_LENGTH];
    let res = oaep_encode::<H, R>(m, rng, label, &mut block[..len])
        .and_then(|_| pk.encrypt(&block[..len], c));
    block.zeroize();
    Ok(res?)
}

/// Private operation followed by OAEP decoding; returns the message
/// length written to `m`
pub fn oaep_decrypt<H: HashFunction, const FL: usize, const HL: usize>(
    sk: &RsaPrivateKey<HL>,
    c: &[u8],
    label: Option<&[u8]>,
    m: &mut [u8],
) -> Result<usize> {
    let len = RsaPublicKey::<FL>::BYTES;
    validate::max_length("RSA modulus", len, RSA_MAX_BYTE_LENGTH)?;
    if c.len() != len {
        return Err(Error::InvalidCiphertextFormat("length differs from the modulus"));
    }

    let mut block = [0u8; RSA_MAX_BYTE_LENGTH];
    let res = sk
        .decrypt::<FL>(c, &mut block[..len])
        .and_then(|_| oaep_decode::<H>(label, &mut block[..len], m));
    block.zeroize();
    res.map_err(|e| match e {
        PrimitiveError::Processing { .. } => Error::DecryptionFailed("invalid OAEP encoding"),
        e => Error::Primitive(e),
    })
}

#[cfg(test)]
mod tests;
