//! RSA signatures with EMSA-PKCS1-v1_5 encoding
//!
//! Signing encodes the message digest with its DigestInfo prefix and
//! applies the private CRT operation. Verification re-encodes the message
//! and compares it with the public operation's output in constant time.

use algorithms::rsa::{pkcs15, RsaPrivateKey, RsaPublicKey};
use algorithms::HashFunction;
use params::traditional::rsa::RSA_MAX_BYTE_LENGTH;
use zeroize::Zeroize;

use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
mod scheme;
#[cfg(feature = "alloc")]
pub use scheme::{RsaKeyPair, RsaPkcs1, RsaSignature};

const ALGORITHM: &str = "RSA-PKCS1-v1_5";

/// Sign `m` into `sig`, which must be exactly the modulus size
pub fn pkcs15_sign<H: HashFunction, const FL: usize, const HL: usize>(
    sk: &RsaPrivateKey<HL>,
    m: &[u8],
    sig: &mut [u8],
) -> Result<()> {
    let len = RsaPublicKey::<FL>::BYTES;
    algorithms::validate::max_length("RSA modulus", len, RSA_MAX_BYTE_LENGTH)?;
    algorithms::validate::length("RSA signature", sig.len(), len)?;

    let mut block = [0u8; RSA_MAX_BYTE_LENGTH];
    pkcs15::<H>(m, &mut block[..len])?;
    let res = sk.decrypt::<FL>(&block[..len], sig);
    block.zeroize();
    res.map_err(Error::from)
}

/// Verify `sig` on `m` against the public key
pub fn pkcs15_verify<H: HashFunction, const FL: usize>(
    pk: &RsaPublicKey<FL>,
    m: &[u8],
    sig: &[u8],
) -> Result<()> {
    let len = RsaPublicKey::<FL>::BYTES;
    algorithms::validate::max_length("RSA modulus", len, RSA_MAX_BYTE_LENGTH)?;
    if sig.len() != len {
        return Err(Error::InvalidSignature {
            algorithm: ALGORITHM,
            reason: "length differs from the modulus",
        });
    }

    let mut expected = [0u8; RSA_MAX_BYTE_LENGTH];
    let mut opened = [0u8; RSA_MAX_BYTE_LENGTH];
    pkcs15::<H>(m, &mut expected[..len])?;
    pk.encrypt(sig, &mut opened[..len])?;

    if internal::constant_time::ct_eq(&expected[..len], &opened[..len]) {
        Ok(())
    } else {
        Err(Error::Verification {
            algorithm: ALGORITHM,
        })
    }
}

#[cfg(test)]
mod tests;
