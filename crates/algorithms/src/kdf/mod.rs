//! Key derivation functions
//!
//! Counter-mode hash KDFs (KDF1, KDF2, MGF1) and PBKDF2-HMAC, generic over
//! [`HashFunction`]. Each writes exactly `olen` bytes into the caller's
//! buffer and needs no allocation.

use crate::error::{validate, Result};
use crate::hash::HashFunction;

pub mod pbkdf2;

pub use pbkdf2::pbkdf2;

/// `H(z || counter || p)` for counter = `start`, `start + 1`, ... until
/// `olen` bytes are produced
fn counter_kdf<H: HashFunction>(
    z: &[u8],
    p: &[u8],
    start: u32,
    olen: usize,
    out: &mut [u8],
) -> Result<()> {
    validate::min_length("KDF output", out.len(), olen)?;
    let mut h = H::new();
    let mut counter = start;
    for chunk in out[..olen].chunks_mut(H::OUTPUT_SIZE) {
        h.update(z)?;
        h.update(&counter.to_be_bytes())?;
        h.update(p)?;
        let d = h.finalize()?;
        chunk.copy_from_slice(&d.as_ref()[..chunk.len()]);
        counter = counter.wrapping_add(1);
    }
    Ok(())
}

/// IEEE 1363a KDF1: counter from zero, no shared info
pub fn kdf1<H: HashFunction>(z: &[u8], olen: usize, key: &mut [u8]) -> Result<()> {
    counter_kdf::<H>(z, &[], 0, olen, key)
}

/// IEEE 1363a KDF2: counter from one, optional shared info `p`
pub fn kdf2<H: HashFunction>(z: &[u8], p: Option<&[u8]>, olen: usize, key: &mut [u8]) -> Result<()> {
    counter_kdf::<H>(z, p.unwrap_or(&[]), 1, olen, key)
}

/// PKCS #1 mask generation function MGF1
pub fn mgf1<H: HashFunction>(seed: &[u8], olen: usize, mask: &mut [u8]) -> Result<()> {
    counter_kdf::<H>(seed, &[], 0, olen, mask)
}

#[cfg(test)]
mod tests;
