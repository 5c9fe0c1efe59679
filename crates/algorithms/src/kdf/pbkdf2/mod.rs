//! PBKDF2 with HMAC as the PRF (RFC 8018)

use crate::error::{validate, Result};
use crate::hash::HashFunction;
use crate::mac::Hmac;

/// Derive `olen` bytes from password `p` and salt `s` with `rep` iterations
pub fn pbkdf2<H: HashFunction>(
    p: &[u8],
    s: &[u8],
    rep: u32,
    olen: usize,
    key: &mut [u8],
) -> Result<()> {
    validate::parameter(rep >= 1, "rep", "at least one iteration")?;
    validate::min_length("PBKDF2 output", key.len(), olen)?;

    let keyed = Hmac::<H>::new(p)?;
    for (i, chunk) in key[..olen].chunks_mut(H::OUTPUT_SIZE).enumerate() {
        let mut mac = keyed.clone();
        mac.update(s)?;
        mac.update(&(i as u32 + 1).to_be_bytes())?;
        let mut u = mac.finalize()?;

        let n = chunk.len();
        chunk.copy_from_slice(&u.as_ref()[..n]);
        for _ in 1..rep {
            let mut mac = keyed.clone();
            mac.update(u.as_ref())?;
            u = mac.finalize()?;
            for (t, b) in chunk.iter_mut().zip(u.as_ref()) {
                *t ^= b;
            }
        }
    }
    Ok(())
}
