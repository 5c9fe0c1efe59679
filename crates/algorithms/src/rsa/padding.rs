//! RSA message encodings (RFC 8017)
//!
//! All three work on buffers exactly as long as the modulus. The hash is a
//! type parameter; PKCS #1 v1.5 picks its DigestInfo prefix from the digest
//! length, so SHA-1, SHA-256, SHA-384 and SHA-512 are supported.

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;

const SHA1_PREFIX: [u8; 15] = [
    0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14,
];
const SHA256_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];
const SHA384_PREFIX: [u8; 19] = [
    0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02, 0x05,
    0x00, 0x04, 0x30,
];
const SHA512_PREFIX: [u8; 19] = [
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03, 0x05,
    0x00, 0x04, 0x40,
];

/// DER DigestInfo header for a digest of `hlen` bytes
fn digest_info_prefix(hlen: usize) -> Option<&'static [u8]> {
    match hlen {
        20 => Some(&SHA1_PREFIX),
        32 => Some(&SHA256_PREFIX),
        48 => Some(&SHA384_PREFIX),
        64 => Some(&SHA512_PREFIX),
        _ => None,
    }
}

/// XOR the MGF1 stream of `seed` into `target`
fn mgf1_xor<H: HashFunction>(seed: &[u8], target: &mut [u8]) -> Result<()> {
    let mut h = H::new();
    for (counter, chunk) in target.chunks_mut(H::OUTPUT_SIZE).enumerate() {
        h.update(seed)?;
        h.update(&(counter as u32).to_be_bytes())?;
        let mask = h.finalize()?;
        for (t, m) in chunk.iter_mut().zip(mask.as_ref()) {
            *t ^= m;
        }
    }
    Ok(())
}

/// EMSA-PKCS1-v1_5: `00 01 FF.. 00 || DigestInfo || H(m)` filling `w`
pub fn pkcs15<H: HashFunction>(m: &[u8], w: &mut [u8]) -> Result<()> {
    let hlen = H::OUTPUT_SIZE;
    let prefix = digest_info_prefix(hlen).ok_or(Error::NotImplemented {
        feature: "PKCS#1 v1.5 DigestInfo for this hash",
    })?;
    let tlen = prefix.len() + hlen;
    validate::min_length("PKCS#1 v1.5 block", w.len(), tlen + 11)?;

    let olen = w.len();
    w[0] = 0x00;
    w[1] = 0x01;
    w[2..olen - tlen - 1].fill(0xff);
    w[olen - tlen - 1] = 0x00;
    w[olen - tlen..olen - hlen].copy_from_slice(prefix);
    let d = H::digest(m)?;
    w[olen - hlen..].copy_from_slice(d.as_ref());
    Ok(())
}

/// EME-OAEP encoding of `m` with label `p` into `f`
pub fn oaep_encode<H: HashFunction, R: RngCore + CryptoRng>(
    m: &[u8],
    rng: &mut R,
    p: Option<&[u8]>,
    f: &mut [u8],
) -> Result<()> {
    let hlen = H::OUTPUT_SIZE;
    let k = f.len();
    validate::min_length("OAEP block", k, 2 * hlen + 2)?;
    validate::max_length("OAEP message", m.len(), k - 2 * hlen - 2)?;

    f[0] = 0;
    let (seed, db) = f[1..].split_at_mut(hlen);
    let lhash = H::digest(p.unwrap_or(&[]))?;
    db.fill(0);
    db[..hlen].copy_from_slice(lhash.as_ref());
    let dblen = db.len();
    db[dblen - m.len() - 1] = 0x01;
    db[dblen - m.len()..].copy_from_slice(m);

    rng.fill_bytes(seed);
    mgf1_xor::<H>(seed, db)?;
    mgf1_xor::<H>(db, seed)?;
    Ok(())
}

/// Undo [`oaep_encode`]: `f` is unmasked in place and wiped, the message
/// is copied to `m`, and its length returned
///
/// Every check runs over the whole block; a malformed block gives one
/// error without saying which check failed.
pub fn oaep_decode<H: HashFunction>(p: Option<&[u8]>, f: &mut [u8], m: &mut [u8]) -> Result<usize> {
    let hlen = H::OUTPUT_SIZE;
    let k = f.len();
    validate::min_length("OAEP block", k, 2 * hlen + 2)?;

    let lhash = H::digest(p.unwrap_or(&[]))?;
    let mut bad = !f[0].ct_eq(&0);
    let (seed, db) = f[1..].split_at_mut(hlen);
    mgf1_xor::<H>(db, seed)?;
    mgf1_xor::<H>(seed, db)?;

    bad |= !db[..hlen].ct_eq(lhash.as_ref());

    let mut found = Choice::from(0);
    let mut index = 0u64;
    for (i, b) in db[hlen..].iter().enumerate() {
        let is_zero = b.ct_eq(&0);
        let is_one = b.ct_eq(&1);
        index.conditional_assign(&(i as u64), is_one & !found);
        bad |= !found & !is_zero & !is_one;
        found |= is_one;
    }
    bad |= !found;

    let start = hlen + index as usize + 1;
    let mlen = db.len() - start.min(db.len());
    let result = if bool::from(bad) {
        Err(Error::Processing {
            operation: "OAEP decode",
            details: "invalid encoding",
        })
    } else if m.len() < mlen {
        Err(Error::Length {
            context: "OAEP message buffer",
            expected: mlen,
            actual: m.len(),
        })
    } else {
        m[..mlen].copy_from_slice(&db[start..]);
        Ok(mlen)
    };
    f.zeroize();
    result
}
