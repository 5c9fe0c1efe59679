//! ECIES over the curves of `tsbcrypt-algorithms`
//!
//! The sender draws an ephemeral key pair `(u, V)` and agrees `Z = x(u * W)`
//! with the recipient key `W`. KDF2 of `V || Z` with shared info `P1`
//! yields `2 * AESKEY` bytes: the first half keys AES-CBC with a zero IV
//! over the message, the second half keys an HMAC over
//! `C || P2 || len(P2)` where the length is a big-endian 64-bit integer.
//! The curve's hash drives both the KDF and the MAC.
//!
//! Decryption checks the tag in constant time before touching the
//! ciphertext body.

use algorithms::block::{cbc_iv0_decrypt, cbc_iv0_encrypt, cbc_iv0_len};
use algorithms::mac::hmac::HMAC_MIN_TAG_SIZE;
use algorithms::{kdf2, validate, CurveConfig, HashFunction, Hmac};
use api::Octet;
use internal::constant_time::ct_eq;
use kem::ecdh::{key_pair_generate, public_key_validate, public_len, svdp_dh};
use log::{debug, warn};
use params::traditional::ecc::GOLDILOCKS_FIELD_SIZE;
use params::utils::hash::MAX_HASH_OUTPUT_SIZE;
use params::utils::symmetric::AES256_KEY_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
mod scheme;
#[cfg(feature = "alloc")]
pub use scheme::{Ecies, EciesCiphertext};

const MAX_MODBYTES: usize = GOLDILOCKS_FIELD_SIZE;
const MAX_VZ: usize = 3 * MAX_MODBYTES + 1;

/// Bytes of ciphertext body for a `plen`-byte message
pub fn ciphertext_len(plen: usize) -> usize {
    cbc_iv0_len(plen)
}

fn check_tag_len<const N: usize, C: CurveConfig<N>>(tlen: usize) -> Result<()> {
    let hlen = <C::Hash as HashFunction>::OUTPUT_SIZE;
    if tlen < HMAC_MIN_TAG_SIZE || tlen > hlen {
        return Err(Error::InvalidCiphertextFormat("tag length out of range"));
    }
    Ok(())
}

/// KDF2 over `V || Z`, writing `2 * AESKEY` bytes into `k`
fn derive_keys<const N: usize, C: CurveConfig<N>>(
    v: &[u8],
    z: &[u8],
    p1: &[u8],
    k: &mut [u8],
) -> Result<()> {
    let mut vz = Octet::<MAX_VZ>::new();
    vz.join_bytes(v);
    vz.join_bytes(z);
    if vz.len() != v.len() + z.len() {
        return Err(Error::InvalidCiphertextFormat("ephemeral key too long"));
    }
    Ok(kdf2::<C::Hash>(vz.as_slice(), Some(p1), k.len(), k)?)
}

/// HMAC over `c || p2 || be64(len(p2))`, truncated to `t.len()`
fn mac<const N: usize, C: CurveConfig<N>>(k2: &[u8], c: &[u8], p2: &[u8], t: &mut [u8]) -> Result<()> {
    let mut h = Hmac::<C::Hash>::new(k2)?;
    h.update(c)?;
    h.update(p2)?;
    let mut l2 = Octet::<8>::new();
    l2.join_int(p2.len() as u64, 8);
    h.update(l2.as_slice())?;
    let d = h.finalize()?;
    let tlen = t.len();
    t.copy_from_slice(&d.as_ref()[..tlen]);
    Ok(())
}

/// Encrypt `m` to the public key `w`
///
/// The ephemeral key is written uncompressed to `v`, the body to `c` and
/// the tag to `t`, whose length (between 4 bytes and the hash output
/// size) selects the truncation. Returns the body length.
#[allow(clippy::too_many_arguments)]
pub fn ecies_encrypt<const N: usize, C: CurveConfig<N>, R: RngCore + CryptoRng>(
    p1: &[u8],
    p2: &[u8],
    rng: &mut R,
    w: &[u8],
    m: &[u8],
    v: &mut [u8],
    c: &mut [u8],
    t: &mut [u8],
) -> Result<usize> {
    check_tag_len::<N, C>(t.len())?;
    let mb = C::MODBYTES;
    let vlen = public_len::<N, C>(false);
    if v.len() < vlen {
        return Err(Error::InvalidCiphertextFormat("ephemeral key buffer too small"));
    }
    if c.len() < ciphertext_len(m.len()) {
        return Err(Error::InvalidCiphertextFormat("ciphertext buffer too small"));
    }
    public_key_validate::<N, C>(w)?;

    let mut u = [0u8; MAX_MODBYTES];
    let mut z = [0u8; MAX_MODBYTES];
    let mut k = [0u8; 2 * AES256_KEY_SIZE];
    let klen = 2 * C::AESKEY;

    let res = (|| -> Result<usize> {
        key_pair_generate::<N, C, R>(rng, &mut u[..mb], &mut v[..vlen], false)?;
        svdp_dh::<N, C>(&u[..mb], w, &mut z[..mb])?;
        derive_keys::<N, C>(&v[..vlen], &z[..mb], p1, &mut k[..klen])?;
        let (k1, k2) = k[..klen].split_at(C::AESKEY);
        let clen = cbc_iv0_encrypt(k1, m, c)?;
        mac::<N, C>(k2, &c[..clen], p2, t)?;
        Ok(clen)
    })();

    u.zeroize();
    z.zeroize();
    k.zeroize();
    if res.is_ok() {
        debug!("{} ECIES encrypted {} bytes", C::NAME, m.len());
    }
    res
}

/// Decrypt an ECIES message with the private key `u`
///
/// Returns the plaintext length written to `m`. A tag mismatch is an
/// authentication error and nothing is decrypted.
pub fn ecies_decrypt<const N: usize, C: CurveConfig<N>>(
    p1: &[u8],
    p2: &[u8],
    v: &[u8],
    c: &[u8],
    t: &[u8],
    u: &[u8],
    m: &mut [u8],
) -> Result<usize> {
    check_tag_len::<N, C>(t.len())?;
    validate::min_length("ECIES plaintext buffer", m.len(), c.len())?;
    let mb = C::MODBYTES;
    if public_key_validate::<N, C>(v).is_err() {
        return Err(Error::InvalidCiphertextFormat("ephemeral key is not a valid point"));
    }

    let mut z = [0u8; MAX_MODBYTES];
    let mut k = [0u8; 2 * AES256_KEY_SIZE];
    let mut tag = [0u8; MAX_HASH_OUTPUT_SIZE];
    let klen = 2 * C::AESKEY;
    let tlen = t.len();

    let res = (|| -> Result<usize> {
        svdp_dh::<N, C>(u, v, &mut z[..mb])?;
        derive_keys::<N, C>(v, &z[..mb], p1, &mut k[..klen])?;
        let (k1, k2) = k[..klen].split_at(C::AESKEY);
        mac::<N, C>(k2, c, p2, &mut tag[..tlen])?;
        if !ct_eq(&tag[..tlen], t) {
            warn!("{} ECIES tag mismatch", C::NAME);
            return Err(Error::Authentication("ECIES"));
        }
        cbc_iv0_decrypt(k1, c, m).map_err(|_| Error::DecryptionFailed("bad block padding"))
    })();

    z.zeroize();
    k.zeroize();
    tag.zeroize();
    res
}
