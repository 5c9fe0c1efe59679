//! Elliptic-curve Diffie-Hellman over the supported curves
//!
//! The byte-level functions mirror the classic IEEE 1363 primitives:
//! [`key_pair_generate`] produces a private scalar and its public point,
//! [`public_key_validate`] rejects points that are malformed, off the curve,
//! of small order or outside the prime-order subgroup, and [`svdp_dh`]
//! computes the agreed x-coordinate.
//!
//! Private keys are `MODBYTES` big-endian bytes reduced modulo the group
//! order. Public keys use the point wire format of [`Ecp::to_bytes`].
//!
//! [`Ecdh`] wraps the same operations in the [`api::Kem`] trait: the
//! ciphertext is the sender's ephemeral public key and the shared secret
//! is KDF2 of the agreed x-coordinate, with the ephemeral key as the
//! shared info.

use algorithms::{Big, CurveConfig, Ecp};
use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Result};

#[cfg(feature = "alloc")]
mod kem;
#[cfg(feature = "alloc")]
pub use kem::{Ecdh, EcdhKeyPair, EcdhPublicKey, EcdhSecretKey, EcdhSharedSecret};

/// Bytes in a private key or an agreed secret for curve `C`
pub fn secret_len<const N: usize, C: CurveConfig<N>>() -> usize {
    C::MODBYTES
}

/// Bytes in an encoded public key for curve `C`
pub fn public_len<const N: usize, C: CurveConfig<N>>(compress: bool) -> usize {
    Ecp::<N, C>::encoded_len(compress)
}

/// Draw a nonzero scalar below the group order
pub(crate) fn random_scalar<const N: usize, C: CurveConfig<N>, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Big<N> {
    let r = C::order();
    loop {
        let s = Big::randomnum(&r, rng);
        if !s.iszilch() {
            return s;
        }
    }
}

/// Reduce a big-endian private key modulo the group order
pub(crate) fn scalar_from_bytes<const N: usize, C: CurveConfig<N>>(s: &[u8]) -> Big<N> {
    let mut k = Big::from_bytes(s);
    k.rmod(&C::order());
    k
}

/// Generate a fresh key pair
///
/// The private key is written to `s` (at least [`secret_len`] bytes) and
/// the public key to `w` (at least [`public_len`] bytes).
pub fn key_pair_generate<const N: usize, C: CurveConfig<N>, R: RngCore + CryptoRng>(
    rng: &mut R,
    s: &mut [u8],
    w: &mut [u8],
    compress: bool,
) -> Result<()> {
    validate::output("ECDH private key", s.len(), C::MODBYTES)?;
    validate::output("ECDH public key", w.len(), public_len::<N, C>(compress))?;

    let mut k = random_scalar::<N, C, R>(rng);
    k.to_bytes(&mut s[..C::MODBYTES]);
    Ecp::<N, C>::generator().mul(&k).to_bytes(w, compress);
    k.zeroize();

    debug!("generated {} ECDH key pair", C::NAME);
    Ok(())
}

/// Derive the public key for an existing private key
///
/// The private key is reduced modulo the group order; a key that reduces
/// to zero is rejected.
pub fn key_pair_from_secret<const N: usize, C: CurveConfig<N>>(
    s: &[u8],
    w: &mut [u8],
    compress: bool,
) -> Result<()> {
    validate::output("ECDH public key", w.len(), public_len::<N, C>(compress))?;
    let mut k = scalar_from_bytes::<N, C>(s);
    let nonzero = !k.iszilch();
    if nonzero {
        Ecp::<N, C>::generator().mul(&k).to_bytes(w, compress);
    }
    k.zeroize();
    validate::key_generation(nonzero, C::NAME, "private key is a multiple of the group order")
}

/// Check that `w` encodes a point of prime order `r`
///
/// Malformed encodings and off-curve coordinates decode to infinity and
/// are rejected along with the neutral element itself. The point must
/// survive multiplication by the cofactor and vanish under the order.
pub fn public_key_validate<const N: usize, C: CurveConfig<N>>(w: &[u8]) -> Result<Ecp<N, C>> {
    let p = Ecp::<N, C>::from_bytes(w);
    validate::public_key(!p.is_infinity(), C::NAME, "not a point on the curve")?;

    if C::CURVE_COF != 1 {
        let cof = Big::<N>::from_int(C::CURVE_COF);
        validate::public_key(!p.mul(&cof).is_infinity(), C::NAME, "point of small order")?;
    }
    validate::public_key(p.in_subgroup(), C::NAME, "point outside the prime-order subgroup")?;
    Ok(p)
}

/// Agreed x-coordinate of `s * W`, written to `z` as [`secret_len`] bytes
///
/// `wd` is decoded but not subgroup-checked; run [`public_key_validate`] on
/// untrusted keys first.
pub fn svdp_dh<const N: usize, C: CurveConfig<N>>(s: &[u8], wd: &[u8], z: &mut [u8]) -> Result<()> {
    validate::output("ECDH shared secret", z.len(), C::MODBYTES)?;
    let w = Ecp::<N, C>::from_bytes(wd);
    validate::public_key(!w.is_infinity(), C::NAME, "not a point on the curve")?;

    let mut k = scalar_from_bytes::<N, C>(s);
    let res = agree(&k, &w, &mut z[..C::MODBYTES]);
    k.zeroize();
    res
}

/// `x(k * w)` into `z`, failing if the product is the neutral element
pub(crate) fn agree<const N: usize, C: CurveConfig<N>>(
    k: &Big<N>,
    w: &Ecp<N, C>,
    z: &mut [u8],
) -> Result<()> {
    let mut p = w.mul(k);
    let ok = !p.is_infinity();
    if ok {
        p.getx().to_bytes(z);
    }
    p.zeroize();
    validate::agreement(ok, C::NAME, "shared point at infinity")
}

#[cfg(test)]
mod tests;
