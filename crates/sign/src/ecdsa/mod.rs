//! ECDSA over the curves with a full group law
//!
//! [`sp_dsa`] and [`vp_dsa`] are the IEEE 1363 signature primitives with
//! the message hashed by the curve's paired hash. The digest is truncated
//! to `MODBYTES` bytes when it is longer. Signatures are the two
//! components `(c, d)`, each `MODBYTES` big-endian bytes.
//!
//! Montgomery curves only support x-only ladders and cannot verify, so
//! both primitives refuse them.
//!
//! ## Constant-Time Guarantees
//!
//! The nonce point comes from the fixed-window ladder. The nonce is
//! blinded by a second random value before inversion, so the inversion
//! never sees the nonce itself.

use algorithms::{Big, CurveConfig, CurveType, Ecp, HashFunction};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
mod scheme;
#[cfg(feature = "alloc")]
pub use scheme::{Ecdsa, EcdsaKeyPair, EcdsaPublicKey, EcdsaSecretKey, EcdsaSignature};

const ALGORITHM: &str = "ECDSA";

fn require_group_law<const N: usize, C: CurveConfig<N>>() -> Result<()> {
    if C::CURVETYPE == CurveType::Montgomery {
        return Err(Error::Algorithm("ECDSA on a Montgomery curve"));
    }
    Ok(())
}

/// Hash `f` and read the leading `MODBYTES` bytes as an integer
fn message_representative<const N: usize, C: CurveConfig<N>>(f: &[u8]) -> Result<Big<N>> {
    let h = C::Hash::digest(f)?;
    let h = h.as_ref();
    let hlen = h.len().min(C::MODBYTES);
    Ok(Big::from_bytes(&h[..hlen]))
}

/// `(c, d)` for digest representative `f` under private scalar `s`
pub(crate) fn sign_scalar<const N: usize, C: CurveConfig<N>, R: RngCore + CryptoRng>(
    rng: &mut R,
    s: &Big<N>,
    f: &[u8],
) -> Result<(Big<N>, Big<N>)> {
    require_group_law::<N, C>()?;
    let r = C::order();
    let fh = message_representative::<N, C>(f)?;
    let g = Ecp::<N, C>::generator();

    loop {
        let mut u = Big::randomnum(&r, rng);
        let mut w = Big::randomnum(&r, rng);

        let mut c = g.mul(&u).getx();
        c.rmod(&r);
        if c.iszilch() {
            continue;
        }

        // d = (f + s*c) / u, computed as w * (f + s*c) / (u * w)
        u = Big::modmul(&u, &w, &r);
        u.invmodp(&r);
        let mut d = Big::modmul(s, &c, &r);
        d.add(&fh);
        d.norm();
        d = Big::modmul(&d, &w, &r);
        d = Big::modmul(&u, &d, &r);

        u.zeroize();
        w.zeroize();
        if !d.iszilch() {
            return Ok((c, d));
        }
    }
}

/// Check `(c, d)` on message `f` against the public point `w`
pub(crate) fn verify_point<const N: usize, C: CurveConfig<N>>(
    w: &Ecp<N, C>,
    f: &[u8],
    c: &Big<N>,
    d: &Big<N>,
) -> Result<()> {
    require_group_law::<N, C>()?;
    let r = C::order();
    let in_range = |x: &Big<N>| !x.iszilch() && Big::comp(x, &r) < 0;
    if !in_range(c) || !in_range(d) {
        return Err(Error::InvalidSignature {
            algorithm: ALGORITHM,
            reason: "component outside [1, r)",
        });
    }

    let fh = message_representative::<N, C>(f)?;
    let mut dinv = *d;
    dinv.invmodp(&r);
    let u1 = Big::modmul(&fh, &dinv, &r);
    let u2 = Big::modmul(c, &dinv, &r);

    let p = Ecp::<N, C>::generator().mul2(&u1, w, &u2);
    if p.is_infinity() {
        return Err(Error::Verification {
            algorithm: ALGORITHM,
        });
    }
    let mut v = p.getx();
    v.rmod(&r);
    if Big::comp(&v, c) != 0 {
        return Err(Error::Verification {
            algorithm: ALGORITHM,
        });
    }
    Ok(())
}

/// Sign message `f` with the private key `s`
///
/// `c` and `d` each receive `MODBYTES` bytes. The nonce and its blinding
/// factor are drawn from `rng`.
pub fn sp_dsa<const N: usize, C: CurveConfig<N>, R: RngCore + CryptoRng>(
    rng: &mut R,
    s: &[u8],
    f: &[u8],
    c: &mut [u8],
    d: &mut [u8],
) -> Result<()> {
    let mb = C::MODBYTES;
    algorithms::validate::min_length("ECDSA c", c.len(), mb)?;
    algorithms::validate::min_length("ECDSA d", d.len(), mb)?;

    let mut sk = Big::from_bytes(s);
    sk.rmod(&C::order());
    let res = sign_scalar::<N, C, R>(rng, &sk, f);
    sk.zeroize();

    let (cb, db) = res?;
    cb.to_bytes(&mut c[..mb]);
    db.to_bytes(&mut d[..mb]);
    Ok(())
}

/// Verify `(c, d)` on message `f` under the encoded public key `w`
///
/// Components outside `[1, r)` are rejected before the joint multiplication.
pub fn vp_dsa<const N: usize, C: CurveConfig<N>>(w: &[u8], f: &[u8], c: &[u8], d: &[u8]) -> Result<()> {
    let mb = C::MODBYTES;
    if c.len() > mb || d.len() > mb {
        return Err(Error::InvalidSignature {
            algorithm: ALGORITHM,
            reason: "component longer than the field size",
        });
    }
    let cb = Big::from_bytes(c);
    let db = Big::from_bytes(d);

    let wp = Ecp::<N, C>::from_bytes(w);
    if wp.is_infinity() {
        return Err(Error::InvalidKey {
            algorithm: ALGORITHM,
            reason: "public key is not a point on the curve",
        });
    }
    verify_point(&wp, f, &cb, &db)
}
