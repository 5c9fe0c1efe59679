//! RSA primitive over the FF engine
//!
//! Keys are sized by limb count: a public key holds an `FL`-limb modulus and
//! the private key holds `HL`-limb CRT components, with `FL = 2 * HL`. The
//! relation cannot be stated in the type system, so every entry point that
//! takes both checks it. Primes are generated as `3 mod 4`, which lets the
//! CRT exponents be found with an inverse modulo the odd `(p - 1) / 2`.
//!
//! Padding lives in [`padding`]: EME-OAEP for encryption and EMSA-PKCS1-v1_5
//! for signatures.

use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arith::ff::{Ff, FfWide};
use crate::error::{validate, Result};

pub mod padding;

pub use padding::{oaep_decode, oaep_encode, pkcs15};

/// RSA-2048 public key: 8 limbs of 256 bits
pub type Rsa2048PublicKey = RsaPublicKey<8>;
/// RSA-2048 private key: 4-limb CRT components
pub type Rsa2048PrivateKey = RsaPrivateKey<4>;
/// RSA-1024 public key
pub type Rsa1024PublicKey = RsaPublicKey<4>;
/// RSA-1024 private key
pub type Rsa1024PrivateKey = RsaPrivateKey<2>;

/// Public exponent and modulus
#[derive(Clone, Copy)]
pub struct RsaPublicKey<const FL: usize> {
    pub e: isize,
    pub n: Ff<FL>,
}

/// CRT private key: primes, exponents modulo `p - 1` and `q - 1`, and
/// `c = p^-1 mod q`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RsaPrivateKey<const HL: usize> {
    pub p: Ff<HL>,
    pub q: Ff<HL>,
    pub dp: Ff<HL>,
    pub dq: Ff<HL>,
    pub c: Ff<HL>,
}

fn check_sizes<const FL: usize, const HL: usize>() -> Result<()> {
    validate::parameter(FL == 2 * HL, "RSA key size", "full length must be twice half length")
}

/// Next `3 mod 4` prime `p` with `gcd(e, p - 1) == 1`
fn generate_prime<const HL: usize, R: RngCore + CryptoRng>(rng: &mut R, e: isize) -> Ff<HL> {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let mut p = Ff::<HL>::random(rng);
        while p.lastbits(2) != 3 {
            p.inc(1);
        }
        while !Ff::prime(&p, rng) {
            p.inc(4);
        }
        let mut p1 = p;
        p1.dec(1);
        if p1.cfactor(e) {
            continue;
        }
        debug!("RSA prime found after {} candidate(s)", attempts);
        return p;
    }
}

/// `e^-1 mod (p - 1)` for `p = 3 mod 4`
fn crt_exponent<const HL: usize>(p: &Ff<HL>, e: isize) -> Ff<HL> {
    let mut t = *p;
    t.dec(1);
    t.shr();
    let mut d = Ff::invmodp(&Ff::from_int(e), &t);
    if d.parity() == 0 {
        d.add(&t);
    }
    d.norm();
    d
}

/// Generate a key pair with public exponent `e`
///
/// Either prime may be supplied as big-endian bytes instead of being
/// generated; a supplied prime must be `3 mod 4` and is not tested for
/// primality.
pub fn key_pair<const FL: usize, const HL: usize, R: RngCore + CryptoRng>(
    rng: &mut R,
    e: isize,
    p: Option<&[u8]>,
    q: Option<&[u8]>,
) -> Result<(RsaPrivateKey<HL>, RsaPublicKey<FL>)> {
    check_sizes::<FL, HL>()?;
    validate::parameter(e >= 3 && e % 2 == 1, "e", "odd exponent of at least 3")?;

    let mut primes = [Ff::<HL>::new(); 2];
    for (slot, given) in primes.iter_mut().zip([p, q]) {
        *slot = match given {
            Some(bytes) => {
                validate::max_length("RSA prime", bytes.len(), Ff::<HL>::BYTES)?;
                let f = Ff::from_bytes(bytes);
                validate::parameter(f.lastbits(2) == 3, "RSA prime", "must be 3 mod 4")?;
                f
            }
            None => generate_prime(rng, e),
        };
    }
    let [p, q] = primes;

    let n = RsaPublicKey::from_factors(e, &p, &q)?;
    let private = RsaPrivateKey {
        p,
        q,
        dp: crt_exponent(&p, e),
        dq: crt_exponent(&q, e),
        c: Ff::invmodp(&p, &q),
    };
    primes.zeroize();
    debug!("RSA key pair ready ({} bits)", 256 * FL);
    Ok((private, n))
}

impl<const FL: usize> RsaPublicKey<FL> {
    /// Modulus size in bytes
    pub const BYTES: usize = Ff::<FL>::BYTES;

    /// Key with modulus `p * q`
    pub fn from_factors<const HL: usize>(e: isize, p: &Ff<HL>, q: &Ff<HL>) -> Result<Self> {
        check_sizes::<FL, HL>()?;
        let prod = Ff::mul(p, q);
        Ok(Self {
            e,
            n: Ff::from_limbs(prod.limbs()),
        })
    }

    /// Public operation `f^e mod n` on modulus-sized big-endian bytes
    pub fn encrypt(&self, f: &[u8], g: &mut [u8]) -> Result<()> {
        validate::length("RSA input", f.len(), Self::BYTES)?;
        validate::length("RSA output", g.len(), Self::BYTES)?;
        let mut x = Ff::<FL>::from_bytes(f);
        x.power(self.e, &self.n);
        x.to_bytes(g);
        Ok(())
    }

    pub fn modulus_bytes(&self, out: &mut [u8]) {
        self.n.to_bytes(out);
    }
}

impl<const FL: usize> core::fmt::Debug for RsaPublicKey<FL> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RsaPublicKey")
            .field("e", &self.e)
            .field("bits", &(256 * FL))
            .finish_non_exhaustive()
    }
}

impl<const HL: usize> RsaPrivateKey<HL> {
    /// Private operation by CRT, with a side-channel resistant ladder for
    /// each half
    pub fn decrypt<const FL: usize>(&self, g: &[u8], f: &mut [u8]) -> Result<()> {
        check_sizes::<FL, HL>()?;
        validate::length("RSA input", g.len(), Ff::<FL>::BYTES)?;
        validate::length("RSA output", f.len(), Ff::<FL>::BYTES)?;

        let wide = FfWide::<HL>::from_bytes(g);
        let mut jp = wide.dmod(&self.p);
        let mut jq = wide.dmod(&self.q);
        jp.skpow(&self.dp, &self.p);
        jq.skpow(&self.dq, &self.q);

        // m = jp + p * ((jq - jp) * c mod q)
        let mut low = Ff::<FL>::from_limbs(jp.limbs());
        jp.rmod(&self.q);
        if Ff::comp(&jp, &jq) > 0 {
            jq.add(&self.q);
        }
        jq.sub(&jp);
        jq.norm();
        let h = Ff::mul(&self.c, &jq).dmod(&self.q);
        let t = Ff::mul(&h, &self.p);
        low.add(&Ff::from_limbs(t.limbs()));
        low.norm();
        low.to_bytes(f);

        jp.zeroize();
        jq.zeroize();
        low.zeroize();
        Ok(())
    }

    /// Zero every component; the key must not be used afterwards
    pub fn kill(&mut self) {
        self.zeroize();
    }
}

impl<const HL: usize> core::fmt::Debug for RsaPrivateKey<HL> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RsaPrivateKey([REDACTED])")
    }
}
