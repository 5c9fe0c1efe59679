//! One-way derivation of the device identifiers and keys
//!
//! Every value is a chain of SHA-256 calls over the IMS. The identifier
//! path masks the IMS with `0x3d`, the key path with `0x5a`; each key then
//! hashes its own tag twice along the chain:
//!
//! ```text
//! Y2     = SHA256(IMS[0..32] ^ 0x5a)
//! Z[t]   = SHA256(Y2 || t * 32)
//! key[t] = SHA256(Z[t] || 0x01 * 32)
//! ```

use core::fmt;

use algorithms::{Ff, HashFunction, RsaPublicKey, Sha256};
use api::Octet;
use log::debug;
use params::device::{
    CHAIN_PAD, DERIVED_KEY_SIZE, EPSK_SIZE, EPUID_MASK, EPUID_SIZE, ERRK_PRIME_SIZE, ES3_PAD_REPEAT,
    KEY_MASK, TAG_EPCK, TAG_EPSK, TAG_ERGS, TAG_ERRK, TAG_ESSK,
};
use params::traditional::rsa::RSA_PUBLIC_EXPONENT;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::ims::Ims;

type Block = [u8; DERIVED_KEY_SIZE];

/// Public key of the RSA alias key (ERRK)
pub type ErrkPublicKey = RsaPublicKey<8>;

/// Half-size limbs of an ERRK prime
type ErrkPrime = Ff<4>;

/// Public 8-byte device identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epuid([u8; EPUID_SIZE]);

impl Epuid {
    pub fn as_bytes(&self) -> &[u8; EPUID_SIZE] {
        &self.0
    }
}

impl fmt::Display for Epuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Hash input: at most a block followed by a block of padding
type ChainInput = Octet<{ 2 * DERIVED_KEY_SIZE }>;

fn sha256(t: &ChainInput) -> Result<Block> {
    let d = Sha256::digest(t.as_slice())?;
    let mut out = [0u8; DERIVED_KEY_SIZE];
    out.copy_from_slice(d.as_ref());
    Ok(out)
}

/// SHA-256 of `head || pad * repeat`
fn chain(head: &[u8], pad: u8, repeat: usize) -> Result<Block> {
    let mut t = ChainInput::new();
    t.join_bytes(head);
    t.join_byte(pad, repeat);
    sha256(&t)
}

/// SHA-256 of `bytes ^ mask`
fn masked(bytes: impl Iterator<Item = u8>, mask: u8) -> Result<Block> {
    let mut t = ChainInput::new();
    for b in bytes.take(DERIVED_KEY_SIZE) {
        t.join_byte(b, 1);
    }
    t.xor_byte(mask);
    sha256(&t)
}

fn epuid_from(z0: &Block) -> Result<Epuid> {
    let d = Sha256::digest(z0)?;
    let mut id = [0u8; EPUID_SIZE];
    id.copy_from_slice(&d.as_ref()[..EPUID_SIZE]);
    Ok(Epuid(id))
}

/// Device identifier as computed by the production boot ROM
pub fn calculate_epuid(ims: &Ims) -> Result<Epuid> {
    let mut y1 = masked(ims.hashed().iter().copied(), EPUID_MASK)?;
    let mut z0 = chain(&y1, CHAIN_PAD, DERIVED_KEY_SIZE)?;
    let id = epuid_from(&z0);
    y1.zeroize();
    z0.zeroize();
    id
}

/// Device identifier as computed by the ES3 boot ROM
///
/// That ROM masked every fourth IMS byte instead of whole words and padded
/// with eight bytes rather than thirty-two. Devices it provisioned carry
/// this identifier, so the two variants are kept apart.
pub fn calculate_es3_epuid(ims: &Ims) -> Result<Epuid> {
    let mut y1 = masked(ims.hashed().iter().step_by(4).copied(), EPUID_MASK)?;
    let mut z0 = chain(&y1, CHAIN_PAD, ES3_PAD_REPEAT)?;
    let id = epuid_from(&z0);
    y1.zeroize();
    z0.zeroize();
    id
}

/// Every secret derived from one IMS
#[derive(Clone)]
pub struct DerivedKeys {
    epsk: [u8; EPSK_SIZE],
    essk: Block,
    epck: Block,
    ergs: Block,
    errk: ErrkPublicKey,
}

impl DerivedKeys {
    /// Primary signing scalar, sized for GOLDILOCKS
    pub fn epsk(&self) -> &[u8; EPSK_SIZE] {
        &self.epsk
    }

    /// Secondary signing and agreement scalar
    pub fn essk(&self) -> &Block {
        &self.essk
    }

    /// Primary communication key
    pub fn epck(&self) -> &Block {
        &self.epck
    }

    /// Seed for the device random generator
    pub fn ergs(&self) -> &Block {
        &self.ergs
    }

    pub fn errk(&self) -> &ErrkPublicKey {
        &self.errk
    }
}

impl Zeroize for DerivedKeys {
    fn zeroize(&mut self) {
        self.epsk.zeroize();
        self.essk.zeroize();
        self.epck.zeroize();
        self.ergs.zeroize();
    }
}

impl Drop for DerivedKeys {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for DerivedKeys {}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeys")
            .field("errk", &self.errk)
            .finish_non_exhaustive()
    }
}

/// Key path state: `Y2` and the per-tag chain
struct KeyChain {
    y2: Block,
}

impl KeyChain {
    fn new(ims: &Ims) -> Result<Self> {
        Ok(Self {
            y2: masked(ims.hashed().iter().copied(), KEY_MASK)?,
        })
    }

    fn z(&self, tag: u8) -> Result<Block> {
        chain(&self.y2, tag, DERIVED_KEY_SIZE)
    }

    fn key(&self, tag: u8) -> Result<Block> {
        let mut z = self.z(tag)?;
        let k = chain(&z, CHAIN_PAD, DERIVED_KEY_SIZE);
        z.zeroize();
        k
    }
}

impl Drop for KeyChain {
    fn drop(&mut self) {
        self.y2.zeroize();
    }
}

/// 56-byte EPSK: `key[1] || SHA256(Z[1] || 0x02 * 32)[..24]`
fn derive_epsk(kc: &KeyChain) -> Result<[u8; EPSK_SIZE]> {
    let mut z1 = kc.z(TAG_EPSK)?;
    let mut head = chain(&z1, CHAIN_PAD, DERIVED_KEY_SIZE)?;
    let mut tail = chain(&z1, 0x02, DERIVED_KEY_SIZE)?;

    let mut epsk = [0u8; EPSK_SIZE];
    epsk[..DERIVED_KEY_SIZE].copy_from_slice(&head);
    epsk[DERIVED_KEY_SIZE..].copy_from_slice(&tail[..EPSK_SIZE - DERIVED_KEY_SIZE]);
    z1.zeroize();
    head.zeroize();
    tail.zeroize();
    Ok(epsk)
}

/// 128-byte candidate from four chained blocks starting at `first_tag`,
/// forced to `3 mod 8` and moved up by `4 * offset`
fn prime_candidate(z3: &Block, first_tag: u8, offset: u32) -> Result<ErrkPrime> {
    let mut c = [0u8; ERRK_PRIME_SIZE];
    for (tag, block) in (first_tag..).zip(c.chunks_exact_mut(DERIVED_KEY_SIZE)) {
        let mut h = chain(z3, tag, DERIVED_KEY_SIZE)?;
        block.copy_from_slice(&h);
        h.zeroize();
    }
    c[ERRK_PRIME_SIZE - 1] = (c[ERRK_PRIME_SIZE - 1] & 0xf8) | 0x03;

    let mut p = ErrkPrime::from_bytes(&c);
    p.inc(4 * offset as isize);
    c.zeroize();
    Ok(p)
}

/// Reproducible RSA alias modulus
///
/// The candidates are not tested for primality; the modulus is whatever
/// the IMS determines.
fn derive_errk(kc: &KeyChain, ims: &Ims) -> Result<ErrkPublicKey> {
    let mut z3 = kc.z(TAG_ERRK)?;
    let (hi, lo) = ims.prime_offsets();
    let p = prime_candidate(&z3, 0x01, hi);
    let q = prime_candidate(&z3, 0x05, lo);
    z3.zeroize();

    let (mut p, mut q) = (p?, q?);
    let n = ErrkPublicKey::from_factors(RSA_PUBLIC_EXPONENT as isize, &p, &q);
    p.zeroize();
    q.zeroize();
    Ok(n?)
}

/// Derive every device key from the IMS
pub fn key_generation(ims: &Ims) -> Result<DerivedKeys> {
    let kc = KeyChain::new(ims)?;
    let keys = DerivedKeys {
        epsk: derive_epsk(&kc)?,
        essk: kc.key(TAG_ESSK)?,
        epck: kc.key(TAG_EPCK)?,
        ergs: kc.key(TAG_ERGS)?,
        errk: derive_errk(&kc, ims)?,
    };
    debug!("device keys derived");
    Ok(keys)
}

#[cfg(test)]
mod tests;
