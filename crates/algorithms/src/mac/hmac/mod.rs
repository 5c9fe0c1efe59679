//! HMAC (RFC 2104 / FIPS 198-1) over any [`HashFunction`]
//!
//! Key padding happens on fixed stack buffers sized for the largest
//! supported block. [`hmac`] writes a tag of caller-chosen length: shorter
//! than the digest truncates, longer left-pads with zero bytes.

use common::security::{SecretBuffer, SecureZeroingType};
use params::utils::hash::MAX_HASH_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;

/// Shortest tag [`hmac`] will produce
pub const HMAC_MIN_TAG_SIZE: usize = 4;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac<H: HashFunction> {
    inner: H,
    opad: SecretBuffer<MAX_HASH_BLOCK_SIZE>,
    finalized: bool,
}

impl<H: HashFunction> Hmac<H> {
    pub fn new(key: &[u8]) -> Result<Self> {
        let bs = H::BLOCK_SIZE;
        debug_assert!(bs <= MAX_HASH_BLOCK_SIZE);

        let mut k0 = SecretBuffer::<MAX_HASH_BLOCK_SIZE>::zeroed();
        if key.len() > bs {
            let hk = H::digest(key)?;
            k0.as_mut_slice()[..H::OUTPUT_SIZE].copy_from_slice(hk.as_ref());
        } else {
            k0.as_mut_slice()[..key.len()].copy_from_slice(key);
        }

        let mut ipad = SecretBuffer::<MAX_HASH_BLOCK_SIZE>::zeroed();
        let mut opad = SecretBuffer::<MAX_HASH_BLOCK_SIZE>::zeroed();
        for ((i, o), k) in ipad
            .as_mut_slice()
            .iter_mut()
            .zip(opad.as_mut_slice().iter_mut())
            .zip(k0.as_slice())
            .take(bs)
        {
            *i = k ^ IPAD;
            *o = k ^ OPAD;
        }

        let mut inner = H::new();
        inner.update(&ipad.as_slice()[..bs])?;

        Ok(Self {
            inner,
            opad,
            finalized: false,
        })
    }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::param("hmac_state", "update after finalization"));
        }
        self.inner.update(data).map(|_| ())
    }

    /// Full-length tag; the context cannot be reused afterwards
    pub fn finalize(&mut self) -> Result<H::Output> {
        if self.finalized {
            return Err(Error::param("hmac_state", "already finalized"));
        }
        self.finalized = true;
        let inner = self.inner.finalize()?;
        let mut outer = H::new();
        outer.update(&self.opad.as_slice()[..H::BLOCK_SIZE])?;
        outer.update(inner.as_ref())?;
        outer.finalize()
    }
}

impl<H: HashFunction> SecureZeroingType for Hmac<H> {
    fn zeroed() -> Self {
        Self {
            inner: H::new(),
            opad: SecretBuffer::zeroed(),
            finalized: true,
        }
    }
}

/// `olen`-byte HMAC of `m` under `k`, written to `tag[..olen]`
pub fn hmac<H: HashFunction>(m: &[u8], k: &[u8], olen: usize, tag: &mut [u8]) -> Result<()> {
    if olen < HMAC_MIN_TAG_SIZE {
        return Err(Error::MacError {
            algorithm: "HMAC",
            details: "tag shorter than 4 bytes",
        });
    }
    validate::min_length("HMAC tag buffer", tag.len(), olen)?;

    let mut mac = Hmac::<H>::new(k)?;
    mac.update(m)?;
    let full = mac.finalize()?;
    let full = full.as_ref();

    if olen <= full.len() {
        tag[..olen].copy_from_slice(&full[..olen]);
    } else {
        let pad = olen - full.len();
        tag[..pad].fill(0);
        tag[pad..olen].copy_from_slice(full);
    }
    Ok(())
}

/// Constant-time check of a received tag of at least 4 bytes
pub fn hmac_verify<H: HashFunction>(m: &[u8], k: &[u8], tag: &[u8]) -> Result<()> {
    validate::min_length("HMAC tag", tag.len(), HMAC_MIN_TAG_SIZE)?;
    validate::max_length("HMAC tag", tag.len(), H::OUTPUT_SIZE)?;
    let mut mac = Hmac::<H>::new(k)?;
    mac.update(m)?;
    let full = mac.finalize()?;
    let ok = internal::ct_eq(&full.as_ref()[..tag.len()], tag);
    if ok {
        Ok(())
    } else {
        Err(Error::MacError {
            algorithm: "HMAC",
            details: "tag mismatch",
        })
    }
}
