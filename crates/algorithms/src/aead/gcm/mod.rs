//! AES-GCM authenticated encryption (NIST SP 800-38D)
//!
//! [`Gcm`] is a streaming context. Additional authenticated data is fed
//! with [`Gcm::add_header`], then the message with [`Gcm::add_plain`] when
//! encrypting or [`Gcm::add_cipher`] when decrypting, and
//! [`Gcm::finish`] produces the 16-byte tag. Any call may pass a whole
//! number of blocks and stay open for more; a call that ends on a partial
//! block closes its phase, so only the last header or data chunk may have a
//! length that is not a multiple of 16.
//!
//! ## Constant-Time Guarantees
//!
//! * GHASH multiplies through a masked table walk; no lookup depends on
//!   the key or data.
//! * [`gcm_decrypt`] compares tags in constant time and wipes the output
//!   buffer before reporting a failed tag.

use params::utils::symmetric::{AES_BLOCK_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{AesCipher, BlockCipher};
use crate::error::{validate, Error, Result};
use crate::types::Tag;

pub mod ghash;

use ghash::GHash;

/// Shortest tag [`gcm_decrypt`] will accept
pub const GCM_MIN_TAG_SIZE: usize = 4;

/// Which inputs a [`Gcm`] context still accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub enum Status {
    AcceptingHeader,
    AcceptingCipher,
    NotAcceptingMore,
    Finished,
}

/// Streaming AES-GCM context
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Gcm {
    cipher: AesCipher,
    ghash: GHash,
    j0: [u8; AES_BLOCK_SIZE],
    counter: [u8; AES_BLOCK_SIZE],
    len_header: u64,
    len_cipher: u64,
    status: Status,
}

impl Gcm {
    /// Key the cipher and derive the pre-counter block from `iv`
    ///
    /// A 96-bit IV is used directly; any other non-empty IV is hashed.
    pub fn init(key: &[u8], iv: &[u8]) -> Result<Self> {
        validate::parameter(!iv.is_empty(), "iv", "must not be empty")?;
        let cipher = AesCipher::new(key)?;

        let mut h = [0u8; AES_BLOCK_SIZE];
        cipher.encrypt_block(&mut h);
        let mut ghash = GHash::new(&h);
        h.zeroize();

        let mut j0 = [0u8; AES_BLOCK_SIZE];
        if iv.len() == GCM_NONCE_SIZE {
            j0[..GCM_NONCE_SIZE].copy_from_slice(iv);
            j0[15] = 1;
        } else {
            ghash.update_padded(iv);
            let mut lens = [0u8; AES_BLOCK_SIZE];
            lens[8..].copy_from_slice(&((iv.len() as u64) * 8).to_be_bytes());
            ghash.update_block(&lens);
            j0 = ghash.value();
            ghash.reset();
        }

        Ok(Self {
            cipher,
            ghash,
            j0,
            counter: j0,
            len_header: 0,
            len_cipher: 0,
            status: Status::AcceptingHeader,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Absorb additional authenticated data
    pub fn add_header(&mut self, header: &[u8]) -> Result<()> {
        if self.status != Status::AcceptingHeader {
            return Err(Error::Processing {
                operation: "GCM header",
                details: "header after data",
            });
        }
        self.ghash.update_padded(header);
        self.len_header += header.len() as u64;
        if header.len() % AES_BLOCK_SIZE != 0 {
            self.status = Status::AcceptingCipher;
        }
        Ok(())
    }

    /// Encrypt `plain` into `out`, authenticating the ciphertext
    pub fn add_plain(&mut self, out: &mut [u8], plain: &[u8]) -> Result<()> {
        self.begin_data(out.len(), plain.len())?;
        for (src, dst) in plain
            .chunks(AES_BLOCK_SIZE)
            .zip(out.chunks_mut(AES_BLOCK_SIZE))
        {
            let ks = self.next_keystream();
            for ((d, s), k) in dst.iter_mut().zip(src).zip(ks.iter()) {
                *d = s ^ k;
            }
            self.ghash.update_block(&dst[..src.len()]);
        }
        self.end_data(plain.len());
        Ok(())
    }

    /// Decrypt `cipher` into `out`, authenticating the ciphertext
    ///
    /// Plaintext is released before the tag is known; callers that need
    /// all-or-nothing behaviour should use [`gcm_decrypt`].
    pub fn add_cipher(&mut self, out: &mut [u8], cipher: &[u8]) -> Result<()> {
        self.begin_data(out.len(), cipher.len())?;
        for (src, dst) in cipher
            .chunks(AES_BLOCK_SIZE)
            .zip(out.chunks_mut(AES_BLOCK_SIZE))
        {
            self.ghash.update_block(src);
            let ks = self.next_keystream();
            for ((d, s), k) in dst.iter_mut().zip(src).zip(ks.iter()) {
                *d = s ^ k;
            }
        }
        self.end_data(cipher.len());
        Ok(())
    }

    /// Close the stream and compute the tag
    pub fn finish(&mut self) -> Result<Tag<GCM_TAG_SIZE>> {
        if self.status == Status::Finished {
            return Err(Error::Processing {
                operation: "GCM finish",
                details: "already finished",
            });
        }
        let mut lens = [0u8; AES_BLOCK_SIZE];
        lens[..8].copy_from_slice(&(self.len_header * 8).to_be_bytes());
        lens[8..].copy_from_slice(&(self.len_cipher * 8).to_be_bytes());
        self.ghash.update_block(&lens);

        let mut tag = self.j0;
        self.cipher.encrypt_block(&mut tag);
        for (t, g) in tag.iter_mut().zip(self.ghash.value().iter()) {
            *t ^= g;
        }

        self.ghash.reset();
        self.counter.zeroize();
        self.status = Status::Finished;
        Ok(Tag::new(tag))
    }

    fn begin_data(&mut self, out_len: usize, in_len: usize) -> Result<()> {
        match self.status {
            Status::AcceptingHeader | Status::AcceptingCipher => {}
            _ => {
                return Err(Error::Processing {
                    operation: "GCM data",
                    details: "stream closed",
                })
            }
        }
        validate::min_length("GCM output", out_len, in_len)?;
        self.status = Status::AcceptingCipher;
        Ok(())
    }

    fn end_data(&mut self, len: usize) {
        self.len_cipher += len as u64;
        if len % AES_BLOCK_SIZE != 0 {
            self.status = Status::NotAcceptingMore;
        }
    }

    /// Step the low 32 bits of the counter and encrypt it
    fn next_keystream(&mut self) -> [u8; AES_BLOCK_SIZE] {
        let mut ctr = [0u8; 4];
        ctr.copy_from_slice(&self.counter[12..]);
        let next = u32::from_be_bytes(ctr).wrapping_add(1);
        self.counter[12..].copy_from_slice(&next.to_be_bytes());
        let mut block = self.counter;
        self.cipher.encrypt_block(&mut block);
        block
    }
}

impl core::fmt::Debug for Gcm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gcm")
            .field("cipher", &self.cipher)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// One-shot encryption; `ct` must hold at least `pt.len()` bytes
pub fn gcm_encrypt(
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
    pt: &[u8],
    ct: &mut [u8],
) -> Result<Tag<GCM_TAG_SIZE>> {
    let mut g = Gcm::init(key, iv)?;
    g.add_header(aad)?;
    g.add_plain(ct, pt)?;
    g.finish()
}

/// One-shot decryption with tag check
///
/// `tag` may be truncated to any length from [`GCM_MIN_TAG_SIZE`] to 16
/// bytes. On a tag mismatch `pt` is zeroed and an authentication error is
/// returned.
pub fn gcm_decrypt(
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
    ct: &[u8],
    tag: &[u8],
    pt: &mut [u8],
) -> Result<()> {
    validate::min_length("GCM tag", tag.len(), GCM_MIN_TAG_SIZE)?;
    validate::max_length("GCM tag", tag.len(), GCM_TAG_SIZE)?;
    let mut g = Gcm::init(key, iv)?;
    g.add_header(aad)?;
    g.add_cipher(pt, ct)?;
    let expected = g.finish()?;
    let ok = expected.verify_truncated(tag);
    if !ok {
        pt[..ct.len()].zeroize();
    }
    validate::authentication(ok, "GCM")
}
