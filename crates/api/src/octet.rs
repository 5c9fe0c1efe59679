//! Capacity-bounded byte buffer
//!
//! [`Octet`] is the byte string exchanged by the protocol layer. It owns a
//! fixed `MAX`-byte array and a current length. Every append truncates at
//! capacity instead of failing. Callers rely on that behaviour when they
//! cap a MAC tag or a derived key at a requested length.

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Length-prefixed, capacity-bounded byte buffer
#[derive(Clone)]
pub struct Octet<const MAX: usize> {
    len: usize,
    val: [u8; MAX],
}

impl<const MAX: usize> Octet<MAX> {
    /// An empty buffer
    pub const fn new() -> Self {
        Self {
            len: 0,
            val: [0u8; MAX],
        }
    }

    /// Copy `bytes`, keeping at most `MAX` of them
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut o = Self::new();
        o.join_bytes(bytes);
        o
    }

    /// Decode a hex string, truncating at capacity
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.as_bytes();
        if s.len() % 2 != 0 {
            return Err(Error::serialization("odd-length hex string"));
        }
        let mut o = Self::new();
        for pair in s.chunks(2).take(MAX) {
            let mut b = [0u8; 1];
            hex::decode_to_slice(pair, &mut b)
                .map_err(|_| Error::serialization("invalid hex digit"))?;
            o.join_byte(b[0], 1);
        }
        Ok(o)
    }

    /// Lowercase hex of the used bytes
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> alloc_string::String {
        hex::encode(self.as_slice())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity
    pub const fn max(&self) -> usize {
        MAX
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.val[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.val[..self.len]
    }

    /// Set the length, zero-filling any newly exposed bytes
    ///
    /// Lengths beyond capacity are clamped.
    pub fn resize(&mut self, len: usize) {
        let len = len.min(MAX);
        if len > self.len {
            self.val[self.len..len].fill(0);
        }
        self.len = len;
    }

    /// Forget the contents without wiping them
    pub fn empty(&mut self) {
        self.len = 0;
    }

    /// Wipe the whole buffer and set the length to zero
    pub fn clear(&mut self) {
        self.val.zeroize();
        self.len = 0;
    }

    /// Append bytes up to capacity
    pub fn join_bytes(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(MAX - self.len);
        self.val[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
    }

    /// Append `rep` copies of `b` up to capacity
    pub fn join_byte(&mut self, b: u8, rep: usize) {
        let n = rep.min(MAX - self.len);
        self.val[self.len..self.len + n].fill(b);
        self.len += n;
    }

    /// Append another octet up to capacity
    pub fn join_octet<const M: usize>(&mut self, other: &Octet<M>) {
        self.join_bytes(other.as_slice());
    }

    /// Append `x` as a `len`-byte big-endian integer
    pub fn join_int(&mut self, x: u64, len: usize) {
        let mut buf = [0u8; 16];
        let len = len.min(buf.len());
        internal::endian::write_be_truncated(x, &mut buf[..len]);
        self.join_bytes(&buf[..len]);
    }

    /// XOR the overlapping prefix of `other` into `self`
    pub fn xor<const M: usize>(&mut self, other: &Octet<M>) {
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a ^= *b;
        }
    }

    /// XOR every used byte with `b`
    pub fn xor_byte(&mut self, b: u8) {
        for a in self.as_mut_slice() {
            *a ^= b;
        }
    }

    /// Constant-time comparison of length and contents
    pub fn comp<const M: usize>(&self, other: &Octet<M>) -> bool {
        internal::ct_eq(self.as_slice(), other.as_slice())
    }

    /// Constant-time comparison of the first `n` bytes
    ///
    /// False if either buffer is shorter than `n`.
    pub fn ncomp<const M: usize>(&self, other: &Octet<M>, n: usize) -> bool {
        if n > self.len || n > other.len {
            return false;
        }
        self.val[..n].ct_eq(&other.val[..n]).into()
    }

    /// Split at `n`: `self` keeps the first `n` bytes, the rest is returned
    pub fn chop<const M: usize>(&mut self, n: usize) -> Octet<M> {
        let mut tail = Octet::<M>::new();
        if n < self.len {
            tail.join_bytes(&self.val[n..self.len]);
            self.len = n;
        }
        tail
    }

    /// Keep at most the first `n` bytes
    pub fn truncate(&mut self, n: usize) {
        self.len = self.len.min(n);
    }

    /// Drop the first `n` bytes
    pub fn shl(&mut self, n: usize) {
        if n >= self.len {
            self.len = 0;
            return;
        }
        self.val.copy_within(n..self.len, 0);
        self.len -= n;
    }

    /// Right-justify to exactly `n` bytes with leading zeros
    ///
    /// Fails if the contents are already longer than `n` or `n` exceeds
    /// capacity; the buffer is left untouched in that case.
    pub fn pad(&mut self, n: usize) -> Result<()> {
        if n > MAX || self.len > n {
            return Err(Error::invalid_length("octet pad", n, self.len));
        }
        let d = n - self.len;
        self.val.copy_within(0..self.len, d);
        self.val[..d].fill(0);
        self.len = n;
        Ok(())
    }

    /// Replace the contents with `n` random bytes (clamped to capacity)
    pub fn rand<R: RngCore + CryptoRng>(&mut self, rng: &mut R, n: usize) {
        let n = n.min(MAX);
        rng.fill_bytes(&mut self.val[..n]);
        self.len = n;
    }
}

impl<const MAX: usize> Default for Octet<MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX: usize> AsRef<[u8]> for Octet<MAX> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const MAX: usize> PartialEq for Octet<MAX> {
    fn eq(&self, other: &Self) -> bool {
        self.comp(other)
    }
}

impl<const MAX: usize> Eq for Octet<MAX> {}

impl<const MAX: usize> Zeroize for Octet<MAX> {
    fn zeroize(&mut self) {
        self.clear();
    }
}

impl<const MAX: usize> Drop for Octet<MAX> {
    fn drop(&mut self) {
        self.val.zeroize();
    }
}

impl<const MAX: usize> fmt::Debug for Octet<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Octet<{}>(len={})", MAX, self.len)
    }
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string as alloc_string;
#[cfg(feature = "std")]
use std::string as alloc_string;
