//! Hash functions
//!
//! SHA-1 and SHA-2 as streaming state machines. [`HashFunction::finalize`]
//! pads, emits the digest and puts the state back to its initial value, so
//! one instance can hash several messages in turn.

pub mod sha1;
pub mod sha2;

pub use sha1::Sha1;
pub use sha2::{Sha256, Sha384, Sha512};

use zeroize::Zeroize;

use crate::error::Result;

/// Streaming hash
pub trait HashFunction: Clone + Zeroize {
    /// Digest type, `OUTPUT_SIZE` bytes
    type Output: AsRef<[u8]> + Clone;

    const OUTPUT_SIZE: usize;
    const BLOCK_SIZE: usize;

    /// A fresh state
    fn new() -> Self;

    /// Absorb `data`
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Absorb one byte
    fn process_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.update(&[byte])
    }

    /// Pad, emit the digest and reset
    fn finalize(&mut self) -> Result<Self::Output>;

    fn output_size() -> usize {
        Self::OUTPUT_SIZE
    }

    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }

    fn name() -> &'static str;

    /// One-shot hash of `data`
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}
