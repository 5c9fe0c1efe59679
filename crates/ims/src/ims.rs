//! The fused Identity Master Secret

use core::fmt;

use params::device::{IMS_HASHED_BYTES, IMS_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{self, Result};

/// 35 bytes of fused device secret
///
/// The first 32 bytes feed every hash chain. The last three carry the
/// 24-bit offset applied to the ERRK prime candidates.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Ims([u8; IMS_SIZE]);

impl Ims {
    pub const fn new(bytes: [u8; IMS_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        error::length("IMS", bytes.len(), IMS_SIZE)?;
        let mut ims = [0u8; IMS_SIZE];
        ims.copy_from_slice(bytes);
        Ok(Self(ims))
    }

    pub fn as_bytes(&self) -> &[u8; IMS_SIZE] {
        &self.0
    }

    pub(crate) fn hashed(&self) -> &[u8] {
        &self.0[..IMS_HASHED_BYTES]
    }

    /// Offsets added to the p and q candidates, in units of four
    ///
    /// The trailing three bytes are a big-endian 24-bit value whose high
    /// and low 12-bit halves go to p and q respectively.
    pub(crate) fn prime_offsets(&self) -> (u32, u32) {
        let t = &self.0[IMS_HASHED_BYTES..];
        let delta = (u32::from(t[0]) << 16) | (u32::from(t[1]) << 8) | u32::from(t[2]);
        (delta >> 12, delta & 0xfff)
    }
}

impl From<[u8; IMS_SIZE]> for Ims {
    fn from(bytes: [u8; IMS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Ims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ims([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_slice_checks_length() {
        assert!(Ims::from_slice(&[0u8; 35]).is_ok());
        assert_eq!(
            Ims::from_slice(&[0u8; 32]),
            Err(Error::Length {
                context: "IMS",
                expected: 35,
                actual: 32
            })
        );
    }

    #[test]
    fn test_prime_offsets_split_trailing_bytes() {
        let mut b = [0u8; 35];
        b[32..].copy_from_slice(&[0xab, 0xcd, 0xef]);
        assert_eq!(Ims::new(b).prime_offsets(), (0xabc, 0xdef));
    }

    #[test]
    fn test_debug_is_redacted() {
        let s = format!("{:?}", Ims::new([0x42; 35]));
        assert!(!s.contains("42"));
    }
}
