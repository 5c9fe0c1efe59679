//! Authentication tag with a compile-time size

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ConstantTimeEq;
use crate::error::{validate, Result};

/// Tag of `N` bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Tag<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Tag<N> {
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Tag::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Constant-time comparison against a received tag of any length
    ///
    /// A truncated tag is compared on its prefix; an empty one never matches.
    pub fn verify_truncated(&self, received: &[u8]) -> bool {
        if received.is_empty() || received.len() > N {
            return false;
        }
        internal::ct_eq(&self.data[..received.len()], received)
    }
}

impl<const N: usize> AsRef<[u8]> for Tag<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> ConstantTimeEq for Tag<N> {
    fn ct_eq(&self, other: &Self) -> bool {
        internal::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> fmt::Debug for Tag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>(", N)?;
        for b in &self.data {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
