//! Traits for byte serialization of key material

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::Result;
use zeroize::Zeroizing;

/// Public types that can be serialized to and from bytes
pub trait Serialize: Sized {
    /// Parse and validate
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Wire encoding
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret types whose encoding is wiped on drop
pub trait SerializeSecret: Sized {
    /// Parse and validate. The caller should wipe `bytes` afterwards.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encoding that is zeroized on drop
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
