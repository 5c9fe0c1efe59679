//! # tsbcrypt
//!
//! Allocation-free cryptographic core for UniPro bridge boot stages.
//!
//! ## Features
//!
//! - `algorithms`: big-integer, field and curve arithmetic, SHA, the
//!   CSPRNG, AES, GCM, HMAC, the KDFs and the RSA primitive
//! - `kem`: ECDH
//! - `sign`: ECDSA and RSA PKCS#1 v1.5 signatures
//! - `pke`: ECIES and RSA-OAEP
//! - `ims`: device key derivation from the Identity Master Secret
//! - `full` (default): all of the above
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports the member crates:
//!
//! - [`tsbcrypt-api`]: error type, `Octet` buffer and scheme traits
//! - [`tsbcrypt-algorithms`]: the primitives
//! - [`tsbcrypt-kem`], [`tsbcrypt-sign`], [`tsbcrypt-pke`]: protocols
//! - [`tsbcrypt-ims`]: the device key schedule

#![cfg_attr(not(feature = "std"), no_std)]

pub use tsbcrypt_api as api;
pub use tsbcrypt_common as common;
pub use tsbcrypt_internal as internal;
pub use tsbcrypt_params as params;

#[cfg(feature = "algorithms")]
pub use tsbcrypt_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use tsbcrypt_kem as kem;

#[cfg(feature = "sign")]
pub use tsbcrypt_sign as sign;

#[cfg(feature = "pke")]
pub use tsbcrypt_pke as pke;

#[cfg(feature = "ims")]
pub use tsbcrypt_ims as ims;

/// Common imports for tsbcrypt users
pub mod prelude {
    pub use crate::api::{Error, Octet, Result};

    #[cfg(feature = "alloc")]
    pub use crate::api::{Kem, Pke, Serialize, SerializeSecret, Signature};

    pub use crate::common::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        Csprng, CurveConfig, HashFunction, Sha1, Sha256, Sha384, Sha512, C25519, Ed25519,
        Goldilocks, Nist256,
    };

    #[cfg(feature = "ims")]
    pub use crate::ims::{CommunicationArea, Ims, SecondStageConfig};
}
