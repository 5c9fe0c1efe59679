//! Elliptic-curve key agreement
//!
//! This crate implements ECDH over the curves provided by
//! `tsbcrypt-algorithms`, both as IEEE 1363 style byte-level primitives and
//! through the [`api::Kem`] trait.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod ecdh;
pub mod error;

pub use ecdh::{key_pair_from_secret, key_pair_generate, public_key_validate, svdp_dh};
pub use error::{Error, Result};

#[cfg(feature = "alloc")]
pub use ecdh::{Ecdh, EcdhKeyPair, EcdhPublicKey, EcdhSecretKey, EcdhSharedSecret};

#[cfg(feature = "alloc")]
pub type EcdhNist256 = Ecdh<5, algorithms::Nist256>;
#[cfg(feature = "alloc")]
pub type EcdhEd25519 = Ecdh<5, algorithms::Ed25519>;
#[cfg(feature = "alloc")]
pub type EcdhC25519 = Ecdh<5, algorithms::C25519>;
#[cfg(feature = "alloc")]
pub type EcdhGoldilocks = Ecdh<9, algorithms::Goldilocks>;
