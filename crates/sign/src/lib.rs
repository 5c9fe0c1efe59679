//! Digital signature schemes
//!
//! ECDSA over the Weierstrass and Edwards curves of `tsbcrypt-algorithms`
//! and RSA with PKCS#1 v1.5 encoding. Both are available as byte-level
//! primitives and through the [`api::Signature`] trait.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod ecdsa;
pub mod error;
pub mod rsa;

pub use ecdsa::{sp_dsa, vp_dsa};
pub use error::{Error, Result};
pub use rsa::{pkcs15_sign, pkcs15_verify};

#[cfg(feature = "alloc")]
pub use ecdsa::{Ecdsa, EcdsaKeyPair, EcdsaPublicKey, EcdsaSecretKey, EcdsaSignature};
#[cfg(feature = "alloc")]
pub use rsa::{RsaKeyPair, RsaPkcs1, RsaSignature};

#[cfg(feature = "alloc")]
pub type EcdsaNist256 = Ecdsa<5, algorithms::Nist256>;
#[cfg(feature = "alloc")]
pub type EcdsaEd25519 = Ecdsa<5, algorithms::Ed25519>;
#[cfg(feature = "alloc")]
pub type EcdsaGoldilocks = Ecdsa<9, algorithms::Goldilocks>;

/// RSA-2048 PKCS#1 v1.5 with SHA-256
#[cfg(feature = "alloc")]
pub type Rsa2048Sha256 = RsaPkcs1<8, 4, algorithms::Sha256>;
