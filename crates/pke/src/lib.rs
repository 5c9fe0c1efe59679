//! Public key encryption
//!
//! ECIES on every supported curve and RSA with OAEP padding, as byte-level
//! functions and through the [`api::Pke`] trait.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod ecies;
pub mod error;
pub mod rsa;

pub use ecies::{ecies_decrypt, ecies_encrypt};
pub use error::{Error, Result};
pub use rsa::{oaep_decrypt, oaep_encrypt};

#[cfg(feature = "alloc")]
pub use ecies::{Ecies, EciesCiphertext};
#[cfg(feature = "alloc")]
pub use rsa::{RsaCiphertext, RsaOaep};

#[cfg(feature = "alloc")]
pub type EciesNist256 = Ecies<5, algorithms::Nist256>;
#[cfg(feature = "alloc")]
pub type EciesEd25519 = Ecies<5, algorithms::Ed25519>;
#[cfg(feature = "alloc")]
pub type EciesC25519 = Ecies<5, algorithms::C25519>;
#[cfg(feature = "alloc")]
pub type EciesGoldilocks = Ecies<9, algorithms::Goldilocks>;

/// RSA-2048 OAEP with SHA-256
#[cfg(feature = "alloc")]
pub type Rsa2048OaepSha256 = RsaOaep<8, 4, algorithms::Sha256>;
