//! Device key derivation from the Identity Master Secret
//!
//! The boot stage reads the 35-byte IMS, optionally swapped for a
//! development value by the [`SecondStageConfig`] block, and derives:
//!
//! - the public identifiers EPUID and its ES3 boot ROM variant
//! - EPSK, a GOLDILOCKS signing scalar
//! - ESSK, an ED25519 signing and C25519 agreement scalar
//! - EPCK and ERGS, a communication key and a generator seed
//! - ERRK, a reproducible RSA-2048 alias modulus
//!
//! [`CommunicationArea`] holds the results and offers the operations that
//! use them.

#![forbid(unsafe_code)]

pub mod area;
pub mod config;
pub mod derive;
pub mod error;
pub mod ims;

pub use area::CommunicationArea;
pub use config::SecondStageConfig;
pub use derive::{calculate_epuid, calculate_es3_epuid, key_generation, DerivedKeys, Epuid, ErrkPublicKey};
pub use error::{Error, Result};
pub use ims::Ims;
