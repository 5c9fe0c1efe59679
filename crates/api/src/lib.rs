//! Public API traits and types for tsbcrypt
//!
//! This crate holds the error type shared by every protocol crate, the
//! capacity-bounded [`Octet`] buffer used at the byte-level interfaces, and
//! the traits through which the key-agreement, signature and encryption
//! schemes are exposed.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod octet;
#[cfg(feature = "alloc")]
pub mod traits;

pub use error::{Error, Result, ResultExt};
pub use octet::Octet;

#[cfg(feature = "alloc")]
pub use traits::{Kem, Pke, Serialize, SerializeSecret, Signature};

#[cfg(feature = "alloc")]
pub use traits::{kem, pke, serialize, signature};
