//! Common implementations and shared functionality for tsbcrypt
//!
//! Secret-holding wrappers used by the arithmetic engines and by the device
//! key schedule. Every type here zeroizes its contents on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
