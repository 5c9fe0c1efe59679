//! Authenticated encryption
//!
//! AES-GCM (NIST SP 800-38D) with a streaming interface for large or
//! incrementally available messages and one-shot helpers.

pub mod gcm;

pub use gcm::{gcm_decrypt, gcm_encrypt, Gcm};
