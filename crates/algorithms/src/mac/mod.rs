//! Message authentication codes

pub mod hmac;

pub use hmac::{hmac, hmac_verify, Hmac};
