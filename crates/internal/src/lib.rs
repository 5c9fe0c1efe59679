//! Internal utilities for tsbcrypt
//!
//! Not part of the public API. Other tsbcrypt crates share these helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice, word_bit_mask, word_eq_mask};
