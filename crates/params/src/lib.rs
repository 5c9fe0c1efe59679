//! Constant values for tsbcrypt cryptographic operations

#![no_std]

pub mod device;
pub mod traditional;
pub mod utils;
