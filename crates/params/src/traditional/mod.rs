//! Constants for RSA and the elliptic curves

pub mod ecc;
pub mod rsa;
