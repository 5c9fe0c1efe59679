//! Scheme-level traits
//!
//! Every trait takes its randomness from a caller-supplied `RngCore +
//! CryptoRng`, so the seeded device generator and test generators plug in
//! the same way.

pub mod kem;
pub mod pke;
pub mod serialize;
pub mod signature;

pub use kem::Kem;
pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
pub use signature::Signature;
