//! Fixed-size output types
//!
//! [`Digest`] carries a hash output and [`Tag`] a MAC or GCM tag. Both
//! zeroize on drop and compare in constant time.

pub mod digest;
pub mod tag;

pub use digest::Digest;
pub use tag::Tag;

/// Constant-time equality
pub trait ConstantTimeEq {
    fn ct_eq(&self, other: &Self) -> bool;
}
