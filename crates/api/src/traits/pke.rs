//! Trait definition for public key encryption

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Public key encryption scheme
pub trait Pke {
    type PublicKey: Clone;

    type SecretKey: Zeroize + Clone;

    /// Serialized ciphertext
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Algorithm name
    fn name() -> &'static str;

    /// Generate a new key pair
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypt `plaintext` to the recipient
    ///
    /// `aad` is bound into the ciphertext where the scheme supports it
    /// (ECIES authenticates it; OAEP uses it as the encoding label).
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypt and authenticate
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;
}
