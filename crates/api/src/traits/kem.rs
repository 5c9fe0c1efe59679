//! Key encapsulation
//!
//! Diffie-Hellman key agreement is exposed through this trait: the
//! "ciphertext" is the sender's ephemeral public key and the shared secret
//! is derived from the agreed x-coordinate.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Key Encapsulation Mechanism
pub trait Kem {
    /// Validated public key
    type PublicKey: Clone + Serialize;

    /// Secret key, wiped on drop by implementors
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret. Convert it to application keys straight away.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Encapsulated key
    type Ciphertext: Clone + Serialize;

    /// Public and secret key together
    type KeyPair: Clone;

    /// Algorithm name
    fn name() -> &'static str;

    /// Generate a new keypair from `rng`
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a fresh shared secret to `public_key`
    ///
    /// Implementations validate the public key before use.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Recover the shared secret
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
