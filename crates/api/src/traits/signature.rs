//! Digital signature traits
//!
//! Signing takes the secret key by shared reference; no scheme needs to
//! mutate key material to sign.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque: implementors should not expose `AsMut<[u8]>`.
pub trait Signature {
    type PublicKey: Clone;

    /// Secret key, zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    type SignatureData: Clone;

    /// Key pair type (typically public and secret key together)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign `message`
    ///
    /// Randomized schemes draw their per-signature nonce from `rng`.
    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}
