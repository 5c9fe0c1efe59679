#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::marker::PhantomData;

use algorithms::rsa::{key_pair, RsaPrivateKey, RsaPublicKey};
use algorithms::HashFunction;
use api::{Result as ApiResult, Signature};
use params::traditional::rsa::RSA_PUBLIC_EXPONENT;
use rand::{CryptoRng, RngCore};

use super::{pkcs15_sign, pkcs15_verify, ALGORITHM};

/// RSA PKCS#1 v1.5 signatures with hash `H` over a `256 * FL`-bit modulus
pub struct RsaPkcs1<const FL: usize, const HL: usize, H: HashFunction>(PhantomData<H>);

/// Signature bytes, the size of the modulus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaSignature(pub Vec<u8>);

impl AsRef<[u8]> for RsaSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Clone)]
pub struct RsaKeyPair<const FL: usize, const HL: usize> {
    pub public: RsaPublicKey<FL>,
    pub secret: RsaPrivateKey<HL>,
}

impl<const FL: usize, const HL: usize, H: HashFunction> Signature for RsaPkcs1<FL, HL, H> {
    type PublicKey = RsaPublicKey<FL>;
    type SecretKey = RsaPrivateKey<HL>;
    type SignatureData = RsaSignature;
    type KeyPair = RsaKeyPair<FL, HL>;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (secret, public) = key_pair::<FL, HL, R>(rng, RSA_PUBLIC_EXPONENT as isize, None, None)?;
        Ok(RsaKeyPair { public, secret })
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        _rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        let mut sig = vec![0u8; RsaPublicKey::<FL>::BYTES];
        pkcs15_sign::<H, FL, HL>(secret_key, message, &mut sig)?;
        Ok(RsaSignature(sig))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        pkcs15_verify::<H, FL>(public_key, message, &signature.0)?;
        Ok(())
    }
}
