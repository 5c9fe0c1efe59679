#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::marker::PhantomData;

use algorithms::rsa::{key_pair, RsaPrivateKey, RsaPublicKey};
use algorithms::HashFunction;
use api::{Pke, Result as ApiResult};
use log::debug;
use params::traditional::rsa::RSA_PUBLIC_EXPONENT;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{oaep_decrypt, oaep_encrypt};

/// RSA-OAEP with hash `H` over a `256 * FL`-bit modulus
///
/// The associated data is used as the OAEP label.
pub struct RsaOaep<const FL: usize, const HL: usize, H: HashFunction>(PhantomData<H>);

/// Ciphertext bytes, the size of the modulus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaCiphertext(pub Vec<u8>);

impl AsRef<[u8]> for RsaCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const FL: usize, const HL: usize, H: HashFunction> Pke for RsaOaep<FL, HL, H> {
    type PublicKey = RsaPublicKey<FL>;
    type SecretKey = RsaPrivateKey<HL>;
    type Ciphertext = RsaCiphertext;

    fn name() -> &'static str {
        "RSA-OAEP"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let (secret, public) = key_pair::<FL, HL, R>(rng, RSA_PUBLIC_EXPONENT as isize, None, None)?;
        debug!("generated {}-bit RSA key pair", 256 * FL);
        Ok((public, secret))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let mut c = vec![0u8; RsaPublicKey::<FL>::BYTES];
        oaep_encrypt::<H, FL, R>(pk_recipient, plaintext, aad, rng, &mut c)?;
        Ok(RsaCiphertext(c))
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> ApiResult<Vec<u8>> {
        let mut m = vec![0u8; RsaPublicKey::<FL>::BYTES];
        match oaep_decrypt::<H, FL, HL>(sk_recipient, &ciphertext.0, aad, &mut m) {
            Ok(n) => {
                m.truncate(n);
                Ok(m)
            }
            Err(e) => {
                m.zeroize();
                Err(e.into())
            }
        }
    }
}
