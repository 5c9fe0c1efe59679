#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::marker::PhantomData;

use algorithms::CurveConfig;
use api::{Kem, Pke, Result as ApiResult, Serialize, SerializeSecret};
use kem::ecdh::public_len;
use kem::{Ecdh, EcdhPublicKey, EcdhSecretKey};
use params::utils::symmetric::AES_BLOCK_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::{ciphertext_len, ecies_decrypt, ecies_encrypt};
use crate::error::Error;

/// ECIES on curve `C` behind the [`Pke`] trait
///
/// Keys are the ECDH keys of `tsbcrypt-kem`. The associated data is
/// authenticated as `P2`; `P1` is left empty. The tag is `AESKEY` bytes.
pub struct Ecies<const N: usize, C: CurveConfig<N>>(PhantomData<C>);

/// `V || C || T`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesCiphertext(pub Vec<u8>);

impl AsRef<[u8]> for EciesCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize, C: CurveConfig<N>> Ecies<N, C> {
    fn tag_len() -> usize {
        C::AESKEY
    }
}

impl<const N: usize, C: CurveConfig<N>> Pke for Ecies<N, C> {
    type PublicKey = EcdhPublicKey<N, C>;
    type SecretKey = EcdhSecretKey<N, C>;
    type Ciphertext = EciesCiphertext;

    fn name() -> &'static str {
        C::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let kp = Ecdh::<N, C>::keypair(rng)?;
        Ok((kp.public, kp.secret))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        let w = pk_recipient.to_bytes();
        let vlen = public_len::<N, C>(false);
        let clen = ciphertext_len(plaintext.len());
        let tlen = Self::tag_len();

        let mut out = vec![0u8; vlen + clen + tlen];
        let (v, rest) = out.split_at_mut(vlen);
        let (c, t) = rest.split_at_mut(clen);
        ecies_encrypt::<N, C, R>(&[], aad.unwrap_or(&[]), rng, &w, plaintext, v, c, t)?;
        Ok(EciesCiphertext(out))
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> ApiResult<Vec<u8>> {
        let vlen = public_len::<N, C>(false);
        let tlen = Self::tag_len();
        let bytes = ciphertext.as_ref();
        if bytes.len() < vlen + AES_BLOCK_SIZE + tlen {
            return Err(Error::InvalidCiphertextFormat("ciphertext too short").into());
        }
        let clen = bytes.len() - vlen - tlen;
        if clen % AES_BLOCK_SIZE != 0 {
            return Err(Error::InvalidCiphertextFormat("body is not block aligned").into());
        }

        let (v, rest) = bytes.split_at(vlen);
        let (c, t) = rest.split_at(clen);
        let u = sk_recipient.to_bytes_zeroizing();
        let mut m = vec![0u8; clen];
        let n = match ecies_decrypt::<N, C>(&[], aad.unwrap_or(&[]), v, c, t, &u, &mut m) {
            Ok(n) => n,
            Err(e) => {
                m.zeroize();
                return Err(e.into());
            }
        };
        m.truncate(n);
        Ok(m)
    }
}
