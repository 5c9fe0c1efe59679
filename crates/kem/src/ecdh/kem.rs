#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::fmt;
use core::marker::PhantomData;

use algorithms::{kdf2, Big, CurveConfig, Ecp, HashFunction};
use api::{Error as ApiError, Kem, Result as ApiResult, Serialize, SerializeSecret};
use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{agree, public_key_validate, random_scalar, scalar_from_bytes};

/// ECDH key agreement on curve `C`, exposed as a KEM
pub struct Ecdh<const N: usize, C: CurveConfig<N>>(PhantomData<C>);

/// Validated public point, serialised uncompressed
#[derive(Clone)]
pub struct EcdhPublicKey<const N: usize, C: CurveConfig<N>> {
    point: Ecp<N, C>,
}

/// Private scalar in `1..r`
#[derive(Clone)]
pub struct EcdhSecretKey<const N: usize, C: CurveConfig<N>> {
    scalar: Big<N>,
    _curve: PhantomData<C>,
}

/// KDF output agreed by both sides
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EcdhSharedSecret(Vec<u8>);

#[derive(Clone)]
pub struct EcdhKeyPair<const N: usize, C: CurveConfig<N>> {
    pub public: EcdhPublicKey<N, C>,
    pub secret: EcdhSecretKey<N, C>,
}

impl<const N: usize, C: CurveConfig<N>> EcdhPublicKey<N, C> {
    pub fn point(&self) -> &Ecp<N, C> {
        &self.point
    }
}

impl<const N: usize, C: CurveConfig<N>> PartialEq for EcdhPublicKey<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.point.equals(&other.point)
    }
}

impl<const N: usize, C: CurveConfig<N>> Serialize for EcdhPublicKey<N, C> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let point = public_key_validate::<N, C>(bytes)?;
        Ok(Self { point })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Ecp::<N, C>::encoded_len(false)];
        self.point.to_bytes(&mut out, false);
        out
    }
}

/// Serialised as the uncompressed point encoding
#[cfg(feature = "serde")]
impl<const N: usize, C: CurveConfig<N>> serde::Serialize for EcdhPublicKey<N, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&Serialize::to_bytes(self))
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize, C: CurveConfig<N>> serde::Deserialize<'de> for EcdhPublicKey<N, C> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let bytes = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
        <Self as Serialize>::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

impl<const N: usize, C: CurveConfig<N>> fmt::Debug for EcdhPublicKey<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EcdhPublicKey").field(&self.point).finish()
    }
}

impl<const N: usize, C: CurveConfig<N>> EcdhSecretKey<N, C> {
    /// Public key for this scalar
    pub fn public_key(&self) -> EcdhPublicKey<N, C> {
        EcdhPublicKey {
            point: Ecp::generator().mul(&self.scalar),
        }
    }

    /// Agreed x-coordinate with `peer`
    pub fn agree(&self, peer: &EcdhPublicKey<N, C>) -> ApiResult<Zeroizing<Vec<u8>>> {
        let mut z = Zeroizing::new(vec![0u8; C::MODBYTES]);
        agree(&self.scalar, &peer.point, &mut z)?;
        Ok(z)
    }
}

impl<const N: usize, C: CurveConfig<N>> SerializeSecret for EcdhSecretKey<N, C> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        api::error::validate::length("ECDH private key", bytes.len(), C::MODBYTES)?;
        let scalar = scalar_from_bytes::<N, C>(bytes);
        if scalar.iszilch() {
            return Err(ApiError::invalid_key(C::NAME));
        }
        Ok(Self {
            scalar,
            _curve: PhantomData,
        })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(vec![0u8; C::MODBYTES]);
        self.scalar.to_bytes(&mut out);
        out
    }
}

impl<const N: usize, C: CurveConfig<N>> Zeroize for EcdhSecretKey<N, C> {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }
}

impl<const N: usize, C: CurveConfig<N>> Drop for EcdhSecretKey<N, C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize, C: CurveConfig<N>> fmt::Debug for EcdhSecretKey<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdhSecretKey({}, [REDACTED])", C::NAME)
    }
}

impl EcdhSharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl SerializeSecret for EcdhSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl fmt::Debug for EcdhSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdhSharedSecret({} bytes, [REDACTED])", self.0.len())
    }
}

impl<const N: usize, C: CurveConfig<N>> Ecdh<N, C> {
    /// KDF2 of `z`, bound to the encapsulated key
    fn derive(z: &[u8], ciphertext: &EcdhPublicKey<N, C>) -> ApiResult<EcdhSharedSecret> {
        let info = ciphertext.to_bytes();
        let mut k = vec![0u8; <C::Hash as HashFunction>::OUTPUT_SIZE];
        kdf2::<C::Hash>(z, Some(&info), k.len(), &mut k)?;
        Ok(EcdhSharedSecret(k))
    }
}

impl<const N: usize, C: CurveConfig<N>> Kem for Ecdh<N, C> {
    type PublicKey = EcdhPublicKey<N, C>;
    type SecretKey = EcdhSecretKey<N, C>;
    type SharedSecret = EcdhSharedSecret;
    type Ciphertext = EcdhPublicKey<N, C>;
    type KeyPair = EcdhKeyPair<N, C>;

    fn name() -> &'static str {
        C::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let secret = EcdhSecretKey {
            scalar: random_scalar::<N, C, R>(rng),
            _curve: PhantomData,
        };
        let public = secret.public_key();
        debug!("generated {} ECDH key pair", C::NAME);
        Ok(EcdhKeyPair { public, secret })
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let eph = Self::keypair(rng)?;
        let z = eph.secret.agree(public_key)?;
        let shared = Self::derive(&z, &eph.public)?;
        Ok((eph.public, shared))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let z = secret_key.agree(ciphertext)?;
        Self::derive(&z, ciphertext)
    }
}
