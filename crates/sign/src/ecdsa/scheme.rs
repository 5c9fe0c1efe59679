#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::fmt;
use core::marker::PhantomData;

use algorithms::{Big, CurveConfig, Ecp};
use api::{Error as ApiError, Result as ApiResult, Serialize, SerializeSecret, Signature};
use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::{sign_scalar, verify_point, ALGORITHM};

/// ECDSA on curve `C` with its paired hash
pub struct Ecdsa<const N: usize, C: CurveConfig<N>>(PhantomData<C>);

/// Verification key: a point of prime order
#[derive(Clone)]
pub struct EcdsaPublicKey<const N: usize, C: CurveConfig<N>> {
    point: Ecp<N, C>,
}

/// Signing key: a scalar in `1..r`
#[derive(Clone)]
pub struct EcdsaSecretKey<const N: usize, C: CurveConfig<N>> {
    scalar: Big<N>,
    _curve: PhantomData<C>,
}

/// Signature components, encoded as `c || d`
#[derive(Clone)]
pub struct EcdsaSignature<const N: usize, C: CurveConfig<N>> {
    c: Big<N>,
    d: Big<N>,
    _curve: PhantomData<C>,
}

#[derive(Clone)]
pub struct EcdsaKeyPair<const N: usize, C: CurveConfig<N>> {
    pub public: EcdsaPublicKey<N, C>,
    pub secret: EcdsaSecretKey<N, C>,
}

impl<const N: usize, C: CurveConfig<N>> EcdsaPublicKey<N, C> {
    pub fn point(&self) -> &Ecp<N, C> {
        &self.point
    }
}

impl<const N: usize, C: CurveConfig<N>> Serialize for EcdsaPublicKey<N, C> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let point = Ecp::<N, C>::from_bytes(bytes);
        if !point.in_subgroup() {
            return Err(ApiError::invalid_key(C::NAME));
        }
        Ok(Self { point })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Ecp::<N, C>::encoded_len(false)];
        self.point.to_bytes(&mut out, false);
        out
    }
}

impl<const N: usize, C: CurveConfig<N>> PartialEq for EcdsaPublicKey<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.point.equals(&other.point)
    }
}

/// Serialised as the uncompressed point encoding
#[cfg(feature = "serde")]
impl<const N: usize, C: CurveConfig<N>> serde::Serialize for EcdsaPublicKey<N, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&Serialize::to_bytes(self))
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize, C: CurveConfig<N>> serde::Deserialize<'de> for EcdsaPublicKey<N, C> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let bytes = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
        <Self as Serialize>::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

impl<const N: usize, C: CurveConfig<N>> fmt::Debug for EcdsaPublicKey<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EcdsaPublicKey").field(&self.point).finish()
    }
}

impl<const N: usize, C: CurveConfig<N>> EcdsaSecretKey<N, C> {
    pub fn public_key(&self) -> EcdsaPublicKey<N, C> {
        EcdsaPublicKey {
            point: Ecp::generator().mul(&self.scalar),
        }
    }
}

impl<const N: usize, C: CurveConfig<N>> SerializeSecret for EcdsaSecretKey<N, C> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        api::error::validate::length("ECDSA private key", bytes.len(), C::MODBYTES)?;
        let mut scalar = Big::from_bytes(bytes);
        scalar.rmod(&C::order());
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

impl<const N: usize, C: CurveConfig<N>> Zeroize for EcdsaSecretKey<N, C> {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }
}

impl<const N: usize, C: CurveConfig<N>> Drop for EcdsaSecretKey<N, C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize, C: CurveConfig<N>> fmt::Debug for EcdsaSecretKey<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcdsaSecretKey({}, [REDACTED])", C::NAME)
    }
}

impl<const N: usize, C: CurveConfig<N>> EcdsaSignature<N, C> {
    /// Split into the `c` and `d` components
    pub fn components(&self) -> (Vec<u8>, Vec<u8>) {
        let mut c = vec![0u8; C::MODBYTES];
        let mut d = vec![0u8; C::MODBYTES];
        self.c.to_bytes(&mut c);
        self.d.to_bytes(&mut d);
        (c, d)
    }
}

impl<const N: usize, C: CurveConfig<N>> Serialize for EcdsaSignature<N, C> {
    /// Parse `c || d`; range checks happen at verification
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let mb = C::MODBYTES;
        api::error::validate::length("ECDSA signature", bytes.len(), 2 * mb)?;
        Ok(Self {
            c: Big::from_bytes(&bytes[..mb]),
            d: Big::from_bytes(&bytes[mb..]),
            _curve: PhantomData,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let (mut c, d) = self.components();
        c.extend_from_slice(&d);
        c
    }
}

impl<const N: usize, C: CurveConfig<N>> fmt::Debug for EcdsaSignature<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaSignature")
            .field("c", &self.c)
            .field("d", &self.d)
            .finish()
    }
}

impl<const N: usize, C: CurveConfig<N>> Signature for Ecdsa<N, C> {
    type PublicKey = EcdsaPublicKey<N, C>;
    type SecretKey = EcdsaSecretKey<N, C>;
    type SignatureData = EcdsaSignature<N, C>;
    type KeyPair = EcdsaKeyPair<N, C>;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let r = C::order();
        let scalar = loop {
            let s = Big::randomnum(&r, rng);
            if !s.iszilch() {
                break s;
            }
        };
        let secret = EcdsaSecretKey {
            scalar,
            _curve: PhantomData,
        };
        let public = secret.public_key();
        debug!("generated {} ECDSA key pair", C::NAME);
        Ok(EcdsaKeyPair { public, secret })
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        let (c, d) = sign_scalar::<N, C, R>(rng, &secret_key.scalar, message)?;
        Ok(EcdsaSignature {
            c,
            d,
            _curve: PhantomData,
        })
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        verify_point(&public_key.point, message, &signature.c, &signature.d)?;
        Ok(())
    }
}
