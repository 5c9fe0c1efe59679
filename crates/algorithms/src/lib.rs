//! Cryptographic engines and primitives for tsbcrypt
//!
//! Fixed-width multi-precision arithmetic ([`arith`]), prime-field and
//! elliptic-curve groups ([`ec`]), RSA-size integers and the RSA primitive
//! ([`rsa`]), SHA-1/SHA-2 ([`hash`]), a seeded CSPRNG ([`rng`]), AES with
//! its chaining modes ([`block`]), AES-GCM ([`aead`]), HMAC ([`mac`]) and
//! hash-based KDFs ([`kdf`]).
//!
//! Everything works on caller-provided fixed-size buffers and never
//! allocates. The arithmetic layers cannot fail; byte-level primitives
//! return [`Error`] for malformed input.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod arith;
pub use arith::{Big, DBig, Ff, FfWide, FieldConfig, Fp};

pub mod ec;
pub use ec::{
    C25519, C25519Point, CurveConfig, CurveType, Ecp, Ed25519, Ed25519Point, Goldilocks,
    GoldilocksPoint, Nist256, Nist256Point,
};

pub mod hash;
pub use hash::{HashFunction, Sha1, Sha256, Sha384, Sha512};

pub mod rng;
pub use rng::Csprng;

pub mod block;
pub use block::{cbc_iv0_decrypt, cbc_iv0_encrypt, Aes, AesCipher, BlockCipher, Mode};

pub mod aead;
pub use aead::{gcm_decrypt, gcm_encrypt, Gcm};

pub mod mac;
pub use mac::{hmac, Hmac};

pub mod kdf;
pub use kdf::{kdf1, kdf2, mgf1, pbkdf2};

pub mod rsa;
pub use rsa::{RsaPrivateKey, RsaPublicKey};

pub mod types;
pub use types::{ConstantTimeEq, Digest, Tag};

pub use common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
