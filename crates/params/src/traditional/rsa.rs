//! Constants for RSA

/// Modulus size of the device alias key in bits
pub const RSA_MODULUS_2048: usize = 2048;

/// Smaller modulus used for fast key-generation round trips
pub const RSA_MODULUS_1024: usize = 1024;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Byte length of an RSA-2048 modulus (the RSA field size)
pub const RSA_2048_BYTE_LENGTH: usize = RSA_MODULUS_2048 / 8;

/// Byte length of an RSA-1024 modulus
pub const RSA_1024_BYTE_LENGTH: usize = RSA_MODULUS_1024 / 8;

/// Bits in one FF limb
pub const FF_LIMB_BITS: usize = 256;

/// Bytes in one FF limb
pub const FF_LIMB_BYTES: usize = FF_LIMB_BITS / 8;

/// Excess bits carried by the top limb before truncation
pub const FF_TOP_EXCESS_BITS: usize = 32;

/// Miller-Rabin rounds performed by the primality test
pub const MILLER_RABIN_ROUNDS: usize = 10;

/// Product of the odd primes up to 19, used as a fast sieve
pub const SMALL_PRIME_PRODUCT: i64 = 4_849_845;

/// Largest modulus the padding and signature layers handle, in bytes
pub const RSA_MAX_BYTE_LENGTH: usize = RSA_2048_BYTE_LENGTH;
