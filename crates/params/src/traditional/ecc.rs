//! Sizes for the supported elliptic curves
//!
//! Field element and group order sizes in bytes. Public keys are
//! uncompressed (`0x04 | X | Y`) except on Curve25519 (`0x06 | X`).

/// NIST P-256 field size in bytes
pub const NIST256_FIELD_SIZE: usize = 32;

/// Ed25519 / Curve25519 field size in bytes
pub const CURVE25519_FIELD_SIZE: usize = 32;

/// Ed448-Goldilocks field size in bytes
pub const GOLDILOCKS_FIELD_SIZE: usize = 56;

/// Uncompressed NIST P-256 public key size
pub const NIST256_PUBLIC_KEY_SIZE: usize = 2 * NIST256_FIELD_SIZE + 1;

/// Uncompressed Ed25519 public key size
pub const ED25519_PUBLIC_KEY_SIZE: usize = 2 * CURVE25519_FIELD_SIZE + 1;

/// Curve25519 (x-only) public key size
pub const C25519_PUBLIC_KEY_SIZE: usize = CURVE25519_FIELD_SIZE + 1;

/// Uncompressed Goldilocks public key size
pub const GOLDILOCKS_PUBLIC_KEY_SIZE: usize = 2 * GOLDILOCKS_FIELD_SIZE + 1;

/// Leading byte of an uncompressed point
pub const POINT_UNCOMPRESSED: u8 = 0x04;

/// Leading byte of a compressed point with even y
pub const POINT_COMPRESSED_EVEN: u8 = 0x02;

/// Leading byte of a compressed point with odd y
pub const POINT_COMPRESSED_ODD: u8 = 0x03;

/// Leading byte of a Montgomery x-only point
pub const POINT_MONTGOMERY: u8 = 0x06;
