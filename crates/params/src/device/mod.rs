//! Device key schedule constants
//!
//! Tags and masks for deriving per-device keys from the 35-byte Identity
//! Master Secret (IMS).

/// Size of the fused IMS in bytes
pub const IMS_SIZE: usize = 35;

/// Bytes of the IMS that feed the hash chains
pub const IMS_HASHED_BYTES: usize = 32;

/// Size of the public device identifier
pub const EPUID_SIZE: usize = 8;

/// XOR mask applied to the IMS on the identifier path
pub const EPUID_MASK: u8 = 0x3d;

/// XOR mask applied to the IMS on the secret-key path
pub const KEY_MASK: u8 = 0x5a;

/// Repetitions of the padding byte on the identifier path of the faulty boot ROM
pub const ES3_PAD_REPEAT: usize = 8;

/// Padding byte repeated after each chained hash
pub const CHAIN_PAD: u8 = 0x01;

/// Tag of the Ed448 primary signing key (EPSK)
pub const TAG_EPSK: u8 = 0x01;

/// Tag of the Ed25519 secondary signing key (ESSK)
pub const TAG_ESSK: u8 = 0x02;

/// Tag of the RSA alias key material (ERRK)
pub const TAG_ERRK: u8 = 0x03;

/// Tag of the primary communication key (EPCK)
pub const TAG_EPCK: u8 = 0x04;

/// Tag of the random generator seed (ERGS)
pub const TAG_ERGS: u8 = 0x05;

/// Size of the Ed448-sized primary signing scalar
pub const EPSK_SIZE: usize = 56;

/// Size of each 32-byte derived key
pub const DERIVED_KEY_SIZE: usize = 32;

/// Bytes per ERRK prime candidate
pub const ERRK_PRIME_SIZE: usize = 128;

/// Sentinel at the head of the second-stage configuration block
pub const SECOND_STAGE_SENTINEL: &[u8; 16] = b"2ndStageFWConfig";

/// Size of the second-stage configuration block
pub const SECOND_STAGE_CONFIG_SIZE: usize = 64;
