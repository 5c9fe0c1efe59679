use super::*;
use crate::hash::{Sha1, Sha256, Sha512};

fn z() -> Vec<u8> {
    (0u8..32).collect()
}

#[test]
fn test_kdf2_with_shared_info() {
    let mut key = [0u8; 48];
    kdf2::<Sha256>(&z(), Some(b"shared info"), 48, &mut key).unwrap();
    assert_eq!(
        hex::encode(key),
        "a2ba25392f91013464ed530b7260876d7d85630fd24cd7894a49600ab4c7a8c3\
         3354555992b455ebe41e722867504954"
    );
}

#[test]
fn test_kdf2_sha512_multi_block() {
    let mut key = [0u8; 100];
    kdf2::<Sha512>(&z(), Some(b"abc"), 100, &mut key).unwrap();
    assert!(hex::encode(key).starts_with("fb3d1e8727ad3b207d1516a3c773ca0e"));
    assert!(hex::encode(key).ends_with("c349fcba0d404685f3"));
}

#[test]
fn test_kdf1_counter_offset_from_kdf2() {
    // KDF1 block 1 is KDF2 block 0
    let mut k1 = [0u8; 40];
    kdf1::<Sha256>(&z(), 40, &mut k1).unwrap();
    assert_eq!(
        hex::encode(k1),
        "70f4003d52b6eb03da852e93256b5986b5d4883098bb7973bc5318cc66637a84\
         04a6950a06d3e330"
    );
    let mut k2 = [0u8; 16];
    kdf2::<Sha256>(&z(), None, 16, &mut k2).unwrap();
    assert_eq!(hex::encode(k2), "04a6950a06d3e3308ad7d3606ef810eb");
    assert_eq!(&k1[32..], &k2[..8]);
}

#[test]
fn test_mgf1_sha1() {
    let mut mask = [0u8; 30];
    mgf1::<Sha1>(&hex::decode("deadbeef").unwrap(), 30, &mut mask).unwrap();
    assert_eq!(
        hex::encode(mask),
        "e1877982b1620c90e24680898b583a17b851157f226642c065c3f488f95f"
    );
}

#[test]
fn test_output_longer_than_olen_untouched() {
    let mut key = [0xffu8; 20];
    kdf2::<Sha256>(&z(), None, 16, &mut key).unwrap();
    assert_eq!(&key[16..], &[0xff; 4]);
    assert!(kdf2::<Sha256>(&z(), None, 21, &mut key).is_err());
}
