//! Digest, MAC and KDF reference values through the public surface

use algorithms::{hmac, pbkdf2, HashFunction, Sha1, Sha256, Sha384, Sha512};

fn hex_digest<H: HashFunction>(m: &[u8]) -> String {
    hex::encode(H::digest(m).unwrap())
}

#[test]
fn test_fips180_abc() {
    assert_eq!(hex_digest::<Sha1>(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
        hex_digest::<Sha256>(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex_digest::<Sha384>(b"abc"),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a\
         43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
    assert_eq!(
        hex_digest::<Sha512>(b"abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_sha256_29_byte_message() {
    let m = hex::decode("9597f714b2e45e3399a7f02aec44921bd78be0fefee0c5e9b499488f6e").unwrap();
    assert_eq!(m.len(), 29);
    assert_eq!(
        hex_digest::<Sha256>(&m),
        "53d3e126d5b6baf626535385c37ad059ff7b092fdf05a103fe107e3772599756"
    );
}

#[test]
fn test_hmac_rfc4231_case1() {
    let mut tag = [0u8; 32];
    hmac::<Sha256>(b"Hi There", &[0x0b; 20], 32, &mut tag).unwrap();
    assert_eq!(
        hex::encode(tag),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn test_pbkdf2_rfc6070_two_iterations() {
    let mut key = [0u8; 20];
    pbkdf2::<Sha1>(b"password", b"salt", 2, 20, &mut key).unwrap();
    assert_eq!(hex::encode(key), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");
}
