use super::*;

fn block(h: &str) -> [u8; 16] {
    let mut b = [0u8; 16];
    b.copy_from_slice(&hex::decode(h).unwrap());
    b
}

fn check_fips197(key: &str, expected: &str, rounds: usize) {
    let aes = AesCipher::new(&hex::decode(key).unwrap()).unwrap();
    assert_eq!(aes.rounds(), rounds);
    let pt = block("00112233445566778899aabbccddeeff");
    let mut b = pt;
    aes.encrypt_block(&mut b);
    assert_eq!(hex::encode(b), expected);
    aes.decrypt_block(&mut b);
    assert_eq!(b, pt);
}

#[test]
fn test_fips197_appendix_c() {
    check_fips197(
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
        10,
    );
    check_fips197(
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
        12,
    );
    check_fips197(
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
        14,
    );
}

#[test]
fn test_sbox_spot_values() {
    assert_eq!(sbox(0x00), 0x63);
    assert_eq!(sbox(0x53), 0xed);
    assert_eq!(sbox(0xff), 0x16);
    for x in 0..=255u8 {
        assert_eq!(inv_sbox(sbox(x)), x);
    }
}

#[test]
fn test_rejects_bad_key_length() {
    assert!(matches!(
        AesCipher::new(&[0u8; 20]),
        Err(Error::Length { context: "AES key", actual: 20, .. })
    ));
}

#[test]
fn test_names_and_debug() {
    let aes = AesCipher::new(&[0u8; 32]).unwrap();
    assert_eq!(aes.name(), "AES-256");
    assert_eq!(aes.key_len(), 32);
    assert_eq!(format!("{:?}", aes), "AesCipher(AES-256)");
}
