//! AES-GCM against CAVP response files

use tsbcrypt_tests::vectors::gcm::{run, Direction};
use tsbcrypt_tests::vectors::VectorError;

const ENCRYPT: &str = include_str!("../data/gcm_encrypt.rsp");
const DECRYPT: &str = include_str!("../data/gcm_decrypt.rsp");

fn assert_clean(text: &str, direction: Direction, expected: usize) {
    let report = run(text, direction).unwrap();
    for (line, e) in &report.failures {
        eprintln!("record at line {}: {}", line, e);
    }
    assert!(report.is_clean());
    assert_eq!(report.passed, expected);
}

#[test]
fn test_encrypt_vectors() {
    assert_clean(ENCRYPT, Direction::Encrypt, 7);
}

#[test]
fn test_decrypt_vectors_including_forgeries() {
    assert_clean(DECRYPT, Direction::Decrypt, 6);
}

#[test]
fn test_corrupted_ciphertext_is_reported() {
    // first record of the second section: NIST test case 2
    let text = ENCRYPT.replacen("CT = 42831ec2", "CT = 42831ec3", 1);
    let report = run(&text, Direction::Encrypt).unwrap();
    assert_eq!(report.passed, 6);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].1, VectorError::Mismatch { context: "CT", .. }));
}

#[test]
fn test_accepted_forgery_is_reported() {
    // mark a genuine record as a forgery
    let text = DECRYPT.replacen("PT = a8f285ee28cf5e11259279fa1ce80fd2", "FAIL", 1);
    let report = run(&text, Direction::Decrypt).unwrap();
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].1, VectorError::InvalidData(_)));
}

#[test]
fn test_parameter_disagreement_is_reported() {
    let text = ENCRYPT.replacen("[Taglen = 96]", "[Taglen = 128]", 1);
    let report = run(&text, Direction::Encrypt).unwrap();
    assert_eq!(report.failures.len(), 2);
}

#[test]
fn test_malformed_file_is_an_error() {
    assert!(run("Key = 00\n", Direction::Encrypt).is_err());
}
