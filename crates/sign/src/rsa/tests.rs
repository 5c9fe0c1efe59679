use super::*;
use algorithms::rsa::{key_pair, Rsa1024PrivateKey, Rsa1024PublicKey};
use algorithms::{Sha256, Sha512};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const P: &str = "9c64821435b4254d11d1ea2e7af03362412d70b698f19ecdadef91edf80582b0\
                 1ac1afee132847b415d89f0a9589b067720c3b1e9da79935c33b63be0a35424b";
const Q: &str = "c4eb15d8e4af406ac4341b43e7600b2076d86364bfbc4aca5b7093b855746cdc\
                 dcf500ac479cca25ebf1007bdab99113efff9a0c0e4284e4509020ef19ab3bdb";
// PKCS#1 v1.5 / SHA-256 signature of b"sample" under (P, Q, 65537)
const SIG: &str = "53546fde82682546801e249feb256d6c6a5fe338475c6ff7305a7d2bd0adb8c8\
                   dada3ed3303672728f86b044adeb7bd97aa1449b43df785fa2fbcd1788d14038\
                   d192d97ef7dc44dd7cea3cbe3b822480717335df41c996fefb080664617d4fb5\
                   fe999a3d511c8a026e46b8335aa54d9b1666a9885c1fcdc26df65a7bd049afc5";

fn fixed_key() -> (Rsa1024PrivateKey, Rsa1024PublicKey) {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    key_pair::<4, 2, _>(
        &mut rng,
        65537,
        Some(&hex::decode(P).unwrap()),
        Some(&hex::decode(Q).unwrap()),
    )
    .unwrap()
}

#[test]
fn test_signature_matches_reference() {
    let (sk, _) = fixed_key();
    let mut sig = [0u8; 128];
    pkcs15_sign::<Sha256, 4, 2>(&sk, b"sample", &mut sig).unwrap();
    assert_eq!(hex::encode(sig), SIG);
}

#[test]
fn test_verify_reference_signature() {
    let (_, pk) = fixed_key();
    pkcs15_verify::<Sha256, 4>(&pk, b"sample", &hex::decode(SIG).unwrap()).unwrap();
}

#[test]
fn test_verify_rejects_wrong_message_hash_and_bits() {
    let (_, pk) = fixed_key();
    let sig = hex::decode(SIG).unwrap();
    assert!(matches!(
        pkcs15_verify::<Sha256, 4>(&pk, b"Sample", &sig),
        Err(Error::Verification { .. })
    ));
    assert!(pkcs15_verify::<Sha512, 4>(&pk, b"sample", &sig).is_err());

    let mut bad = sig.clone();
    bad[100] ^= 0x04;
    assert!(pkcs15_verify::<Sha256, 4>(&pk, b"sample", &bad).is_err());
}

#[test]
fn test_verify_rejects_wrong_length() {
    let (_, pk) = fixed_key();
    let sig = hex::decode(SIG).unwrap();
    assert!(matches!(
        pkcs15_verify::<Sha256, 4>(&pk, b"sample", &sig[1..]),
        Err(Error::InvalidSignature { .. })
    ));
}

#[test]
fn test_sha512_round_trip() {
    let (sk, pk) = fixed_key();
    let mut sig = [0u8; 128];
    pkcs15_sign::<Sha512, 4, 2>(&sk, b"second stage", &mut sig).unwrap();
    pkcs15_verify::<Sha512, 4>(&pk, b"second stage", &sig).unwrap();
}

#[test]
fn test_sign_rejects_wrong_buffer() {
    let (sk, _) = fixed_key();
    let mut sig = [0u8; 127];
    assert!(matches!(
        pkcs15_sign::<Sha256, 4, 2>(&sk, b"sample", &mut sig),
        Err(Error::Primitive(_))
    ));
}

#[cfg(feature = "alloc")]
#[test]
fn test_signature_trait_with_generated_key() {
    use crate::rsa::RsaPkcs1;
    use api::Signature;

    type Rsa1024Sha256 = RsaPkcs1<4, 2, Sha256>;
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let kp = Rsa1024Sha256::keypair(&mut rng).unwrap();
    let pk = Rsa1024Sha256::public_key(&kp);
    let sk = Rsa1024Sha256::secret_key(&kp);

    let sig = Rsa1024Sha256::sign(b"attestation", &sk, &mut rng).unwrap();
    assert_eq!(sig.as_ref().len(), 128);
    Rsa1024Sha256::verify(b"attestation", &sig, &pk).unwrap();
    assert!(Rsa1024Sha256::verify(b"attestation!", &sig, &pk).is_err());
}
