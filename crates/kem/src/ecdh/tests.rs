use super::*;
use crate::error::Error;
use algorithms::{C25519, Ed25519, Goldilocks, Nist256};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const D1: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";
const D2: &str = "0f56db78ca460b055c500064824bed999a25aaf48ebb519ac201537b85479813";
const W1: &str = "0460fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                  7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";
const W2: &str = "04e266ddfdc12668db30d4ca3e8f7749432c416044f2d2b8c10bf3d4012aeffa8a\
                  bfa86404a2e9ffe67d47c587ef7a97a7f456b863b4d02cfc6928973ab5b1cb39";
const Z: &str = "90223373f75e989ab8965d8cc88f01ceb4c622875861771da7bf1a0faccae374";

#[test]
fn test_nist256_public_key_from_secret() {
    let mut w = [0u8; 65];
    key_pair_from_secret::<5, Nist256>(&hex::decode(D1).unwrap(), &mut w, false).unwrap();
    assert_eq!(hex::encode(w), W1);
    key_pair_from_secret::<5, Nist256>(&hex::decode(D2).unwrap(), &mut w, false).unwrap();
    assert_eq!(hex::encode(w), W2);
}

#[test]
fn test_nist256_shared_secret_vector() {
    let mut z1 = [0u8; 32];
    let mut z2 = [0u8; 32];
    svdp_dh::<5, Nist256>(&hex::decode(D1).unwrap(), &hex::decode(W2).unwrap(), &mut z1).unwrap();
    svdp_dh::<5, Nist256>(&hex::decode(D2).unwrap(), &hex::decode(W1).unwrap(), &mut z2).unwrap();
    assert_eq!(hex::encode(z1), Z);
    assert_eq!(z1, z2);
}

#[test]
fn test_compressed_keys_agree_with_uncompressed() {
    let mut wc = [0u8; 33];
    key_pair_from_secret::<5, Nist256>(&hex::decode(D2).unwrap(), &mut wc, true).unwrap();
    assert!(public_key_validate::<5, Nist256>(&wc).is_ok());

    let mut z = [0u8; 32];
    svdp_dh::<5, Nist256>(&hex::decode(D1).unwrap(), &wc, &mut z).unwrap();
    assert_eq!(hex::encode(z), Z);
}

fn check_agreement<const N: usize, C: algorithms::CurveConfig<N>>(seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sl = secret_len::<N, C>();
    let pl = public_len::<N, C>(false);

    let (mut s1, mut w1) = (vec![0u8; sl], vec![0u8; pl]);
    let (mut s2, mut w2) = (vec![0u8; sl], vec![0u8; pl]);
    key_pair_generate::<N, C, _>(&mut rng, &mut s1, &mut w1, false).unwrap();
    key_pair_generate::<N, C, _>(&mut rng, &mut s2, &mut w2, false).unwrap();
    assert_ne!(s1, s2);

    public_key_validate::<N, C>(&w1).unwrap();
    public_key_validate::<N, C>(&w2).unwrap();

    let (mut z1, mut z2) = (vec![0u8; sl], vec![0u8; sl]);
    svdp_dh::<N, C>(&s1, &w2, &mut z1).unwrap();
    svdp_dh::<N, C>(&s2, &w1, &mut z2).unwrap();
    assert_eq!(z1, z2);
    assert!(z1.iter().any(|&b| b != 0));
}

#[test]
fn test_agreement_on_every_curve() {
    check_agreement::<5, Nist256>(1);
    check_agreement::<5, Ed25519>(2);
    check_agreement::<5, C25519>(3);
    check_agreement::<9, Goldilocks>(4);
}

#[test]
fn test_generated_public_key_matches_secret() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut s = [0u8; 32];
    let mut w = [0u8; 65];
    let mut w2 = [0u8; 65];
    key_pair_generate::<5, Ed25519, _>(&mut rng, &mut s, &mut w, false).unwrap();
    key_pair_from_secret::<5, Ed25519>(&s, &mut w2, false).unwrap();
    assert_eq!(w, w2);
}

#[test]
fn test_rejects_off_curve_point() {
    let mut w = hex::decode(W1).unwrap();
    w[64] ^= 1;
    assert!(matches!(
        public_key_validate::<5, Nist256>(&w),
        Err(Error::InvalidPublicKey { curve: "NIST256", .. })
    ));

    let mut z = [0u8; 32];
    assert!(svdp_dh::<5, Nist256>(&hex::decode(D1).unwrap(), &w, &mut z).is_err());
}

#[test]
fn test_rejects_infinity_and_truncated_keys() {
    let zero = [0x04u8; 1]
        .iter()
        .copied()
        .chain(core::iter::repeat(0).take(64))
        .collect::<Vec<_>>();
    assert!(public_key_validate::<5, Nist256>(&zero).is_err());
    assert!(public_key_validate::<5, Nist256>(&hex::decode(W1).unwrap()[..40]).is_err());
    assert!(public_key_validate::<5, Nist256>(&[]).is_err());
}

#[test]
fn test_rejects_small_order_edwards_point() {
    // (0, -1) has order two
    let mut w = vec![0x04u8];
    w.extend_from_slice(&[0u8; 32]);
    w.extend_from_slice(
        &hex::decode("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec").unwrap(),
    );
    assert!(matches!(
        public_key_validate::<5, Ed25519>(&w),
        Err(Error::InvalidPublicKey { .. })
    ));
}

#[test]
fn test_rejects_small_order_montgomery_point() {
    let w = [0x06u8; 1]
        .iter()
        .copied()
        .chain(core::iter::repeat(0).take(32))
        .collect::<Vec<_>>();
    assert!(public_key_validate::<5, C25519>(&w).is_err());
}

#[test]
fn test_zero_secret_rejected() {
    let mut w = [0u8; 65];
    let order = {
        let mut b = [0u8; 32];
        Nist256::order().to_bytes(&mut b);
        b
    };
    assert!(matches!(
        key_pair_from_secret::<5, Nist256>(&order, &mut w, false),
        Err(Error::KeyGeneration { .. })
    ));
    assert!(key_pair_from_secret::<5, Nist256>(&[0u8; 32], &mut w, false).is_err());
}

#[test]
fn test_short_output_buffers() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut s = [0u8; 31];
    let mut w = [0u8; 65];
    assert!(matches!(
        key_pair_generate::<5, Nist256, _>(&mut rng, &mut s, &mut w, false),
        Err(Error::Primitive(_))
    ));
    let mut s = [0u8; 32];
    let mut w = [0u8; 33];
    assert!(key_pair_generate::<5, Nist256, _>(&mut rng, &mut s, &mut w, false).is_err());
    assert!(key_pair_generate::<5, Nist256, _>(&mut rng, &mut s, &mut w, true).is_ok());
}

#[cfg(feature = "alloc")]
mod kem_trait {
    use crate::{EcdhC25519, EcdhGoldilocks, EcdhNist256, EcdhPublicKey, EcdhSecretKey};
    use algorithms::Nist256;
    use api::{Kem, Serialize, SerializeSecret};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn round_trip<K: Kem>(seed: u64) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let kp = K::keypair(&mut rng).unwrap();
        let pk = K::public_key(&kp);
        let sk = K::secret_key(&kp);

        let (ct, ss1) = K::encapsulate(&mut rng, &pk).unwrap();
        let ss2 = K::decapsulate(&sk, &ct).unwrap();
        assert_eq!(*ss1.to_bytes_zeroizing(), *ss2.to_bytes_zeroizing());

        let ct2 = K::Ciphertext::from_bytes(&ct.to_bytes()).unwrap();
        let ss3 = K::decapsulate(&sk, &ct2).unwrap();
        assert_eq!(*ss1.to_bytes_zeroizing(), *ss3.to_bytes_zeroizing());
    }

    #[test]
    fn test_kem_round_trip() {
        round_trip::<EcdhNist256>(21);
        round_trip::<EcdhC25519>(22);
        round_trip::<EcdhGoldilocks>(23);
    }

    #[test]
    fn test_shared_secret_length_follows_curve_hash() {
        let mut rng = ChaCha20Rng::seed_from_u64(24);
        let kp = EcdhGoldilocks::keypair(&mut rng).unwrap();
        let (_, ss) = EcdhGoldilocks::encapsulate(&mut rng, &kp.public).unwrap();
        assert_eq!(ss.as_bytes().len(), 64);
    }

    #[test]
    fn test_secret_key_serialisation() {
        let sk = EcdhSecretKey::<5, Nist256>::from_bytes(&hex::decode(super::D1).unwrap()).unwrap();
        assert_eq!(hex::encode(sk.public_key().to_bytes()), super::W1);
        assert_eq!(hex::encode(&*sk.to_bytes_zeroizing()), super::D1);
        assert!(EcdhSecretKey::<5, Nist256>::from_bytes(&[0u8; 32]).is_err());
        assert!(EcdhSecretKey::<5, Nist256>::from_bytes(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_public_key_import_validates() {
        let mut w = hex::decode(super::W2).unwrap();
        assert!(EcdhPublicKey::<5, Nist256>::from_bytes(&w).is_ok());
        w[10] ^= 0x80;
        let err = EcdhPublicKey::<5, Nist256>::from_bytes(&w).unwrap_err();
        assert!(matches!(err, api::Error::InvalidKey { .. }));
    }

    #[test]
    fn test_agree_matches_byte_level_primitive() {
        let sk = EcdhSecretKey::<5, Nist256>::from_bytes(&hex::decode(super::D1).unwrap()).unwrap();
        let pk = EcdhPublicKey::<5, Nist256>::from_bytes(&hex::decode(super::W2).unwrap()).unwrap();
        assert_eq!(hex::encode(&*sk.agree(&pk).unwrap()), super::Z);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_public_key_serde() {
        let pk = EcdhPublicKey::<5, Nist256>::from_bytes(&hex::decode(super::W2).unwrap()).unwrap();
        let json = serde_json::to_string(&pk).unwrap();
        let back: EcdhPublicKey<5, Nist256> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);

        let mut bytes: Vec<u8> = serde_json::from_str(&json).unwrap();
        bytes[10] ^= 0x80;
        let bad = serde_json::to_string(&bytes).unwrap();
        assert!(serde_json::from_str::<EcdhPublicKey<5, Nist256>>(&bad).is_err());
    }
}
