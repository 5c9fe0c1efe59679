use super::*;
use algorithms::rsa::{key_pair, Rsa1024PrivateKey, Rsa1024PublicKey};
use algorithms::{Sha1, Sha256, Sha512};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const P: &str = "9c64821435b4254d11d1ea2e7af03362412d70b698f19ecdadef91edf80582b0\
                 1ac1afee132847b415d89f0a9589b067720c3b1e9da79935c33b63be0a35424b";
const Q: &str = "c4eb15d8e4af406ac4341b43e7600b2076d86364bfbc4aca5b7093b855746cdc\
                 dcf500ac479cca25ebf1007bdab99113efff9a0c0e4284e4509020ef19ab3bdb";
// SHA-256 OAEP of "session key material" with label "firmware"
const CT_SHA256: &str = "3a9e013b19a7415a98fdef88aedb359771c23971ccda734979bd7aaff366ef3a\
                         a46f47b2cd980b692310dfda85b8fb0f62a0d9a3a0267ff92d1246512c00ac90\
                         08df742df6a9e8ead10cb86ba5f048a196458e483100d8f019702c27bc67cf52\
                         5cabcc7006ba8f49c717b0ace2f64ea9696f3262c2999aba51c322e5d5b4ec53";
// SHA-1 OAEP of the empty message, no label
const CT_SHA1: &str = "71e75558f7cfc5f7c47aa7063a6fb6ff4147e6737264531d4d2c49243d398beb\
                       377d05dd65665e601f51d86facbe06524b5c5fa7e3902fbaa08a1759260cb887\
                       badcc35692137fbee56db4c23301d2c4293e0f75572c4e88f50acfdcd9c67e54\
                       14f1c3e1d45b00c61d4f872aeda8a8ef4652884859a9b7d58ea9eccc88505d06";

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
fn test_decrypt_reference_ciphertexts() {
    let (sk, _) = fixed_key();
    let mut m = [0u8; 128];
    let n = oaep_decrypt::<Sha256, 4, 2>(&sk, &hex::decode(CT_SHA256).unwrap(), Some(b"firmware"), &mut m)
        .unwrap();
    assert_eq!(&m[..n], b"session key material");

    let n = oaep_decrypt::<Sha1, 4, 2>(&sk, &hex::decode(CT_SHA1).unwrap(), None, &mut m).unwrap();
    assert_eq!(n, 0);
}

#[test]
fn test_wrong_label_or_hash_is_one_error() {
    let (sk, _) = fixed_key();
    let ct = hex::decode(CT_SHA256).unwrap();
    let mut m = [0u8; 128];
    assert_eq!(
        oaep_decrypt::<Sha256, 4, 2>(&sk, &ct, None, &mut m),
        Err(Error::DecryptionFailed("invalid OAEP encoding"))
    );
    assert_eq!(
        oaep_decrypt::<Sha1, 4, 2>(&sk, &ct, Some(b"firmware"), &mut m),
        Err(Error::DecryptionFailed("invalid OAEP encoding"))
    );

    let mut bad = ct.clone();
    bad[64] ^= 0x10;
    assert_eq!(
        oaep_decrypt::<Sha256, 4, 2>(&sk, &bad, Some(b"firmware"), &mut m),
        Err(Error::DecryptionFailed("invalid OAEP encoding"))
    );
}

#[test]
fn test_round_trip_up_to_capacity() {
    let (sk, pk) = fixed_key();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let cap = max_message_len::<Sha256, 4>();
    assert_eq!(cap, 128 - 66);

    for len in [0usize, 1, 32, cap] {
        let msg = vec![0xa5u8; len];
        let mut c = [0u8; 128];
        oaep_encrypt::<Sha256, 4, _>(&pk, &msg, Some(b"l"), &mut rng, &mut c).unwrap();
        let mut m = [0u8; 128];
        let n = oaep_decrypt::<Sha256, 4, 2>(&sk, &c, Some(b"l"), &mut m).unwrap();
        assert_eq!(&m[..n], &msg[..]);
    }

    let mut c = [0u8; 128];
    assert!(oaep_encrypt::<Sha256, 4, _>(&pk, &vec![0u8; cap + 1], None, &mut rng, &mut c).is_err());
}

#[test]
fn test_encryption_is_randomised() {
    let (_, pk) = fixed_key();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let (mut c1, mut c2) = ([0u8; 128], [0u8; 128]);
    oaep_encrypt::<Sha256, 4, _>(&pk, b"same", None, &mut rng, &mut c1).unwrap();
    oaep_encrypt::<Sha256, 4, _>(&pk, b"same", None, &mut rng, &mut c2).unwrap();
    assert_ne!(c1, c2);
}

#[test]
fn test_length_checks() {
    let (sk, pk) = fixed_key();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let mut c = [0u8; 127];
    assert!(matches!(
        oaep_encrypt::<Sha256, 4, _>(&pk, b"x", None, &mut rng, &mut c),
        Err(Error::Primitive(_))
    ));

    let mut m = [0u8; 128];
    assert!(matches!(
        oaep_decrypt::<Sha256, 4, 2>(&sk, &[0u8; 127], None, &mut m),
        Err(Error::InvalidCiphertextFormat(_))
    ));

    // two SHA-512 digests do not fit a 1024-bit block
    let mut c = [0u8; 128];
    assert_eq!(max_message_len::<Sha512, 4>(), 0);
    assert!(oaep_encrypt::<Sha512, 4, _>(&pk, b"", None, &mut rng, &mut c).is_err());
}

#[cfg(feature = "alloc")]
#[test]
fn test_pke_trait_with_generated_key() {
    use crate::rsa::RsaOaep;
    use api::Pke;

    type Rsa1024Oaep = RsaOaep<4, 2, Sha256>;
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let (pk, sk) = Rsa1024Oaep::keypair(&mut rng).unwrap();

    let ct = Rsa1024Oaep::encrypt(&pk, b"wrapped key", Some(b"ctx"), &mut rng).unwrap();
    assert_eq!(ct.as_ref().len(), 128);
    assert_eq!(Rsa1024Oaep::decrypt(&sk, &ct, Some(b"ctx")).unwrap(), b"wrapped key");
    assert!(matches!(
        Rsa1024Oaep::decrypt(&sk, &ct, Some(b"other")),
        Err(api::Error::DecryptionFailed { .. })
    ));
}
