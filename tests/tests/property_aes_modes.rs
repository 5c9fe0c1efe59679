//! Property-based tests for the AES chaining modes and GCM

use algorithms::{cbc_iv0_decrypt, cbc_iv0_encrypt, gcm_decrypt, gcm_encrypt, Aes, Mode};
use proptest::prelude::*;

fn key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

/// Whole blocks, as the streaming context expects
fn blocks() -> impl Strategy<Value = Vec<[u8; 16]>> {
    prop::collection::vec(any::<[u8; 16]>(), 1..=16)
}

fn stream(a: &mut Aes, data: &[[u8; 16]], encrypt: bool) -> Vec<[u8; 16]> {
    data.iter()
        .map(|b| {
            let mut b = *b;
            if encrypt {
                a.encrypt(&mut b);
            } else {
                a.decrypt(&mut b);
            }
            b
        })
        .collect()
}

proptest! {
    #[test]
    fn block_modes_roundtrip(
        key in key(),
        iv in any::<[u8; 16]>(),
        data in blocks(),
        mode in prop_oneof![Just(Mode::Ecb), Just(Mode::Cbc), Just(Mode::Ctr)],
    ) {
        let mut a = Aes::init(mode, &key, Some(&iv)).unwrap();
        let ct = stream(&mut a, &data, true);
        a.reset(mode, Some(&iv));
        let pt = stream(&mut a, &ct, false);
        prop_assert_eq!(pt, data);
    }

    #[test]
    fn cbc_iv0_roundtrip(key in key(), msg in prop::collection::vec(any::<u8>(), 0..=200)) {
        let mut c = vec![0u8; msg.len() / 16 * 16 + 16];
        let clen = cbc_iv0_encrypt(&key, &msg, &mut c).unwrap();
        prop_assert_eq!(clen, c.len());

        let mut m = vec![0u8; clen];
        let n = cbc_iv0_decrypt(&key, &c, &mut m).unwrap();
        prop_assert_eq!(&m[..n], &msg[..]);
    }

    #[test]
    fn gcm_roundtrip_and_tamper(
        key in key(),
        iv in prop::collection::vec(any::<u8>(), 1..=64),
        aad in prop::collection::vec(any::<u8>(), 0..=48),
        msg in prop::collection::vec(any::<u8>(), 1..=100),
        flip in any::<prop::sample::Index>(),
    ) {
        let mut ct = vec![0u8; msg.len()];
        let tag = gcm_encrypt(&key, &iv, &aad, &msg, &mut ct).unwrap();

        let mut pt = vec![0u8; msg.len()];
        gcm_decrypt(&key, &iv, &aad, &ct, tag.as_ref(), &mut pt).unwrap();
        prop_assert_eq!(&pt, &msg);

        let mut bad = ct.clone();
        let flip_at = flip.index(bad.len());
        bad[flip_at] ^= 1;
        prop_assert!(gcm_decrypt(&key, &iv, &aad, &bad, tag.as_ref(), &mut pt).is_err());
        prop_assert!(pt.iter().all(|&b| b == 0));
    }
}
