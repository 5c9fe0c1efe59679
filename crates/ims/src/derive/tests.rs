use super::*;
use proptest::prelude::*;

const IMS: &str = "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f303132";
const EPUID: &str = "6b71c93552c4a91f";
const ES3_EPUID: &str = "6e5c5c6cf68fb209";
const EPSK: &str = "43e56892a8c56d5ea0b49d99f191842584051cf8a79e72cea0d739cad0a880d3\
                    4b123879e7ca4fb5349d7cdc886d300622d8251d3c1b5fb5";
const ESSK: &str = "5372a22a29a98374a8eb235e997e806d4daa42cbed98ce6fc2562bb8e1954ea5";
const EPCK: &str = "147eb5c18db761b2317eae33b21fa50f42eb38c328faaece995aa483d3e2e37d";
const ERGS: &str = "8a822b295e605154799e52d40472525e53853c02e8e6c81df60f7703975c65b7";
const ERRK_N: &str = "024d10f7b92d241826abdc33381583b92f2f1f1c8acd6133287fce6f50ef3997\
                      121ca209e323d2b7394fc96c54f70cd3c5d2d7dac565f0c39328c37962a805db\
                      29daf0504a6619c7d6d6d77763bfc1074edf9751c02918a8bd72211a6ac89355\
                      9fb078454296066dcfd22b4523aa5d50c710926ff35203d7fa7a61adc9d89a12\
                      a1aabac55f600b3c6913196c0c78bccef0699c7bbd009456340b9d6a98e2bc20\
                      1bf32551f1786ac6d3a4eff029e6def79ec8b6244ae7db8b143be9ebf450756d\
                      f16079144fea89b0dbb7eaa86ab1edba769defdc32fcd89915cc813d7f7bfeca\
                      892502872f8a64a11d93d99610d17812b7af446d64a3fd030315a287696b44a5";

fn ims() -> Ims {
    Ims::from_slice(&hex::decode(IMS).unwrap()).unwrap()
}

#[test]
fn test_epuid_reference() {
    let id = calculate_epuid(&ims()).unwrap();
    assert_eq!(hex::encode(id.as_bytes()), EPUID);
    assert_eq!(id.to_string(), EPUID);
}

#[test]
fn test_es3_epuid_reference() {
    let id = calculate_es3_epuid(&ims()).unwrap();
    assert_eq!(hex::encode(id.as_bytes()), ES3_EPUID);
}

#[test]
fn test_key_generation_reference() {
    let keys = key_generation(&ims()).unwrap();
    assert_eq!(hex::encode(keys.epsk()), EPSK);
    assert_eq!(hex::encode(keys.essk()), ESSK);
    assert_eq!(hex::encode(keys.epck()), EPCK);
    assert_eq!(hex::encode(keys.ergs()), ERGS);

    let mut n = [0u8; 256];
    keys.errk().modulus_bytes(&mut n);
    assert_eq!(hex::encode(n), ERRK_N);
}

#[test]
fn test_trailing_bytes_only_move_the_modulus() {
    let base = key_generation(&ims()).unwrap();
    let mut b = hex::decode(IMS).unwrap();
    b[34] ^= 0x01;
    let other = key_generation(&Ims::from_slice(&b).unwrap()).unwrap();

    assert_eq!(base.epsk(), other.epsk());
    assert_eq!(base.ergs(), other.ergs());
    let (mut n1, mut n2) = ([0u8; 256], [0u8; 256]);
    base.errk().modulus_bytes(&mut n1);
    other.errk().modulus_bytes(&mut n2);
    assert_ne!(n1, n2);
    assert_eq!(
        calculate_epuid(&ims()).unwrap(),
        calculate_epuid(&Ims::from_slice(&b).unwrap()).unwrap()
    );
}

#[test]
fn test_zeroize_clears_secrets() {
    let mut keys = key_generation(&ims()).unwrap();
    keys.zeroize();
    assert_eq!(keys.epsk(), &[0u8; EPSK_SIZE]);
    assert_eq!(keys.essk(), &[0u8; 32]);
    assert_eq!(keys.epck(), &[0u8; 32]);
    assert_eq!(keys.ergs(), &[0u8; 32]);
}

#[test]
fn test_debug_hides_secrets() {
    let keys = key_generation(&ims()).unwrap();
    let s = format!("{:?}", keys);
    assert!(!s.contains("epsk"));
    assert!(!s.contains(&ESSK[..8]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_derivation_is_deterministic(bytes in prop::array::uniform32(any::<u8>()), tail in prop::array::uniform3(any::<u8>())) {
        let mut raw = [0u8; 35];
        raw[..32].copy_from_slice(&bytes);
        raw[32..].copy_from_slice(&tail);
        let ims = Ims::new(raw);

        let a = key_generation(&ims).unwrap();
        let b = key_generation(&ims).unwrap();
        prop_assert_eq!(a.epsk(), b.epsk());
        prop_assert_eq!(a.essk(), b.essk());
        prop_assert_eq!(calculate_epuid(&ims).unwrap(), calculate_epuid(&ims).unwrap());
        prop_assert_ne!(calculate_epuid(&ims).unwrap(), calculate_es3_epuid(&ims).unwrap());
    }
}
