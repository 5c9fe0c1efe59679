//! Boot-stage flows that cross the crate boundaries: a device derives its
//! keys from the IMS and a host talks to it with the protocol crates.

use algorithms::{gcm_decrypt, gcm_encrypt, kdf2, FieldConfig, Goldilocks, Nist256, Sha256, C25519};
use ims::{calculate_epuid, CommunicationArea, Ims, SecondStageConfig};
use kem::ecdh::{key_pair_generate, public_len, secret_len, svdp_dh};
use params::traditional::ecc::{C25519_PUBLIC_KEY_SIZE, GOLDILOCKS_PUBLIC_KEY_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const FUSED_IMS: &str = "101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f303132";
const FUSED_EPUID: &str = "6b71c93552c4a91f";

fn fused() -> Ims {
    Ims::from_slice(&hex::decode(FUSED_IMS).unwrap()).unwrap()
}

#[test]
fn test_production_part_uses_fused_ims() {
    let blank = [0xffu8; 64];
    let cfg = SecondStageConfig::parse(&blank).unwrap();
    assert!(cfg.is_none());

    let ims = SecondStageConfig::select_ims(cfg.as_ref(), fused());
    let area = CommunicationArea::new(&ims).unwrap();
    assert_eq!(area.epuid().to_string(), FUSED_EPUID);
}

#[test]
fn test_development_part_uses_fake_ims() {
    let fake = Ims::new([0x5a; 35]);
    let block = SecondStageConfig {
        use_fake_ims: true,
        fake_ims: fake.clone(),
        use_fake_vidpid: true,
        fake_vid: 0x0126,
        fake_pid: 0x1000,
    }
    .to_bytes();

    let cfg = SecondStageConfig::parse(&block).unwrap().unwrap();
    assert_eq!(cfg.vid_pid(), Some((0x0126, 0x1000)));

    let area = CommunicationArea::new(&SecondStageConfig::select_ims(Some(&cfg), fused())).unwrap();
    assert_eq!(area.epuid(), calculate_epuid(&fake).unwrap());
    assert_ne!(area.epuid().to_string(), FUSED_EPUID);
}

#[test]
fn test_host_verifies_firmware_signature() {
    let area = CommunicationArea::new(&fused()).unwrap();
    let mut w = [0u8; GOLDILOCKS_PUBLIC_KEY_SIZE];
    area.epsk_public_key(&mut w, false).unwrap();

    let mut rng = area.rng().unwrap();
    let mb = <Goldilocks as FieldConfig<9>>::MODBYTES;
    let (mut c, mut d) = (vec![0u8; mb], vec![0u8; mb]);
    let image = b"third stage firmware image";
    area.epsk_sign(&mut rng, image, &mut c, &mut d).unwrap();

    sign::vp_dsa::<9, Goldilocks>(&w, image, &c, &d).unwrap();
    assert!(sign::vp_dsa::<9, Goldilocks>(&w, b"third stage firmware imagf", &c, &d).is_err());
    d[0] ^= 1;
    assert!(sign::vp_dsa::<9, Goldilocks>(&w, image, &c, &d).is_err());
}

#[test]
fn test_session_key_agreement_and_gcm_channel() {
    let area = CommunicationArea::new(&fused()).unwrap();
    let mut device_w = [0u8; C25519_PUBLIC_KEY_SIZE];
    area.essk_dh_public_key(&mut device_w).unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(0x7e57);
    let mut host_s = vec![0u8; secret_len::<5, C25519>()];
    let mut host_w = vec![0u8; public_len::<5, C25519>(false)];
    key_pair_generate::<5, C25519, _>(&mut rng, &mut host_s, &mut host_w, false).unwrap();

    let (mut z_dev, mut z_host) = ([0u8; 32], [0u8; 32]);
    area.essk_shared_secret(&host_w, &mut z_dev).unwrap();
    svdp_dh::<5, C25519>(&host_s, &device_w, &mut z_host).unwrap();
    assert_eq!(z_dev, z_host);

    let (mut k_dev, mut k_host) = ([0u8; 16], [0u8; 16]);
    kdf2::<Sha256>(&z_dev, Some(area.epuid().as_bytes()), 16, &mut k_dev).unwrap();
    kdf2::<Sha256>(&z_host, Some(area.epuid().as_bytes()), 16, &mut k_host).unwrap();

    let iv = [0x42u8; 12];
    let msg = b"ping from the host";
    let mut ct = [0u8; 18];
    let tag = gcm_encrypt(&k_host, &iv, b"hdr", msg, &mut ct).unwrap();

    let mut pt = [0u8; 18];
    gcm_decrypt(&k_dev, &iv, b"hdr", &ct, tag.as_ref(), &mut pt).unwrap();
    assert_eq!(&pt, msg);
    assert!(gcm_decrypt(&k_dev, &iv, b"hdx", &ct, tag.as_ref(), &mut pt).is_err());
}

#[test]
fn test_device_seals_report_to_host_with_ecies() {
    let mut host_rng = ChaCha20Rng::seed_from_u64(99);
    let mut host_s = vec![0u8; secret_len::<5, Nist256>()];
    let mut host_w = vec![0u8; public_len::<5, Nist256>(false)];
    key_pair_generate::<5, Nist256, _>(&mut host_rng, &mut host_s, &mut host_w, false).unwrap();

    let area = CommunicationArea::new(&fused()).unwrap();
    let mut rng = area.rng().unwrap();
    let report = area.epuid();
    let mut v = vec![0u8; host_w.len()];
    let mut c = vec![0u8; pke::ecies::ciphertext_len(report.as_bytes().len())];
    let mut t = [0u8; 16];
    pke::ecies_encrypt::<5, Nist256, _>(b"", b"report", &mut rng, &host_w, report.as_bytes(), &mut v, &mut c, &mut t)
        .unwrap();

    let mut m = vec![0u8; c.len()];
    let n = pke::ecies_decrypt::<5, Nist256>(b"", b"report", &v, &c, &t, &host_s, &mut m).unwrap();
    assert_eq!(&m[..n], report.as_bytes());
}

#[test]
fn test_host_wraps_key_to_errk() {
    let area = CommunicationArea::new(&fused()).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut c = [0u8; 256];
    pke::oaep_encrypt::<Sha256, 8, _>(area.errk_public(), &[0x11; 32], Some(b"errk"), &mut rng, &mut c).unwrap();
    assert_ne!(c, [0u8; 256]);

    // nobody holds an ERRK signature
    assert!(sign::pkcs15_verify::<Sha256, 8>(area.errk_public(), b"alias", &[0x01; 256]).is_err());
}

#[test]
fn test_killed_area_keeps_identity_only() {
    let mut area = CommunicationArea::new(&fused()).unwrap();
    area.kill();
    assert!(area.is_killed());
    assert_eq!(area.epuid().to_string(), FUSED_EPUID);

    let mut w = [0u8; GOLDILOCKS_PUBLIC_KEY_SIZE];
    assert_eq!(area.epsk_public_key(&mut w, false), Err(ims::Error::Killed));
    let mut z = [0u8; 32];
    assert_eq!(area.essk_shared_secret(&[0u8; 33], &mut z), Err(ims::Error::Killed));
    assert!(area.rng().is_err());
}
