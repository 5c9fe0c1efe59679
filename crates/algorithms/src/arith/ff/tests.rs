use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

type F2 = Ff<2>;

const A: &str = "a2da95a83ec33dd6887e840043e58844c2354e2bb7740a63c1d8fac168fb90d7b938451ee325faa633406bc44dc2a627940eee3cba6f875c2e84496e7857dd86";
const B: &str = "931db61884f42b4b548a84a5b43d43188b3890644f3d4e7b37d72e4af69787709d9b532aba4e6c3686ff0de26a7698065aab0a377f90ade7bc38d756d0055979";
const P: &str = "88177abd25fbab1ba70b967adf354788d4dd79d3b5834f4cecb736d877f1caf0ba49c19fc0a9c8beb070e38434d57084ddfa7fa4ffe9ec11c63d5f77bb3a6aaf";
const Q: &str = "ac578b28ac60fd3429deb98edce2be5c1ffb9a59a9d17fa2d6ed1894beacd196498c416217c88de126233426744e832afe867091333d511d8aa4d27bf4a2fe9f";

fn ff(h: &str) -> F2 {
    F2::from_bytes(&hex::decode(h).unwrap())
}

fn hex_of<const L: usize>(x: &Ff<L>) -> String {
    let mut out = vec![0u8; Ff::<L>::BYTES];
    x.to_bytes(&mut out);
    hex::encode(out)
}

fn hex_wide<const L: usize>(x: &FfWide<L>) -> String {
    let mut out = vec![0u8; 2 * Ff::<L>::BYTES];
    x.to_bytes(&mut out);
    hex::encode(out)
}

#[test]
fn test_bytes_roundtrip() {
    assert_eq!(hex_of(&ff(A)), A);
    // Short input is zero-extended at the top
    let one = F2::from_bytes(&[1]);
    assert!(one.isunity());
}

#[test]
fn test_karatsuba_products() {
    let prod = F2::mul(&ff(A), &ff(B));
    assert_eq!(
        hex_wide(&prod),
        "5d966a898f90e610e99fdd68962a4f4e49ce9541b623bb6fa6c87620c156a51c6a24a586cd3049729e799f0d2b65bb75a6e8b2e403e5d861fcb8affe5bc4930031b1fd29a06004563fdc22645149901b102b8c0e4edb82c1e15e7afdbcb43d070ea481fd7287f65a044a4485eaea636b9de436b1676228fc40ddcfc5a1294a56"
    );
    let sq = F2::sqr(&ff(A));
    assert_eq!(
        hex_wide(&sq),
        "6799600c2977466a8bc0a1dabff8dc476947374bb3920f0a240866c0738c368c88311389578a7a4042b74a10ce09be9793e2996f2126173c619d046d3885ddc15beb72603e300dc9819b9d0d86fb6c6c99892ce87d0d21525f5d1bdb0c20d5ee88dc527f179e2a960bb143b52008c7cc256421fb7f3a6ad65a9b48fdf0c4a224"
    );
}

#[test]
fn test_four_limb_product() {
    let c = Ff::<4>::from_bytes(&hex::decode("fc78654ef6e7577ceafcdc02e69d5be41dda66ce7e7d00260ce9408ebe9dcc7a047b568a8855d0fec5b3f4eac22ed0f83ef085f6243decf03659e99319a43b0196f16576fcdeb80701d598f5b6a7694bf55d1d48d1678e12a796f9df71b613fd778c2f07d9ec183ba07d987af8e3ac967a3ea4588afc03268dd5c10da510c7b6").unwrap());
    let d = Ff::<4>::from_bytes(&hex::decode("fa134ec6ea4a042fd386a52902df209da403f547b28fb8f40efbb141d380298b2639a63b36c541991fd9e452f5745e258c1055292a1798db987e5e2826995d722f888a247bd06300890c88c49dd36af6dc59172400fb97ffa48da5835ed783955f5f93322a774a7baf4caa95ed8bc3f306dbf3116372cfd624dbd621fe6536d0").unwrap());
    assert_eq!(
        hex_wide(&Ff::mul(&c, &d)),
        "f6a09d8f7d05b4717224c96f8704ee8c07c2dd9d2f8d4358f7889dba7a37d7c5f0c580dbe4493658a0aac8db3c7a31d583357dd394ad27805657dab8558f528bef59bbf9211eb43e3d1bd16f93b466ef976c55440a0005c907cc869c714f1d1fa5f171734607022c8fdb15b976c47cc3785ddc2538eb411a1716a5e477f417842077bf48b5071da7c9a4d6bfdf0e41063fd14c698e272f01677f96c98447cf4f2d8146fb7bdf9fd29db63784a39401228605c7fbe075522059fcb121f4508645493dfdfe2528c7960e52520d99e7a1f31232c6b69119d6e8b8e23da4c376ae9e883ab804ba9fae916844b8cc42e3189894848b057cbdb471c75c64230690a7e0"
    );
}

#[test]
fn test_dmod() {
    let prod = F2::mul(&ff(A), &ff(B));
    assert_eq!(
        hex_of(&prod.dmod(&ff(P))),
        "6c7bf31684cf52bdb7947bb6013740adbd93fd098ca13cb153884cdfe44d6dbca4253ebbd680be36805523f32c62646c34509af63a6b135c0069626f14eddafa"
    );
}

#[test]
fn test_montgomery_roundtrip() {
    let p = ff(P);
    let nd = p.invmod2m();
    assert_eq!(
        hex_of(&nd),
        "543b147c479e1bdc0e2065326e9197f083bb79b6ec29828232fc52ab917d453151740c4ace34c94ca56c78518176124644710933961220996dd97aea684d2c4f"
    );
    let mut x = ff(A);
    x.rmod(&p);
    let reduced = x;
    x.nres(&p);
    x.redc(&p, &nd);
    assert_eq!(F2::comp(&x, &reduced), 0);
}

#[test]
fn test_exponentiation() {
    let p = ff(P);
    let expected = "4de7c53d3aef579d8056549ff0bb3777c5a671766445d9959083f86a274d77e6fedb133186fa6cb60391c15ba361aed9f937357bacc804c9d15a11b87b7e61f8";

    let mut x = ff(A);
    x.pow(&ff(B), &p);
    assert_eq!(hex_of(&x), expected);

    let mut y = ff(A);
    y.skpow(&ff(B), &p);
    assert_eq!(hex_of(&y), expected);

    let mut z = ff(A);
    z.power(65537, &p);
    assert_eq!(
        hex_of(&z),
        "18e85c95b0df6c7b41ee1dc1b333d77499b96efcf5dba2a3f0d7536e8c0b247590f592a33d20a8ff11b9605294830c829a833946b1cb2549645bd1f324eda8ea"
    );
}

#[test]
fn test_square_special_case() {
    let p = ff(P);
    let mut x = ff(A);
    x.power(2, &p);
    let mut y = ff(A);
    y.pow(&F2::from_int(2), &p);
    assert_eq!(F2::comp(&x, &y), 0);
}

#[test]
fn test_pow2_matches_separate_powers() {
    let p = ff(P);
    let e = ff(B).limbs()[0];
    let f = ff(A).limbs()[1];
    let mut joint = ff(A);
    joint.pow2(&e, &ff(B), &f, &p);

    let mut xe = ff(A);
    xe.skpows(&e, &p);
    let mut yf = ff(B);
    yf.skpows(&f, &p);
    let mut sep = F2::mul(&xe, &yf).dmod(&p);
    sep.norm();
    assert_eq!(F2::comp(&joint, &sep), 0);
}

#[test]
fn test_invmodp() {
    let p = ff(P);
    let inv = F2::invmodp(&ff(A), &p);
    assert_eq!(
        hex_of(&inv),
        "043eab5525f13fadf1843e5232643575f6783e73d6b80f839bdc38ac49cec171187a2926f2a040a314537c027da31587bda069f2f60841b093cc328fc9838c96"
    );
    assert!(F2::invmodp(&F2::new(), &p).iszilch());
}

#[test]
fn test_primality() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    assert!(F2::prime(&ff(P), &mut rng));
    assert!(F2::prime(&ff(Q), &mut rng));

    let mut composite = ff(P);
    composite.inc(2);
    assert!(!F2::prime(&composite, &mut rng));

    // Divisible by 3
    assert!(!F2::prime(&F2::from_int(3 * 1_000_003), &mut rng));
}

#[test]
fn test_cfactor() {
    let mut x = F2::from_int(3 * 7 * 65537);
    assert!(x.cfactor(65537));
    assert!(!x.cfactor(11));
    x.inc(2);
    assert!(!x.cfactor(3 * 7));
}

#[test]
fn test_igcd() {
    assert_eq!(igcd(12, 18), 6);
    assert_eq!(igcd(17, 5), 1);
    assert_eq!(igcd(9, 0), 9);
}

#[test]
fn test_random_has_top_bit() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let r = F2::random(&mut rng);
    let mut out = [0u8; 64];
    r.to_bytes(&mut out);
    assert!(out[0] & 0x80 != 0);

    let p = ff(P);
    for _ in 0..8 {
        let x = F2::randomnum(&p, &mut rng);
        assert_eq!(F2::comp(&x, &p), -1);
    }
}

#[test]
fn test_shifts_and_carries() {
    let mut x = F2::from_int(1);
    for _ in 0..300 {
        x.shl();
    }
    x.norm();
    let mut out = [0u8; 64];
    x.to_bytes(&mut out);
    assert_eq!(out[64 - 38], 0x10);
    for _ in 0..300 {
        x.shr();
    }
    assert!(x.isunity());

    let mut a = ff(A);
    let b = ff(B);
    a.add(&b);
    a.norm();
    a.sub(&b);
    a.norm();
    assert_eq!(hex_of(&a), A);

    let mut r = ff(B);
    r.revsub(&ff(A));
    r.norm();
    r.add(&ff(B));
    r.norm();
    assert_eq!(hex_of(&r), A);
}

#[test]
fn test_rsa_size_product() {
    let n = F2::mul(&ff(P), &ff(Q));
    assert_eq!(
        hex_wide(&n),
        "5b9e506c2ac0368b5ba3aa05e953202278f1a03368b62152abe656411b5dec6eb00a0523fb480e044196699e05db1bea956530f33cca48e28e65a6b19e01112660a12f29b5c5031d77d9d97d954b0bbd07bad11e3efd11c219c0bbbf1d78a607021a6fe42318de486ed7deb465f6f783ab34ea76a4362d6e1bc00fdc8ddfe4b1"
    );
    let wide = Ff::<4>::from_limbs(n.limbs());
    let mut m = wide;
    m.rmod(&Ff::<4>::from_limbs(ff(P).limbs()));
    assert!(m.iszilch());
}
