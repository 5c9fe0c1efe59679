use super::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

type B5 = Big<5>;

const P256: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
const A: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
const B: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

fn big(h: &str) -> B5 {
    B5::from_bytes(&hex::decode(h).unwrap())
}

fn hex_of(x: &B5, len: usize) -> String {
    let mut out = vec![0u8; len];
    x.to_bytes(&mut out);
    hex::encode(out)
}

fn from_u128(x: u128) -> B5 {
    B5::from_bytes(&x.to_be_bytes())
}

#[test]
fn test_digit_count() {
    assert_eq!(nlen(256), 5);
    assert_eq!(nlen(255), 5);
    assert_eq!(nlen(448), 9);
}

#[test]
fn test_bytes_roundtrip() {
    let a = big(A);
    assert_eq!(hex_of(&a, 32), A);
    // Narrow output keeps the low bytes
    assert_eq!(hex_of(&a, 4), "d898c296");
}

#[test]
fn test_mul_halves() {
    let d = B5::mul(&big(A), &big(B));
    assert_eq!(
        hex_of(&d.low(), 35),
        "2ff29ebfeaa3d596a84409ce174943425656e93636cd989463002a5568e21807adaf8e"
    );
    assert_eq!(
        hex_of(&d.high(), 35),
        "000000000000216b6be4374f0147602d8bd271ccfdf8755b701f75ca0ed75695f1c31b"
    );
}

#[test]
fn test_sqr_matches_mul() {
    let a = big(A);
    let mut s = B5::sqr(&a);
    let mut m = B5::mul(&a, &a);
    s.norm();
    m.norm();
    assert_eq!(DBig::comp(&s, &m), 0);
}

#[test]
fn test_dmod_and_modmul() {
    let p = big(P256);
    let expected = "823cd15f6dd3c71933565064513a6b2bd183e554c6a08622f713ebbbface98be";
    let mut d = B5::mul(&big(A), &big(B));
    assert_eq!(hex_of(&d.dmod(&p), 32), expected);
    assert_eq!(hex_of(&B5::modmul(&big(A), &big(B), &p), 32), expected);
}

#[test]
fn test_ddiv() {
    let p = big(P256);
    let mut d = B5::mul(&big(A), &big(B));
    let q = d.ddiv(&p);
    assert_eq!(
        hex_of(&q, 32),
        "216b6be458ba6d2b977c8d19b08f1de68e6e00ec323d85f8a1ab09a3f320e930"
    );
}

#[test]
fn test_monty_reduction() {
    let p = big(P256);
    let mut d = B5::mul(&big(A), &big(B));
    let mut r = B5::monty(&p, 1, &mut d);
    r.rmod(&p);
    assert_eq!(
        hex_of(&r, 32),
        "5209acc67e71986e766c518bd273e2834c5e4a7e4d075f096cda3d31bac195c4"
    );
}

#[test]
fn test_invmodp() {
    let p = big(P256);
    let mut a = big(A);
    a.invmodp(&p);
    assert_eq!(
        hex_of(&a, 32),
        "e060cbb088706d5d24936933b69b16ab707d656273744b65664c49e577f35238"
    );

    let mut z = B5::new();
    z.invmodp(&p);
    assert!(z.iszilch());
}

#[test]
fn test_invmod2m() {
    let mut a = big(A);
    a.inc(1);
    a.invmod2m(256);
    assert_eq!(
        hex_of(&a, 32),
        "3fe79a8e0c1d4a76deb65b6c7c111b04ebb66cd5d88c832dead3908502f2dd27"
    );
}

#[test]
fn test_jacobi() {
    let p = big(P256);
    assert_eq!(big(A).jacobi(&p), 1);
    assert_eq!(big(B).jacobi(&p), 1);
    // p = 3 mod 4, so -1 is a non-residue
    let mut m1 = p;
    m1.dec(1);
    m1.norm();
    assert_eq!(m1.jacobi(&p), -1);
    assert_eq!(B5::new().jacobi(&p), 0);
}

#[test]
fn test_powmod() {
    let p = big(P256);
    let mut a = big(A);
    assert_eq!(
        hex_of(&a.powmod(&big(B), &p), 32),
        "2f3db69bc9d93323c351f3e768d332806ad3a7652ea632e89e23312f7b5f9f96"
    );
}

#[test]
fn test_shifts_and_bits() {
    let mut a = from_u128(1);
    a.shl(200);
    assert_eq!(a.nbits(), 201);
    assert_eq!(a.bit(200), 1);
    a.shr(199);
    a.norm();
    assert!(a == from_u128(2));

    let mut b = from_u128(0b1011_0110);
    assert_eq!(b.fshr(3), 0b110);
    assert!(b == from_u128(0b1_0110));
    assert_eq!(b.lastbits(2), 0b10);
    assert_eq!(B5::new().nbits(), 0);
}

#[test]
fn test_comp_and_conditional_ops() {
    let a = from_u128(5);
    let b = from_u128(7);
    assert_eq!(B5::comp(&a, &b), -1);
    assert_eq!(B5::comp(&b, &a), 1);
    assert_eq!(B5::comp(&a, &a), 0);

    let mut x = a;
    let mut y = b;
    x.cswap(&mut y, 0);
    assert!(x == a && y == b);
    x.cswap(&mut y, 1);
    assert!(x == b && y == a);

    x.cmove(&a, 0);
    assert!(x == b);
    x.cmove(&a, 1);
    assert!(x == a);
}

#[test]
fn test_split_at_field_width() {
    // 2^255 + 5 split at 255 bits
    let mut one = from_u128(1);
    one.shl(255);
    let mut d = DBig::from_big(&one);
    d.digits_mut()[0] += 5;
    let hi = d.split(255);
    assert!(hi == from_u128(1));
    assert!(d.low() == from_u128(5));
}

#[test]
fn test_randomnum_in_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let q = big(P256);
    for _ in 0..16 {
        let r = B5::randomnum(&q, &mut rng);
        assert_eq!(B5::comp(&r, &q), -1);
    }
    let r = B5::random(&mut rng, 256);
    assert!(r.nbits() <= 256);
}

proptest! {
    #[test]
    fn prop_mul_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let d = B5::mul(&from_u128(a as u128), &from_u128(b as u128));
        prop_assert!(d.low() == from_u128(a as u128 * b as u128));
    }

    #[test]
    fn prop_add_sub_roundtrip(a in any::<u64>(), b in any::<u64>()) {
        let mut x = from_u128(a as u128);
        x.add(&from_u128(b as u128));
        x.norm();
        prop_assert!(x == from_u128(a as u128 + b as u128));
        x.sub(&from_u128(b as u128));
        x.norm();
        prop_assert!(x == from_u128(a as u128));
    }

    #[test]
    fn prop_div_rmod_agree(a in any::<u128>(), m in 1u64..) {
        let mut q = from_u128(a);
        q.div(&from_u128(m as u128));
        let mut r = from_u128(a);
        r.rmod(&from_u128(m as u128));
        prop_assert!(q == from_u128(a / m as u128));
        prop_assert!(r == from_u128(a % m as u128));
    }
}
