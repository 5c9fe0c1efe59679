//! RSA-size integers
//!
//! An [`Ff<L>`] is `L` limbs of 256 bits, each limb a `Big<5>`. The 24 spare
//! bits at the top of every limb absorb carries between normalisations.
//! `L` must be a power of two, at least 2, so that Karatsuba splits evenly.
//!
//! The engine works on limb slices so the recursive Karatsuba routines can
//! address halves and quarters of their operands. [`FfWide<L>`] holds the
//! `2L`-limb products. Modular arithmetic uses Montgomery reduction with the
//! 2-adic inverse of the modulus; exponentiation by a secret exponent uses a
//! ladder with conditional swaps.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use params::traditional::rsa::{
    FF_LIMB_BITS, FF_LIMB_BYTES, FF_TOP_EXCESS_BITS, MILLER_RABIN_ROUNDS, SMALL_PRIME_PRODUCT,
};

use super::big::{Big, Chunk, DChunk, BASEBITS};

/// Digits per limb
pub const FF_NLEN: usize = 5;

/// One 256-bit limb
pub type Limb = Big<FF_NLEN>;

const P_OMASK: Chunk = -1 << FF_TOP_EXCESS_BITS;
const P_FEXCESS: Chunk = 1 << (BASEBITS * FF_NLEN - FF_LIMB_BITS - 1);

/// Normalise a limb, returning the bits above 256
fn limb_norm(x: &mut Limb) -> Chunk {
    x.norm();
    x.w[FF_NLEN - 1] >> FF_TOP_EXCESS_BITS
}

fn excess(a: &Limb) -> Chunk {
    ((a.w[FF_NLEN - 1] & P_OMASK) >> FF_TOP_EXCESS_BITS) + 1
}

/// Would a product of limbs with these tops overflow the digit headroom?
fn pexceed(a: &Limb, b: &Limb) -> bool {
    let ea = excess(a);
    let eb = excess(b);
    ((ea + 1) as DChunk) * ((eb + 1) as DChunk) > P_FEXCESS as DChunk
}

fn sexceed(a: &Limb) -> bool {
    let ea = excess(a);
    ((ea + 1) as DChunk) * ((ea + 1) as DChunk) > P_FEXCESS as DChunk
}

// ---- slice engine ----

fn radd(z: &mut [Limb], x: &[Limb], y: &[Limb]) {
    for ((z, x), y) in z.iter_mut().zip(x).zip(y) {
        *z = x.plus(y);
    }
}

fn rinc(z: &mut [Limb], x: &[Limb]) {
    for (z, x) in z.iter_mut().zip(x) {
        z.add(x);
    }
}

fn rdec(z: &mut [Limb], x: &[Limb]) {
    for (z, x) in z.iter_mut().zip(x) {
        z.sub(x);
    }
}

/// Carry between limbs. With `trunc`, the result is taken mod `2^(256 len)`.
fn rnorm(v: &mut [Limb], trunc: bool) {
    let n = v.len();
    for i in 0..n - 1 {
        let carry = limb_norm(&mut v[i]);
        v[i].xortop(carry << FF_TOP_EXCESS_BITS);
        v[i + 1].w[0] += carry;
    }
    let carry = limb_norm(&mut v[n - 1]);
    if trunc {
        v[n - 1].xortop(carry << FF_TOP_EXCESS_BITS);
    }
}

fn comp(a: &[Limb], b: &[Limb]) -> isize {
    for (x, y) in a.iter().zip(b).rev() {
        let j = Big::comp(x, y);
        if j != 0 {
            return j;
        }
    }
    0
}

fn shl(v: &mut [Limb]) {
    let n = v.len();
    let mut delay_carry: Chunk = 0;
    for x in v[..n - 1].iter_mut() {
        x.fshl(1);
        let carry = x.w[FF_NLEN - 1] >> FF_TOP_EXCESS_BITS;
        x.w[0] += delay_carry;
        x.xortop(carry << FF_TOP_EXCESS_BITS);
        delay_carry = carry;
    }
    v[n - 1].fshl(1);
    v[n - 1].w[0] += delay_carry;
}

fn shr(v: &mut [Limb]) {
    for i in (1..v.len()).rev() {
        let carry = v[i].fshr(1);
        v[i - 1].xortop(carry << FF_TOP_EXCESS_BITS);
    }
    v[0].fshr(1);
}

/// z[0..2n] = x*y, with t[0..2n] as workspace
fn karmul(z: &mut [Limb], x: &[Limb], y: &[Limb], t: &mut [Limb], n: usize) {
    if n == 1 {
        let mut xx = x[0];
        let mut yy = y[0];
        xx.norm();
        yy.norm();
        let mut d = Big::mul(&xx, &yy);
        z[1] = d.split(FF_LIMB_BITS);
        z[0] = d.low();
        return;
    }
    let nd2 = n / 2;
    {
        let (zl, zh) = z[..n].split_at_mut(nd2);
        radd(zl, &x[..nd2], &x[nd2..n]);
        rnorm(zl, false);
        radd(zh, &y[..nd2], &y[nd2..n]);
        rnorm(zh, false);
    }
    {
        let (tl, th) = t.split_at_mut(n);
        karmul(tl, &z[..nd2], &z[nd2..n], th, nd2);
    }
    karmul(&mut z[..n], &x[..nd2], &y[..nd2], &mut t[n..], nd2);
    karmul(&mut z[n..2 * n], &x[nd2..n], &y[nd2..n], &mut t[n..], nd2);
    {
        let (tl, _) = t.split_at_mut(n);
        rdec(tl, &z[..n]);
        rdec(tl, &z[n..2 * n]);
        rinc(&mut z[nd2..nd2 + n], tl);
    }
    rnorm(&mut z[..2 * n], false);
}

/// z[0..2n] = x^2
fn karsqr(z: &mut [Limb], x: &[Limb], t: &mut [Limb], n: usize) {
    if n == 1 {
        let mut xx = x[0];
        xx.norm();
        let mut d = Big::sqr(&xx);
        z[1] = d.split(FF_LIMB_BITS);
        z[0] = d.low();
        return;
    }
    let nd2 = n / 2;
    karsqr(&mut z[..n], &x[..nd2], &mut t[n..], nd2);
    karsqr(&mut z[n..2 * n], &x[nd2..n], &mut t[n..], nd2);
    {
        let (tl, th) = t.split_at_mut(n);
        karmul(tl, &x[..nd2], &x[nd2..n], th, nd2);
        rinc(&mut z[nd2..nd2 + n], tl);
        rinc(&mut z[nd2..nd2 + n], tl);
    }
    rnorm(&mut z[..2 * n], false);
}

/// z[0..n] = x*y mod 2^(256n)
fn karmul_lower(z: &mut [Limb], x: &[Limb], y: &[Limb], t: &mut [Limb], n: usize) {
    if n == 1 {
        z[0] = Big::smul(&x[0], &y[0]);
        return;
    }
    let nd2 = n / 2;
    karmul(&mut z[..n], &x[..nd2], &y[..nd2], &mut t[n..], nd2);
    {
        let (tl, th) = t.split_at_mut(n);
        karmul_lower(&mut tl[..nd2], &x[nd2..n], &y[..nd2], th, nd2);
        rinc(&mut z[nd2..n], &tl[..nd2]);
        karmul_lower(&mut tl[..nd2], &x[..nd2], &y[nd2..n], th, nd2);
        rinc(&mut z[nd2..n], &tl[..nd2]);
    }
    rnorm(&mut z[nd2..n], true);
}

/// Upper half of x*y into z[n..2n], given its lower half already in z[0..n]
fn karmul_upper(z: &mut [Limb], x: &[Limb], y: &[Limb], t: &mut [Limb], n: usize) {
    let nd2 = n / 2;
    {
        let (xs, ys) = z[n..2 * n].split_at_mut(nd2);
        radd(xs, &x[..nd2], &x[nd2..n]);
        radd(ys, &y[..nd2], &y[nd2..n]);
        rnorm(xs, false);
        rnorm(ys, false);
    }
    {
        // t = (x0+x1)(y0+y1)
        let (tl, th) = t.split_at_mut(n);
        karmul(tl, &z[n + nd2..2 * n], &z[n..n + nd2], th, nd2);
    }
    // z[n..2n] = x1*y1
    karmul(&mut z[n..2 * n], &x[nd2..n], &y[nd2..n], &mut t[n..], nd2);

    let (tl, _) = t.split_at_mut(n);
    rdec(tl, &z[n..2 * n]);
    {
        let (lo, hi) = z.split_at_mut(nd2);
        rinc(&mut hi[..nd2], lo);
    }
    rdec(&mut z[nd2..n], &tl[..nd2]);
    // z[0..n] now holds x0*y0
    rnorm(&mut z[..n], true);
    rdec(tl, &z[..n]);
    rinc(&mut z[nd2..nd2 + n], tl);
    rnorm(&mut z[nd2..nd2 + n], false);
}

fn limbs_to_bytes(v: &[Limb], out: &mut [u8]) {
    let len = out.len();
    out.fill(0);
    for (i, x) in v.iter().enumerate() {
        let end = len.saturating_sub(FF_LIMB_BYTES * i);
        if end == 0 {
            break;
        }
        let start = len.saturating_sub(FF_LIMB_BYTES * (i + 1));
        x.to_bytes(&mut out[start..end]);
    }
}

fn limbs_from_bytes(v: &mut [Limb], b: &[u8]) {
    let len = b.len();
    for (i, x) in v.iter_mut().enumerate() {
        let end = len.saturating_sub(FF_LIMB_BYTES * i);
        let start = len.saturating_sub(FF_LIMB_BYTES * (i + 1));
        *x = Big::from_bytes(&b[start..end]);
    }
}

// ---- typed layer ----

/// `L`-limb integer
#[derive(Clone, Copy, Zeroize)]
pub struct Ff<const L: usize> {
    v: [Limb; L],
}

/// `2L`-limb integer: products and Montgomery inputs
#[derive(Clone, Copy, Zeroize)]
pub struct FfWide<const L: usize> {
    v: [[Limb; L]; 2],
}

impl<const L: usize> Default for Ff<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize> Ff<L> {
    /// Bytes in the encoding
    pub const BYTES: usize = FF_LIMB_BYTES * L;

    pub const fn new() -> Self {
        assert!(L >= 2 && L.is_power_of_two());
        Self {
            v: [Limb::new(); L],
        }
    }

    pub fn from_int(m: isize) -> Self {
        let mut f = Self::new();
        f.set(m);
        f
    }

    /// Copy limbs from a slice, zero-extending or truncating to `L`
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        let mut f = Self::new();
        for (d, s) in f.v.iter_mut().zip(limbs) {
            *d = *s;
        }
        f
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.v
    }

    /// Big-endian decode; shorter input is zero-extended
    pub fn from_bytes(b: &[u8]) -> Self {
        let mut f = Self::new();
        limbs_from_bytes(&mut f.v, b);
        f
    }

    /// Big-endian encode into `out`, normally [`Ff::BYTES`] long
    pub fn to_bytes(&self, out: &mut [u8]) {
        let mut c = *self;
        c.norm();
        limbs_to_bytes(&c.v, out);
    }

    pub fn zero(&mut self) {
        for x in self.v.iter_mut() {
            x.zero();
        }
    }

    pub fn one(&mut self) {
        self.set(1);
    }

    pub fn set(&mut self, m: isize) {
        self.zero();
        self.v[0] = Big::from_int(m);
    }

    pub fn iszilch(&self) -> bool {
        self.v.iter().all(|x| x.iszilch())
    }

    pub fn isunity(&self) -> bool {
        self.v[0].isunity() && self.v[1..].iter().all(|x| x.iszilch())
    }

    pub fn parity(&self) -> isize {
        self.v[0].parity()
    }

    pub fn lastbits(&self, m: usize) -> isize {
        self.v[0].lastbits(m)
    }

    pub fn comp(a: &Self, b: &Self) -> isize {
        comp(&a.v, &b.v)
    }

    pub fn add(&mut self, b: &Self) {
        rinc(&mut self.v, &b.v);
    }

    pub fn sub(&mut self, b: &Self) {
        rdec(&mut self.v, &b.v);
    }

    /// self = b - self
    pub fn revsub(&mut self, b: &Self) {
        for (x, y) in self.v.iter_mut().zip(&b.v) {
            x.rsub(y);
        }
    }

    pub fn inc(&mut self, m: isize) {
        self.v[0].inc(m);
        self.norm();
    }

    pub fn dec(&mut self, m: isize) {
        self.v[0].dec(m);
        self.norm();
    }

    pub fn norm(&mut self) {
        rnorm(&mut self.v, false);
    }

    /// Shift left one bit
    pub fn shl(&mut self) {
        shl(&mut self.v);
    }

    /// Shift right one bit
    pub fn shr(&mut self) {
        shr(&mut self.v);
    }

    pub fn cswap(&mut self, b: &mut Self, d: isize) {
        for (x, y) in self.v.iter_mut().zip(b.v.iter_mut()) {
            x.cswap(y, d);
        }
    }

    /// Full product
    pub fn mul(x: &Self, y: &Self) -> FfWide<L> {
        let mut z = FfWide::new();
        let mut t = FfWide::<L>::new();
        karmul(z.limbs_mut(), &x.v, &y.v, t.limbs_mut(), L);
        z
    }

    pub fn sqr(x: &Self) -> FfWide<L> {
        let mut z = FfWide::new();
        let mut t = FfWide::<L>::new();
        karsqr(z.limbs_mut(), &x.v, t.limbs_mut(), L);
        z
    }

    /// x*y mod 2^(256L)
    pub fn lmul(x: &Self, y: &Self) -> Self {
        let mut z = Self::new();
        let mut t = FfWide::<L>::new();
        karmul_lower(&mut z.v, &x.v, &y.v, t.limbs_mut(), L);
        z
    }

    /// self = self mod m, by shift and subtract
    pub fn rmod(&mut self, m: &Self) {
        let mut k = 1;
        let mut c = *m;
        self.norm();
        if Self::comp(self, &c) < 0 {
            return;
        }
        c.shl();
        while Self::comp(self, &c) >= 0 {
            c.shl();
            k += 1;
        }
        while k > 0 {
            c.shr();
            if Self::comp(self, &c) >= 0 {
                self.sub(&c);
                self.norm();
            }
            k -= 1;
        }
    }

    /// Inverse of `a` modulo odd `p`; zero when none exists
    pub fn invmodp(a: &Self, p: &Self) -> Self {
        let mut one = Self::new();
        one.one();
        let mut u = *a;
        u.norm();
        let mut v = *p;
        let mut x1 = one;
        let mut x2 = Self::new();

        while Self::comp(&u, &one) != 0 && Self::comp(&v, &one) != 0 {
            if u.iszilch() || v.iszilch() {
                return Self::new();
            }
            while u.parity() == 0 {
                u.shr();
                if x1.parity() != 0 {
                    x1.add(p);
                    x1.norm();
                }
                x1.shr();
            }
            while v.parity() == 0 {
                v.shr();
                if x2.parity() != 0 {
                    x2.add(p);
                    x2.norm();
                }
                x2.shr();
            }
            if Self::comp(&u, &v) >= 0 {
                u.sub(&v);
                u.norm();
                if Self::comp(&x1, &x2) >= 0 {
                    x1.sub(&x2);
                } else {
                    let mut t = *p;
                    t.sub(&x2);
                    x1.add(&t);
                }
                x1.norm();
            } else {
                v.sub(&u);
                v.norm();
                if Self::comp(&x2, &x1) >= 0 {
                    x2.sub(&x1);
                } else {
                    let mut t = *p;
                    t.sub(&x1);
                    x2.add(&t);
                }
                x2.norm();
            }
        }
        if Self::comp(&u, &one) == 0 {
            x1
        } else {
            x2
        }
    }

    /// Inverse modulo `2^(256L)` of an odd value, by Hensel lifting
    pub fn invmod2m(&self) -> Self {
        let mut two = Self::new();
        two.set(2);
        let mut u = *self;
        let mut k = 3;
        while k < FF_LIMB_BITS * L {
            let mut t = Self::lmul(self, &u);
            t.revsub(&two);
            rnorm(&mut t.v, true);
            u = Self::lmul(&u, &t);
            k *= 2;
        }
        u
    }

    /// Enter Montgomery form modulo `m`
    pub fn nres(&mut self, m: &Self) {
        let d = FfWide::from_high(self);
        *self = d.dmod(m);
    }

    /// Leave Montgomery form, `md` being the 2-adic inverse of `m`
    pub fn redc(&mut self, m: &Self, md: &Self) {
        self.rmod(m);
        let d = FfWide::from_low(self);
        *self = d.reduce(m, md);
        self.rmod(m);
    }

    /// `256L` random bits with the top bit set
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut f = Self::new();
        for x in f.v.iter_mut() {
            *x = Big::random(rng, FF_LIMB_BITS);
        }
        while f.v[L - 1].nbits() < FF_LIMB_BITS {
            f.v[L - 1] = Big::random(rng, FF_LIMB_BITS);
        }
        f
    }

    /// Random value below `p`
    pub fn randomnum<R: RngCore + CryptoRng>(p: &Self, rng: &mut R) -> Self {
        let mut d = FfWide::<L>::new();
        for x in d.limbs_mut() {
            *x = Big::random(rng, FF_LIMB_BITS);
        }
        d.dmod(p)
    }

    /// Montgomery product, reducing `self` first if the digits would overflow
    pub fn modmul(&mut self, y: &Self, p: &Self, nd: &Self) {
        if pexceed(&self.v[L - 1], &y.v[L - 1]) {
            self.rmod(p);
        }
        let d = Self::mul(self, y);
        *self = d.reduce(p, nd);
    }

    pub fn modsqr(&mut self, p: &Self, nd: &Self) {
        if sexceed(&self.v[L - 1]) {
            self.rmod(p);
        }
        let mut d = Self::sqr(self);
        d.norm();
        *self = d.reduce(p, nd);
    }

    /// self = self^e mod p for a secret `e`
    ///
    /// Montgomery ladder over every bit of `e` with conditional swaps, so
    /// the sequence of operations does not depend on the exponent.
    pub fn skpow(&mut self, e: &Self, p: &Self) {
        let nd = p.invmod2m();
        self.rmod(p);
        let mut r0 = Self::from_int(1);
        let mut r1 = *self;
        r0.nres(p);
        r1.nres(p);

        for i in (0..FF_LIMB_BITS * L).rev() {
            let b = e.v[i / FF_LIMB_BITS].bit(i % FF_LIMB_BITS);
            *self = r0;
            self.modmul(&r1, p, &nd);
            r0.cswap(&mut r1, b);
            r0.modsqr(p, &nd);
            r1 = *self;
            r0.cswap(&mut r1, b);
        }
        *self = r0;
        self.redc(p, &nd);
        r0.zeroize();
        r1.zeroize();
    }

    /// As [`Ff::skpow`] for a single-limb exponent
    pub fn skpows(&mut self, e: &Limb, p: &Self) {
        let nd = p.invmod2m();
        self.rmod(p);
        let mut r0 = Self::from_int(1);
        let mut r1 = *self;
        r0.nres(p);
        r1.nres(p);

        for i in (0..FF_LIMB_BITS).rev() {
            let b = e.bit(i);
            *self = r0;
            self.modmul(&r1, p, &nd);
            r0.cswap(&mut r1, b);
            r0.modsqr(p, &nd);
            r1 = *self;
            r0.cswap(&mut r1, b);
        }
        *self = r0;
        self.redc(p, &nd);
    }

    /// self = self^e mod p for a small public `e`
    pub fn power(&mut self, e: isize, p: &Self) {
        let nd = p.invmod2m();
        let mut w = *self;
        w.nres(p);
        if e == 2 {
            *self = w;
            self.modsqr(p, &nd);
        } else {
            let mut first = true;
            let mut ee = e;
            loop {
                if ee % 2 == 1 {
                    if first {
                        *self = w;
                    } else {
                        self.modmul(&w, p, &nd);
                    }
                    first = false;
                }
                ee >>= 1;
                if ee == 0 {
                    break;
                }
                w.modsqr(p, &nd);
            }
        }
        self.redc(p, &nd);
    }

    /// self = self^e mod p for a public `e`, left to right
    pub fn pow(&mut self, e: &Self, p: &Self) {
        let nd = p.invmod2m();
        let mut w = *self;
        self.one();
        self.nres(p);
        w.nres(p);
        for i in (0..FF_LIMB_BITS * L).rev() {
            self.modsqr(p, &nd);
            if e.v[i / FF_LIMB_BITS].bit(i % FF_LIMB_BITS) == 1 {
                self.modmul(&w, p, &nd);
            }
        }
        self.redc(p, &nd);
    }

    /// self = self^e * y^f mod p, single-limb exponents
    pub fn pow2(&mut self, e: &Limb, y: &Self, f: &Limb, p: &Self) {
        let nd = p.invmod2m();
        let mut xn = *self;
        let mut yn = *y;
        xn.nres(p);
        yn.nres(p);
        let mut xy = xn;
        xy.modmul(&yn, p, &nd);
        self.one();
        self.nres(p);

        for i in (0..FF_LIMB_BITS).rev() {
            let eb = e.bit(i);
            let fb = f.bit(i);
            self.modsqr(p, &nd);
            match (eb, fb) {
                (1, 1) => self.modmul(&xy, p, &nd),
                (1, _) => self.modmul(&xn, p, &nd),
                (_, 1) => self.modmul(&yn, p, &nd),
                _ => {}
            }
        }
        self.redc(p, &nd);
    }

    /// True if `self` shares a factor with the small integer `s`
    pub fn cfactor(&self, s: isize) -> bool {
        let mut y = Self::new();
        y.set(s);
        let mut x = *self;
        x.norm();

        x.sub(&y);
        x.norm();
        while !x.iszilch() && x.parity() == 0 {
            x.shr();
        }
        while Self::comp(&x, &y) > 0 {
            x.sub(&y);
            x.norm();
            while !x.iszilch() && x.parity() == 0 {
                x.shr();
            }
        }
        let g = x.v[0].get(0) as isize;
        igcd(s, g) > 1
    }

    /// Probabilistic primality test
    ///
    /// Trial division by the primes up to 19, then Miller-Rabin with random
    /// bases.
    pub fn prime<R: RngCore + CryptoRng>(p: &Self, rng: &mut R) -> bool {
        let mut p = *p;
        p.norm();
        if p.cfactor(SMALL_PRIME_PRODUCT as isize) {
            return false;
        }
        let mut unity = Self::new();
        unity.one();
        let mut nm1 = p;
        nm1.sub(&unity);
        nm1.norm();
        let mut d = nm1;
        let mut s = 0;
        while d.parity() == 0 {
            d.shr();
            s += 1;
        }
        if s == 0 {
            return false;
        }

        'rounds: for _ in 0..MILLER_RABIN_ROUNDS {
            let mut x = Self::randomnum(&p, rng);
            x.pow(&d, &p);
            if Self::comp(&x, &unity) == 0 || Self::comp(&x, &nm1) == 0 {
                continue;
            }
            for _ in 1..s {
                x.power(2, &p);
                if Self::comp(&x, &unity) == 0 {
                    return false;
                }
                if Self::comp(&x, &nm1) == 0 {
                    continue 'rounds;
                }
            }
            return false;
        }
        true
    }
}

/// Greatest common divisor of small integers
pub fn igcd(x: isize, y: isize) -> isize {
    if y == 0 {
        return x;
    }
    let mut xx = x;
    let mut yy = y;
    loop {
        let r = xx % yy;
        if r == 0 {
            break;
        }
        xx = yy;
        yy = r;
    }
    yy
}

impl<const L: usize> Default for FfWide<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize> FfWide<L> {
    pub const fn new() -> Self {
        Self {
            v: [[Limb::new(); L]; 2],
        }
    }

    /// `x` in the low half
    pub fn from_low(x: &Ff<L>) -> Self {
        let mut d = Self::new();
        d.v[0] = x.v;
        d
    }

    /// `x * 2^(256L)`
    pub fn from_high(x: &Ff<L>) -> Self {
        let mut d = Self::new();
        d.v[1] = x.v;
        d
    }

    /// Copy limbs from a slice, zero-extending or truncating to `2L`
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        let mut d = Self::new();
        for (x, s) in d.limbs_mut().iter_mut().zip(limbs) {
            *x = *s;
        }
        d
    }

    pub fn limbs(&self) -> &[Limb] {
        self.v.as_flattened()
    }

    pub fn limbs_mut(&mut self) -> &mut [Limb] {
        self.v.as_flattened_mut()
    }

    pub fn low(&self) -> Ff<L> {
        Ff { v: self.v[0] }
    }

    pub fn high(&self) -> Ff<L> {
        Ff { v: self.v[1] }
    }

    pub fn from_bytes(b: &[u8]) -> Self {
        let mut d = Self::new();
        limbs_from_bytes(d.limbs_mut(), b);
        d
    }

    pub fn to_bytes(&self, out: &mut [u8]) {
        let mut c = *self;
        c.norm();
        limbs_to_bytes(c.limbs(), out);
    }

    pub fn norm(&mut self) {
        rnorm(self.limbs_mut(), false);
    }

    pub fn add(&mut self, b: &Self) {
        rinc(self.limbs_mut(), b.limbs());
    }

    /// self mod b
    pub fn dmod(&self, b: &Ff<L>) -> Ff<L> {
        let mut x = *self;
        x.norm();
        let mut m = Self::from_high(b);
        let mut k = FF_LIMB_BITS * L;

        while comp(x.limbs(), m.limbs()) >= 0 {
            rdec(x.limbs_mut(), m.limbs());
            x.norm();
        }
        while k > 0 {
            shr(m.limbs_mut());
            if comp(x.limbs(), m.limbs()) >= 0 {
                rdec(x.limbs_mut(), m.limbs());
                x.norm();
            }
            k -= 1;
        }
        let mut r = x.low();
        r.rmod(b);
        r
    }

    /// Montgomery reduction of `self < ms * 2^(256L)`, result below `2 ms`
    pub fn reduce(&self, ms: &Ff<L>, md: &Ff<L>) -> Ff<L> {
        let mut d = *self;
        let mut t = Self::new();
        let mut r = d.high();
        let mut m = Ff::<L>::new();

        karmul_lower(&mut m.v, &d.v[0], &md.v, t.limbs_mut(), L);
        karmul_upper(d.limbs_mut(), &ms.v, &m.v, t.limbs_mut(), L);
        m = d.high();

        r.add(ms);
        r.sub(&m);
        r.norm();
        r
    }
}

#[cfg(test)]
mod tests;
