//! Prime-field elements with lazy reduction
//!
//! An [`Fp`] holds a residue together with an excess bound `xes`: the stored
//! integer is known to be below `xes * p`. Additions grow the bound, and a
//! full reduction only happens once it would exceed what the digit headroom
//! of the modulus allows.
//!
//! Three reduction strategies are selected by the field's [`ModType`]:
//! Montgomery form for general moduli, a fold for pseudo-Mersenne primes
//! `2^n - c`, and a two-step fold for the Goldilocks prime `2^448 - 2^224 - 1`.

use core::fmt;
use core::marker::PhantomData;

use zeroize::Zeroize;

use super::big::{Big, Chunk, BASEBITS, CHUNK};
use super::dbig::DBig;

/// Shape of the field modulus, which picks the reduction routine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModType {
    /// No special form; elements live in Montgomery representation
    NotSpecial,
    /// `2^MODBITS - MCONST`
    PseudoMersenne,
    /// `2^448 - 2^224 - 1`
    GeneralisedMersenne,
}

/// Compile-time description of a prime field over `N` digits
pub trait FieldConfig<const N: usize>: Copy + fmt::Debug + 'static {
    /// Bit length of the modulus
    const MODBITS: usize;
    const MODTYPE: ModType;
    const MODULUS: [Chunk; N];
    /// `2^(112N) mod p`, used to enter Montgomery form
    const R2MODP: [Chunk; N];
    /// `-1/p mod 2^56` for Montgomery moduli, `c` for pseudo-Mersenne ones
    const MCONST: Chunk;

    const MODBYTES: usize = (Self::MODBITS + 7) / 8;
    const TBITS: usize = Self::MODBITS % BASEBITS;
    const TMASK: Chunk = (1 << Self::TBITS) - 1;
    /// Largest excess the digits can absorb before a reduction is forced
    const FEXCESS: i64 = {
        let e = BASEBITS * N - Self::MODBITS - 1;
        if e > 30 {
            1 << 30
        } else {
            1 << e
        }
    };
}

/// Element of the field described by `F`
pub struct Fp<const N: usize, F: FieldConfig<N>> {
    x: Big<N>,
    xes: i64,
    _field: PhantomData<F>,
}

impl<const N: usize, F: FieldConfig<N>> Clone for Fp<N, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize, F: FieldConfig<N>> Copy for Fp<N, F> {}

impl<const N: usize, F: FieldConfig<N>> Zeroize for Fp<N, F> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.xes = 1;
    }
}

impl<const N: usize, F: FieldConfig<N>> Default for Fp<N, F> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Number of bits needed to hold `w`
fn logb2(w: u32) -> usize {
    (u32::BITS - w.leading_zeros()) as usize
}

/// Estimate `n / m` from the top digits, never overshooting
fn quo<const N: usize>(n: &Big<N>, m: &Big<N>, tbits: usize) -> isize {
    let hb = CHUNK / 2;
    if tbits < hb {
        let sh = hb - tbits;
        let num = (n.w[N - 1] << sh) | (n.w[N - 2] >> (BASEBITS - sh));
        let den = (m.w[N - 1] << sh) | (m.w[N - 2] >> (BASEBITS - sh));
        (num / (den + 1)) as isize
    } else {
        let num = n.w[N - 1];
        let den = m.w[N - 1];
        (num / (den + 1)) as isize
    }
}

/// Halve `m`, then `r = a - m`; returns 1 if the result is negative
fn ssn<const N: usize>(r: &mut Big<N>, a: &Big<N>, m: &mut Big<N>) -> isize {
    let n = N - 1;
    m.w[0] = (m.w[0] >> 1) | ((m.w[1] << (BASEBITS - 1)) & super::big::BMASK);
    r.w[0] = a.w[0] - m.w[0];
    let mut carry = r.w[0] >> BASEBITS;
    r.w[0] &= super::big::BMASK;
    for i in 1..n {
        m.w[i] = (m.w[i] >> 1) | ((m.w[i + 1] << (BASEBITS - 1)) & super::big::BMASK);
        r.w[i] = a.w[i] - m.w[i] + carry;
        carry = r.w[i] >> BASEBITS;
        r.w[i] &= super::big::BMASK;
    }
    m.w[n] >>= 1;
    r.w[n] = a.w[n] - m.w[n] + carry;
    ((r.w[n] >> (CHUNK - 1)) & 1) as isize
}

impl<const N: usize, F: FieldConfig<N>> Fp<N, F> {
    fn modulus() -> Big<N> {
        Big::from_limbs(F::MODULUS)
    }

    pub fn zero() -> Self {
        Self {
            x: Big::new(),
            xes: 1,
            _field: PhantomData,
        }
    }

    pub fn one() -> Self {
        Self::from_int(1)
    }

    /// Small integer, negative values taken modulo `p`
    pub fn from_int(a: isize) -> Self {
        let x = if a < 0 {
            let mut m = Self::modulus();
            m.inc(a);
            m.norm();
            m
        } else {
            Big::from_int(a)
        };
        Self::from_big(&x)
    }

    /// Enter the field representation
    pub fn from_big(b: &Big<N>) -> Self {
        let mut f = Self {
            x: *b,
            xes: 1,
            _field: PhantomData,
        };
        f.nres();
        f
    }

    fn nres(&mut self) {
        match F::MODTYPE {
            ModType::NotSpecial => {
                let r = Big::from_limbs(F::R2MODP);
                let mut d = Big::mul(&self.x, &r);
                self.x = Self::modulo(&mut d);
                self.xes = 2;
            }
            _ => {
                self.x.rmod(&Self::modulus());
                self.xes = 1;
            }
        }
    }

    /// Leave the field representation without a final reduction
    fn redc(&self) -> Big<N> {
        match F::MODTYPE {
            ModType::NotSpecial => {
                let mut d = DBig::from_big(&self.x);
                Self::modulo(&mut d)
            }
            _ => self.x,
        }
    }

    /// Fully reduced integer value in `0..p`
    pub fn to_big(&self) -> Big<N> {
        let mut t = *self;
        t.reduce();
        t.redc()
    }

    /// Reduce a double-length value to a single one below `2p`
    fn modulo(d: &mut DBig<N>) -> Big<N> {
        match F::MODTYPE {
            ModType::PseudoMersenne => {
                let mut t = d.split(F::MODBITS);
                let b = d.low();
                let v = t.pmul(F::MCONST as isize);
                t.add(&b);
                t.norm();
                let tw = t.w[N - 1];
                t.w[N - 1] &= F::TMASK;
                t.w[0] += F::MCONST * ((tw >> F::TBITS) + (v << (BASEBITS - F::TBITS)));
                t.norm();
                t
            }
            ModType::GeneralisedMersenne => {
                // 2^448 = 2^224 + 1
                let t = d.split(F::MODBITS);
                let rm2 = F::MODBITS / 2;
                let mut b = d.low();
                b.add(&t);
                let mut dd = DBig::from_big(&t);
                dd.shl(rm2);
                let mut tt = dd.split(F::MODBITS);
                let lo = dd.low();
                b.add(&tt);
                b.add(&lo);
                b.norm();
                tt.shl(rm2);
                b.add(&tt);

                let carry = b.w[N - 1] >> F::TBITS;
                b.w[N - 1] &= F::TMASK;
                b.w[0] += carry;
                b.w[rm2 / BASEBITS] += carry << (rm2 % BASEBITS);
                b.norm();
                b
            }
            ModType::NotSpecial => Big::monty(&Self::modulus(), F::MCONST, d),
        }
    }

    /// Reduce to the canonical representative, `xes = 1`
    pub fn reduce(&mut self) {
        let mut m = Self::modulus();
        let mut r = m;
        self.x.norm();
        let mut sb = if self.xes > 16 {
            let q = quo(&self.x, &m, F::TBITS);
            let carry = r.pmul(q);
            r.w[N - 1] += carry << BASEBITS;
            self.x.sub(&r);
            self.x.norm();
            2
        } else {
            logb2((self.xes - 1) as u32)
        };

        for _ in 0..sb {
            m.fshl(1);
        }
        while sb > 0 {
            let sr = ssn(&mut r, &self.x, &mut m);
            self.x.cmove(&r, 1 - sr);
            sb -= 1;
        }
        self.xes = 1;
    }

    pub fn norm(&mut self) {
        self.x.norm();
    }

    pub fn iszilch(&self) -> bool {
        let mut a = *self;
        a.reduce();
        a.x.iszilch()
    }

    pub fn isunity(&self) -> bool {
        self.to_big().isunity()
    }

    pub fn equals(&self, b: &Self) -> bool {
        let mut f = *self;
        let mut s = *b;
        f.reduce();
        s.reduce();
        Big::comp(&f.x, &s.x) == 0
    }

    /// Parity of the reduced value
    pub fn sign(&self) -> isize {
        self.to_big().parity()
    }

    pub fn cmove(&mut self, b: &Self, d: isize) {
        self.x.cmove(&b.x, d);
        let c = internal::word_bit_mask(d as i64);
        self.xes ^= (self.xes ^ b.xes) & c;
    }

    pub fn cswap(&mut self, b: &mut Self, d: isize) {
        self.x.cswap(&mut b.x, d);
        let c = internal::word_bit_mask(d as i64);
        let t = c & (self.xes ^ b.xes);
        self.xes ^= t;
        b.xes ^= t;
    }

    pub fn add(&mut self, b: &Self) {
        self.x.add(&b.x);
        self.x.norm();
        self.xes += b.xes;
        if self.xes > F::FEXCESS {
            self.reduce();
        }
    }

    pub fn dbl(&mut self) {
        let t = *self;
        self.add(&t);
    }

    pub fn neg(&mut self) {
        let mut p = Self::modulus();
        let sb = logb2((self.xes - 1) as u32);
        for _ in 0..sb {
            p.fshl(1);
        }
        self.x.rsub(&p);
        self.x.norm();
        self.xes = 1 << (sb + 1);
        if self.xes > F::FEXCESS {
            self.reduce();
        }
    }

    pub fn sub(&mut self, b: &Self) {
        let mut n = *b;
        n.neg();
        self.add(&n);
    }

    /// self = b - self
    pub fn rsub(&mut self, b: &Self) {
        self.neg();
        self.add(b);
    }

    pub fn mul(&mut self, b: &Self) {
        let mut y = *b;
        if self.xes * y.xes > F::FEXCESS {
            self.reduce();
            if self.xes * y.xes > F::FEXCESS {
                y.reduce();
            }
        }
        let mut d = Big::mul(&self.x, &y.x);
        self.x = Self::modulo(&mut d);
        self.xes = 2;
    }

    pub fn sqr(&mut self) {
        if self.xes * self.xes > F::FEXCESS {
            self.reduce();
        }
        let mut d = Big::sqr(&self.x);
        self.x = Self::modulo(&mut d);
        self.xes = 2;
    }

    /// Multiply by a small signed integer
    pub fn imul(&mut self, c: isize) {
        let n = Self::from_int(c);
        self.mul(&n);
    }

    /// Halve
    pub fn div2(&mut self) {
        self.x.norm();
        if self.x.parity() == 1 {
            self.x.add(&Self::modulus());
            self.x.norm();
        }
        self.x.fshr(1);
    }

    /// Multiplicative inverse; zero maps to zero
    pub fn inverse(&mut self) {
        let mut r = self.to_big();
        r.invmodp(&Self::modulus());
        *self = Self::from_big(&r);
    }

    /// Quadratic character: 1 for a non-zero square, -1 for a non-square, 0 for zero
    pub fn qr(&self) -> isize {
        self.to_big().jacobi(&Self::modulus())
    }

    /// `self^e` for a public exponent
    pub fn pow(&self, e: &Big<N>) -> Self {
        let mut e = *e;
        e.norm();
        let mut r = Self::one();
        for i in (0..e.nbits()).rev() {
            r.sqr();
            if e.bit(i) == 1 {
                r.mul(self);
            }
        }
        r.reduce();
        r
    }

    /// Square root of a quadratic residue
    ///
    /// Uses `a^((p+1)/4)` for `p = 3 mod 4` and Atkin's method for
    /// `p = 5 mod 8`. The result for a non-residue is meaningless; check
    /// [`Fp::qr`] first.
    pub fn sqrt(&self) -> Self {
        let p = Self::modulus();
        if p.lastbits(2) == 3 {
            let mut e = p;
            e.inc(1);
            e.norm();
            e.shr(2);
            return self.pow(&e);
        }
        let mut i = *self;
        i.dbl();
        let mut e = p;
        e.dec(5);
        e.norm();
        e.shr(3);
        let v = i.pow(&e);
        let mut t = v;
        t.sqr();
        i.mul(&t);
        i.sub(&Self::one());
        let mut r = *self;
        r.mul(&v);
        r.mul(&i);
        r.reduce();
        r
    }
}

impl<const N: usize, F: FieldConfig<N>> PartialEq for Fp<N, F> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<const N: usize, F: FieldConfig<N>> Eq for Fp<N, F> {}

impl<const N: usize, F: FieldConfig<N>> fmt::Debug for Fp<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({:?})", self.to_big())
    }
}
