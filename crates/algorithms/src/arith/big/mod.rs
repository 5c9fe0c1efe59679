//! Fixed-width signed-digit integers
//!
//! A [`Big<N>`] stores `N` digits of [`BASEBITS`] bits in `i64` words, least
//! significant first. Between normalisations a digit may run over its
//! nominal width or go negative; [`Big::norm`] propagates the carries so
//! that every digit except the top one lies in `0..2^56`. The top digit
//! keeps whatever overflow is left, which the field and RSA layers use as
//! headroom for lazy reduction.
//!
//! Nothing in this module fails: contracts are documented per function and
//! checked with `debug_assert!` where it is cheap to do so.

use core::fmt;

use internal::word_bit_mask;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::dbig::DBig;

/// Digit word
pub type Chunk = i64;
/// Double-width accumulator used by the multipliers
pub type DChunk = i128;

/// Bits per digit
pub const BASEBITS: usize = 56;
/// Mask for one digit
pub const BMASK: Chunk = (1 << BASEBITS) - 1;
/// Width of [`Chunk`] in bits
pub const CHUNK: usize = 64;

/// Number of digits needed for a modulus of `bits` bits
pub const fn nlen(bits: usize) -> usize {
    bits / BASEBITS + 1
}

/// Multiply-accumulate `a*b + c + r`, split into (carry, digit)
#[inline(always)]
pub(crate) fn muladd(a: Chunk, b: Chunk, c: Chunk, r: Chunk) -> (Chunk, Chunk) {
    let prod = (a as DChunk) * (b as DChunk) + (c as DChunk) + (r as DChunk);
    let bot = (prod as Chunk) & BMASK;
    let top = (prod >> BASEBITS) as Chunk;
    (top, bot)
}

/// Integer of `N` digits of 56 bits
#[derive(Clone, Copy, Zeroize)]
pub struct Big<const N: usize> {
    pub(crate) w: [Chunk; N],
}

impl<const N: usize> Default for Big<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Big<N> {
    /// Zero
    pub const fn new() -> Self {
        Self { w: [0; N] }
    }

    /// Build from a digit table, least significant digit first
    pub const fn from_limbs(w: [Chunk; N]) -> Self {
        Self { w }
    }

    /// Small integer. Negative values are left unnormalised.
    pub fn from_int(x: isize) -> Self {
        let mut b = Self::new();
        b.w[0] = x as Chunk;
        b
    }

    pub fn zero(&mut self) {
        self.w = [0; N];
    }

    pub fn one(&mut self) {
        self.zero();
        self.w[0] = 1;
    }

    pub fn get(&self, i: usize) -> Chunk {
        self.w[i]
    }

    pub fn set(&mut self, i: usize, x: Chunk) {
        self.w[i] = x;
    }

    /// XOR `x` into the top digit
    pub fn xortop(&mut self, x: Chunk) {
        self.w[N - 1] ^= x;
    }

    /// True if zero. Expects a normalised value.
    pub fn iszilch(&self) -> bool {
        let d = self.w.iter().fold(0, |acc, &x| acc | x);
        ((d | d.wrapping_neg()) >> (CHUNK - 1)) == 0
    }

    /// True if one. Expects a normalised value.
    pub fn isunity(&self) -> bool {
        let d = self.w[1..].iter().fold(0, |acc, &x| acc | x);
        d == 0 && self.w[0] == 1
    }

    /// Swap with `b` if `d == 1`, without branching on `d`
    pub fn cswap(&mut self, b: &mut Self, d: isize) {
        let c = word_bit_mask(d as i64);
        for i in 0..N {
            let t = c & (self.w[i] ^ b.w[i]);
            self.w[i] ^= t;
            b.w[i] ^= t;
        }
    }

    /// Overwrite with `g` if `d == 1`, without branching on `d`
    pub fn cmove(&mut self, g: &Self, d: isize) {
        let b = word_bit_mask(d as i64);
        for i in 0..N {
            self.w[i] ^= (self.w[i] ^ g.w[i]) & b;
        }
    }

    /// Propagate carries. Returns whatever lies above bit 56 of the top digit.
    pub fn norm(&mut self) -> Chunk {
        let mut carry: Chunk = 0;
        for i in 0..N - 1 {
            let d = self.w[i] + carry;
            self.w[i] = d & BMASK;
            carry = d >> BASEBITS;
        }
        self.w[N - 1] += carry;
        self.w[N - 1] >> BASEBITS
    }

    /// Digit-wise add, no normalisation
    pub fn add(&mut self, r: &Self) {
        for i in 0..N {
            self.w[i] += r.w[i];
        }
    }

    pub fn plus(&self, x: &Self) -> Self {
        let mut s = *self;
        s.add(x);
        s
    }

    /// Digit-wise subtract, no normalisation
    pub fn sub(&mut self, x: &Self) {
        for i in 0..N {
            self.w[i] -= x.w[i];
        }
    }

    pub fn minus(&self, x: &Self) -> Self {
        let mut d = *self;
        d.sub(x);
        d
    }

    /// self = x - self
    pub fn rsub(&mut self, x: &Self) {
        for i in 0..N {
            self.w[i] = x.w[i] - self.w[i];
        }
    }

    pub fn inc(&mut self, x: isize) {
        self.norm();
        self.w[0] += x as Chunk;
    }

    pub fn dec(&mut self, x: isize) {
        self.norm();
        self.w[0] -= x as Chunk;
    }

    /// Multiply every digit by a small constant, no carry propagation
    pub fn imul(&mut self, c: isize) {
        for i in 0..N {
            self.w[i] *= c as Chunk;
        }
    }

    /// Multiply by a small constant with carry propagation.
    /// Returns the carry out of the top digit.
    pub fn pmul(&mut self, c: isize) -> Chunk {
        let mut carry = 0;
        for i in 0..N {
            let (top, bot) = muladd(self.w[i], c as Chunk, carry, 0);
            carry = top;
            self.w[i] = bot;
        }
        carry
    }

    /// Multiply by a small constant into a double-length result
    pub fn pxmul(&self, c: isize) -> DBig<N> {
        let mut m = DBig::new();
        let mw = m.digits_mut();
        let mut carry = 0;
        for j in 0..N {
            let (top, bot) = muladd(self.w[j], c as Chunk, carry, mw[j]);
            carry = top;
            mw[j] = bot;
        }
        mw[N] = carry;
        m
    }

    /// Low half of a product, i.e. `a*b mod 2^(56N)`
    pub fn smul(a: &Self, b: &Self) -> Self {
        let mut c = Self::new();
        for i in 0..N {
            let mut carry = 0;
            for j in 0..N - i {
                let (top, bot) = muladd(a.w[i], b.w[j], carry, c.w[i + j]);
                carry = top;
                c.w[i + j] = bot;
            }
        }
        c
    }

    /// Full product by column-wise (Comba) accumulation
    ///
    /// Each column is built from the diagonal terms `a_i*b_i` plus the
    /// cross differences `(a_i - a_j)(b_j - b_i)`, which halves the number
    /// of wide multiplications.
    pub fn mul(a: &Self, b: &Self) -> DBig<N> {
        let mut c = DBig::new();
        let cw = c.digits_mut();

        let mut d = [0 as DChunk; N];
        for i in 0..N {
            d[i] = (a.w[i] as DChunk) * (b.w[i] as DChunk);
        }

        let mut s = d[0];
        let mut t = s;
        cw[0] = (t as Chunk) & BMASK;
        let mut co = t >> BASEBITS;

        for k in 1..N {
            s += d[k];
            t = co + s;
            for i in (1 + k / 2)..=k {
                t += ((a.w[i] - a.w[k - i]) as DChunk) * ((b.w[k - i] - b.w[i]) as DChunk);
            }
            cw[k] = (t as Chunk) & BMASK;
            co = t >> BASEBITS;
        }

        for k in N..2 * N - 1 {
            s -= d[k - N];
            t = co + s;
            for i in (1 + k / 2)..N {
                t += ((a.w[i] - a.w[k - i]) as DChunk) * ((b.w[k - i] - b.w[i]) as DChunk);
            }
            cw[k] = (t as Chunk) & BMASK;
            co = t >> BASEBITS;
        }
        cw[2 * N - 1] = co as Chunk;
        c
    }

    /// Square, summing each cross term once and doubling
    pub fn sqr(a: &Self) -> DBig<N> {
        let mut c = DBig::new();
        let cw = c.digits_mut();
        let mut co: DChunk = 0;
        for k in 0..2 * N - 1 {
            let lo = if k >= N { k + 1 - N } else { 0 };
            let mut t: DChunk = 0;
            let mut i = lo;
            while 2 * i < k {
                t += (a.w[i] as DChunk) * (a.w[k - i] as DChunk);
                i += 1;
            }
            t += t;
            if k % 2 == 0 {
                t += (a.w[k / 2] as DChunk) * (a.w[k / 2] as DChunk);
            }
            t += co;
            cw[k] = (t as Chunk) & BMASK;
            co = t >> BASEBITS;
        }
        cw[2 * N - 1] = co as Chunk;
        c
    }

    /// Montgomery reduction of `d` modulo `md`, with `mc = -1/md mod 2^56`
    ///
    /// `d` must be normalised and below `md * 2^(56N)`; the result is below
    /// `2*md`. `d` is consumed as workspace.
    pub fn monty(md: &Self, mc: Chunk, d: &mut DBig<N>) -> Self {
        let dw = d.digits_mut();
        for i in 0..N {
            let m = mc.wrapping_mul(dw[i]) & BMASK;
            let mut carry = 0;
            for j in 0..N {
                let (top, bot) = muladd(m, md.w[j], carry, dw[i + j]);
                carry = top;
                dw[i + j] = bot;
            }
            dw[N + i] += carry;
        }
        let mut b = Self::new();
        b.w.copy_from_slice(&dw[N..]);
        b.norm();
        b
    }

    /// Shift left by `k` bits, top digit left unmasked
    pub fn shl(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        debug_assert!(m < N);

        self.w[N - 1] = self.w[N - 1 - m] << n;
        if N >= m + 2 {
            self.w[N - 1] |= self.w[N - m - 2] >> (BASEBITS - n);
        }
        for i in (m + 1..N - 1).rev() {
            self.w[i] = ((self.w[i - m] << n) & BMASK) | (self.w[i - m - 1] >> (BASEBITS - n));
        }
        self.w[m] = (self.w[0] << n) & BMASK;
        for i in 0..m {
            self.w[i] = 0;
        }
    }

    /// Shift right by `k` bits
    pub fn shr(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        debug_assert!(m < N);

        for i in 0..N - m - 1 {
            self.w[i] = (self.w[m + i] >> n) | ((self.w[m + i + 1] << (BASEBITS - n)) & BMASK);
        }
        self.w[N - m - 1] = self.w[N - 1] >> n;
        for i in N - m..N {
            self.w[i] = 0;
        }
    }

    /// Fast shift left by fewer than 56 bits
    pub fn fshl(&mut self, k: usize) {
        debug_assert!(k < BASEBITS);
        self.w[N - 1] = (self.w[N - 1] << k) | (self.w[N - 2] >> (BASEBITS - k));
        for i in (1..N - 1).rev() {
            self.w[i] = ((self.w[i] << k) & BMASK) | (self.w[i - 1] >> (BASEBITS - k));
        }
        self.w[0] = (self.w[0] << k) & BMASK;
    }

    /// Fast shift right by fewer than 56 bits. Returns the bits shifted out.
    pub fn fshr(&mut self, k: usize) -> Chunk {
        debug_assert!(k < BASEBITS);
        let r = self.w[0] & ((1 << k) - 1);
        for i in 0..N - 1 {
            self.w[i] = (self.w[i] >> k) | ((self.w[i + 1] << (BASEBITS - k)) & BMASK);
        }
        self.w[N - 1] >>= k;
        r
    }

    /// Three-way comparison (-1, 0, 1) of normalised values, branch free
    pub fn comp(a: &Self, b: &Self) -> isize {
        let mut gt: Chunk = 0;
        let mut eq: Chunk = 1;
        for i in (0..N).rev() {
            gt |= ((b.w[i] - a.w[i]) >> (CHUNK - 1)) & eq;
            eq &= ((b.w[i] ^ a.w[i]) - 1) >> (CHUNK - 1);
        }
        (gt + gt + eq - 1) as isize
    }

    /// Bit length
    pub fn nbits(&self) -> usize {
        let mut s = *self;
        s.norm();
        let Some(k) = (0..N).rev().find(|&k| s.w[k] != 0) else {
            return 0;
        };
        let mut bts = BASEBITS * k;
        let mut c = s.w[k];
        while c != 0 {
            c /= 2;
            bts += 1;
        }
        bts
    }

    pub fn parity(&self) -> isize {
        (self.w[0] & 1) as isize
    }

    /// Bit `n` of a normalised value
    pub fn bit(&self, n: usize) -> isize {
        ((self.w[n / BASEBITS] >> (n % BASEBITS)) & 1) as isize
    }

    /// Low `n` bits of a normalised value
    pub fn lastbits(&self, n: usize) -> isize {
        let msk = (1 << n) - 1;
        (self.w[0] & msk) as isize
    }

    /// Reduce modulo `2^m`
    pub fn mod2m(&mut self, m: usize) {
        let wd = m / BASEBITS;
        if wd >= N {
            return;
        }
        let bt = m % BASEBITS;
        self.w[wd] &= (1 << bt) - 1;
        for i in wd + 1..N {
            self.w[i] = 0;
        }
    }

    /// Inverse modulo `2^bits` of an odd value, by Hensel lifting
    ///
    /// Starts from `u = a`, which is correct to three bits for odd `a`, and
    /// doubles the precision with `u <- u(2 - au)` each round.
    pub fn invmod2m(&mut self, bits: usize) {
        debug_assert!(self.parity() == 1);
        let mut two = Self::new();
        two.w[0] = 2;

        let mut u = *self;
        u.mod2m(bits);
        let mut k = 3;
        while k < bits {
            let mut t = Self::smul(self, &u);
            t.rsub(&two);
            t.norm();
            u = Self::smul(&u, &t);
            u.mod2m(bits);
            k *= 2;
        }
        *self = u;
    }

    /// self = self mod m
    pub fn rmod(&mut self, m1: &Self) {
        let mut m = *m1;
        let mut r = Self::new();
        let mut k = 0;
        self.norm();
        if Self::comp(self, &m) < 0 {
            return;
        }
        loop {
            m.fshl(1);
            k += 1;
            if Self::comp(self, &m) < 0 {
                break;
            }
        }
        while k > 0 {
            m.fshr(1);
            r.clone_from(self);
            r.sub(&m);
            r.norm();
            self.cmove(&r, (1 - ((r.w[N - 1] >> (CHUNK - 1)) & 1)) as isize);
            k -= 1;
        }
    }

    /// self = self / m, rounded down
    pub fn div(&mut self, m1: &Self) {
        let mut m = *m1;
        let mut k = 0;
        self.norm();
        let mut e = Self::from_int(1);
        let mut b = *self;
        let mut r = Self::new();
        self.zero();

        while Self::comp(&b, &m) >= 0 {
            e.fshl(1);
            m.fshl(1);
            k += 1;
        }
        while k > 0 {
            m.fshr(1);
            e.fshr(1);

            r.clone_from(&b);
            r.sub(&m);
            r.norm();
            let d = (1 - ((r.w[N - 1] >> (CHUNK - 1)) & 1)) as isize;
            b.cmove(&r, d);
            r.clone_from(self);
            r.add(&e);
            r.norm();
            self.cmove(&r, d);
            k -= 1;
        }
    }

    /// Modular inverse by the binary extended Euclidean algorithm
    ///
    /// `p` must be odd. A value sharing a factor with `p` has no inverse and
    /// comes back as zero.
    pub fn invmodp(&mut self, p: &Self) {
        self.rmod(p);
        if self.iszilch() {
            return;
        }
        let mut u = *self;
        let mut v = *p;
        let mut x1 = Self::from_int(1);
        let mut x2 = Self::new();
        let mut t;
        let one = Self::from_int(1);

        while Self::comp(&u, &one) != 0 && Self::comp(&v, &one) != 0 {
            if u.iszilch() || v.iszilch() {
                self.zero();
                return;
            }
            while u.parity() == 0 {
                u.fshr(1);
                t = x1;
                t.add(p);
                x1.cmove(&t, x1.parity());
                x1.norm();
                x1.fshr(1);
            }
            while v.parity() == 0 {
                v.fshr(1);
                t = x2;
                t.add(p);
                x2.cmove(&t, x2.parity());
                x2.norm();
                x2.fshr(1);
            }
            if Self::comp(&u, &v) >= 0 {
                u.sub(&v);
                u.norm();
                t = x1;
                t.add(p);
                x1.cmove(&t, (Self::comp(&x1, &x2) >> 1) & 1);
                x1.sub(&x2);
                x1.norm();
            } else {
                v.sub(&u);
                v.norm();
                t = x2;
                t.add(p);
                x2.cmove(&t, (Self::comp(&x2, &x1) >> 1) & 1);
                x2.sub(&x1);
                x2.norm();
            }
        }
        if Self::comp(&u, &one) == 0 {
            *self = x1;
        } else {
            *self = x2;
        }
    }

    /// Jacobi symbol `(self/p)`; 0 for even or trivial `p`
    pub fn jacobi(&self, p: &Self) -> isize {
        let one = Self::from_int(1);
        let mut x = *self;
        x.norm();
        if p.parity() == 0 || x.iszilch() || Self::comp(p, &one) <= 0 {
            return 0;
        }

        let mut m: usize = 0;
        let mut n = *p;
        x.rmod(p);

        while Self::comp(&n, &one) > 0 {
            if x.iszilch() {
                return 0;
            }
            let n8 = n.lastbits(3) as usize;
            let mut k = 0;
            while x.parity() == 0 {
                k += 1;
                x.shr(1);
            }
            if k % 2 == 1 {
                m += (n8 * n8 - 1) / 8;
            }
            m += (n8 - 1) * ((x.lastbits(2) as usize) - 1) / 4;
            let mut t = n;
            t.rmod(&x);
            n = x;
            x = t;
            m %= 2;
        }
        if m == 0 {
            1
        } else {
            -1
        }
    }

    /// a*b mod m
    pub fn modmul(a1: &Self, b1: &Self, m: &Self) -> Self {
        let mut a = *a1;
        let mut b = *b1;
        a.rmod(m);
        b.rmod(m);
        let mut d = Self::mul(&a, &b);
        d.dmod(m)
    }

    /// a^2 mod m
    pub fn modsqr(a1: &Self, m: &Self) -> Self {
        let mut a = *a1;
        a.rmod(m);
        let mut d = Self::sqr(&a);
        d.dmod(m)
    }

    /// -a mod m
    pub fn modneg(a1: &Self, m: &Self) -> Self {
        let mut a = *a1;
        a.rmod(m);
        a.rsub(m);
        a.norm();
        a.rmod(m);
        a
    }

    /// self^e mod m, square-and-multiply over the bits of `e`
    pub fn powmod(&mut self, e1: &Self, m: &Self) -> Self {
        self.norm();
        let mut e = *e1;
        e.norm();
        let mut a = Self::from_int(1);
        let mut s = *self;
        loop {
            let bt = e.parity();
            e.fshr(1);
            if bt == 1 {
                a = Self::modmul(&a, &s, m);
            }
            if e.iszilch() {
                break;
            }
            s = Self::modsqr(&s, m);
        }
        a
    }

    /// A value of `nbits` random bits
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R, nbits: usize) -> Self {
        let mut m = Self::new();
        let mut byte = [0u8; 1];
        let mut r = 0u8;
        for i in 0..nbits {
            if i % 8 == 0 {
                rng.fill_bytes(&mut byte);
                r = byte[0];
            } else {
                r >>= 1;
            }
            m.shl(1);
            m.w[0] += (r & 1) as Chunk;
        }
        m
    }

    /// Uniform-looking value in `0..q`
    ///
    /// Draws twice the bit length of `q` and reduces, so the bias is
    /// negligible.
    pub fn randomnum<R: RngCore + CryptoRng>(q: &Self, rng: &mut R) -> Self {
        let mut d = DBig::<N>::new();
        let mut byte = [0u8; 1];
        let mut r = 0u8;
        for i in 0..2 * q.nbits() {
            if i % 8 == 0 {
                rng.fill_bytes(&mut byte);
                r = byte[0];
            } else {
                r >>= 1;
            }
            d.shl(1);
            d.digits_mut()[0] += (r & 1) as Chunk;
        }
        d.dmod(q)
    }

    /// Big-endian encoding into `out`; high bits that do not fit are dropped
    pub fn to_bytes(&self, out: &mut [u8]) {
        let mut c = *self;
        c.norm();
        for b in out.iter_mut().rev() {
            *b = (c.w[0] & 0xff) as u8;
            c.fshr(8);
        }
    }

    /// Decode big-endian bytes. At most `7N` bytes are meaningful.
    pub fn from_bytes(b: &[u8]) -> Self {
        let mut m = Self::new();
        for &x in b {
            m.fshl(8);
            m.w[0] += x as Chunk;
        }
        m
    }
}

impl<const N: usize> PartialEq for Big<N> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = *self;
        let mut b = *other;
        a.norm();
        b.norm();
        Self::comp(&a, &b) == 0
    }
}

impl<const N: usize> Eq for Big<N> {}

impl<const N: usize> fmt::Debug for Big<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut c = *self;
        c.norm();
        write!(f, "Big(")?;
        for i in (0..7 * N).rev() {
            let byte = (c.w[i / 7] >> (8 * (i % 7))) & 0xff;
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests;
