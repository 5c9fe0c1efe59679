//! Double-length integers
//!
//! Products of two `Big<N>` values land in a `DBig<N>` of `2N` digits.
//! The digits are kept as two `N`-digit halves and accessed as one flat
//! slice, which keeps the type expressible on stable const generics.

use zeroize::Zeroize;

use super::big::{Big, Chunk, BASEBITS, BMASK, CHUNK};

#[derive(Clone, Copy, Zeroize)]
pub struct DBig<const N: usize> {
    w: [[Chunk; N]; 2],
}

impl<const N: usize> Default for DBig<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DBig<N> {
    pub const fn new() -> Self {
        Self { w: [[0; N]; 2] }
    }

    /// Widen a `Big` into the low half
    pub fn from_big(x: &Big<N>) -> Self {
        let mut d = Self::new();
        d.w[0] = x.w;
        let top = d.w[0][N - 1];
        d.w[0][N - 1] = top & BMASK;
        d.w[1][0] = top >> BASEBITS;
        d
    }

    /// `x * 2^(56N)`: place a `Big` in the high half
    pub fn from_big_high(x: &Big<N>) -> Self {
        let mut d = Self::new();
        d.w[1] = x.w;
        d
    }

    pub fn digits(&self) -> &[Chunk] {
        self.w.as_flattened()
    }

    pub fn digits_mut(&mut self) -> &mut [Chunk] {
        self.w.as_flattened_mut()
    }

    pub fn get(&self, i: usize) -> Chunk {
        self.digits()[i]
    }

    pub fn set(&mut self, i: usize, x: Chunk) {
        self.digits_mut()[i] = x;
    }

    /// Low `N` digits as a `Big`
    pub fn low(&self) -> Big<N> {
        Big::from_limbs(self.w[0])
    }

    /// High `N` digits as a `Big`
    pub fn high(&self) -> Big<N> {
        Big::from_limbs(self.w[1])
    }

    pub fn norm(&mut self) {
        let dw = self.digits_mut();
        let len = dw.len();
        let mut carry: Chunk = 0;
        for d in dw[..len - 1].iter_mut() {
            let v = *d + carry;
            *d = v & BMASK;
            carry = v >> BASEBITS;
        }
        dw[len - 1] += carry;
    }

    pub fn cmove(&mut self, g: &Self, d: isize) {
        let b = internal::word_bit_mask(d as i64);
        for (x, y) in self.digits_mut().iter_mut().zip(g.digits()) {
            *x ^= (*x ^ *y) & b;
        }
    }

    pub fn add(&mut self, x: &Self) {
        for (a, b) in self.digits_mut().iter_mut().zip(x.digits()) {
            *a += *b;
        }
    }

    pub fn sub(&mut self, x: &Self) {
        for (a, b) in self.digits_mut().iter_mut().zip(x.digits()) {
            *a -= *b;
        }
    }

    /// Three-way comparison of normalised values, branch free
    pub fn comp(a: &Self, b: &Self) -> isize {
        let mut gt: Chunk = 0;
        let mut eq: Chunk = 1;
        for (x, y) in a.digits().iter().zip(b.digits()).rev() {
            gt |= ((y - x) >> (CHUNK - 1)) & eq;
            eq &= ((y ^ x) - 1) >> (CHUNK - 1);
        }
        (gt + gt + eq - 1) as isize
    }

    /// Shift left by `k` bits, top digit left unmasked
    pub fn shl(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        let dn = 2 * N;
        let w = self.digits_mut();

        w[dn - 1] = (w[dn - 1 - m] << n) | (w[dn - m - 2] >> (BASEBITS - n));
        for i in (m + 1..dn - 1).rev() {
            w[i] = ((w[i - m] << n) & BMASK) | (w[i - m - 1] >> (BASEBITS - n));
        }
        w[m] = (w[0] << n) & BMASK;
        for x in w[..m].iter_mut() {
            *x = 0;
        }
    }

    pub fn shr(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        let dn = 2 * N;
        let w = self.digits_mut();

        for i in 0..dn - m - 1 {
            w[i] = (w[m + i] >> n) | ((w[m + i + 1] << (BASEBITS - n)) & BMASK);
        }
        w[dn - m - 1] = w[dn - 1] >> n;
        for x in w[dn - m..].iter_mut() {
            *x = 0;
        }
    }

    /// Split at bit `n`, which must fall in digit `N-1`
    ///
    /// Returns the part above bit `n` and truncates `self` to the low `n`
    /// bits.
    pub fn split(&mut self, n: usize) -> Big<N> {
        debug_assert!(n >= (N - 1) * BASEBITS && n < N * BASEBITS);
        let mut t = Big::new();
        let m = n % BASEBITS;
        let dn = 2 * N;
        let w = self.digits_mut();

        let mut carry = if m == 0 { 0 } else { w[dn - 1] << (BASEBITS - m) };
        for i in (N - 1..dn - 1).rev() {
            let nw = (w[i] >> m) | carry;
            carry = if m == 0 { 0 } else { (w[i] << (BASEBITS - m)) & BMASK };
            t.w[i + 1 - N] = nw;
        }
        if m == 0 {
            t.w[N - 1] += w[dn - 1] << BASEBITS;
        }
        w[N - 1] &= (1 << m) - 1;
        for x in w[N..].iter_mut() {
            *x = 0;
        }
        t
    }

    pub fn nbits(&self) -> usize {
        let mut s = *self;
        s.norm();
        let w = s.digits();
        let Some(k) = (0..w.len()).rev().find(|&k| w[k] != 0) else {
            return 0;
        };
        let mut bts = BASEBITS * k;
        let mut c = w[k];
        while c != 0 {
            c /= 2;
            bts += 1;
        }
        bts
    }

    /// self mod c, by shift-and-subtract with conditional moves
    pub fn dmod(&mut self, c: &Big<N>) -> Big<N> {
        let mut k = 0;
        self.norm();
        let mut m = Self::from_big(c);
        let mut dr = Self::new();

        if Self::comp(self, &m) < 0 {
            return self.low();
        }
        loop {
            m.shl(1);
            k += 1;
            if Self::comp(self, &m) < 0 {
                break;
            }
        }
        while k > 0 {
            m.shr(1);
            dr.clone_from(self);
            dr.sub(&m);
            dr.norm();
            let top = dr.digits()[2 * N - 1];
            self.cmove(&dr, (1 - ((top >> (CHUNK - 1)) & 1)) as isize);
            k -= 1;
        }
        self.low()
    }

    /// self / c, rounded down; `self` is left holding the remainder
    pub fn ddiv(&mut self, c: &Big<N>) -> Big<N> {
        let mut k = 0;
        let mut m = Self::from_big(c);
        let mut a = Big::new();
        let mut e = Big::from_int(1);
        let mut dr = Self::new();
        let mut r;
        self.norm();

        while Self::comp(self, &m) >= 0 {
            e.fshl(1);
            m.shl(1);
            k += 1;
        }
        while k > 0 {
            m.shr(1);
            e.shr(1);

            dr.clone_from(self);
            dr.sub(&m);
            dr.norm();
            let top = dr.digits()[2 * N - 1];
            let d = (1 - ((top >> (CHUNK - 1)) & 1)) as isize;
            self.cmove(&dr, d);
            r = a;
            r.add(&e);
            r.norm();
            a.cmove(&r, d);
            k -= 1;
        }
        a
    }
}
