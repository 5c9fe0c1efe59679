//! Seeded cryptographic random number generator
//!
//! A Marsaglia-Zaman subtract-with-borrow generator whose raw output is
//! never exposed directly: bytes are drawn from a 32-byte pool that is the
//! SHA-256 digest of 128 generator outputs, refilled whenever it runs dry.
//!
//! The generator is deterministic given its seed. Seed it from at least
//! 128 bytes of real entropy, or from a derived secret such as a device
//! generator seed, and [`Csprng::clean`] it once done.

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hash::{HashFunction, Sha256};

const NK: usize = 21;
const NJ: usize = 6;
const NV: usize = 8;
const POOL_SIZE: usize = 32;
const STIR_ROUNDS: usize = 10_000;
const POOL_FEED: usize = 128;

/// Pool-backed subtract-with-borrow generator
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    ira: [u32; NK],
    rndptr: usize,
    borrow: u32,
    pool_ptr: usize,
    pool: [u8; POOL_SIZE],
}

impl Csprng {
    /// Generator seeded from `raw`
    ///
    /// An empty seed leaves the lagged state at zero and only fills the pool,
    /// which is deterministic and only useful in tests.
    pub fn new(raw: &[u8]) -> Self {
        let mut rng = Self {
            ira: [0; NK],
            rndptr: 0,
            borrow: 0,
            pool_ptr: 0,
            pool: [0; POOL_SIZE],
        };
        rng.seed(raw);
        rng
    }

    /// Reset the state from `raw`
    pub fn seed(&mut self, raw: &[u8]) {
        self.pool_ptr = 0;
        self.ira = [0; NK];
        if !raw.is_empty() {
            let mut sh = Sha256::new();
            sh.absorb(raw);
            let mut digest = sh.finish();
            for w in digest.chunks_exact(4) {
                self.sirand(internal::endian::u32_from_le_bytes(w));
            }
            digest.zeroize();
        }
        self.fill_pool();
    }

    /// Next raw lagged-Fibonacci output
    fn sbrand(&mut self) -> u32 {
        self.rndptr += 1;
        if self.rndptr < NK {
            return self.ira[self.rndptr];
        }
        self.rndptr = 0;
        let mut k = NK - NJ;
        for i in 0..NK {
            if k == NK {
                k = 0;
            }
            let t = self.ira[k];
            let pdiff = t.wrapping_sub(self.ira[i]).wrapping_sub(self.borrow);
            if pdiff < t {
                self.borrow = 0;
            }
            if pdiff > t {
                self.borrow = 1;
            }
            self.ira[i] = pdiff;
            k += 1;
        }
        self.ira[0]
    }

    /// Fold one 32-bit seed word into the state and stir
    fn sirand(&mut self, mut seed: u32) {
        let mut m: u32 = 1;
        self.borrow = 0;
        self.rndptr = 0;
        self.ira[0] ^= seed;
        for i in 1..NK {
            let inn = (NV * i) % NK;
            self.ira[inn] ^= m;
            let t = m;
            m = seed.wrapping_sub(m);
            seed = t;
        }
        for _ in 0..STIR_ROUNDS {
            self.sbrand();
        }
    }

    fn fill_pool(&mut self) {
        let mut sh = Sha256::new();
        for _ in 0..POOL_FEED {
            let b = self.sbrand() as u8;
            sh.absorb(&[b]);
        }
        self.pool = sh.finish();
        self.pool_ptr = 0;
    }

    /// One output byte
    pub fn getbyte(&mut self) -> u8 {
        let r = self.pool[self.pool_ptr];
        self.pool_ptr += 1;
        if self.pool_ptr >= POOL_SIZE {
            self.fill_pool();
        }
        r
    }

    /// Wipe all state; the generator must be reseeded before further use
    pub fn clean(&mut self) {
        self.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        let mut b = [0u8; 4];
        self.fill_bytes(&mut b);
        u32::from_le_bytes(b)
    }

    fn next_u64(&mut self) -> u64 {
        let mut b = [0u8; 8];
        self.fill_bytes(&mut b);
        u64::from_le_bytes(b)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            *b = self.getbyte();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}

impl fmt::Debug for Csprng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Csprng([REDACTED])")
    }
}
