//! Multi-precision arithmetic
//!
//! - [`big`]: fixed-width integers of `N` 56-bit digits
//! - [`dbig`]: their double-length products
//! - [`fp`]: prime-field elements with lazy reduction, parameterised by a
//!   [`FieldConfig`] marker type
//! - [`ff`]: RSA-size integers built from 256-bit limbs with Karatsuba
//!   multiplication and Montgomery reduction

pub mod big;
pub mod dbig;
pub mod ff;
pub mod fp;

pub use big::{nlen, Big, Chunk, DChunk, BASEBITS, BMASK};
pub use dbig::DBig;
pub use ff::{Ff, FfWide};
pub use fp::{FieldConfig, Fp, ModType};
