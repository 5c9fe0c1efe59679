//! Hash and symmetric-cipher sizes

pub mod hash;
pub mod symmetric;
