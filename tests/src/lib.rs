//! Integration harness for tsbcrypt
//!
//! [`vectors`] reads NIST CAVP response files and replays them against the
//! primitives; the cross-crate flows live under `tests/`.

pub mod vectors;
