//! Validation utilities for key agreement

use super::{Error, Result};

/// Fail with [`Error::InvalidPublicKey`] unless `condition` holds
pub fn public_key(condition: bool, curve: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPublicKey { curve, reason });
    }
    Ok(())
}

/// Fail with [`Error::Agreement`] unless `condition` holds
pub fn agreement(condition: bool, curve: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Agreement { curve, details });
    }
    Ok(())
}

/// Fail with [`Error::KeyGeneration`] unless `condition` holds
pub fn key_generation(condition: bool, algorithm: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::KeyGeneration { algorithm, details });
    }
    Ok(())
}

/// Fail with [`Error::Serialization`] unless `condition` holds
pub fn serialization(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Serialization { context, details });
    }
    Ok(())
}

/// Require an output buffer of at least `min` bytes
pub fn output(context: &'static str, actual: usize, min: usize) -> Result<()> {
    algorithms::validate::min_length(context, actual, min).map_err(Error::from)
}
