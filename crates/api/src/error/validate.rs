//! Validation helpers returning [`Error`]

use super::types::{Error, Result};

/// Fail with `InvalidParameter` unless `condition` holds
pub fn parameter(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_parameter(context));
    }
    Ok(())
}

/// Require an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::invalid_length(context, expected, actual));
    }
    Ok(())
}

/// Require at least `min` bytes
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::invalid_length(context, min, actual));
    }
    Ok(())
}

/// Require at most `max` bytes
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::invalid_length(context, max, actual));
    }
    Ok(())
}

/// Fail with `InvalidKey` unless `condition` holds
pub fn key(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_key(context));
    }
    Ok(())
}

/// Fail with `InvalidSignature` unless `condition` holds
pub fn signature(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_signature(context));
    }
    Ok(())
}
