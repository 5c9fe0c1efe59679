//! Checks that turn a failed precondition into an [`Error`]

use super::{Error, Result};

/// `condition` must hold for parameter `name`
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::param(name, reason))
    }
}

#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    Err(Error::Length {
        context,
        expected,
        actual,
    })
}

#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual >= min {
        return Ok(());
    }
    Err(Error::Length {
        context,
        expected: min,
        actual,
    })
}

#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual <= max {
        return Ok(());
    }
    Err(Error::Length {
        context,
        expected: max,
        actual,
    })
}

/// Length must be a whole number of `block`-byte blocks
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block: usize) -> Result<()> {
    if actual % block == 0 {
        return Ok(());
    }
    Err(Error::Length {
        context,
        expected: actual - actual % block + block,
        actual,
    })
}

/// Tag comparison outcome
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if is_valid {
        Ok(())
    } else {
        Err(Error::Authentication { algorithm })
    }
}
