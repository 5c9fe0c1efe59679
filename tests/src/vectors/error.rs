//! Structured errors for the vector harness

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("line {line}: {reason}")]
    Syntax { line: usize, reason: &'static str },

    #[error("hex decode error in {field}: {source}")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{context} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        context: &'static str,
        expected: String,
        actual: String,
    },

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] algorithms::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;

pub(crate) fn mismatch(context: &'static str, expected: &[u8], actual: &[u8]) -> VectorError {
    VectorError::Mismatch {
        context,
        expected: hex::encode(expected),
        actual: hex::encode(actual),
    }
}
