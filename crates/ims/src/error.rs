//! Error type for device key derivation and use

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("primitive error: {0}")]
    Primitive(#[from] algorithms::Error),

    #[error("key agreement error: {0}")]
    Kem(#[from] kem::Error),

    #[error("signature error: {0}")]
    Sign(#[from] sign::Error),

    #[error("{context} must be {expected} bytes, got {actual}")]
    Length {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("derived keys have been destroyed")]
    Killed,
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Kem(e) => e.into(),
            Error::Sign(e) => e.into(),
            Error::Length {
                context,
                expected,
                actual,
            } => api::Error::invalid_length(context, expected, actual),
            Error::Killed => api::Error::invalid_key("communication area").with_message("keys destroyed"),
        }
    }
}

pub(crate) fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
