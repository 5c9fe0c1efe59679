//! Error types for the signature crate

use algorithms::error::Error as AlgoError;
use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Primitive error
    Primitive(AlgoError),

    /// Scheme not available on this curve shape
    Algorithm(&'static str),

    /// Invalid key
    InvalidKey {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Signature component outside `[1, r)` or of the wrong size
    InvalidSignature {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Signature did not verify
    Verification { algorithm: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::Algorithm(alg) => write!(f, "Unsupported algorithm: {}", alg),
            Error::InvalidKey { algorithm, reason } => {
                write!(f, "Invalid {} key: {}", algorithm, reason)
            }
            Error::InvalidSignature { algorithm, reason } => {
                write!(f, "Invalid {} signature: {}", algorithm, reason)
            }
            Error::Verification { algorithm } => write!(f, "{} verification failed", algorithm),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Algorithm(alg) => api::Error::NotImplemented { feature: alg },
            Error::InvalidKey { algorithm, reason } => {
                let e = api::Error::invalid_key(algorithm);
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
            Error::InvalidSignature { algorithm, reason } => {
                let e = api::Error::invalid_signature(algorithm);
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
            Error::Verification { algorithm } => api::Error::invalid_signature(algorithm),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
