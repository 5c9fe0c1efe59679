//! Error handling for cryptographic primitives
//!
//! The arithmetic engines never fail. Errors come from the byte-level
//! primitives: a key or IV of the wrong size, bad padding, a GCM tag that
//! does not verify, or a stream fed in the wrong order.

use core::fmt;

use api::{Error as CoreError, Result as CoreResult};

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Authentication failure (e.g. GCM tag verification)
    Authentication { algorithm: &'static str },

    /// Feature not implemented
    NotImplemented { feature: &'static str },

    /// Processing error during a cryptographic operation
    Processing {
        operation: &'static str,
        details: &'static str,
    },

    /// MAC error
    MacError {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::NotImplemented { feature } => write!(f, "Feature not implemented: {}", feature),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::MacError { algorithm, details } => {
                write!(f, "MAC error in {}: {}", algorithm, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                let e = CoreError::invalid_parameter(name);
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::invalid_length(context, expected, actual),
            Error::Authentication { algorithm } => CoreError::authentication_failed(algorithm),
            Error::NotImplemented { feature } => CoreError::NotImplemented { feature },
            Error::Processing { operation, details } => {
                let e = CoreError::decryption_failed(operation);
                #[cfg(feature = "std")]
                let e = e.with_message(details);
                #[cfg(not(feature = "std"))]
                let _ = details;
                e
            }
            Error::MacError { algorithm, details } => {
                let e = CoreError::authentication_failed(algorithm);
                #[cfg(feature = "std")]
                let e = e.with_message(details);
                #[cfg(not(feature = "std"))]
                let _ = details;
                e
            }
            Error::Other(msg) => CoreError::other(msg),
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub use api::error::ResultExt;

pub mod validate;

#[cfg(test)]
mod tests;
