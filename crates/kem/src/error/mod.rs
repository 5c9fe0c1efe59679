//! Error handling for key agreement

use algorithms::error::Error as PrimitiveError;
use api::error::Error as CoreError;
use core::fmt;

/// Error type for ECDH operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// A private key could not be produced
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// A peer public key failed validation
    InvalidPublicKey {
        curve: &'static str,
        reason: &'static str,
    },

    /// Key agreement produced no usable secret
    Agreement {
        curve: &'static str,
        details: &'static str,
    },

    /// Malformed key or ciphertext encoding
    Serialization {
        context: &'static str,
        details: &'static str,
    },
}

/// Result type for ECDH operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::InvalidPublicKey { curve, reason } => {
                write!(f, "Invalid {} public key: {}", curve, reason)
            }
            Error::Agreement { curve, details } => {
                write!(f, "Key agreement error on {}: {}", curve, details)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => {
                let e = CoreError::other(algorithm);
                #[cfg(feature = "std")]
                let e = e.with_message(format!("key generation failed: {}", details));
                #[cfg(not(feature = "std"))]
                let _ = details;
                e
            }
            Error::InvalidPublicKey { curve, reason } => {
                let e = CoreError::invalid_key(curve);
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
            Error::Agreement { curve, details } => {
                let e = CoreError::invalid_parameter(curve);
                #[cfg(feature = "std")]
                let e = e.with_message(details);
                #[cfg(not(feature = "std"))]
                let _ = details;
                e
            }
            Error::Serialization { context, details } => {
                let e = CoreError::serialization(context);
                #[cfg(feature = "std")]
                let e = e.with_message(details);
                #[cfg(not(feature = "std"))]
                let _ = details;
                e
            }
        }
    }
}

pub mod validate;

pub use api::error::ResultExt;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_errors_map_to_invalid_key() {
        let core: CoreError = Error::InvalidPublicKey {
            curve: "NIST256",
            reason: "point at infinity",
        }
        .into();
        assert!(matches!(core, CoreError::InvalidKey { .. }));
        assert_eq!(core.context(), "NIST256");
    }

    #[test]
    fn test_agreement_errors_map_to_invalid_parameter() {
        let core: CoreError = Error::Agreement {
            curve: "C25519",
            details: "shared point at infinity",
        }
        .into();
        assert!(matches!(core, CoreError::InvalidParameter { .. }));
    }

    #[test]
    fn test_primitive_errors_pass_through() {
        let core: CoreError = Error::from(PrimitiveError::Length {
            context: "secret",
            expected: 32,
            actual: 31,
        })
        .into();
        assert!(matches!(
            core,
            CoreError::InvalidLength {
                expected: 32,
                actual: 31,
                ..
            }
        ));
    }
}
