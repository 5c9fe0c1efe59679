//! Error handling for public key encryption

use algorithms::error::Error as PrimitiveError;
use api::error::Error as CoreError;
use core::fmt;
use kem::Error as KemError;

/// Error type for PKE operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Primitive(PrimitiveError),
    Kem(KemError),
    InvalidCiphertextFormat(&'static str),
    /// The MAC over the ciphertext did not verify
    Authentication(&'static str),
    DecryptionFailed(&'static str),
    InvalidKey(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Kem(e) => write!(f, "PKE key agreement error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid PKE ciphertext format: {}", reason)
            }
            Error::Authentication(scheme) => write!(f, "{} authentication failed", scheme),
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
            Error::InvalidKey(reason) => write!(f, "Invalid PKE key: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Kem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<KemError> for Error {
    fn from(err: KemError) -> Self {
        Error::Kem(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Kem(e) => e.into(),
            Error::InvalidCiphertextFormat(reason) => {
                let e = CoreError::invalid_ciphertext("PKE");
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
            Error::Authentication(scheme) => CoreError::authentication_failed(scheme),
            Error::DecryptionFailed(reason) => {
                let e = CoreError::decryption_failed("PKE");
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
            Error::InvalidKey(reason) => {
                let e = CoreError::invalid_key("PKE");
                #[cfg(feature = "std")]
                let e = e.with_message(reason);
                #[cfg(not(feature = "std"))]
                let _ = reason;
                e
            }
        }
    }
}

/// Result type for PKE operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_maps_to_authentication_failed() {
        let core: CoreError = Error::Authentication("ECIES").into();
        assert!(matches!(core, CoreError::AuthenticationFailed { .. }));
    }

    #[test]
    fn test_format_errors_map_to_invalid_ciphertext() {
        let core: CoreError = Error::InvalidCiphertextFormat("too short").into();
        assert!(matches!(core, CoreError::InvalidCiphertext { .. }));
    }
}
