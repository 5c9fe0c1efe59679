//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for protocol-level operations
///
/// The arithmetic engines never fail; everything that can be rejected
/// (a public key off the curve, a signature out of range, a bad MAC tag)
/// surfaces here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material failed validation
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Signature rejected
    InvalidSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Decryption or unpadding failed
    DecryptionFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Ciphertext is malformed
    InvalidCiphertext {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Not implemented error
    NotImplemented { feature: &'static str },

    /// MAC or tag mismatch
    AuthenticationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

macro_rules! contextual_constructor {
    ($(#[$doc:meta])* $name:ident => $variant:ident) => {
        $(#[$doc])*
        pub fn $name(context: &'static str) -> Self {
            Self::$variant {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            }
        }
    };
}

impl Error {
    contextual_constructor!(
        /// An `InvalidKey` error with an empty message
        invalid_key => InvalidKey
    );
    contextual_constructor!(
        /// An `InvalidSignature` error with an empty message
        invalid_signature => InvalidSignature
    );
    contextual_constructor!(decryption_failed => DecryptionFailed);
    contextual_constructor!(invalid_ciphertext => InvalidCiphertext);
    contextual_constructor!(invalid_parameter => InvalidParameter);
    contextual_constructor!(serialization => SerializationError);
    contextual_constructor!(random_generation => RandomGenerationError);
    contextual_constructor!(authentication_failed => AuthenticationFailed);
    contextual_constructor!(other => Other);

    /// Length mismatch
    pub fn invalid_length(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            context,
            expected,
            actual,
        }
    }

    /// The static context string carried by every variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::DecryptionFailed { context, .. }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::SerializationError { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::AuthenticationFailed { context, .. }
            | Self::Other { context, .. } => context,
            Self::NotImplemented { feature } => feature,
        }
    }

    /// Replace the context, keeping the variant
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::invalid_key(context),
            Self::InvalidSignature { .. } => Self::invalid_signature(context),
            Self::DecryptionFailed { .. } => Self::decryption_failed(context),
            Self::InvalidCiphertext { .. } => Self::invalid_ciphertext(context),
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::invalid_parameter(context),
            Self::SerializationError { .. } => Self::serialization(context),
            Self::RandomGenerationError { .. } => Self::random_generation(context),
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::AuthenticationFailed { .. } => Self::authentication_failed(context),
            Self::Other { .. } => Self::other(context),
        }
    }

    /// Attach a message (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidCiphertext { context, .. } => {
                Self::InvalidCiphertext { context, message }
            }
            e @ Self::InvalidLength { .. } => e,
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            e @ Self::NotImplemented { .. } => e,
            Self::AuthenticationFailed { context, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (kind, context) = match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                return write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                );
            }
            Self::NotImplemented { feature } => {
                return write!(f, "{} is not implemented", feature);
            }
            Self::InvalidKey { context, .. } => ("Invalid key", context),
            Self::InvalidSignature { context, .. } => ("Invalid signature", context),
            Self::DecryptionFailed { context, .. } => ("Decryption failed", context),
            Self::InvalidCiphertext { context, .. } => ("Invalid ciphertext", context),
            Self::InvalidParameter { context, .. } => ("Invalid parameter", context),
            Self::SerializationError { context, .. } => ("Serialization error", context),
            Self::RandomGenerationError { context, .. } => ("Random generation error", context),
            Self::AuthenticationFailed { context, .. } => ("Authentication failed", context),
            Self::Other { context, .. } => ("Error", context),
        };
        write!(f, "{}: {}", kind, context)?;

        #[cfg(feature = "std")]
        if let Some(message) = self.message().filter(|m| !m.is_empty()) {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl Error {
    fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { message, .. }
            | Self::InvalidSignature { message, .. }
            | Self::DecryptionFailed { message, .. }
            | Self::InvalidCiphertext { message, .. }
            | Self::InvalidParameter { message, .. }
            | Self::SerializationError { message, .. }
            | Self::RandomGenerationError { message, .. }
            | Self::AuthenticationFailed { message, .. }
            | Self::Other { message, .. } => Some(message.as_str()),
            Self::InvalidLength { .. } | Self::NotImplemented { .. } => None,
        }
    }
}
