//! Error handling types

use crate::value_objects::ProtectionOperation;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error source carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for colguard
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error, including a provider with no credentials
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The cryptographic primitive failed to derive, encrypt or decrypt
    #[error("Crypto error: {message}")]
    Crypto {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Uniform failure surfaced by the encrypt/decrypt entry points
    #[error("Protection error: failed to {operation} with provider '{provider}'")]
    Protection {
        /// Provider name as requested by the caller
        provider: String,
        /// Operation that was attempted
        operation: ProtectionOperation,
        /// What went wrong underneath
        #[source]
        source: Box<Error>,
    },

    /// A provider with this name was already registered
    #[error("Duplicate provider: the provider name '{name}' has already been used")]
    DuplicateProvider {
        /// The name that was registered twice
        name: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// UTF-8 encoding/decoding error
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create the error for a provider name with no matching credential
    pub fn missing_credentials(provider: &str) -> Self {
        Self::configuration(format!("no credentials for provider '{provider}'"))
    }
}

// Crypto error creation methods
impl Error {
    /// Create a crypto error
    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto {
            message: message.into(),
            source: None,
        }
    }

    /// Create a crypto error with source
    pub fn crypto_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Crypto {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Registry error creation methods
impl Error {
    /// Wrap any failure from an encrypt/decrypt entry point
    pub fn protection<S: Into<String>>(
        provider: S,
        operation: ProtectionOperation,
        source: Error,
    ) -> Self {
        Self::Protection {
            provider: provider.into(),
            operation,
            source: Box::new(source),
        }
    }

    /// Create a duplicate provider error
    pub fn duplicate_provider<S: Into<String>>(name: S) -> Self {
        Self::DuplicateProvider { name: name.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Whether this is a crypto error
    pub fn is_crypto(&self) -> bool {
        matches!(self, Self::Crypto { .. })
    }

    /// Whether this is a protection error
    pub fn is_protection(&self) -> bool {
        matches!(self, Self::Protection { .. })
    }

    /// Whether this is a duplicate provider error
    pub fn is_duplicate_provider(&self) -> bool {
        matches!(self, Self::DuplicateProvider { .. })
    }

    /// The error wrapped by a `Protection` error, if this is one
    pub fn protection_cause(&self) -> Option<&Error> {
        match self {
            Self::Protection { source, .. } => Some(source),
            _ => None,
        }
    }
}
