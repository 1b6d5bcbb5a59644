//! Provider naming and protection operation value objects

use crate::constants::DEFAULT_PROVIDER_NAME;
use crate::error::{Error, Result};
use std::fmt;

/// A validated provider name
///
/// Keeps the name as the caller spelled it for messages and logs, and a
/// lower-cased key that all lookups go through, so `"Default"` and
/// `"default"` address the same provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderName {
    display: String,
    key: String,
}

impl ProviderName {
    /// Validate and normalize a provider name
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the name is empty or only whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("provider name cannot be empty"));
        }
        Ok(Self {
            display: name.to_string(),
            key: Self::normalize(name),
        })
    }

    /// The name used when the caller does not supply one
    pub fn default_name() -> Self {
        Self {
            display: DEFAULT_PROVIDER_NAME.to_string(),
            key: Self::normalize(DEFAULT_PROVIDER_NAME),
        }
    }

    /// Lookup key for a name (lower-cased)
    pub fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    /// The name as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The case-insensitive lookup key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether `other` names the same provider, ignoring case
    pub fn matches(&self, other: &str) -> bool {
        self.key == Self::normalize(other)
    }
}

impl Default for ProviderName {
    fn default() -> Self {
        Self::default_name()
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Operation attempted through a protection entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtectionOperation {
    /// Encrypt a text value
    EncryptText,
    /// Decrypt a text value
    DecryptText,
    /// Encrypt a byte sequence
    EncryptBytes,
    /// Decrypt a byte sequence
    DecryptBytes,
}

impl ProtectionOperation {
    /// Short name used in log fields
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EncryptText => "encrypt_text",
            Self::DecryptText => "decrypt_text",
            Self::EncryptBytes => "encrypt_bytes",
            Self::DecryptBytes => "decrypt_bytes",
        }
    }
}

impl fmt::Display for ProtectionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EncryptText => "encrypt a text value",
            Self::DecryptText => "decrypt a text value",
            Self::EncryptBytes => "encrypt a byte value",
            Self::DecryptBytes => "decrypt a byte value",
        };
        f.write_str(text)
    }
}
