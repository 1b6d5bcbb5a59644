//! Hash algorithm selection for key derivation

use std::fmt;

/// Hash function driving the PBKDF2 HMAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// HMAC-SHA-256
    Sha256,
    /// HMAC-SHA-512
    #[default]
    Sha512,
}

impl HashAlgorithm {
    /// Canonical algorithm name
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
