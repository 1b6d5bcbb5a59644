//! Protection service interface

use colguard_domain::error::Result;

/// Encrypt and decrypt values under a named provider
///
/// Every failure, whether it comes from resolving the provider or from the
/// cipher step, is reported as [`colguard_domain::Error::Protection`] carrying
/// the original cause.
pub trait ProtectionServiceInterface: Send + Sync {
    /// Encrypt text under the named provider
    fn encrypt_text(&self, provider: &str, plaintext: &str) -> Result<String>;

    /// Decrypt text produced by [`ProtectionServiceInterface::encrypt_text`]
    fn decrypt_text(&self, provider: &str, ciphertext: &str) -> Result<String>;

    /// Encrypt a byte sequence under the named provider
    fn encrypt_bytes(&self, provider: &str, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt bytes produced by [`ProtectionServiceInterface::encrypt_bytes`]
    fn decrypt_bytes(&self, provider: &str, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
