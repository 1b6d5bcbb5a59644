//! Cryptographic Primitive Port
//!
//! The registry never performs key stretching or ciphering itself; it
//! delegates to an implementation of this port.
//!
//! ## Usage
//!
//! This port follows the Dependency Inversion Principle:
//! - The trait is defined here (colguard-domain)
//! - The default implementation lives in colguard-infrastructure
//!   (`Pbkdf2AesGcmPrimitives`)
//! - The registry depends on the abstraction, not the concrete implementation

use crate::error::Result;
use crate::value_objects::{HashAlgorithm, KeyMaterial};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Cryptographic primitive port
///
/// Implementations must be deterministic for identical inputs and free of
/// side effects. Calls are blocking from the caller's point of view.
///
/// # Example
///
/// ```ignore
/// use colguard_domain::ports::CryptoPrimitives;
///
/// fn seal(crypto: &dyn CryptoPrimitives, material: &KeyMaterial) -> Result<String> {
///     crypto.encrypt_text(material, "secret")
/// }
/// ```
pub trait CryptoPrimitives: Send + Sync {
    /// Derive a key and IV from a password and salt
    ///
    /// # Arguments
    ///
    /// * `password` - Password to stretch
    /// * `salt` - Salt mixed into the derivation
    /// * `algorithm` - Hash function behind the HMAC
    /// * `iterations` - Iteration count, already floored by the caller
    fn derive_key_material(
        &self,
        password: &str,
        salt: &str,
        algorithm: HashAlgorithm,
        iterations: u32,
    ) -> Result<KeyMaterial>;

    /// Encrypt a byte sequence with the given key material
    fn encrypt_bytes(&self, material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt a byte sequence produced by [`CryptoPrimitives::encrypt_bytes`]
    fn decrypt_bytes(&self, material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt text, returning the ciphertext as standard base64
    fn encrypt_text(&self, material: &KeyMaterial, plaintext: &str) -> Result<String> {
        let ciphertext = self.encrypt_bytes(material, plaintext.as_bytes())?;
        Ok(STANDARD.encode(ciphertext))
    }

    /// Decrypt base64 text produced by [`CryptoPrimitives::encrypt_text`]
    fn decrypt_text(&self, material: &KeyMaterial, ciphertext: &str) -> Result<String> {
        let bytes = STANDARD.decode(ciphertext)?;
        let plaintext = self.decrypt_bytes(material, &bytes)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Get the name/identifier of this implementation
    fn provider_name(&self) -> &str;
}
