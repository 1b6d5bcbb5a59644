//! PBKDF2 + AES-256-GCM crypto primitives

use super::utils::KeyDerivation;
use colguard_domain::constants::{AES_GCM_IV_SIZE, AES_KEY_SIZE};
use colguard_domain::error::{Error, Result};
use colguard_domain::ports::CryptoPrimitives;
use colguard_domain::value_objects::{HashAlgorithm, KeyMaterial};
use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};

/// Default crypto primitives
///
/// Derives 32 key bytes and 12 IV bytes in a single PBKDF2 run, then uses
/// AES-256-GCM with the derived IV as nonce. The nonce never changes for a
/// given key material, so output is deterministic per provider.
///
/// # Security
///
/// Every message under one provider reuses the same GCM nonce. Two
/// ciphertexts reveal the XOR of their plaintexts, and an attacker holding
/// several of them can recover the GHASH authentication key and forge
/// ciphertexts that decrypt without error. Integrity is not guaranteed
/// against anyone who can read stored ciphertexts.
#[derive(Debug, Clone, Default)]
pub struct Pbkdf2AesGcmPrimitives;

impl Pbkdf2AesGcmPrimitives {
    /// Create the primitives
    pub fn new() -> Self {
        Self
    }

    fn cipher(material: &KeyMaterial) -> Result<Aes256Gcm> {
        if material.iv().len() != AES_GCM_IV_SIZE {
            return Err(Error::crypto(format!(
                "Invalid IV size: expected {} bytes, got {}",
                AES_GCM_IV_SIZE,
                material.iv().len()
            )));
        }
        Aes256Gcm::new_from_slice(material.key()).map_err(|_| {
            Error::crypto(format!(
                "Invalid key size: expected {} bytes, got {}",
                AES_KEY_SIZE,
                material.key().len()
            ))
        })
    }
}

impl CryptoPrimitives for Pbkdf2AesGcmPrimitives {
    fn derive_key_material(
        &self,
        password: &str,
        salt: &str,
        algorithm: HashAlgorithm,
        iterations: u32,
    ) -> Result<KeyMaterial> {
        if iterations == 0 {
            return Err(Error::crypto("Key derivation requires at least one iteration"));
        }

        let derived = KeyDerivation::pbkdf2(
            password.as_bytes(),
            salt.as_bytes(),
            algorithm,
            iterations,
            AES_KEY_SIZE + AES_GCM_IV_SIZE,
        );

        KeyMaterial::split(derived, AES_KEY_SIZE)
            .ok_or_else(|| Error::crypto("Derived buffer too short for key and IV"))
    }

    fn encrypt_bytes(&self, material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Self::cipher(material)?;
        let nonce = Nonce::from_slice(material.iv());

        cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| Error::crypto(format!("AES encryption failed: {}", e)))
    }

    fn decrypt_bytes(&self, material: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Self::cipher(material)?;
        let nonce = Nonce::from_slice(material.iv());

        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| Error::crypto(format!("AES decryption failed: {}", e)))
    }

    fn provider_name(&self) -> &str {
        "pbkdf2-aes-256-gcm"
    }
}
