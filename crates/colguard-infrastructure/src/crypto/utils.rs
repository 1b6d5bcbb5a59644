//! Cryptographic utilities

use colguard_domain::value_objects::HashAlgorithm;
use sha2::{Sha256, Sha512};

/// Key derivation utilities
pub struct KeyDerivation;

impl KeyDerivation {
    /// Derive `key_len` bytes from a password using PBKDF2-HMAC
    pub fn pbkdf2(
        password: &[u8],
        salt: &[u8],
        algorithm: HashAlgorithm,
        iterations: u32,
        key_len: usize,
    ) -> Vec<u8> {
        use pbkdf2::pbkdf2_hmac;

        let mut key = vec![0u8; key_len];
        match algorithm {
            HashAlgorithm::Sha256 => pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut key),
            HashAlgorithm::Sha512 => pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut key),
        }
        key
    }
}
