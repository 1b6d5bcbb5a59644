//! Cryptographic services module
//!
//! Default implementation of the domain's crypto primitive port:
//! - PBKDF2-HMAC (SHA-256 / SHA-512) key and IV derivation
//! - AES-256-GCM encryption/decryption under the derived key and IV

mod primitives;
mod utils;

pub use primitives::Pbkdf2AesGcmPrimitives;
pub use utils::KeyDerivation;
