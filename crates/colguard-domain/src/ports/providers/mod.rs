//! External service provider ports

/// Cryptographic primitive port
pub mod crypto;

pub use crypto::CryptoPrimitives;
