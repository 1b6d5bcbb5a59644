//! Domain layer for colguard
//!
//! Core types for named protection providers: the error taxonomy, the
//! credential records a provider is resolved from, the key material derived
//! from them, and the port through which the cryptographic primitives are
//! reached.
//!
//! ## Organization
//!
//! - **error** - Error taxonomy shared by every layer
//! - **constants** - Policy constants (iteration floor, default provider name)
//! - **value_objects** - Credentials, key material, provider names
//! - **ports** - Boundary contracts implemented by outer layers

/// Domain layer constants
pub mod constants;
/// Error handling types
pub mod error;
/// Boundary contracts implemented by outer layers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::CryptoPrimitives;
pub use value_objects::{
    Credential, CredentialSet, HashAlgorithm, KeyMaterial, ProtectionOperation, ProviderName,
};
