//! Value objects
//!
//! Immutable types describing providers, the credentials they are resolved
//! from and the key material derived for them.

/// Provider credentials
pub mod credential;
/// Hash algorithm selection
pub mod hash_algorithm;
/// Derived key material
pub mod key_material;
/// Provider names and protection operations
pub mod provider;

pub use credential::{Credential, CredentialSet};
pub use hash_algorithm::HashAlgorithm;
pub use key_material::KeyMaterial;
pub use provider::{ProtectionOperation, ProviderName};
