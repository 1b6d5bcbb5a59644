//! # Colguard
//!
//! Named protection providers for encrypting values before they are stored.
//!
//! A provider is identified by a case-insensitive name. The first time a name
//! is used, its key and IV are derived from configured credentials with
//! PBKDF2-HMAC-SHA512 (at least 10 000 iterations) and cached for the life of
//! the registry. Every later encrypt or decrypt with that name reuses the
//! cached material.
//!
//! ## Example
//!
//! ```ignore
//! use colguard::{ProtectionServiceInterface, init};
//!
//! let (_config, registry) = init(None)?;
//!
//! let sealed = registry.encrypt_text("Default", "4111 1111 1111 1111")?;
//! let card = registry.decrypt_text("Default", &sealed)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, credentials, key material, crypto port
//! - `application` - Provider registry and value converters
//! - `infrastructure` - Crypto primitives, configuration, logging, bootstrap

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use colguard_domain::*;
}

/// Application layer - provider registry and converters
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use colguard_application::*;
}

/// Infrastructure layer - crypto, config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use colguard_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registry and converters at the crate root
pub use application::{
    ProtectedBytesConverter, ProtectedStringConverter, ProtectionServiceInterface, ProviderEntry,
    ProviderRegistry, ValueConverter,
};

// Re-export entry points at the crate root
pub use infrastructure::logging::init_logging;
pub use infrastructure::{AppConfig, ConfigLoader, Pbkdf2AesGcmPrimitives, build_registry, init};
