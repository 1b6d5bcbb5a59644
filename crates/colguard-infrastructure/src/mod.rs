//! # Infrastructure Layer
//!
//! Technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Security
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | PBKDF2 key derivation, AES-256-GCM encryption |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration from TOML and environment |
//! | [`constants`] | Centralized configuration constants |
//! | [`bootstrap`] | Configuration to registry wiring |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension trait for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_registry, init};
pub use config::{AppConfig, ConfigLoader, CredentialConfig, LoggingConfig, ProtectionConfig};
pub use crypto::Pbkdf2AesGcmPrimitives;
