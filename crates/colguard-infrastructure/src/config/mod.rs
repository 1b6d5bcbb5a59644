//! Configuration management
//!
//! Typed configuration for logging and protection-provider credentials,
//! loaded with Figment from defaults, a TOML file and the environment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CredentialConfig, LoggingConfig, ProtectionConfig};
