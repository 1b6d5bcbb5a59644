//! Use Cases
//!
//! Implementations of the domain service interfaces.

/// Named provider registry
pub mod provider_registry;

pub use provider_registry::{ProviderEntry, ProviderRegistry};
