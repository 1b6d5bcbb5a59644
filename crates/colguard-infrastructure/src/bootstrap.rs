//! Registry bootstrap
//!
//! Wires validated configuration and the default crypto primitives into a
//! shared [`ProviderRegistry`].

use crate::config::{AppConfig, ConfigLoader};
use crate::crypto::Pbkdf2AesGcmPrimitives;
use colguard_application::ProviderRegistry;
use colguard_domain::error::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Build a registry from loaded configuration
///
/// Providers are not derived here; each one is resolved on first use, or
/// all at once through [`ProviderRegistry::warm_up`].
pub fn build_registry(config: &AppConfig) -> Result<Arc<ProviderRegistry>> {
    let credentials = config.protection.credential_set()?;
    debug!(
        providers = credentials.len(),
        "Building protection provider registry"
    );
    Ok(Arc::new(ProviderRegistry::new(
        credentials,
        Arc::new(Pbkdf2AesGcmPrimitives::new()),
    )))
}

/// Load configuration and build the registry
///
/// Uses `config_path` when given, otherwise the default config locations.
/// Installing the logging subscriber is left to the caller
/// (see [`crate::logging::init_logging`]).
pub fn init(config_path: Option<&Path>) -> Result<(AppConfig, Arc<ProviderRegistry>)> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    let registry = build_registry(&config)?;
    Ok((config, registry))
}
