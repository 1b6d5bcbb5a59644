//! Main application configuration

use super::{LoggingConfig, ProtectionConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Protection provider credentials
    #[serde(default)]
    pub protection: ProtectionConfig,
}
