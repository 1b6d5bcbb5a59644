//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain policy constants are defined in `colguard_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "colguard.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "colguard";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "COLGUARD";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "COLGUARD_LOG";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "colguard";
