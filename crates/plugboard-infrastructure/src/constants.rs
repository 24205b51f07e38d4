//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "plugboard.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "plugboard";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PLUGBOARD";

/// Separator between nested keys in environment variables
/// (e.g., `PLUGBOARD_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PLUGBOARD_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix for rotated log files
pub const LOG_FILE_PREFIX: &str = "plugboard";
