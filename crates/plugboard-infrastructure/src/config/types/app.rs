//! Application configuration root

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::providers::ProviderSection;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Provider wiring
    pub providers: ProviderSection,
}
