//! # plugboard
//!
//! Provider registries with typed settings. Providers are described by
//! descriptors (name, group, concrete type, settings, enabled flag), created
//! on demand by a factory and handed out through registries filtered by
//! capability trait.
//!
//! ## Example
//!
//! ```
//! use plugboard::application::Providers;
//! use plugboard::domain::ProviderDescriptor;
//! use plugboard::providers::{LogSmsProvider, SmsMessage, SmsProvider};
//!
//! let providers = Providers::new(vec![ProviderDescriptor::new(
//!     "Console",
//!     "sms",
//!     LogSmsProvider::provider_type(),
//!     None,
//!     true,
//! )])?;
//!
//! let console = providers
//!     .by_name_of::<dyn SmsProvider>("console")?
//!     .expect("registered above");
//! let receipt = console.send(&SmsMessage::new("+15550100", "hello"))?;
//! assert_eq!(receipt.sequence, 1);
//! # Ok::<(), plugboard::domain::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, settings, data parsers, resolver contract
//! - `application` - factory, registries, loader contract, compile-time registries
//! - `infrastructure` - configuration, loaders, logging
//! - `providers` - concrete providers registered at link time

use plugboard_application::ProviderManager;
use plugboard_infrastructure::{AppConfig, ConfigProviderLoader, DiscoveryProviderLoader};
use tracing::info;

/// Domain layer - core types
pub mod domain {
    pub use plugboard_domain::*;
}

/// Application layer - factory, registries and loaders
pub mod application {
    pub use plugboard_application::*;
}

/// Infrastructure layer - configuration, logging and resolvers
pub mod infrastructure {
    pub use plugboard_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use plugboard_providers::*;
}

pub use plugboard_domain::{Error, Result};

/// Load the provider set described by `config`.
///
/// Configured `[[providers.provider]]` entries take precedence; without any,
/// every registered provider type is discovered with its default group.
pub fn load_manager(config: &AppConfig) -> Result<ProviderManager> {
    if config.providers.providers.is_empty() {
        info!("No providers configured, discovering registered provider types");
        ProviderManager::new(&DiscoveryProviderLoader::new())
    } else {
        ProviderManager::new(&ConfigProviderLoader::from_config(config))
    }
}
