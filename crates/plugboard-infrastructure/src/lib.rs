//! Infrastructure Layer - plugboard
//!
//! Technical concerns around the provider core:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based application configuration |
//! | [`loaders`] | Provider loaders over configuration and registered types |
//! | [`resolvers`] | Closure-based dependency resolver |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod loaders;
pub mod logging;
pub mod resolvers;

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use loaders::{ConfigProviderLoader, DiscoveryProviderLoader};
pub use resolvers::ConstructorResolver;
