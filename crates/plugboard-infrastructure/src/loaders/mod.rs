//! Provider loaders
//!
//! - [`ConfigProviderLoader`]: descriptors from the `[providers]` section
//! - [`DiscoveryProviderLoader`]: one descriptor per registered provider type

pub mod config;
pub mod discovery;

pub use config::ConfigProviderLoader;
pub use discovery::DiscoveryProviderLoader;
