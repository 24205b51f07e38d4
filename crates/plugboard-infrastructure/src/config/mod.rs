//! Application configuration
//!
//! Defaults, then a TOML file, then `PLUGBOARD_`-prefixed environment
//! variables, merged with figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
