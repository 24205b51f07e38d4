//! Domain ports

pub mod provider;
pub mod resolver;
