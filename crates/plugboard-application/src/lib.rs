//! Application Layer - plugboard
//!
//! Turns provider descriptors into live providers and exposes them through
//! type-filtered registries.
//!
//! ## Architecture
//!
//! ```text
//! ProviderLoader ──► ProviderData ──► Providers ──► ProviderRegistry<dyn Cap>
//!                                        │                  │
//!                                        └── ProviderFactory ◄┘ (per enumeration)
//! ```
//!
//! - [`factory`]: builds one provider from a descriptor
//! - [`registry`]: lazy or eager, type-filtered provider sets
//! - [`providers`]: untyped façade that re-types the same descriptor set
//! - [`loader`]: contract every descriptor source implements
//! - [`ports::registry`]: compile-time registration of provider types and parsers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `plugboard-domain`: descriptors, settings, resolver contract
//! - `linkme` for compile-time registration, `tracing` for logging

pub mod catalog;
pub mod factory;
pub mod loader;
pub mod manager;
pub mod ports;
pub mod providers;
pub mod registry;

pub use catalog::{DataParserInfo, ProviderTypeInfo, TypeCatalog};
pub use factory::ProviderFactory;
pub use loader::ProviderLoader;
pub use manager::ProviderManager;
pub use providers::Providers;
pub use registry::{ProviderIter, ProviderRegistry};
