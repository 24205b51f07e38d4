//! # Domain Layer
//!
//! Core types of the provider pattern. Nothing in this crate knows about
//! configuration files, compile-time registration or concrete providers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`value_objects`] | `TypeRef`, `ProviderType`, `ProviderDescriptor`, `ProviderData` |
//! | [`settings`] | Immutable typed view over string settings |
//! | [`parsers`] | `DataParser` contract and the default pipe-delimited parser |
//! | [`ports`] | `Provider` capability set and `DependencyResolver` contract |

pub mod constants;
pub mod error;
pub mod parsers;
pub mod ports;
pub mod settings;
pub mod utils;
pub mod value_objects;

pub use error::{Error, Result};
pub use parsers::{DataFields, DataParser, DataParserExt, DataParserRef, PipeDataParser};
pub use ports::provider::{Provider, ProviderMeta};
pub use ports::resolver::{
    self as dependency_resolver, ActivatorResolver, DependencyResolver, DependencyResolverExt,
};
pub use settings::{ObjectType, SettingType, SettingValue, Settings};
pub use value_objects::{
    ProviderData, ProviderDescriptor, ProviderDescriptorBuilder, ProviderType,
    ProviderTypeBuilder, TypeRef,
};
