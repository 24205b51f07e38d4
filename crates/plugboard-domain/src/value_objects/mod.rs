//! Value objects
//!
//! Immutable metadata exchanged between loaders, factories and registries.

pub mod descriptor;
pub mod provider_data;
pub mod provider_type;
pub mod type_ref;

pub use descriptor::{ProviderDescriptor, ProviderDescriptorBuilder};
pub use provider_data::ProviderData;
pub use provider_type::{ProviderType, ProviderTypeBuilder};
pub use type_ref::{Constructor, TypeRef};
