//! Provider type registry
//!
//! Auto-registration of concrete provider types using linkme distributed
//! slices. Lookup by name goes through [`TypeCatalog`](crate::TypeCatalog).

use plugboard_domain::ProviderType;

/// Registry entry for one concrete provider type
///
/// Each provider implementation registers itself with this entry using
/// `#[linkme::distributed_slice(PROVIDER_TYPES)]`.
pub struct ProviderTypeEntry {
    /// Unique type name referenced by configuration (e.g., "log-sms")
    pub name: &'static str,
    /// Default group for descriptors discovered without configuration
    pub group: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the runtime handle for the type
    pub provider_type: fn() -> ProviderType,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static PROVIDER_TYPES: [ProviderTypeEntry] = [..];
