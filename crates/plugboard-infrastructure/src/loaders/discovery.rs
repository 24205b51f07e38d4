//! Discovery loader
//!
//! Zero-configuration mode: every registered provider type becomes one
//! enabled descriptor named after its registration, in its registered group.

use plugboard_application::{ProviderLoader, TypeCatalog};
use plugboard_domain::utils::eq_ignore_case;
use plugboard_domain::{ProviderData, ProviderDescriptor, Result};
use tracing::info;

#[derive(Debug, Clone)]
pub struct DiscoveryProviderLoader {
    catalog: TypeCatalog,
    group: Option<String>,
}

impl Default for DiscoveryProviderLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoveryProviderLoader {
    /// Loader over every type registered through the distributed slices
    pub fn new() -> Self {
        Self::with_catalog(TypeCatalog::discover())
    }

    pub fn with_catalog(catalog: TypeCatalog) -> Self {
        Self {
            catalog,
            group: None,
        }
    }

    /// Only discover types registered in `group`
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

impl ProviderLoader for DiscoveryProviderLoader {
    fn perform_load(&self) -> Result<Option<ProviderData>> {
        let descriptors: Vec<ProviderDescriptor> = self
            .catalog
            .provider_types()
            .iter()
            .filter(|info| {
                self.group
                    .as_deref()
                    .is_none_or(|group| eq_ignore_case(&info.group, group))
            })
            .map(|info| {
                ProviderDescriptor::new(
                    info.name.clone(),
                    info.group.clone(),
                    info.provider_type.clone(),
                    None,
                    true,
                )
            })
            .collect();

        if descriptors.is_empty() {
            return Ok(None);
        }

        info!(providers = descriptors.len(), "Discovered registered provider types");
        ProviderData::new(descriptors, None).map(Some)
    }
}
