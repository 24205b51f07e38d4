//! Provider loader contract
//!
//! Any descriptor source (configuration, discovery, hand-built data)
//! implements [`ProviderLoader::perform_load`]. Callers use
//! [`ProviderLoader::load`], which attaches the `ProviderLoad` error kind.

use plugboard_domain::{Error, ProviderData, Result};

/// Source of provider descriptors
pub trait ProviderLoader {
    /// Produce descriptors, or `None` when the source holds nothing
    fn perform_load(&self) -> Result<Option<ProviderData>>;

    /// Load provider data.
    ///
    /// Missing data and every failure surface as a single `ProviderLoad`
    /// error.
    fn load(&self) -> Result<ProviderData> {
        match self.perform_load() {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(Error::provider_load("Provider loader returned no data")),
            Err(e) => Err(e.wrap_provider_load("Error loading providers")),
        }
    }
}

/// Hand-built data loads as itself
impl ProviderLoader for ProviderData {
    fn perform_load(&self) -> Result<Option<ProviderData>> {
        Ok(Some(self.clone()))
    }
}
