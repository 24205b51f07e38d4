//! Provider manager
//!
//! Loads once from a [`ProviderLoader`] and keeps the result.

use std::sync::Arc;

use plugboard_domain::{Result, Settings};
use tracing::info;

use crate::factory::ProviderFactory;
use crate::loader::ProviderLoader;
use crate::providers::Providers;

/// Loaded providers plus provider-wide settings
#[derive(Clone, Debug)]
pub struct ProviderManager {
    providers: Providers,
    settings: Option<Arc<Settings>>,
}

impl ProviderManager {
    pub fn new(loader: &dyn ProviderLoader) -> Result<Self> {
        Self::with_factory(loader, ProviderFactory::new())
    }

    pub fn with_factory(loader: &dyn ProviderLoader, factory: ProviderFactory) -> Result<Self> {
        let (descriptors, settings) = loader.load()?.into_parts();
        let count = descriptors.len();
        let providers = Providers::with_factory(descriptors, factory)?;
        info!(descriptors = count, "Providers loaded");
        Ok(Self {
            providers,
            settings,
        })
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    /// Provider-wide settings, if the loader produced any
    pub fn settings(&self) -> Option<&Arc<Settings>> {
        self.settings.as_ref()
    }
}
