//! Loader output

use std::sync::Arc;

use super::descriptor::ProviderDescriptor;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// What every loader hands to the registry: a non-empty descriptor list plus
/// optional provider-wide settings.
#[derive(Debug, Clone)]
pub struct ProviderData {
    settings: Option<Arc<Settings>>,
    descriptors: Vec<ProviderDescriptor>,
}

impl ProviderData {
    /// Fails with `InvalidArgument` when `descriptors` is empty
    pub fn new(
        descriptors: Vec<ProviderDescriptor>,
        settings: Option<Arc<Settings>>,
    ) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(Error::invalid_argument(
                "provider data requires at least one descriptor",
            ));
        }
        Ok(Self {
            settings,
            descriptors,
        })
    }

    pub fn settings(&self) -> Option<&Arc<Settings>> {
        self.settings.as_ref()
    }

    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }

    pub fn into_parts(self) -> (Vec<ProviderDescriptor>, Option<Arc<Settings>>) {
        (self.descriptors, self.settings)
    }
}
