//! Provider descriptor
//!
//! Static metadata about one configured provider. A descriptor is created by
//! a loader and never changes afterwards; the registry materializes it on
//! every enumeration.

use std::sync::Arc;

use super::provider_type::ProviderType;
use crate::error::{Error, Result};
use crate::ports::provider::ProviderMeta;
use crate::settings::Settings;

/// Configured-but-not-yet-instantiated provider
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    name: String,
    group: String,
    provider_type: ProviderType,
    settings: Option<Arc<Settings>>,
    enabled: bool,
}

impl ProviderDescriptor {
    /// Create a descriptor. Name and group may be empty.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        provider_type: ProviderType,
        settings: Option<Arc<Settings>>,
        enabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            provider_type,
            settings,
            enabled,
        }
    }

    /// Builder for loaders that assemble descriptors field by field
    pub fn builder() -> ProviderDescriptorBuilder {
        ProviderDescriptorBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn provider_type(&self) -> &ProviderType {
        &self.provider_type
    }

    pub fn settings(&self) -> Option<&Arc<Settings>> {
        self.settings.as_ref()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Name, group and settings to inject into a created instance
    pub fn meta(&self) -> ProviderMeta {
        ProviderMeta::new(self.name.clone(), self.group.clone(), self.settings.clone())
    }
}

/// Builder for [`ProviderDescriptor`]
///
/// Descriptors are enabled unless [`enabled`](Self::enabled) says otherwise.
#[derive(Debug, Clone)]
pub struct ProviderDescriptorBuilder {
    name: String,
    group: String,
    provider_type: Option<ProviderType>,
    settings: Option<Arc<Settings>>,
    enabled: bool,
}

impl Default for ProviderDescriptorBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            group: String::new(),
            provider_type: None,
            settings: None,
            enabled: true,
        }
    }
}

impl ProviderDescriptorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    #[must_use]
    pub fn provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = Some(provider_type);
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: impl Into<Option<Arc<Settings>>>) -> Self {
        self.settings = settings.into();
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Finish the descriptor.
    ///
    /// Fails with `InvalidArgument` when no provider type was given.
    pub fn build(self) -> Result<ProviderDescriptor> {
        let provider_type = self.provider_type.ok_or_else(|| {
            Error::invalid_argument(format!(
                "provider type is required for descriptor '{}'",
                self.name
            ))
        })?;

        Ok(ProviderDescriptor {
            name: self.name,
            group: self.group,
            provider_type,
            settings: self.settings,
            enabled: self.enabled,
        })
    }
}
