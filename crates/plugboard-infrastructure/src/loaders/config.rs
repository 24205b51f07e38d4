//! Configuration-backed provider loader

use std::sync::Arc;

use plugboard_application::{ProviderLoader, TypeCatalog};
use plugboard_domain::utils::eq_ignore_case;
use plugboard_domain::{
    DependencyResolver, Error, ProviderData, ProviderDescriptor, Result, Settings,
};
use tracing::{debug, info};

use crate::config::{AppConfig, ProviderElement, ProviderSection, SettingsSection};

/// Builds provider data from a [`ProviderSection`]
///
/// Type names go through the section's alias table first (ignoring case),
/// then the catalog. Disabled providers are kept as disabled descriptors.
#[derive(Clone)]
pub struct ConfigProviderLoader {
    section: ProviderSection,
    catalog: TypeCatalog,
    resolver: Option<Arc<dyn DependencyResolver>>,
}

impl ConfigProviderLoader {
    pub fn new(section: ProviderSection, catalog: TypeCatalog) -> Self {
        Self {
            section,
            catalog,
            resolver: None,
        }
    }

    /// Loader over `config.providers` with every registered type
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.providers.clone(), TypeCatalog::discover())
    }

    /// Resolve configured data parsers through `resolver`
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn DependencyResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    fn resolve_type_name<'a>(&'a self, configured: &'a str) -> &'a str {
        self.section
            .types
            .iter()
            .find(|(alias, _)| eq_ignore_case(alias, configured))
            .map_or(configured, |(_, target)| target.as_str())
    }

    fn descriptor(&self, element: &ProviderElement) -> Result<ProviderDescriptor> {
        let type_name = self.resolve_type_name(&element.provider_type);
        let info = self.catalog.provider_type(type_name).map_err(|e| {
            Error::configuration_with_source(
                format!(
                    "Provider '{}' refers to unknown type '{}'",
                    element.name, element.provider_type
                ),
                e,
            )
        })?;

        debug!(
            name = %element.name,
            group = %element.group,
            provider_type = %info.name,
            enabled = element.enabled,
            "Configured provider"
        );

        ProviderDescriptor::builder()
            .name(element.name.clone())
            .group(element.group.clone())
            .provider_type(info.provider_type.clone())
            .settings(self.settings(&element.settings)?)
            .enabled(element.enabled)
            .build()
    }

    fn settings(&self, section: &SettingsSection) -> Result<Option<Arc<Settings>>> {
        if section.values.is_empty() {
            return Ok(None);
        }

        let parser = section
            .data_parser
            .as_deref()
            .map(|name| self.catalog.data_parser(name).map(|info| info.parser.clone()))
            .transpose()?;

        let entries = section
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let mut settings = Settings::new(entries, parser)?;
        if let Some(resolver) = &self.resolver {
            settings = settings.with_resolver(Arc::clone(resolver));
        }
        Ok(Some(Arc::new(settings)))
    }
}

impl ProviderLoader for ConfigProviderLoader {
    fn perform_load(&self) -> Result<Option<ProviderData>> {
        if self.section.providers.is_empty() {
            return Ok(None);
        }

        let descriptors = self
            .section
            .providers
            .iter()
            .map(|element| self.descriptor(element))
            .collect::<Result<Vec<_>>>()?;
        let settings = self.settings(&self.section.settings)?;

        info!(
            providers = descriptors.len(),
            enabled = descriptors.iter().filter(|d| d.enabled()).count(),
            "Loaded providers from configuration"
        );
        ProviderData::new(descriptors, settings).map(Some)
    }
}

impl std::fmt::Debug for ConfigProviderLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigProviderLoader")
            .field("section", &self.section)
            .field("catalog", &self.catalog)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}
