//! Provider capability set
//!
//! Every pluggable implementation implements [`Provider`]. Domain-specific
//! capabilities are traits with `Provider` as a supertrait, so a registry of
//! `dyn SmsProvider` can still read each element's name, group and settings.

use std::sync::Arc;

use crate::settings::Settings;

/// Name, group and settings injected into a provider by the factory
#[derive(Debug, Clone, Default)]
pub struct ProviderMeta {
    /// Configured provider name
    pub name: String,
    /// Configured provider group
    pub group: String,
    /// Provider-specific settings, if any were configured
    pub settings: Option<Arc<Settings>>,
}

impl ProviderMeta {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        settings: Option<Arc<Settings>>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            settings,
        }
    }
}

/// Minimal capability set a type needs to participate in a registry.
///
/// Implementors only provide access to their [`ProviderMeta`]:
///
/// ```
/// use plugboard_domain::{Provider, ProviderMeta};
///
/// #[derive(Default)]
/// struct ConsoleProvider {
///     meta: ProviderMeta,
/// }
///
/// impl Provider for ConsoleProvider {
///     fn meta(&self) -> &ProviderMeta {
///         &self.meta
///     }
///
///     fn meta_mut(&mut self) -> &mut ProviderMeta {
///         &mut self.meta
///     }
/// }
/// ```
pub trait Provider: Send + Sync + 'static {
    fn meta(&self) -> &ProviderMeta;

    fn meta_mut(&mut self) -> &mut ProviderMeta;

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn set_name(&mut self, name: String) {
        self.meta_mut().name = name;
    }

    fn group(&self) -> &str {
        &self.meta().group
    }

    fn set_group(&mut self, group: String) {
        self.meta_mut().group = group;
    }

    fn settings(&self) -> Option<&Arc<Settings>> {
        self.meta().settings.as_ref()
    }

    fn set_settings(&mut self, settings: Option<Arc<Settings>>) {
        self.meta_mut().settings = settings;
    }
}
