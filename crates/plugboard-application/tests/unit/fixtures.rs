//! Test providers shared by the suites

use std::sync::Arc;

use plugboard_application::ports::registry::{PROVIDER_TYPES, ProviderTypeEntry};
use plugboard_domain::{Provider, ProviderDescriptor, ProviderMeta, ProviderType, Settings};

pub trait Messenger: Provider {
    fn deliver(&self, text: &str) -> String;
}

pub trait Auditor: Provider {
    fn audit(&self) -> usize;
}

#[derive(Default)]
pub struct FooProvider {
    meta: ProviderMeta,
}

impl FooProvider {
    pub fn provider_type() -> ProviderType {
        ProviderType::builder::<Self>()
            .implements::<dyn Messenger>(|p| p)
            .default_constructible()
            .build()
    }
}

impl Provider for FooProvider {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl Messenger for FooProvider {
    fn deliver(&self, text: &str) -> String {
        format!("{}: {text}", self.name())
    }
}

#[derive(Default)]
pub struct BarProvider {
    meta: ProviderMeta,
}

impl BarProvider {
    pub fn provider_type() -> ProviderType {
        ProviderType::builder::<Self>()
            .implements::<dyn Messenger>(|p| p)
            .implements::<dyn Auditor>(|p| p)
            .default_constructible()
            .build()
    }
}

impl Provider for BarProvider {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl Messenger for BarProvider {
    fn deliver(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

impl Auditor for BarProvider {
    fn audit(&self) -> usize {
        self.settings().map_or(0, |s| s.len())
    }
}

/// Provider without a parameterless constructor
pub struct RelayProvider {
    meta: ProviderMeta,
    pub endpoint: String,
}

impl RelayProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            meta: ProviderMeta::default(),
            endpoint: endpoint.into(),
        }
    }

    pub fn provider_type() -> ProviderType {
        ProviderType::builder::<Self>()
            .implements::<dyn Messenger>(|p| p)
            .build()
    }
}

impl Provider for RelayProvider {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl Messenger for RelayProvider {
    fn deliver(&self, text: &str) -> String {
        format!("{} <- {text}", self.endpoint)
    }
}

#[linkme::distributed_slice(PROVIDER_TYPES)]
static FOO_PROVIDER: ProviderTypeEntry = ProviderTypeEntry {
    name: "foo",
    group: "FooProviders",
    description: "Test messenger",
    provider_type: FooProvider::provider_type,
};

#[linkme::distributed_slice(PROVIDER_TYPES)]
static BAR_PROVIDER: ProviderTypeEntry = ProviderTypeEntry {
    name: "bar",
    group: "FooProviders",
    description: "Test messenger and auditor",
    provider_type: BarProvider::provider_type,
};

pub fn settings(pairs: &[(&str, &str)]) -> Arc<Settings> {
    Arc::new(Settings::from_pairs(pairs.iter().copied()).expect("valid settings"))
}

/// `Foo` enabled and `Bar` disabled, both in group `FooProviders`
pub fn foo_and_disabled_bar() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor::new(
            "Foo",
            "FooProviders",
            FooProvider::provider_type(),
            Some(settings(&[("user", "id:1|name:John Doe")])),
            true,
        ),
        ProviderDescriptor::new(
            "Bar",
            "FooProviders",
            BarProvider::provider_type(),
            None,
            false,
        ),
    ]
}

/// `Foo` in `FooProviders` and `Bar` in `BarProviders`, both enabled
pub fn foo_and_bar() -> Vec<ProviderDescriptor> {
    vec![
        ProviderDescriptor::new("Foo", "FooProviders", FooProvider::provider_type(), None, true),
        ProviderDescriptor::new(
            "Bar",
            "BarProviders",
            BarProvider::provider_type(),
            Some(settings(&[("a", "1"), ("b", "2")])),
            true,
        ),
    ]
}
