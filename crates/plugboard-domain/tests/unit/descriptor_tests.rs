//! Unit tests for provider descriptors and loader data

use std::sync::Arc;

use plugboard_domain::{
    Provider, ProviderData, ProviderDescriptor, ProviderMeta, ProviderType, Settings,
};

#[derive(Default)]
struct NullProvider {
    meta: ProviderMeta,
}

impl Provider for NullProvider {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

fn null_type() -> ProviderType {
    ProviderType::builder::<NullProvider>()
        .default_constructible()
        .build()
}

#[test]
fn test_builder_requires_provider_type() {
    let err = ProviderDescriptor::builder().name("Null").build().unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_builder_allows_blank_name_and_group() {
    let descriptor = ProviderDescriptor::builder()
        .provider_type(null_type())
        .build()
        .expect("blank name and group are allowed");
    assert_eq!(descriptor.name(), "");
    assert_eq!(descriptor.group(), "");
    assert!(descriptor.enabled());
    assert!(descriptor.settings().is_none());
}

#[test]
fn test_descriptor_meta_carries_settings() {
    let settings = Arc::new(Settings::from_pairs([("key", "value")]).expect("valid settings"));
    let descriptor =
        ProviderDescriptor::new("Null", "Sinks", null_type(), Some(settings.clone()), false);

    let meta = descriptor.meta();
    assert_eq!(meta.name, "Null");
    assert_eq!(meta.group, "Sinks");
    assert!(Arc::ptr_eq(meta.settings.as_ref().expect("settings"), &settings));
    assert!(!descriptor.enabled());
}

#[test]
fn test_provider_data_requires_descriptors() {
    let err = ProviderData::new(Vec::new(), None).unwrap_err();
    assert!(err.is_invalid_argument());

    let descriptor = ProviderDescriptor::new("Null", "", null_type(), None, true);
    let data = ProviderData::new(vec![descriptor], None).expect("non-empty data");
    assert_eq!(data.descriptors().len(), 1);
    assert!(data.settings().is_none());
}
