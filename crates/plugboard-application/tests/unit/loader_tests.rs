//! Unit tests for the loader contract and the manager

use plugboard_application::{ProviderLoader, ProviderManager};
use plugboard_domain::{Error, ProviderData, Result};

use crate::fixtures::{foo_and_disabled_bar, settings};

struct EmptyLoader;

impl ProviderLoader for EmptyLoader {
    fn perform_load(&self) -> Result<Option<ProviderData>> {
        Ok(None)
    }
}

struct FailingLoader(fn() -> Error);

impl ProviderLoader for FailingLoader {
    fn perform_load(&self) -> Result<Option<ProviderData>> {
        Err((self.0)())
    }
}

#[test]
fn test_manager_loads_provider_data() {
    let data = ProviderData::new(
        foo_and_disabled_bar(),
        Some(settings(&[("GlobalTestSetting", "GlobalTestValue")])),
    )
    .expect("non-empty data");

    let manager = ProviderManager::new(&data).expect("should load");
    assert_eq!(manager.providers().count().expect("should count"), 1);

    let settings = manager.settings().expect("provider-wide settings");
    let value: String = settings.get("GlobalTestSetting").expect("should read");
    assert_eq!(value, "GlobalTestValue");
    assert_eq!(settings.len(), 1);
}

#[test]
fn test_no_data_is_provider_load_error() {
    let err = EmptyLoader.load().unwrap_err();
    assert!(err.is_provider_load());
    assert!(ProviderManager::new(&EmptyLoader).unwrap_err().is_provider_load());
}

#[test]
fn test_loader_failure_is_wrapped_once() {
    let wrapped = FailingLoader(|| Error::configuration("bad section")).load().unwrap_err();
    assert!(wrapped.is_provider_load());
    let source = std::error::Error::source(&wrapped).expect("should carry its cause");
    assert_eq!(source.to_string(), "Configuration error: bad section");

    let unchanged = FailingLoader(|| Error::provider_load("already wrapped"))
        .load()
        .unwrap_err();
    assert_eq!(unchanged.to_string(), "Provider load error: already wrapped");
}
