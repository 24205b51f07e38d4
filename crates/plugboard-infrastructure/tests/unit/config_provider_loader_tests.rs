//! Configuration-backed provider loader tests

use std::collections::BTreeMap;

use plugboard_application::{ProviderLoader, ProviderManager};
use plugboard_infrastructure::ConfigProviderLoader;
use plugboard_infrastructure::config::{
    ConfigLoader, ProviderElement, ProviderSection, SettingsSection,
};
use serde::Deserialize;

use crate::fixtures::{Notifier, catalog, email_type, write_config};

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Smtp {
    host: String,
    port: u16,
}

fn element(name: &str, group: &str, provider_type: &str) -> ProviderElement {
    ProviderElement {
        name: name.to_owned(),
        group: group.to_owned(),
        provider_type: provider_type.to_owned(),
        ..ProviderElement::default()
    }
}

fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[test]
fn test_aliases_resolve_ignoring_case() {
    let section = ProviderSection {
        types: BTreeMap::from([("Mail".to_owned(), "email".to_owned())]),
        providers: vec![element("Primary", "mail", "MAIL")],
        ..ProviderSection::default()
    };

    let data = ConfigProviderLoader::new(section, catalog())
        .load()
        .expect("should load");
    let descriptor = &data.descriptors()[0];
    assert_eq!(descriptor.provider_type(), &email_type());
    assert_eq!(descriptor.name(), "Primary");
    assert!(descriptor.settings().is_none());
}

#[test]
fn test_registered_type_names_work_without_alias() {
    let section = ProviderSection {
        providers: vec![element("Pager", "oncall", "Pager")],
        ..ProviderSection::default()
    };
    let data = ConfigProviderLoader::new(section, catalog())
        .load()
        .expect("should load");
    assert_eq!(data.descriptors().len(), 1);
}

#[test]
fn test_unknown_type_fails_as_provider_load() {
    let section = ProviderSection {
        providers: vec![element("Ghost", "", "carrier-pigeon")],
        ..ProviderSection::default()
    };
    let err = ConfigProviderLoader::new(section, catalog()).load().unwrap_err();
    assert!(err.is_provider_load());

    let cause = std::error::Error::source(&err).expect("should carry its cause");
    assert!(cause.to_string().contains("Ghost"));
    assert!(cause.to_string().contains("carrier-pigeon"));
}

#[test]
fn test_empty_section_is_no_data() {
    let err = ConfigProviderLoader::new(ProviderSection::default(), catalog())
        .load()
        .unwrap_err();
    assert!(err.is_provider_load());
}

#[test]
fn test_settings_are_built_per_provider() {
    let mut primary = element("Primary", "mail", "email");
    primary.settings = SettingsSection {
        data_parser: Some("pipe".to_owned()),
        values: values(&[("smtp", "host:localhost|port:2525")]),
    };
    let section = ProviderSection {
        settings: SettingsSection {
            data_parser: None,
            values: values(&[("GlobalTestSetting", "GlobalTestValue")]),
        },
        providers: vec![primary],
        ..ProviderSection::default()
    };

    let data = ConfigProviderLoader::new(section, catalog())
        .load()
        .expect("should load");

    let shared = data.settings().expect("provider-wide settings");
    assert_eq!(
        shared.get::<String>("GlobalTestSetting").expect("should read"),
        "GlobalTestValue"
    );

    let own = data.descriptors()[0].settings().expect("provider settings");
    assert_eq!(own.data_parser().map(|p| p.name()), Some("pipe"));
    let smtp: Smtp = own.get("smtp").expect("should parse");
    assert_eq!(
        smtp,
        Smtp {
            host: "localhost".to_owned(),
            port: 2525
        }
    );
}

#[test]
fn test_unknown_data_parser_fails() {
    let mut primary = element("Primary", "mail", "email");
    primary.settings = SettingsSection {
        data_parser: Some("yaml".to_owned()),
        values: values(&[("k", "v")]),
    };
    let section = ProviderSection {
        providers: vec![primary],
        ..ProviderSection::default()
    };

    let err = ConfigProviderLoader::new(section, catalog()).load().unwrap_err();
    assert!(err.is_provider_load());
    let cause = std::error::Error::source(&err).expect("should carry its cause");
    assert!(cause.to_string().contains("yaml"));
}

#[test]
fn test_config_file_to_registry() {
    let (_dir, path) = write_config(
        r#"
[providers.types]
mail = "email"

[[providers.provider]]
name = "Primary"
group = "Alerts"
type = "mail"

[[providers.provider]]
name = "Night"
group = "alerts"
type = "pager"

[[providers.provider]]
name = "Retired"
group = "alerts"
type = "pager"
enabled = false
"#,
    );
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("valid config");

    let manager = ProviderManager::new(&ConfigProviderLoader::new(config.providers, catalog()))
        .expect("should load");
    let notifiers = manager.providers().all_of::<dyn Notifier>();

    assert_eq!(notifiers.count().expect("should count"), 2);
    assert_eq!(notifiers.by_group("ALERTS").count().expect("should count"), 2);
    assert!(notifiers.by_name("retired").expect("lookup").is_none());

    let night = notifiers
        .by_name("night")
        .expect("lookup")
        .expect("Night is enabled");
    assert_eq!(night.channel(), "pager");
    assert_eq!(night.group(), "alerts");
}
