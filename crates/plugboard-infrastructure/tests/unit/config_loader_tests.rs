//! Configuration Loader Tests

use plugboard_infrastructure::config::ConfigLoader;
use plugboard_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

use crate::fixtures::write_config;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("PLUGBOARD_TEST_UNSET")
        .load()
        .expect("defaults are valid");

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(config.providers.providers.is_empty());
    assert!(config.providers.types.is_empty());
}

#[test]
fn test_load_provider_section() {
    let (_dir, path) = write_config(
        r#"
[logging]
level = "debug"

[providers.types]
Mail = "email"

[providers.settings.values]
GlobalTestSetting = "GlobalTestValue"
retries = 3
verbose = true

[[providers.provider]]
name = "Primary"
group = "mail"
type = "mail"

[providers.provider.settings]
data_parser = "pipe"

[providers.provider.settings.values]
smtp = "host:localhost|port:25"

[[providers.provider]]
name = "Backup"
type = "pager"
enabled = false
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("valid config");

    assert_eq!(config.logging.level, "debug");
    let section = &config.providers;
    assert_eq!(section.types.get("Mail").map(String::as_str), Some("email"));
    assert_eq!(
        section.settings.values.get("retries").map(String::as_str),
        Some("3")
    );
    assert_eq!(
        section.settings.values.get("verbose").map(String::as_str),
        Some("true")
    );

    assert_eq!(section.providers.len(), 2);
    let primary = &section.providers[0];
    assert!(primary.enabled);
    assert_eq!(primary.settings.data_parser.as_deref(), Some("pipe"));
    let backup = &section.providers[1];
    assert!(!backup.enabled);
    assert_eq!(backup.group, "");
}

#[test]
fn test_provider_without_type_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[[providers.provider]]
name = "Nameless"
"#,
    );
    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("Nameless"));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let (_dir, path) = write_config("[logging]\nlevel = \"chatty\"\n");
    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let (_dir, path) = write_config("[logging\nlevel = ");
    let err = ConfigLoader::new().with_config_path(&path).load().unwrap_err();
    assert!(err.is_configuration());
}
