//! Configuration file to live provider, end to end

use plugboard::infrastructure::{AppConfig, ConfigLoader};
use plugboard::load_manager;
use plugboard::providers::{RetryPolicy, SmsMessage, SmsProvider};

fn load(contents: &str) -> (tempfile::TempDir, AppConfig) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("plugboard.toml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("config should load");
    (dir, config)
}

#[test]
fn test_configured_outbox_delivers_to_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let outbox = dir.path().join("outbox.tsv");
    let (_config_dir, config) = load(&format!(
        r#"
[providers.types]
outbox = "outbox-sms"

[providers.settings.values]
region = "eu"

[[providers.provider]]
name = "Primary"
group = "sms"
type = "outbox"

[providers.provider.settings.values]
path = "{}"
sender = "alerts"
retry = "attempts:3|backoff_ms:5"

[[providers.provider]]
name = "Console"
group = "sms"
type = "log-sms"
enabled = false
"#,
        outbox.display()
    ));

    let manager = load_manager(&config).expect("providers load");
    assert_eq!(manager.providers().descriptors().len(), 2);
    let shared = manager.settings().expect("provider-wide settings");
    assert_eq!(shared.get::<String>("region").expect("region"), "eu");

    let sms = manager
        .providers()
        .all_of::<dyn SmsProvider>()
        .to_vec()
        .expect("providers build");
    assert_eq!(sms.len(), 1, "disabled providers are skipped");

    let primary = &sms[0];
    let policy: RetryPolicy = primary
        .settings()
        .expect("settings")
        .get("retry")
        .expect("policy");
    assert_eq!(policy.attempts, 3);

    let receipt = primary
        .send(&SmsMessage::new("+15550100", "disk full"))
        .expect("send");
    assert_eq!(receipt.provider, "Primary");
    let written = std::fs::read_to_string(&outbox).expect("outbox written");
    assert_eq!(written, "1\talerts\t+15550100\tdisk full\n");
}

#[test]
fn test_without_configured_providers_types_are_discovered() {
    let (_dir, config) = load("[logging]\nlevel = \"debug\"\n");

    let manager = load_manager(&config).expect("discovery");
    let sms = manager.providers().by_group_of::<dyn SmsProvider>("SMS");
    let mut names: Vec<String> = sms
        .iter()
        .map(|p| p.map(|p| p.name().to_owned()))
        .collect::<Result<_, _>>()
        .expect("providers build");
    names.sort_unstable();
    assert_eq!(names, ["log-sms", "outbox-sms"]);
}

#[test]
fn test_unknown_type_fails_loading() {
    let (_dir, config) = load(
        r#"
[[providers.provider]]
name = "Broken"
type = "carrier-pigeon"
"#,
    );

    let err = load_manager(&config).err().expect("unknown type should fail");
    assert!(err.is_provider_load());
    assert!(err.to_string().contains("Error loading providers"));
}
