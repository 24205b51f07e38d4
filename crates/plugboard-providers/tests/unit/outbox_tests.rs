//! Outbox provider tests

use std::sync::Arc;

use plugboard_application::{ProviderFactory, Providers};
use plugboard_domain::{Error, ProviderDescriptor, Settings};
use plugboard_providers::{OutboxSmsProvider, RetryPolicy, SmsMessage, SmsProvider};

fn outbox_descriptor(settings: Option<Settings>) -> ProviderDescriptor {
    ProviderDescriptor::new(
        "Outbox",
        "sms",
        OutboxSmsProvider::provider_type(),
        settings.map(Arc::new),
        true,
    )
}

#[test]
fn test_messages_are_appended_in_order() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("outbox.tsv");
    let settings = Settings::from_pairs([
        ("path", path.to_string_lossy().into_owned()),
        ("sender", "alerts".to_owned()),
    ])
    .expect("settings");

    let provider = ProviderFactory::new()
        .create::<dyn SmsProvider>(&outbox_descriptor(Some(settings)))
        .expect("should create");

    let first = provider
        .send(&SmsMessage::new("+15550100", "disk full"))
        .expect("send");
    let second = provider
        .send(&SmsMessage::new("+15550101", "disk ok"))
        .expect("send");
    assert_eq!((first.sequence, second.sequence), (1, 2));
    assert_eq!(first.provider, "Outbox");
    assert_eq!(first.sender, "alerts");

    let contents = std::fs::read_to_string(&path).expect("outbox written");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "1\talerts\t+15550100\tdisk full",
            "2\talerts\t+15550101\tdisk ok"
        ]
    );
}

#[test]
fn test_missing_path_is_reported() {
    let provider = ProviderFactory::new()
        .create::<dyn SmsProvider>(&outbox_descriptor(None))
        .expect("should create");
    let err = provider.send(&SmsMessage::new("+15550100", "hi")).unwrap_err();
    assert!(err.is_invalid_operation());

    let settings = Settings::from_pairs([("sender", "ops")]).expect("settings");
    let provider = ProviderFactory::new()
        .create::<dyn SmsProvider>(&outbox_descriptor(Some(settings)))
        .expect("should create");
    let err = provider.send(&SmsMessage::new("+15550100", "hi")).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_retry_policy_is_parsed_from_pipe_data() {
    let settings = Settings::from_pairs([
        ("path", "unused"),
        ("retry", "Attempts: 3 | backoff_ms: 25"),
    ])
    .expect("settings");
    let providers = Providers::new(vec![outbox_descriptor(Some(settings))]).expect("providers");

    let outbox = providers
        .by_name_of::<dyn SmsProvider>("outbox")
        .expect("lookup")
        .expect("registered");
    let policy: RetryPolicy = outbox
        .settings()
        .expect("settings")
        .get("retry")
        .expect("policy");
    assert_eq!(
        policy,
        RetryPolicy {
            attempts: 3,
            backoff_ms: 25
        }
    );
}

#[test]
fn test_unwritable_outbox_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let settings = Settings::from_pairs([
        ("path", dir.path().to_string_lossy().into_owned()),
        ("retry", "attempts:2".to_owned()),
    ])
    .expect("settings");

    let provider = ProviderFactory::new()
        .create::<dyn SmsProvider>(&outbox_descriptor(Some(settings)))
        .expect("should create");
    let err = provider.send(&SmsMessage::new("+15550100", "hi")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
