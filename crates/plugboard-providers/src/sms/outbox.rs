//! Outbox SMS provider
//!
//! Appends each message as one tab-separated line to a file. Settings:
//!
//! | Setting | Required | Format |
//! |---------|----------|--------|
//! | `path` | yes | Outbox file path |
//! | `sender` | no | Sender name |
//! | `retry` | no | `attempts:3\|backoff_ms:100` |

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use plugboard_application::ports::registry::{PROVIDER_TYPES, ProviderTypeEntry};
use plugboard_domain::{Error, Provider, ProviderMeta, ProviderType, Result, Settings};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{SmsMessage, SmsProvider, SmsReceipt};
use crate::constants::{
    DEFAULT_RETRY_ATTEMPTS, DEFAULT_SMS_SENDER, OUTBOX_PATH_SETTING, RETRY_SETTING,
    SENDER_SETTING, SMS_GROUP,
};

/// How often a failed outbox write is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total write attempts, at least one
    pub attempts: u32,
    /// Pause between attempts in milliseconds
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RETRY_ATTEMPTS,
            backoff_ms: 0,
        }
    }
}

/// SMS provider writing to an outbox file
#[derive(Debug, Default)]
pub struct OutboxSmsProvider {
    meta: ProviderMeta,
    sent: AtomicU64,
    write_lock: Mutex<()>,
}

impl OutboxSmsProvider {
    /// Runtime handle used for registration
    pub fn provider_type() -> ProviderType {
        ProviderType::builder::<Self>()
            .implements::<dyn SmsProvider>(|p| p)
            .default_constructible()
            .build()
    }

    fn required_settings(&self) -> Result<&Settings> {
        self.settings().map(Arc::as_ref).ok_or_else(|| {
            Error::invalid_operation(format!(
                "Outbox provider '{}' has no settings; '{OUTBOX_PATH_SETTING}' is required",
                self.name()
            ))
        })
    }

    /// Outbox file from the `path` setting
    pub fn path(&self) -> Result<PathBuf> {
        self.required_settings()?.get(OUTBOX_PATH_SETTING)
    }

    /// Retry policy from the `retry` setting, or the default
    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        let policy = match self.settings() {
            Some(settings) => settings.try_get::<RetryPolicy>(RETRY_SETTING)?,
            None => None,
        };
        Ok(policy.unwrap_or_default())
    }

    fn sender(&self) -> Result<String> {
        let sender = match self.settings() {
            Some(settings) => settings.try_get::<String>(SENDER_SETTING)?,
            None => None,
        };
        Ok(sender.unwrap_or_else(|| DEFAULT_SMS_SENDER.to_owned()))
    }

    /// Messages written so far
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    /// Append the line for the next sequence number; the number is only
    /// consumed once the write succeeds.
    fn append(&self, path: &Path, line: impl Fn(u64) -> String) -> std::io::Result<u64> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let sequence = self.sent.load(Ordering::Relaxed) + 1;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line(sequence))?;
        self.sent.store(sequence, Ordering::Relaxed);
        Ok(sequence)
    }
}

impl Provider for OutboxSmsProvider {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl SmsProvider for OutboxSmsProvider {
    fn send(&self, message: &SmsMessage) -> Result<SmsReceipt> {
        message.validate()?;
        let path = self.path()?;
        let sender = self.sender()?;
        let policy = self.retry_policy()?;

        let line = |sequence: u64| format!("{sequence}\t{sender}\t{}\t{}", message.to, message.body);

        let attempts = policy.attempts.max(1);
        let mut attempt = 1;
        let sequence = loop {
            match self.append(&path, &line) {
                Ok(sequence) => break sequence,
                Err(e) if attempt < attempts => {
                    warn!(
                        provider = self.name(),
                        attempt,
                        error = %e,
                        "Outbox write failed, retrying"
                    );
                    thread::sleep(Duration::from_millis(policy.backoff_ms));
                    attempt += 1;
                }
                Err(e) => {
                    return Err(Error::io_with_source(
                        format!("Failed to write outbox {}", path.display()),
                        e,
                    ));
                }
            }
        };

        debug!(provider = self.name(), path = %path.display(), sequence, "SMS appended to outbox");
        Ok(SmsReceipt {
            provider: self.name().to_owned(),
            sequence,
            sender,
        })
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(PROVIDER_TYPES)]
static OUTBOX_SMS_PROVIDER: ProviderTypeEntry = ProviderTypeEntry {
    name: "outbox-sms",
    group: SMS_GROUP,
    description: "Appends each SMS to an outbox file",
    provider_type: OutboxSmsProvider::provider_type,
};
