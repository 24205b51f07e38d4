//! Logging SMS provider
//!
//! Delivers nothing. Each message is written to the log at `info` level,
//! which keeps it usable as a default provider in development.

use std::sync::atomic::{AtomicU64, Ordering};

use plugboard_application::ports::registry::{PROVIDER_TYPES, ProviderTypeEntry};
use plugboard_domain::{Provider, ProviderMeta, ProviderType, Result};
use tracing::info;

use super::{SmsMessage, SmsProvider, SmsReceipt};
use crate::constants::{DEFAULT_SMS_SENDER, SENDER_SETTING, SMS_GROUP};

/// SMS provider that logs messages instead of sending them
#[derive(Debug, Default)]
pub struct LogSmsProvider {
    meta: ProviderMeta,
    sent: AtomicU64,
}

impl LogSmsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime handle used for registration
    pub fn provider_type() -> ProviderType {
        ProviderType::builder::<Self>()
            .implements::<dyn SmsProvider>(|p| p)
            .default_constructible()
            .build()
    }

    /// Number of messages logged so far
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

impl Provider for LogSmsProvider {
    fn meta(&self) -> &ProviderMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ProviderMeta {
        &mut self.meta
    }
}

impl SmsProvider for LogSmsProvider {
    fn send(&self, message: &SmsMessage) -> Result<SmsReceipt> {
        message.validate()?;
        let sender = match self.settings() {
            Some(settings) => settings
                .try_get::<String>(SENDER_SETTING)?
                .unwrap_or_else(|| DEFAULT_SMS_SENDER.to_owned()),
            None => DEFAULT_SMS_SENDER.to_owned(),
        };
        let sequence = self.sent.fetch_add(1, Ordering::Relaxed) + 1;

        info!(
            provider = self.name(),
            sender = %sender,
            to = %message.to,
            sequence,
            "SMS: {}",
            message.body
        );

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
static LOG_SMS_PROVIDER: ProviderTypeEntry = ProviderTypeEntry {
    name: "log-sms",
    group: SMS_GROUP,
    description: "Logs each SMS instead of delivering it",
    provider_type: LogSmsProvider::provider_type,
};
