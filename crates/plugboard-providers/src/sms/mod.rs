//! SMS Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`LogSmsProvider`] | `log-sms` | Writes each message to the tracing log |
//! | [`OutboxSmsProvider`] | `outbox-sms` | Appends each message to an outbox file |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `log-sms`, it needs no settings
//! - **Local delivery**: Use `outbox-sms` with a `path` setting

pub mod log;
pub mod outbox;

pub use log::LogSmsProvider;
pub use outbox::{OutboxSmsProvider, RetryPolicy};

use plugboard_domain::{Error, Provider, Result};
use serde::{Deserialize, Serialize};

/// Text message to deliver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsMessage {
    /// Recipient number or address
    pub to: String,
    /// Message body
    pub body: String,
}

impl SmsMessage {
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            body: body.into(),
        }
    }

    /// Reject messages without a recipient
    pub fn validate(&self) -> Result<()> {
        if self.to.trim().is_empty() {
            return Err(Error::invalid_argument("SMS recipient cannot be empty"));
        }
        Ok(())
    }
}

/// Acknowledgement returned for a delivered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsReceipt {
    /// Name of the provider that delivered the message
    pub provider: String,
    /// Per-provider delivery sequence, starting at 1
    pub sequence: u64,
    /// Sender the message went out as
    pub sender: String,
}

/// Capability for sending text messages
pub trait SmsProvider: Provider {
    /// Deliver `message`
    fn send(&self, message: &SmsMessage) -> Result<SmsReceipt>;
}
