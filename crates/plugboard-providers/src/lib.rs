//! # plugboard - Provider Implementations
//!
//! Concrete providers registered through the `PROVIDER_TYPES` distributed
//! slice. Linking this crate is enough for them to show up in
//! [`TypeCatalog::discover`](plugboard_application::TypeCatalog::discover).
//!
//! | Capability | Type name | Implementation |
//! |------------|-----------|----------------|
//! | [`SmsProvider`] | `log-sms` | [`LogSmsProvider`] |
//! | [`SmsProvider`] | `outbox-sms` | [`OutboxSmsProvider`] |

pub use plugboard_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// SMS provider implementations
pub mod sms;

pub use sms::{LogSmsProvider, OutboxSmsProvider, RetryPolicy, SmsMessage, SmsProvider, SmsReceipt};
