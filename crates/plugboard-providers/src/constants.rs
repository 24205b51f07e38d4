//! Provider Constants

/// Group every SMS provider registers under
pub const SMS_GROUP: &str = "sms";

/// Sender used when no `sender` setting is configured
pub const DEFAULT_SMS_SENDER: &str = "plugboard";

/// Setting holding the outbox file path
pub const OUTBOX_PATH_SETTING: &str = "path";

/// Setting holding the sender name
pub const SENDER_SETTING: &str = "sender";

/// Setting holding the pipe-encoded retry policy
pub const RETRY_SETTING: &str = "retry";

/// Write attempts when no retry policy is configured
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 1;
