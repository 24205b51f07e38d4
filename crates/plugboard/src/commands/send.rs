//! Send a test message

use anyhow::{Context, Result, bail};
use plugboard::infrastructure::AppConfig;
use plugboard::load_manager;
use plugboard::providers::{SmsMessage, SmsProvider};

use super::Output;

pub fn send(output: &Output, config: &AppConfig, provider: &str, to: &str, body: &str) -> Result<()> {
    let manager = load_manager(config)?;
    let Some(sms) = manager.providers().by_name_of::<dyn SmsProvider>(provider)? else {
        bail!("No enabled SMS provider named '{provider}'");
    };

    let receipt = sms
        .send(&SmsMessage::new(to, body))
        .with_context(|| format!("Provider '{provider}' failed to send"))?;

    output.emit(
        &serde_json::to_value(&receipt)?,
        &[format!(
            "Sent #{} via {} as {}",
            receipt.sequence, receipt.provider, receipt.sender
        )],
    )
}
