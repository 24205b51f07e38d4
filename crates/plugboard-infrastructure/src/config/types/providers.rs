//! Provider wiring configuration
//!
//! ```toml
//! [providers.types]
//! console = "log-sms"
//!
//! [providers.settings.values]
//! country_code = "+1"
//!
//! [[providers.provider]]
//! name = "Console"
//! group = "sms"
//! type = "console"
//!
//! [providers.provider.settings]
//! data_parser = "pipe"
//!
//! [providers.provider.settings.values]
//! sender = "+15550100"
//! retry = "attempts:3|backoff_ms:250"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// The `[providers]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Aliases from configuration names to registered provider type names
    pub types: BTreeMap<String, String>,

    /// Settings shared by the whole provider set
    pub settings: SettingsSection,

    /// Configured providers
    #[serde(rename = "provider")]
    pub providers: Vec<ProviderElement>,
}

/// One `[[providers.provider]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderElement {
    pub name: String,
    pub group: String,

    /// Alias from `[providers.types]` or a registered type name
    #[serde(rename = "type")]
    pub provider_type: String,

    pub enabled: bool,
    pub settings: SettingsSection,
}

impl Default for ProviderElement {
    fn default() -> Self {
        Self {
            name: String::new(),
            group: String::new(),
            provider_type: String::new(),
            enabled: true,
            settings: SettingsSection::default(),
        }
    }
}

/// Key/value settings with an optional data parser name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSection {
    /// Registered data parser for structured values; the pipe parser when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_parser: Option<String>,

    /// Setting values. Numbers and booleans are kept as their text.
    #[serde(deserialize_with = "scalar_map")]
    pub values: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Scalar>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}
