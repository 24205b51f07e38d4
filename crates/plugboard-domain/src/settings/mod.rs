//! Typed settings
//!
//! [`Settings`] is an immutable, string-keyed view over configured values.
//! Values are converted on read:
//!
//! - strings are returned exactly as stored
//! - scalars (`bool`, integers, floats, `char`) are parsed from the trimmed text
//! - structs and maps are split by a [`DataParser`](crate::DataParser) and
//!   bound field by field (see [`parsers`](crate::parsers))
//!
//! ```
//! use plugboard_domain::Settings;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize, PartialEq)]
//! #[serde(default)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let settings = Settings::from_pairs([("user", "id:1|name:John Doe")]).unwrap();
//! let user: User = settings.get("user").unwrap();
//! assert_eq!(user, User { id: 1, name: "John Doe".into() });
//! ```

pub(crate) mod de;
mod value;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::parsers::{DataFields, DataParser, DataParserRef, PipeDataParser};
use crate::ports::resolver::{self as dependency_resolver, DependencyResolver};

pub use value::{ObjectReader, ObjectType, SettingType, SettingValue};

/// Immutable typed view over string settings
#[derive(Clone)]
pub struct Settings {
    entries: HashMap<String, String>,
    data_parser: Option<DataParserRef>,
    resolver: Option<Arc<dyn DependencyResolver>>,
}

impl Settings {
    /// Create settings from `entries`.
    ///
    /// Fails with `InvalidArgument` when `entries` is empty. Without a
    /// `data_parser` the pipe-delimited parser is used for structured values.
    pub fn new(entries: HashMap<String, String>, data_parser: Option<DataParserRef>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::invalid_argument("settings require at least one entry"));
        }
        Ok(Self {
            entries,
            data_parser,
            resolver: None,
        })
    }

    /// Create settings from key/value pairs with the default parser
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(entries, None)
    }

    /// Resolve the data parser through `resolver` instead of the
    /// process-wide resolver
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn DependencyResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Case-sensitive key lookup
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Raw stored value.
    ///
    /// Fails with `InvalidArgument` when `name` is empty or not present.
    pub fn value(&self, name: &str) -> Result<&str> {
        if name.is_empty() {
            return Err(Error::invalid_argument("setting name must not be empty"));
        }
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::invalid_argument(format!("setting '{name}' not found")))
    }

    /// Convert the setting `name` into `T`.
    ///
    /// Missing or empty names fail with `InvalidArgument`, conversion
    /// failures with `DataParse`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let raw = self.value(name)?;
        de::from_setting(raw, self)
            .map_err(|e| e.into_error(format!("Failed to convert setting '{name}'")))
    }

    /// Like [`get`](Self::get), but an absent setting is `Ok(None)`
    pub fn try_get<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        if name.is_empty() || !self.contains(name) {
            return Ok(None);
        }
        self.get(name).map(Some)
    }

    /// Convert the setting `name` for a runtime type token.
    ///
    /// Interface tokens fail with `InvalidOperation`.
    pub fn get_typed(&self, name: &str, setting_type: &SettingType) -> Result<SettingValue> {
        self.value(name)?;
        match setting_type {
            SettingType::String => self.get(name).map(SettingValue::String),
            SettingType::Bool => self.get(name).map(SettingValue::Bool),
            SettingType::Integer => self.get(name).map(SettingValue::Integer),
            SettingType::Unsigned => self.get(name).map(SettingValue::Unsigned),
            SettingType::Float => self.get(name).map(SettingValue::Float),
            SettingType::Char => self.get(name).map(SettingValue::Char),
            SettingType::Object(object) => object.read(self, name).map(SettingValue::Object),
            SettingType::Interface(type_ref) => Err(Error::invalid_operation(format!(
                "setting '{name}' cannot be created as interface type {}",
                type_ref.short_name()
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for constructed settings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Explicitly configured parser, if any
    pub fn data_parser(&self) -> Option<&DataParserRef> {
        self.data_parser.as_ref()
    }

    /// Parser used for structured values
    pub fn parser(&self) -> Result<Box<dyn DataParser>> {
        let Some(parser) = &self.data_parser else {
            return Ok(Box::new(PipeDataParser));
        };
        match &self.resolver {
            Some(resolver) => parser.instantiate(resolver.as_ref()),
            None => parser.instantiate(dependency_resolver::current().as_ref()),
        }
    }

    pub(crate) fn parse_fields(&self, raw: &str) -> Result<DataFields> {
        self.parser()?
            .parse_fields(raw)
            .map_err(|e| e.wrap_data_parse("Error parsing data"))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("entries", &self.entries)
            .field("data_parser", &self.data_parser)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}
