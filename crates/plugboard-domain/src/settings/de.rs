//! Serde deserializers over raw setting strings and parsed fields

use std::cell::OnceCell;
use std::fmt;

use serde::de::value::{SeqDeserializer, StrDeserializer};
use serde::de::{self, DeserializeOwned, DeserializeSeed, IntoDeserializer, MapAccess, Visitor};
use serde::forward_to_deserialize_any;

use super::Settings;
use crate::error::{Error, Result};
use crate::parsers::DataFields;
use crate::utils::eq_ignore_case;

/// Failure while binding a string onto a target type
#[derive(Debug)]
pub(crate) enum DeError {
    Message(String),
    /// A declared field the data has no value for
    MissingField(&'static str),
    /// Parser failure, passed through unchanged
    Parser(Box<Error>),
}

impl fmt::Display for DeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::MissingField(field) => write!(f, "missing field `{field}`"),
            Self::Parser(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for DeError {}

impl de::Error for DeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}

impl DeError {
    /// Convert into the domain error, attaching `context` to binding failures
    pub(crate) fn into_error(self, context: impl Into<String>) -> Error {
        match self {
            Self::Parser(err) => *err,
            other => Error::data_parse_with_source(context, other),
        }
    }
}

/// Bind parsed fields onto `T`
pub(crate) fn bind_fields<T: DeserializeOwned>(fields: &DataFields) -> Result<T> {
    with_zero_fill(|zero_fill| T::deserialize(FieldsDeserializer { fields, zero_fill }))
        .map_err(|e| e.into_error("Error parsing data"))
}

/// Deserialize a single setting of `settings`
pub(crate) fn from_setting<T: DeserializeOwned>(raw: &str, settings: &Settings) -> Result<T, DeError> {
    let parsed = OnceCell::new();
    with_zero_fill(|zero_fill| {
        T::deserialize(ValueDeserializer {
            raw,
            top: Some(TopLevel {
                settings,
                parsed: &parsed,
                zero_fill,
            }),
        })
    })
}

/// Run `bind` until no declared field is reported missing.
///
/// Every field serde reports as missing is given its zero value on the next
/// attempt. Fields with a serde default never reach `missing_field`, so
/// their defaults are kept.
fn with_zero_fill<T>(
    mut bind: impl FnMut(&[&'static str]) -> Result<T, DeError>,
) -> Result<T, DeError> {
    let mut missing: Vec<&'static str> = Vec::new();
    loop {
        match bind(&missing) {
            Err(DeError::MissingField(field)) if !missing.contains(&field) => missing.push(field),
            other => return other,
        }
    }
}

/// Settings-level context of a top-level setting value
#[derive(Clone, Copy)]
struct TopLevel<'a> {
    settings: &'a Settings,
    /// Parser output, computed once across zero-fill attempts
    parsed: &'a OnceCell<DataFields>,
    zero_fill: &'a [&'static str],
}

/// One raw string value.
///
/// Scalars are parsed with `FromStr` after trimming; strings are passed
/// through untouched. Structs and maps are only supported at the top level
/// of a setting, where they are split by the settings' data parser. An empty
/// value binds to the zero value without calling the parser.
struct ValueDeserializer<'a> {
    raw: &'a str,
    top: Option<TopLevel<'a>>,
}

impl<'a> ValueDeserializer<'a> {
    fn field(raw: &'a str) -> Self {
        Self { raw, top: None }
    }

    fn fields(&self) -> Result<FieldsDeserializer<'a>, DeError> {
        let top = self.top.ok_or_else(|| {
            DeError::Message(format!(
                "nested value '{}' cannot be parsed into a structured type",
                self.raw
            ))
        })?;
        let fields = match top.parsed.get() {
            Some(fields) => fields,
            None => {
                let fields = if self.raw.trim().is_empty() {
                    DataFields::new()
                } else {
                    top.settings
                        .parse_fields(self.raw)
                        .map_err(|e| DeError::Parser(Box::new(e)))?
                };
                top.parsed.get_or_init(|| fields)
            }
        };
        Ok(FieldsDeserializer {
            fields,
            zero_fill: top.zero_fill,
        })
    }

    fn parse<T>(&self) -> Result<T, DeError>
    where
        T: std::str::FromStr,
        T::Err: fmt::Display,
    {
        self.raw
            .trim()
            .parse()
            .map_err(|e| DeError::Message(format!("invalid value '{}': {e}", self.raw)))
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
                visitor.$visit(self.parse()?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'_> {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.raw)
    }

    deserialize_parsed! {
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        match self.raw.trim() {
            v if v.eq_ignore_ascii_case("true") => visitor.visit_bool(true),
            v if v.eq_ignore_ascii_case("false") => visitor.visit_bool(false),
            _ => Err(DeError::Message(format!(
                "invalid value '{}': expected true or false",
                self.raw
            ))),
        }
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        let mut chars = self.raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => visitor.visit_char(c),
            _ => Err(DeError::Message(format!(
                "invalid value '{}': expected a single character",
                self.raw
            ))),
        }
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.raw)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_str(self.raw)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        if self.raw.trim().is_empty() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_enum(StrDeserializer::<DeError>::new(self.raw.trim()))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.fields()?.deserialize_struct(name, fields, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        self.fields()?.deserialize_map(visitor)
    }

    forward_to_deserialize_any! {
        bytes byte_buf seq tuple tuple_struct identifier ignored_any
    }
}

/// Parsed fields viewed as a struct or a map
struct FieldsDeserializer<'a> {
    fields: &'a DataFields,
    /// Declared fields bound to their zero value when the data lacks them
    zero_fill: &'a [&'static str],
}

impl<'de> de::Deserializer<'de> for FieldsDeserializer<'_> {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        self.deserialize_map(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_map(FieldMap::new(
            self.fields
                .iter()
                .map(|(k, v)| (k.as_str(), Entry::Raw(v.as_str()))),
        ))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        declared: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        let entries: Vec<(&str, Entry<'_>)> = declared
            .iter()
            .filter_map(|&field| {
                match self.fields.iter().find(|(key, _)| eq_ignore_case(key, field)) {
                    Some((_, value)) => Some((field, Entry::Raw(value.as_str()))),
                    None if self.zero_fill.contains(&field) => Some((field, Entry::Zero)),
                    None => None,
                }
            })
            .collect();
        visitor.visit_map(FieldMap::new(entries.into_iter()))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct enum identifier ignored_any
    }
}

#[derive(Clone, Copy)]
enum Entry<'a> {
    Raw(&'a str),
    Zero,
}

struct FieldMap<'a, I> {
    iter: I,
    value: Option<Entry<'a>>,
}

impl<'a, I> FieldMap<'a, I>
where
    I: Iterator<Item = (&'a str, Entry<'a>)>,
{
    fn new(iter: I) -> Self {
        Self { iter, value: None }
    }
}

impl<'de, 'a, I> MapAccess<'de> for FieldMap<'a, I>
where
    I: Iterator<Item = (&'a str, Entry<'a>)>,
{
    type Error = DeError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, DeError> {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(StrDeserializer::<DeError>::new(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, DeError> {
        let entry = self
            .value
            .take()
            .ok_or_else(|| DeError::Message("value requested before its key".to_owned()))?;
        match entry {
            Entry::Raw(raw) => seed.deserialize(ValueDeserializer::field(raw)),
            Entry::Zero => seed.deserialize(ZeroDeserializer),
        }
    }
}

/// Produces the zero value of whatever type asks for it
#[derive(Clone, Copy)]
struct ZeroDeserializer;

macro_rules! deserialize_zero {
    ($($method:ident => $visit:ident($zero:expr),)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
                visitor.$visit($zero)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for ZeroDeserializer {
    type Error = DeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    deserialize_zero! {
        deserialize_bool => visit_bool(false),
        deserialize_i8 => visit_i8(0),
        deserialize_i16 => visit_i16(0),
        deserialize_i32 => visit_i32(0),
        deserialize_i64 => visit_i64(0),
        deserialize_i128 => visit_i128(0),
        deserialize_u8 => visit_u8(0),
        deserialize_u16 => visit_u16(0),
        deserialize_u32 => visit_u32(0),
        deserialize_u64 => visit_u64(0),
        deserialize_u128 => visit_u128(0),
        deserialize_f32 => visit_f32(0.0),
        deserialize_f64 => visit_f64(0.0),
        deserialize_char => visit_char('\0'),
        deserialize_str => visit_str(""),
        deserialize_string => visit_str(""),
        deserialize_identifier => visit_str(""),
        deserialize_bytes => visit_bytes(&[]),
        deserialize_byte_buf => visit_bytes(&[]),
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_none()
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_seq(SeqDeserializer::new(std::iter::empty::<Self>()))
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_seq(SeqDeserializer::new(std::iter::repeat_n(self, len)))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, DeError> {
        self.deserialize_tuple(len, visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_map(FieldMap::new(std::iter::empty::<(&str, Entry<'_>)>()))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        visitor.visit_map(FieldMap::new(fields.iter().map(|&field| (field, Entry::Zero))))
    }

    /// The first variant, which must be a unit variant
    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, DeError> {
        let first = variants
            .first()
            .ok_or_else(|| DeError::Message(format!("enum {name} has no variants")))?;
        visitor.visit_enum(StrDeserializer::<DeError>::new(first))
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, DeError> {
        visitor.visit_unit()
    }
}

impl IntoDeserializer<'_, DeError> for ZeroDeserializer {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}
