//! Data parsers
//!
//! A [`DataParser`] splits a setting string into `(field, value)` pairs.
//! Binding those pairs onto a target type is shared by every parser and
//! goes through serde: declared fields of the target are matched against
//! the parsed names case-insensitively, unmatched source fields are
//! ignored.
//!
//! Target fields absent from the data keep their serde default when they
//! have one (`#[serde(default)]` on the field or the container) and get
//! their zero value otherwise.

mod pipe;

use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::ports::resolver::DependencyResolver;
use crate::settings::de::bind_fields;
use crate::value_objects::TypeRef;

pub use pipe::PipeDataParser;

/// Parsed `(field, value)` pairs in source order
pub type DataFields = Vec<(String, String)>;

/// Splits a string of data into named fields
pub trait DataParser: Send + Sync {
    fn parse_fields(&self, data: &str) -> Result<DataFields>;
}

/// Typed parsing over any [`DataParser`]
pub trait DataParserExt: DataParser {
    /// Parse `data` into `T`.
    ///
    /// Empty or blank data yields `T::default()` without consulting the
    /// parser. Any failure is reported as a single `DataParse` error.
    fn parse<T: DeserializeOwned + Default>(&self, data: &str) -> Result<T> {
        if data.trim().is_empty() {
            return Ok(T::default());
        }
        let fields = self
            .parse_fields(data)
            .map_err(|e| e.wrap_data_parse("Error parsing data"))?;
        bind_fields(&fields)
    }
}

impl<P: DataParser + ?Sized> DataParserExt for P {}

/// Named reference to a parser type, resolved through a
/// [`DependencyResolver`] when a setting needs it
#[derive(Clone)]
pub struct DataParserRef {
    name: String,
    type_ref: TypeRef,
    cast: fn(Box<dyn Any>) -> Option<Box<dyn DataParser>>,
}

impl DataParserRef {
    /// Reference to a parser the activator resolver can build
    pub fn of<P: DataParser + Default + 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: TypeRef::constructible::<P>(),
            cast: cast_parser::<P>,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    /// Build the parser through `resolver`
    pub fn instantiate(&self, resolver: &dyn DependencyResolver) -> Result<Box<dyn DataParser>> {
        resolver
            .resolve(&self.type_ref)
            .and_then(self.cast)
            .ok_or_else(|| {
                Error::data_parse(format!(
                    "Could not resolve data parser '{}' ({})",
                    self.name,
                    self.type_ref.short_name()
                ))
            })
    }
}

fn cast_parser<P: DataParser + 'static>(instance: Box<dyn Any>) -> Option<Box<dyn DataParser>> {
    instance
        .downcast::<P>()
        .ok()
        .map(|parser| parser as Box<dyn DataParser>)
}

impl fmt::Debug for DataParserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataParserRef")
            .field("name", &self.name)
            .field("type", &self.type_ref.name())
            .finish()
    }
}
