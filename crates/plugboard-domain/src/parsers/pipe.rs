//! Pipe-delimited data parser
//!
//! Format: `key:value|key:value|...`. Each field is split on its first `:`
//! and whitespace around both halves is trimmed.

use super::{DataFields, DataParser};
use crate::constants::{KEY_VALUE_SEPARATOR, PIPE_FIELD_SEPARATOR};
use crate::error::{Error, Result};

/// Default parser for complex setting values
#[derive(Debug, Default, Clone, Copy)]
pub struct PipeDataParser;

impl DataParser for PipeDataParser {
    fn parse_fields(&self, data: &str) -> Result<DataFields> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        data.split(PIPE_FIELD_SEPARATOR)
            .map(|field| {
                let (key, value) = field.split_once(KEY_VALUE_SEPARATOR).ok_or_else(|| {
                    Error::data_parse(format!("Malformed field '{field}': expected key:value"))
                })?;
                Ok((key.trim().to_owned(), value.trim().to_owned()))
            })
            .collect()
    }
}
