//! Domain constants

/// Separator between fields of pipe-delimited data
pub const PIPE_FIELD_SEPARATOR: char = '|';

/// Separator between a field name and its value
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Registered name of the default data parser
pub const DEFAULT_DATA_PARSER: &str = "pipe";
