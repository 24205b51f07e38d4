//! Data parser registry
//!
//! Settings sections name their parser (`data_parser = "pipe"`); the name is
//! resolved against this slice. The pipe-delimited parser is always
//! registered.

use plugboard_domain::constants::DEFAULT_DATA_PARSER;
use plugboard_domain::{DataParserRef, PipeDataParser};

/// Registry entry for a data parser
pub struct DataParserEntry {
    /// Unique parser name (e.g., "pipe")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the parser reference stored in settings
    pub parser: fn() -> DataParserRef,
}

#[linkme::distributed_slice]
pub static DATA_PARSERS: [DataParserEntry] = [..];

#[linkme::distributed_slice(DATA_PARSERS)]
static PIPE_DATA_PARSER: DataParserEntry = DataParserEntry {
    name: DEFAULT_DATA_PARSER,
    description: "Pipe-delimited key:value fields (default)",
    parser: || DataParserRef::of::<PipeDataParser>(DEFAULT_DATA_PARSER),
};
