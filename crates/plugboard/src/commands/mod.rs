//! Subcommand implementations

mod inspect;
mod send;

pub use inspect::{providers, settings, types};
pub use send::send;

use serde_json::Value;

/// Prints command results as JSON or as text lines
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` in JSON mode, `lines` otherwise
    pub fn emit(&self, value: &Value, lines: &[String]) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            for line in lines {
                println!("{line}");
            }
        }
        Ok(())
    }
}
