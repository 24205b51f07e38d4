//! Read-only inspection commands

use std::sync::Arc;

use anyhow::{Result, bail};
use plugboard::domain::Settings;
use plugboard::domain::utils::eq_ignore_case;
use plugboard::infrastructure::AppConfig;
use plugboard::{application::TypeCatalog, load_manager};
use serde_json::{Value, json};

use super::Output;

pub fn types(output: &Output) -> Result<()> {
    let catalog = TypeCatalog::discover();

    let provider_types: Vec<Value> = catalog
        .provider_types()
        .iter()
        .map(|info| {
            json!({
                "name": info.name,
                "group": info.group,
                "description": info.description,
                "type": info.provider_type.type_name(),
                "capabilities": info.provider_type.capabilities(),
            })
        })
        .collect();
    let data_parsers: Vec<Value> = catalog
        .data_parsers()
        .iter()
        .map(|info| json!({ "name": info.name, "description": info.description }))
        .collect();

    let mut lines = vec!["Provider types:".to_owned()];
    lines.extend(catalog.provider_types().iter().map(|info| {
        format!(
            "  {:<16} {:<10} {}",
            info.name, info.group, info.description
        )
    }));
    lines.push("Data parsers:".to_owned());
    lines.extend(
        catalog
            .data_parsers()
            .iter()
            .map(|info| format!("  {:<16} {}", info.name, info.description)),
    );

    output.emit(
        &json!({ "provider_types": provider_types, "data_parsers": data_parsers }),
        &lines,
    )
}

pub fn providers(output: &Output, config: &AppConfig, group: Option<&str>) -> Result<()> {
    let manager = load_manager(config)?;
    let descriptors: Vec<_> = manager
        .providers()
        .descriptors()
        .iter()
        .filter(|d| group.is_none_or(|g| eq_ignore_case(d.group(), g)))
        .collect();

    let value: Vec<Value> = descriptors
        .iter()
        .map(|d| {
            json!({
                "name": d.name(),
                "group": d.group(),
                "type": d.provider_type().name(),
                "enabled": d.enabled(),
                "settings": d.settings().map_or(0, |s| s.len()),
            })
        })
        .collect();
    let lines: Vec<String> = descriptors
        .iter()
        .map(|d| {
            format!(
                "{:<16} {:<10} {:<20} {}",
                d.name(),
                d.group(),
                d.provider_type().name(),
                if d.enabled() { "enabled" } else { "disabled" }
            )
        })
        .collect();

    output.emit(&Value::Array(value), &lines)
}

pub fn settings(output: &Output, config: &AppConfig, provider: Option<&str>) -> Result<()> {
    let manager = load_manager(config)?;
    let settings: Option<&Arc<Settings>> = match provider {
        None => manager.settings(),
        Some(name) => {
            let Some(descriptor) = manager
                .providers()
                .descriptors()
                .iter()
                .find(|d| eq_ignore_case(d.name(), name))
            else {
                bail!("No provider named '{name}'");
            };
            descriptor.settings()
        }
    };

    let mut entries: Vec<(&str, &str)> = settings.map(|s| s.iter().collect()).unwrap_or_default();
    entries.sort_unstable();

    let value: serde_json::Map<String, Value> = entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), Value::String((*v).to_owned())))
        .collect();
    let lines: Vec<String> = entries.iter().map(|(k, v)| format!("{k} = {v}")).collect();

    output.emit(&Value::Object(value), &lines)
}
