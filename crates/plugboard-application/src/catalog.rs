//! Type catalog
//!
//! Named provider types and data parsers available to loaders. A catalog
//! starts from the compile-time registries and accepts manual additions,
//! which replace a registered entry with the same name.

use plugboard_domain::utils::eq_ignore_case;
use plugboard_domain::{DataParserRef, Error, ProviderType, Result};

use crate::ports::registry::{DATA_PARSERS, PROVIDER_TYPES};

/// A named provider type
#[derive(Debug, Clone)]
pub struct ProviderTypeInfo {
    pub name: String,
    pub group: String,
    pub description: String,
    pub provider_type: ProviderType,
}

/// A named data parser
#[derive(Debug, Clone)]
pub struct DataParserInfo {
    pub name: String,
    pub description: String,
    pub parser: DataParserRef,
}

/// Lookup table from names to provider types and data parsers
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    provider_types: Vec<ProviderTypeInfo>,
    data_parsers: Vec<DataParserInfo>,
}

impl TypeCatalog {
    /// Catalog of everything registered through the distributed slices
    pub fn discover() -> Self {
        let provider_types = PROVIDER_TYPES
            .iter()
            .map(|entry| ProviderTypeInfo {
                name: entry.name.to_owned(),
                group: entry.group.to_owned(),
                description: entry.description.to_owned(),
                provider_type: (entry.provider_type)(),
            })
            .collect();
        let data_parsers = DATA_PARSERS
            .iter()
            .map(|entry| DataParserInfo {
                name: entry.name.to_owned(),
                description: entry.description.to_owned(),
                parser: (entry.parser)(),
            })
            .collect();
        Self {
            provider_types,
            data_parsers,
        }
    }

    /// Catalog without any entries
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_provider_type(
        mut self,
        name: impl Into<String>,
        group: impl Into<String>,
        provider_type: ProviderType,
    ) -> Self {
        let info = ProviderTypeInfo {
            name: name.into(),
            group: group.into(),
            description: String::new(),
            provider_type,
        };
        self.provider_types.retain(|t| !eq_ignore_case(&t.name, &info.name));
        self.provider_types.push(info);
        self
    }

    #[must_use]
    pub fn with_data_parser(mut self, name: impl Into<String>, parser: DataParserRef) -> Self {
        let info = DataParserInfo {
            name: name.into(),
            description: String::new(),
            parser,
        };
        self.data_parsers.retain(|p| !eq_ignore_case(&p.name, &info.name));
        self.data_parsers.push(info);
        self
    }

    /// Provider type registered as `name`, ignoring case
    pub fn provider_type(&self, name: &str) -> Result<&ProviderTypeInfo> {
        self.provider_types
            .iter()
            .find(|t| eq_ignore_case(&t.name, name))
            .ok_or_else(|| {
                let available: Vec<&str> = self.provider_types.iter().map(|t| t.name.as_str()).collect();
                Error::configuration(format!(
                    "Unknown provider type '{name}'. Available provider types: {available:?}"
                ))
            })
    }

    /// Data parser registered as `name`, ignoring case
    pub fn data_parser(&self, name: &str) -> Result<&DataParserInfo> {
        self.data_parsers
            .iter()
            .find(|p| eq_ignore_case(&p.name, name))
            .ok_or_else(|| {
                let available: Vec<&str> = self.data_parsers.iter().map(|p| p.name.as_str()).collect();
                Error::configuration(format!(
                    "Unknown data parser '{name}'. Available data parsers: {available:?}"
                ))
            })
    }

    pub fn provider_types(&self) -> &[ProviderTypeInfo] {
        &self.provider_types
    }

    pub fn data_parsers(&self) -> &[DataParserInfo] {
        &self.data_parsers
    }
}
