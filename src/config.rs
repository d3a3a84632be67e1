// src/config.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::{CollectionName, SourceLocator};
use crate::domain::slug::{Separator, SlugViolation};
use serde::Deserialize;

/// Per-field settings for the slug interface, supplied by the host's
/// field configuration and immutable from the engine's perspective.
/// Field names mirror the host-side option keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlugFieldOptions {
    pub select_collection: Option<String>,
    pub select_field: Option<String>,
    pub auto: bool,
    pub required: bool,
    pub separator: Separator,
    pub lowercase: bool,
    pub placeholder: String,
    pub custom_empty_message: Option<String>,
    pub custom_format_message: Option<String>,
    pub custom_unique_message: Option<String>,
}

impl Default for SlugFieldOptions {
    fn default() -> Self {
        Self {
            select_collection: None,
            select_field: None,
            auto: true,
            required: true,
            separator: Separator::Hyphen,
            lowercase: true,
            placeholder: "Enter a slug...".to_string(),
            custom_empty_message: None,
            custom_format_message: None,
            custom_unique_message: None,
        }
    }
}

impl SlugFieldOptions {
    /// The configured source locator. The source field wins over the bare
    /// source collection when both are set.
    pub fn source_locator(&self) -> DomainResult<Option<SourceLocator>> {
        self.select_field
            .as_deref()
            .or(self.select_collection.as_deref())
            .filter(|path| !path.is_empty())
            .map(SourceLocator::parse)
            .transpose()
    }

    pub fn source_collection(&self) -> DomainResult<Option<CollectionName>> {
        self.select_collection
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(CollectionName::new)
            .transpose()
    }

    /// Message shown for a violation: the per-field override when the
    /// host configured one, otherwise the built-in default.
    pub fn violation_message(&self, violation: SlugViolation) -> &str {
        let custom = match violation {
            SlugViolation::Empty => &self.custom_empty_message,
            SlugViolation::Format => &self.custom_format_message,
            SlugViolation::Duplicate => &self.custom_unique_message,
        };
        custom.as_deref().unwrap_or(violation.default_message())
    }
}

/// Settings for the collection-item search interface.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchFieldOptions {
    pub placeholder: String,
    pub field_collection: Option<String>,
    pub limit: u32,
}

impl Default for SearchFieldOptions {
    fn default() -> Self {
        Self {
            placeholder: "Search for an item...".to_string(),
            field_collection: None,
            limit: 10,
        }
    }
}

impl SearchFieldOptions {
    pub fn collection(&self) -> DomainResult<Option<CollectionName>> {
        self.field_collection
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(CollectionName::new)
            .transpose()
    }
}
