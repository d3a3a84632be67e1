use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Collections holding localized copies of records follow the
/// `<base>_translations` naming convention of the host CMS.
const TRANSLATIONS_SUFFIX: &str = "_translations";

/// Name of the primary key field every record document carries.
pub const PRIMARY_KEY_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "collection name cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_translations(&self) -> bool {
        self.0.ends_with(TRANSLATIONS_SUFFIX)
    }

    /// The base collection a translations collection localizes,
    /// e.g. `pages` for `pages_translations`.
    pub fn base_collection(&self) -> Option<Self> {
        self.0
            .strip_suffix(TRANSLATIONS_SUFFIX)
            .filter(|base| !base.is_empty())
            .map(|base| Self(base.to_string()))
    }

    /// The foreign key field linking a translation row to its parent
    /// record, e.g. `pages_id` for `pages_translations`.
    pub fn parent_key_field(&self) -> Option<FieldName> {
        self.base_collection().map(|base| base.foreign_key_field())
    }

    /// The conventional foreign key field rows in other collections use
    /// to point at this one, e.g. `pages_id` for `pages`.
    pub fn foreign_key_field(&self) -> FieldName {
        FieldName(format!("{}_id", self.0))
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CollectionName> for String {
    fn from(value: CollectionName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("field name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn primary_key() -> Self {
        Self(PRIMARY_KEY_FIELD.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0
    }
}

/// Primary key of a record. The host stores either integer or string keys
/// depending on the collection schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    pub fn as_value(&self) -> Value {
        match self {
            Self::Int(id) => Value::from(*id),
            Self::Text(id) => Value::from(id.clone()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Where a slug's source text comes from: a field on the edited record's
/// own collection, or a field one hop away on a related collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Local(FieldName),
    Related {
        collection: CollectionName,
        field: FieldName,
    },
}

impl SourceLocator {
    /// Parses a dotted locator path: `field_name` or
    /// `related_collection.field_name`. Deeper paths are rejected.
    pub fn parse(path: &str) -> DomainResult<Self> {
        let segments: Vec<&str> = path.split('.').collect();
        match segments.as_slice() {
            [field] => Ok(Self::Local(FieldName::new(*field)?)),
            [collection, field] => Ok(Self::Related {
                collection: CollectionName::new(*collection)?,
                field: FieldName::new(*field)?,
            }),
            _ => Err(DomainError::Validation(format!(
                "source locator {path:?} has more than two segments"
            ))),
        }
    }

    pub fn field(&self) -> &FieldName {
        match self {
            Self::Local(field) | Self::Related { field, .. } => field,
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(field) => f.write_str(field.as_str()),
            Self::Related { collection, field } => {
                write!(f, "{}.{}", collection.as_str(), field.as_str())
            }
        }
    }
}
