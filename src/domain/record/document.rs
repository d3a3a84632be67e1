use crate::domain::record::value_objects::{PRIMARY_KEY_FIELD, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A schemaless record as returned by the host's record store: a JSON
/// object keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDocument(Map<String, Value>);

impl RecordDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Raw field value; `None` means the field is absent from the document
    /// (as opposed to present and null).
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Field value rendered as text the way a slug source expects it:
    /// strings pass through, numbers and booleans are stringified, null
    /// and composite values count as absent.
    pub fn text_field(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        match self.field(PRIMARY_KEY_FIELD)? {
            Value::Number(number) => number.as_i64().map(RecordId::Int),
            Value::String(text) => Some(RecordId::Text(text.clone())),
            _ => None,
        }
    }

    /// Copy of the document restricted to the given fields. An empty field
    /// list means no projection.
    pub fn project(&self, fields: &[impl AsRef<str>]) -> Self {
        if fields.is_empty() {
            return self.clone();
        }
        let mut projected = Map::new();
        for field in fields {
            if let Some(value) = self.0.get(field.as_ref()) {
                projected.insert(field.as_ref().to_string(), value.clone());
            }
        }
        Self(projected)
    }
}

impl From<Map<String, Value>> for RecordDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
