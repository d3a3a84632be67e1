use crate::domain::record::{CollectionName, FieldName, RecordDocument, RecordId};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the host's record store. Permission denials are kept
/// distinct because resolution and validation degrade differently on them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed record store response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Neq,
}

/// A single field comparison; filters on a query are ANDed together.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: FieldName,
    pub op: FilterOp,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: FieldName, value: impl Into<Value>) -> Self {
        Self {
            field,
            op: FilterOp::Eq,
            value: value.into(),
        }
    }

    pub fn neq(field: FieldName, value: impl Into<Value>) -> Self {
        Self {
            field,
            op: FilterOp::Neq,
            value: value.into(),
        }
    }
}

/// Read-only query against one collection: equality filters, an optional
/// full-text search term, an optional field projection, and a row limit.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery {
    pub collection: CollectionName,
    pub filters: Vec<FieldFilter>,
    pub search: Option<String>,
    pub fields: Vec<FieldName>,
    pub limit: Option<u32>,
}

impl RecordQuery {
    pub fn new(collection: CollectionName) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            search: None,
            fields: Vec::new(),
            limit: None,
        }
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn field(mut self, field: FieldName) -> Self {
        self.fields.push(field);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The host's record store. Read-only from this crate's perspective:
/// uniqueness checks and source resolution only ever query.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch(&self, query: &RecordQuery) -> StoreResult<Vec<RecordDocument>>;

    async fn fetch_one(
        &self,
        collection: &CollectionName,
        id: &RecordId,
        fields: &[FieldName],
    ) -> StoreResult<Option<RecordDocument>>;
}
