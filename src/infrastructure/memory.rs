use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::application::ports::record_cache::RecordCache;
use crate::application::ports::record_store::{
    FilterOp, RecordQuery, RecordStore, StoreResult,
};
use crate::domain::record::{CollectionName, FieldName, RecordDocument, RecordId};

/// In-memory record store: the reference adapter for embedding the engine
/// without a backend and the substrate of the integration tests. Applies
/// the same filter semantics the HTTP adapter delegates to the server.
#[derive(Default)]
pub struct InMemoryRecordStore {
    collections: Mutex<HashMap<String, Vec<RecordDocument>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, collection: &CollectionName, document: RecordDocument) {
        self.lock()
            .entry(collection.as_str().to_string())
            .or_default()
            .push(document);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<RecordDocument>>> {
        match self.collections.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch(&self, query: &RecordQuery) -> StoreResult<Vec<RecordDocument>> {
        let collections = self.lock();
        let rows = collections
            .get(query.collection.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut matches: Vec<RecordDocument> = rows
            .iter()
            .filter(|doc| matches_filters(doc, query))
            .map(|doc| doc.project(&field_names(&query.fields)))
            .collect();

        if let Some(limit) = query.limit {
            matches.truncate(limit as usize);
        }
        Ok(matches)
    }

    async fn fetch_one(
        &self,
        collection: &CollectionName,
        id: &RecordId,
        fields: &[FieldName],
    ) -> StoreResult<Option<RecordDocument>> {
        let collections = self.lock();
        let rows = collections
            .get(collection.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(rows
            .iter()
            .find(|doc| doc.id().as_ref() == Some(id))
            .map(|doc| doc.project(&field_names(fields))))
    }
}

fn field_names(fields: &[FieldName]) -> Vec<&str> {
    fields.iter().map(FieldName::as_str).collect()
}

fn matches_filters(doc: &RecordDocument, query: &RecordQuery) -> bool {
    let filters_pass = query.filters.iter().all(|filter| {
        let field_value = doc.field(filter.field.as_str());
        match filter.op {
            FilterOp::Eq => field_value == Some(&filter.value),
            FilterOp::Neq => field_value != Some(&filter.value),
        }
    });
    if !filters_pass {
        return false;
    }

    query.search.as_deref().is_none_or(|term| {
        let needle = term.to_lowercase();
        doc.fields().any(|(_, value)| {
            value
                .as_str()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    })
}

/// In-memory record cache keyed by collection and primary key.
#[derive(Default)]
pub struct InMemoryRecordCache {
    items: Mutex<HashMap<(String, String), RecordDocument>>,
}

impl InMemoryRecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, collection: &CollectionName, id: &RecordId, document: RecordDocument) {
        let key = (collection.as_str().to_string(), id.to_string());
        match self.items.lock() {
            Ok(mut guard) => {
                guard.insert(key, document);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(key, document);
            }
        }
    }
}

impl RecordCache for InMemoryRecordCache {
    fn get_item(&self, collection: &CollectionName, id: &RecordId) -> Option<RecordDocument> {
        let key = (collection.as_str().to_string(), id.to_string());
        match self.items.lock() {
            Ok(guard) => guard.get(&key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(&key).cloned(),
        }
    }
}
