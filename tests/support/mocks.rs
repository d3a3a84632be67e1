// tests/support/mocks.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use slugfield_core::application::ports::emitter::FieldEmitter;
use slugfield_core::application::ports::record_store::{
    RecordQuery, RecordStore, StoreError, StoreResult,
};
use slugfield_core::domain::record::{CollectionName, FieldName, RecordDocument, RecordId};

/* -------------------------------- FieldEmitter -------------------------------- */

#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Value(String),
    Validity { valid: bool, message: Option<String> },
    Blocking(bool),
}

/// Records every signal the field emits, in order.
#[derive(Default)]
pub struct CapturingEmitter {
    events: Mutex<Vec<Emission>>,
}

impl CapturingEmitter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Emission> {
        self.events.lock().unwrap().clone()
    }

    pub fn values(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Emission::Value(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn last_validity(&self) -> Option<(bool, Option<String>)> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                Emission::Validity { valid, message } => Some((valid, message)),
                _ => None,
            })
    }

    pub fn blocking_events(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Emission::Blocking(blocked) => Some(blocked),
                _ => None,
            })
            .collect()
    }
}

impl FieldEmitter for CapturingEmitter {
    fn emit_value(&self, value: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Emission::Value(value.to_string()));
    }

    fn emit_validity(&self, valid: bool, message: Option<&str>) {
        self.events.lock().unwrap().push(Emission::Validity {
            valid,
            message: message.map(str::to_string),
        });
    }

    fn emit_blocking(&self, blocked: bool) {
        self.events.lock().unwrap().push(Emission::Blocking(blocked));
    }
}

/* -------------------------------- RecordStore -------------------------------- */

/// Record store that is always down.
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn fetch(&self, _query: &RecordQuery) -> StoreResult<Vec<RecordDocument>> {
        Err(StoreError::Unavailable("record store offline".into()))
    }

    async fn fetch_one(
        &self,
        _collection: &CollectionName,
        _id: &RecordId,
        _fields: &[FieldName],
    ) -> StoreResult<Option<RecordDocument>> {
        Err(StoreError::Unavailable("record store offline".into()))
    }
}

/// Record store that denies every read.
pub struct DenyingRecordStore;

#[async_trait]
impl RecordStore for DenyingRecordStore {
    async fn fetch(&self, _query: &RecordQuery) -> StoreResult<Vec<RecordDocument>> {
        Err(StoreError::PermissionDenied("items read".into()))
    }

    async fn fetch_one(
        &self,
        _collection: &CollectionName,
        _id: &RecordId,
        _fields: &[FieldName],
    ) -> StoreResult<Option<RecordDocument>> {
        Err(StoreError::PermissionDenied("items read".into()))
    }
}

/// Delegating store that counts how often it is hit, to prove cache fast
/// paths and blank-input short circuits stay off the network.
pub struct CountingRecordStore {
    inner: Arc<dyn RecordStore>,
    calls: AtomicUsize,
}

impl CountingRecordStore {
    pub fn new(inner: Arc<dyn RecordStore>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for CountingRecordStore {
    async fn fetch(&self, query: &RecordQuery) -> StoreResult<Vec<RecordDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(query).await
    }

    async fn fetch_one(
        &self,
        collection: &CollectionName,
        id: &RecordId,
        fields: &[FieldName],
    ) -> StoreResult<Option<RecordDocument>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_one(collection, id, fields).await
    }
}
