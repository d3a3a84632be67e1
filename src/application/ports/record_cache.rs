use crate::domain::record::{CollectionName, RecordDocument, RecordId};

/// Best-effort, synchronous view of records the host has already loaded.
/// A miss is not an error; callers fall back to the record store.
pub trait RecordCache: Send + Sync {
    fn get_item(&self, collection: &CollectionName, id: &RecordId) -> Option<RecordDocument>;
}
