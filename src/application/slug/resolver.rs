use std::sync::Arc;

use crate::application::ports::record_cache::RecordCache;
use crate::application::ports::record_store::{
    FieldFilter, RecordQuery, RecordStore, StoreError,
};
use crate::application::slug::context::FieldContext;
use crate::domain::record::{CollectionName, FieldName, RecordDocument, RecordId, SourceLocator};

/// Resolves the slug's source text. A missing source is never an error
/// surfaced to the user: resolution failures degrade to "absent" and the
/// slug value is left alone.
pub struct SourceResolver {
    store: Arc<dyn RecordStore>,
    cache: Arc<dyn RecordCache>,
}

impl SourceResolver {
    pub fn new(store: Arc<dyn RecordStore>, cache: Arc<dyn RecordCache>) -> Self {
        Self { store, cache }
    }

    pub async fn resolve(
        &self,
        locator: &SourceLocator,
        source_collection: Option<&CollectionName>,
        context: &FieldContext,
    ) -> Option<String> {
        let record_id = context.record_id.as_ref()?;
        match locator {
            SourceLocator::Local(field) => {
                self.resolve_local(field, source_collection, context, record_id)
                    .await
            }
            SourceLocator::Related { collection, field } => {
                self.resolve_related(collection, field, context, record_id)
                    .await
            }
        }
    }

    async fn resolve_local(
        &self,
        field: &FieldName,
        source_collection: Option<&CollectionName>,
        context: &FieldContext,
        record_id: &RecordId,
    ) -> Option<String> {
        // Fast path: the host usually has the edited record loaded already.
        if let Some(doc) = self.cache.get_item(&context.collection, record_id) {
            if doc.has_field(field.as_str()) {
                return doc.text_field(field.as_str());
            }
        }
        tracing::debug!(field = %field, "source field not in record cache, querying record store");

        let target = source_collection.unwrap_or(&context.collection);
        let lookup_id = if target.is_translations() {
            self.find_translation_id(target, record_id).await?
        } else {
            record_id.clone()
        };

        match self.store.fetch_one(target, &lookup_id, &[field.clone()]).await {
            Ok(Some(doc)) => doc.text_field(field.as_str()),
            Ok(None) => None,
            Err(err) => {
                log_store_error(&err, target, field);
                None
            }
        }
    }

    /// Translations collections are addressed by parent id: find the
    /// translation row pointing at the edited record before reading it.
    async fn find_translation_id(
        &self,
        collection: &CollectionName,
        record_id: &RecordId,
    ) -> Option<RecordId> {
        let parent_key = collection.parent_key_field()?;
        let query = RecordQuery::new(collection.clone())
            .filter(FieldFilter::eq(parent_key, record_id.as_value()))
            .limit(1);

        match self.store.fetch(&query).await {
            Ok(rows) => {
                let id = rows.first().and_then(RecordDocument::id);
                if id.is_none() {
                    tracing::warn!(
                        collection = %collection,
                        record = %record_id,
                        "no translation found for record"
                    );
                }
                id
            }
            Err(err) => {
                log_store_error(&err, collection, &collection.foreign_key_field());
                None
            }
        }
    }

    async fn resolve_related(
        &self,
        collection: &CollectionName,
        field: &FieldName,
        context: &FieldContext,
        record_id: &RecordId,
    ) -> Option<String> {
        let relation_key = context.collection.foreign_key_field();
        let query = RecordQuery::new(collection.clone())
            .filter(FieldFilter::eq(relation_key, record_id.as_value()))
            .field(field.clone())
            .limit(1);

        match self.store.fetch(&query).await {
            Ok(rows) => rows.first().and_then(|doc| doc.text_field(field.as_str())),
            Err(err) => {
                log_store_error(&err, collection, field);
                None
            }
        }
    }
}

fn log_store_error(err: &StoreError, collection: &CollectionName, field: &FieldName) {
    match err {
        StoreError::PermissionDenied(_) => {
            tracing::warn!(
                collection = %collection,
                field = %field,
                "permission denied reading source field"
            );
        }
        other => {
            tracing::error!(
                error = %other,
                collection = %collection,
                field = %field,
                "source lookup failed"
            );
        }
    }
}
