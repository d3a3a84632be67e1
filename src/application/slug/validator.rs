use std::sync::Arc;

use crate::application::ports::record_store::{
    FieldFilter, RecordQuery, RecordStore, StoreResult,
};
use crate::application::slug::context::FieldContext;
use crate::config::SlugFieldOptions;
use crate::domain::record::FieldName;
use crate::domain::slug::verdict::{SlugVerdict, SlugViolation};
use crate::domain::slug::pattern;

/// The validation pipeline: emptiness, format, then uniqueness against
/// the record store, short-circuiting at the first failing stage.
pub struct SlugValidator {
    store: Arc<dyn RecordStore>,
}

impl SlugValidator {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn validate(
        &self,
        value: &str,
        options: &SlugFieldOptions,
        context: &FieldContext,
    ) -> SlugVerdict {
        if value.is_empty() {
            return if options.required {
                SlugVerdict::Invalid(SlugViolation::Empty)
            } else {
                SlugVerdict::Valid
            };
        }

        if !pattern::matches(value, options.separator) {
            return SlugVerdict::Invalid(SlugViolation::Format);
        }

        if self.is_taken(value, context).await {
            return SlugVerdict::Invalid(SlugViolation::Duplicate);
        }

        SlugVerdict::Valid
    }

    /// Uniqueness lookup. A failing lookup must not block data entry, so
    /// store errors are logged and the value is assumed unique; the store
    /// itself still enforces uniqueness on write.
    async fn is_taken(&self, slug: &str, context: &FieldContext) -> bool {
        match self.find_collision(slug, context).await {
            Ok(taken) => taken,
            Err(err) => {
                tracing::warn!(error = %err, slug, "uniqueness lookup failed, assuming unique");
                false
            }
        }
    }

    async fn find_collision(&self, slug: &str, context: &FieldContext) -> StoreResult<bool> {
        let collection = &context.collection;
        let mut query = RecordQuery::new(collection.clone())
            .filter(FieldFilter::eq(context.field.clone(), slug))
            .limit(1);

        if collection.is_translations() {
            // Translations of different parents must not share a slug;
            // translations of the same parent may. Scope the lookup to
            // rows pointing at other parents.
            let Some(record_id) = &context.record_id else {
                return Ok(false);
            };
            let Some(parent_key) = collection.parent_key_field() else {
                return Ok(false);
            };

            let current = self
                .store
                .fetch_one(collection, record_id, &[parent_key.clone()])
                .await?;
            let parent = current.and_then(|doc| doc.field(parent_key.as_str()).cloned());
            let Some(parent) = parent.filter(|value| !value.is_null()) else {
                return Ok(false);
            };

            query = query
                .filter(FieldFilter::neq(parent_key, parent))
                .filter(FieldFilter::neq(
                    FieldName::primary_key(),
                    record_id.as_value(),
                ));
        } else if let Some(record_id) = &context.record_id {
            query = query.filter(FieldFilter::neq(
                FieldName::primary_key(),
                record_id.as_value(),
            ));
        }

        let collisions = self.store.fetch(&query).await?;
        Ok(!collisions.is_empty())
    }
}
