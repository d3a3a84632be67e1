use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::record_store::{RecordQuery, RecordStore};
use crate::config::SearchFieldOptions;
use crate::domain::record::RecordDocument;

/// Query backend for the collection-item autocomplete field: a full-text
/// search over the configured collection, capped by the configured limit.
pub struct ItemSearch {
    store: Arc<dyn RecordStore>,
}

impl ItemSearch {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Matching records for a typed search term. A blank term yields no
    /// suggestions without touching the store.
    pub async fn search(
        &self,
        options: &SearchFieldOptions,
        term: &str,
    ) -> ApplicationResult<Vec<RecordDocument>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let collection = options
            .collection()?
            .ok_or_else(|| ApplicationError::validation("search collection is not configured"))?;

        let query = RecordQuery::new(collection)
            .search(term)
            .limit(options.limit);
        Ok(self.store.fetch(&query).await?)
    }
}
