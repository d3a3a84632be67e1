use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::application::ports::record_store::{
    FieldFilter, FilterOp, RecordQuery, RecordStore, StoreError, StoreResult,
};
use crate::domain::record::{CollectionName, FieldName, RecordDocument, RecordId};

/// Record store adapter for a Directus-style items API:
/// `GET {base}/items/{collection}` with a JSON `filter` parameter, and
/// `GET {base}/items/{collection}/{id}` for single records. Responses
/// arrive wrapped in a `data` envelope.
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ItemsEnvelope {
    data: Vec<RecordDocument>,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    data: RecordDocument,
}

impl HttpRecordStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn items_url(&self, collection: &CollectionName) -> String {
        format!("{}/items/{}", self.base_url, collection.as_str())
    }

    fn item_url(&self, collection: &CollectionName, id: &RecordId) -> String {
        format!("{}/items/{}/{}", self.base_url, collection.as_str(), id)
    }

    async fn send(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> StoreResult<reqwest::Response> {
        self.client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

fn check_status(response: reqwest::Response, url: &str) -> StoreResult<reqwest::Response> {
    if response.status() == StatusCode::FORBIDDEN {
        return Err(StoreError::PermissionDenied(url.to_string()));
    }
    response
        .error_for_status()
        .map_err(|err| StoreError::Unavailable(err.to_string()))
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn fetch(&self, query: &RecordQuery) -> StoreResult<Vec<RecordDocument>> {
        let url = self.items_url(&query.collection);
        let response = self.send(&url, &query_params(query)).await?;
        let envelope: ItemsEnvelope = check_status(response, &url)?
            .json()
            .await
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        Ok(envelope.data)
    }

    async fn fetch_one(
        &self,
        collection: &CollectionName,
        id: &RecordId,
        fields: &[FieldName],
    ) -> StoreResult<Option<RecordDocument>> {
        let url = self.item_url(collection, id);
        let mut params = Vec::new();
        if let Some(fields) = fields_param(fields) {
            params.push(("fields".to_string(), fields));
        }

        let response = self.send(&url, &params).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: ItemEnvelope = check_status(response, &url)?
            .json()
            .await
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        Ok(Some(envelope.data))
    }
}

/// JSON filter document in the API's operator shape, e.g.
/// `{"slug":{"_eq":"about"},"id":{"_neq":7}}`. Repeated filters on one
/// field merge under that field's operator map.
fn filter_param(filters: &[FieldFilter]) -> Option<String> {
    if filters.is_empty() {
        return None;
    }
    let mut document = Map::new();
    for filter in filters {
        let operator = match filter.op {
            FilterOp::Eq => "_eq",
            FilterOp::Neq => "_neq",
        };
        let entry = document
            .entry(filter.field.as_str().to_string())
            .or_insert_with(|| json!({}));
        if let Value::Object(ops) = entry {
            ops.insert(operator.to_string(), filter.value.clone());
        }
    }
    Some(Value::Object(document).to_string())
}

fn fields_param(fields: &[FieldName]) -> Option<String> {
    if fields.is_empty() {
        return None;
    }
    Some(
        fields
            .iter()
            .map(FieldName::as_str)
            .collect::<Vec<_>>()
            .join(","),
    )
}

fn query_params(query: &RecordQuery) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(filter) = filter_param(&query.filters) {
        params.push(("filter".to_string(), filter));
    }
    if let Some(term) = &query.search {
        params.push(("search".to_string(), term.clone()));
    }
    if let Some(fields) = fields_param(&query.fields) {
        params.push(("fields".to_string(), fields));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}
