use std::sync::Arc;

mod support;

use slugfield_core::application::error::ApplicationError;
use slugfield_core::application::search::ItemSearch;
use slugfield_core::config::SearchFieldOptions;
use slugfield_core::domain::record::{RecordDocument, RecordId};
use slugfield_core::infrastructure::InMemoryRecordStore;

use support::{CountingRecordStore, FailingRecordStore, collection};

fn author_options() -> SearchFieldOptions {
    SearchFieldOptions {
        field_collection: Some("authors".into()),
        ..SearchFieldOptions::default()
    }
}

fn author(id: i64, name: &str) -> RecordDocument {
    RecordDocument::new().with_field("id", id).with_field("name", name)
}

#[tokio::test]
async fn matching_items_come_back_in_store_order() {
    let store = Arc::new(InMemoryRecordStore::new());
    store.insert(&collection("authors"), author(1, "Kat Reeves"));
    store.insert(&collection("authors"), author(2, "Sam Katz"));
    store.insert(&collection("authors"), author(3, "Lee Moss"));

    let search = ItemSearch::new(store);
    let hits = search.search(&author_options(), "kat").await.unwrap();

    let ids: Vec<_> = hits.iter().filter_map(RecordDocument::id).collect();
    assert_eq!(ids, [RecordId::Int(1), RecordId::Int(2)]);
}

#[tokio::test]
async fn results_are_capped_by_the_configured_limit() {
    let store = Arc::new(InMemoryRecordStore::new());
    for id in 0..20 {
        store.insert(&collection("authors"), author(id, "Kat"));
    }

    let options = SearchFieldOptions {
        limit: 3,
        ..author_options()
    };
    let search = ItemSearch::new(store);
    let hits = search.search(&options, "kat").await.unwrap();
    assert_eq!(hits.len(), 3);
}

#[tokio::test]
async fn blank_terms_short_circuit_without_a_store_call() {
    let store = CountingRecordStore::new(Arc::new(InMemoryRecordStore::new()));
    let search = ItemSearch::new(store.clone());

    let hits = search.search(&author_options(), "   ").await.unwrap();
    assert!(hits.is_empty());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn unconfigured_collection_is_a_validation_error() {
    let search = ItemSearch::new(Arc::new(InMemoryRecordStore::new()));
    let err = search
        .search(&SearchFieldOptions::default(), "kat")
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn store_failures_surface_to_the_caller() {
    let search = ItemSearch::new(Arc::new(FailingRecordStore));
    let err = search.search(&author_options(), "kat").await.unwrap_err();
    assert!(matches!(err, ApplicationError::Store(_)));
}
