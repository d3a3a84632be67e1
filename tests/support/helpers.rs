// tests/support/helpers.rs
use slugfield_core::application::slug::FieldContext;
use slugfield_core::config::SlugFieldOptions;
use slugfield_core::domain::record::{CollectionName, FieldName, RecordDocument, RecordId};

/// Install a subscriber when RUST_LOG asks for output; repeated calls are
/// fine across test binaries.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn collection(name: &str) -> CollectionName {
    CollectionName::new(name).unwrap()
}

pub fn field(name: &str) -> FieldName {
    FieldName::new(name).unwrap()
}

/// Context for a `slug` field on the `pages` collection.
pub fn pages_context(record_id: i64) -> FieldContext {
    FieldContext::new(
        collection("pages"),
        field("slug"),
        Some(RecordId::Int(record_id)),
    )
}

/// Context for a `slug` field on the `pages_translations` collection.
pub fn translations_context(record_id: i64) -> FieldContext {
    FieldContext::new(
        collection("pages_translations"),
        field("slug"),
        Some(RecordId::Int(record_id)),
    )
}

/// Default options with auto-generation driven by a local `title` field.
pub fn options_with_source(select_field: &str) -> SlugFieldOptions {
    SlugFieldOptions {
        select_field: Some(select_field.to_string()),
        ..SlugFieldOptions::default()
    }
}

pub fn page(id: i64, slug: &str) -> RecordDocument {
    RecordDocument::new().with_field("id", id).with_field("slug", slug)
}

pub fn translation(id: i64, parent_id: i64, slug: &str) -> RecordDocument {
    RecordDocument::new()
        .with_field("id", id)
        .with_field("pages_id", parent_id)
        .with_field("slug", slug)
}
