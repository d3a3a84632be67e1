pub mod document;
pub mod value_objects;

pub use document::RecordDocument;
pub use value_objects::{CollectionName, FieldName, PRIMARY_KEY_FIELD, RecordId, SourceLocator};
