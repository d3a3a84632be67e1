pub mod http;
pub mod memory;

pub use http::HttpRecordStore;
pub use memory::{InMemoryRecordCache, InMemoryRecordStore};
