pub mod service;

pub use service::ItemSearch;
