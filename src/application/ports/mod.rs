// src/application/ports/mod.rs
pub mod emitter;
pub mod record_cache;
pub mod record_store;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type RecordStorePort = dyn record_store::RecordStore;
pub type RecordCachePort = dyn record_cache::RecordCache;
pub type FieldEmitterPort = dyn emitter::FieldEmitter;
