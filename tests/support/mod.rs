// tests/support/mod.rs
// Shared test doubles and builders used by multiple integration test
// binaries. Individual test crates use different subsets, which would
// otherwise trip dead_code / unused_imports warnings.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
