//! Field-extension engine for a headless CMS admin panel: a slug input
//! that derives its value from another field and validates emptiness,
//! format, and uniqueness against the host's record store, plus a
//! companion collection-item search backend. The host owns rendering and
//! the event loop; this crate owns the transformation, validation, and
//! record access behind them, consumed through the ports in
//! [`application::ports`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod manifest;
