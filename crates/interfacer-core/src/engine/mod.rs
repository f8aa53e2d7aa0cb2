//! # Engine Module
//!
//! The stateful side of the interface engine: configuration, background table caching,
//! progress reporting, error types, and the computational tasks that turn delta records
//! into interface metrics.
//!
//! - **Configuration** ([`config`]) - Source/output locations, background scope, file formats
//! - **Caching** ([`cache`]) - The [`cache::BackgroundStore`] abstraction and its CSV and
//!   in-memory implementations
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - [`error::EngineError`]
//! - **Tasks** ([`tasks`]) - Delta parsing, background resolution, summary, propensity
//!
//! The only shared mutable state is the background cache, and it is always reached
//! through an injected store.

pub mod cache;
pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
