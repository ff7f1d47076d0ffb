//! API-to-MongoDB ingest library.
//!
//! Exposes the pipeline stages for use by the binary and integration tests.

pub mod errors;
pub mod models;
pub mod pipeline;
pub mod scrapers;
pub mod storage;

pub use errors::{ExtractError, IngestError, InsertError};
pub use models::{Config, IngestReport};
