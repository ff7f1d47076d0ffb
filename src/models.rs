//! Shared configuration and report types.

use serde::Serialize;

/// Runtime configuration for one ingest pass.
///
/// Populated by the CLI layer (flags with environment-variable fallback);
/// nothing in the pipeline reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub db_name: String,
    pub collection_name: String,
    pub api_url: String,
    pub http_timeout_secs: u64,
}

/// Outcome of a successful ingest pass.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub database: String,
    pub collection: String,
    pub inserted: usize,
}
