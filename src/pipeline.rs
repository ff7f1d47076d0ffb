//! Linear ingest pipeline: connect, resolve, extract, insert.

use std::time::Duration;

use crate::errors::IngestError;
use crate::models::{Config, IngestReport};
use crate::scrapers::JsonApiClient;
use crate::storage::mongo;

/// Run one ingest pass.
///
/// Stages run strictly in order and each one's output feeds the next; the
/// first failure short-circuits everything after it.
pub async fn run(config: &Config) -> Result<IngestReport, IngestError> {
    let client = mongo::connect(&config.mongodb_uri)
        .await
        .map_err(IngestError::Connect)?;

    let db = mongo::database(&client, &config.db_name);
    let collection = mongo::collection(&db, &config.collection_name);

    let api = JsonApiClient::new(Duration::from_secs(config.http_timeout_secs));
    let payload = api
        .fetch(&config.api_url)
        .await
        .map_err(|source| IngestError::Extract {
            url: config.api_url.clone(),
            source,
        })?;

    let inserted = mongo::insert_payload(&collection, payload)
        .await
        .map_err(IngestError::Insert)?;

    Ok(IngestReport {
        database: config.db_name.clone(),
        collection: config.collection_name.clone(),
        inserted,
    })
}
