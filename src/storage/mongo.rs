//! MongoDB session, name resolution, and bulk insert.
//!
//! Databases and collections are resolved lazily: accessing a
//! never-before-seen name is valid and defers creation to the first write.

use mongodb::bson::{doc, to_document, Document};
use mongodb::{Client, Collection, Database};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::{json_kind, InsertError};

/// Open a client from `uri` and verify liveness with a `ping` round-trip.
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    info!("✅ Connected to MongoDB");
    Ok(client)
}

/// Resolve the named database. Lazy, no network call.
pub fn database(client: &Client, name: &str) -> Database {
    let db = client.database(name);
    info!("📂 Using database `{}`", name);
    db
}

/// Resolve the named collection. Lazy, no network call.
pub fn collection(db: &Database, name: &str) -> Collection<Document> {
    let col = db.collection::<Document>(name);
    info!("📁 Using collection `{}`", name);
    col
}

/// Normalize a JSON payload into a batch of BSON documents.
///
/// A lone object becomes a one-element batch; an array passes through with
/// every element required to be an object. Anything else is rejected rather
/// than silently skipped.
pub fn normalize_payload(payload: Value) -> Result<Vec<Document>, InsertError> {
    match payload {
        Value::Object(map) => Ok(vec![to_document(&map)?]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => to_document(&map).map_err(InsertError::from),
                other => Err(InsertError::NonDocumentElement {
                    index,
                    kind: json_kind(&other),
                }),
            })
            .collect(),
        other => Err(InsertError::UnsupportedPayload {
            kind: json_kind(&other),
        }),
    }
}

/// Insert a JSON payload into `collection` as one bulk write.
///
/// An empty batch performs no write and reports zero. On success the count
/// equals the batch length; the driver inserts the batch as a whole or fails
/// it as a whole.
pub async fn insert_payload(
    collection: &Collection<Document>,
    payload: Value,
) -> Result<usize, InsertError> {
    let documents = normalize_payload(payload)?;

    if documents.is_empty() {
        warn!("⚠️ Nothing to insert: the API returned an empty payload");
        return Ok(0);
    }

    let outcome = collection.insert_many(&documents).await?;
    let inserted = outcome.inserted_ids.len();

    info!(
        "✅ Inserted {} documents into `{}`",
        inserted,
        collection.name()
    );
    Ok(inserted)
}
