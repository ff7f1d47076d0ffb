//! Failure taxonomy for the ingest pipeline.
//!
//! Each stage returns its own error type; the driver wraps them into
//! [`IngestError`] and stops at the first failure, so no stage ever runs on a
//! failed predecessor.

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error for one ingest pass.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to connect to MongoDB")]
    Connect(#[source] mongodb::error::Error),

    #[error("failed to extract data from {url}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },

    #[error("failed to insert documents")]
    Insert(#[source] InsertError),
}

/// Errors from the single-shot HTTP extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response body is not valid JSON")]
    Json(#[source] reqwest::Error),
}

/// Errors from payload normalization and the bulk write.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("payload is a JSON {kind}, expected an object or an array of objects")]
    UnsupportedPayload { kind: &'static str },

    #[error("payload element {index} is a JSON {kind}, expected an object")]
    NonDocumentElement { index: usize, kind: &'static str },

    #[error("failed to convert payload to a BSON document")]
    Bson(#[from] mongodb::bson::ser::Error),

    #[error("bulk write failed")]
    Write(#[from] mongodb::error::Error),
}

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
