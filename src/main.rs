//! api-ingest: fetch a JSON payload from an HTTP API and load it into a
//! MongoDB collection, in one linear pass.
//!
//! Usage:
//!   api-ingest --mongodb-uri mongodb+srv://... \
//!       --db-name db_novo --collection-name produtos \
//!       --api-url https://labdados.com/produtos
//!
//! Every flag also reads from the environment (MONGODB_URI, DB_NAME,
//! COLLECTION_NAME, API_URL), with `.env` loaded at startup. Exits non-zero
//! if any stage fails.

use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_ingest::models::Config;
use api_ingest::pipeline;
use api_ingest::scrapers::json_api::DEFAULT_TIMEOUT_SECS;

/// Load a JSON API payload into a MongoDB collection
#[derive(Parser, Debug)]
#[command(name = "api-ingest")]
#[command(about = "Fetch a JSON payload from an HTTP API and bulk-insert it into MongoDB")]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    mongodb_uri: String,

    /// Target database name
    #[arg(long, env = "DB_NAME", default_value = "db_novo")]
    db_name: String,

    /// Target collection name
    #[arg(long, env = "COLLECTION_NAME", default_value = "produtos")]
    collection_name: String,

    /// URL of the JSON API to extract from
    #[arg(long, env = "API_URL", default_value = "https://labdados.com/produtos")]
    api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    http_timeout_secs: u64,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            mongodb_uri: self.mongodb_uri,
            db_name: self.db_name,
            collection_name: self.collection_name,
            api_url: self.api_url,
            http_timeout_secs: self.http_timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_tracing();

    let config = Cli::parse().into_config();

    info!(
        "🚀 Starting ingest: {} -> {}/{}",
        config.api_url, config.db_name, config.collection_name
    );

    match pipeline::run(&config).await {
        Ok(report) => {
            info!(
                "🏁 Ingest finished: {} documents inserted into {}/{}",
                report.inserted, report.database, report.collection
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let err = anyhow::Error::new(err);
            error!("❌ Ingest failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_the_public_endpoint() {
        // Clap falls back to these env vars when flags are absent; clear them
        // so the test sees the built-in defaults.
        for var in ["DB_NAME", "COLLECTION_NAME", "API_URL", "HTTP_TIMEOUT_SECS"] {
            std::env::remove_var(var);
        }

        let cli = Cli::try_parse_from([
            "api-ingest",
            "--mongodb-uri",
            "mongodb://localhost:27017",
        ])
        .unwrap();

        assert_eq!(cli.db_name, "db_novo");
        assert_eq!(cli.collection_name, "produtos");
        assert_eq!(cli.api_url, "https://labdados.com/produtos");
        assert_eq!(cli.http_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "api-ingest",
            "--mongodb-uri",
            "mongodb://localhost:27017",
            "--db-name",
            "staging",
            "--collection-name",
            "items",
            "--api-url",
            "https://example.com/items",
            "--http-timeout-secs",
            "5",
        ])
        .unwrap();

        let config = cli.into_config();
        assert_eq!(config.db_name, "staging");
        assert_eq!(config.collection_name, "items");
        assert_eq!(config.api_url, "https://example.com/items");
        assert_eq!(config.http_timeout_secs, 5);
    }
}
