//! muster-server - Attendance receipt service for MusterSheets

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod receipt;
mod storage;
mod traits;

use api::{create_router, AppState};
use config::Config;
use receipt::{select_digest, DigestKind};
use storage::SqliteStore;
use traits::Storage;

#[derive(Parser, Debug)]
#[command(name = "muster-server")]
#[command(about = "Attendance receipt service for MusterSheets")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "MUSTER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "MUSTER_PORT", default_value = "3000")]
    port: u16,

    /// Path to SQLite database
    #[arg(long, env = "MUSTER_DATABASE_PATH", default_value = "./muster.db")]
    database: String,

    /// Log level
    #[arg(long, env = "MUSTER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Comma-separated list of Bearer tokens for sheet-owner routes (optional)
    /// If not set, the server operates in open mode
    #[arg(long, env = "MUSTER_ACCESS_TOKENS")]
    access_tokens: Option<String>,

    /// Base URL used when building receipt lookup links
    #[arg(long, env = "MUSTER_BASE_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Digest strategy for receipt hashes
    #[arg(long, env = "MUSTER_DIGEST", value_enum, default_value = "sha256")]
    digest: DigestKind,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting muster-server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config {
        host: args.host,
        port: args.port,
        database_path: args.database,
        log_level: args.log_level,
        access_tokens: Config::parse_access_tokens(args.access_tokens.as_deref()),
        base_url: args.base_url,
        digest: args.digest,
    };

    let storage = SqliteStore::new(&config.database_path)?;
    storage.initialize()?;
    tracing::info!(path = %config.database_path, "storage initialized");

    let digest = select_digest(config.digest);
    tracing::info!(digest = digest.name(), "digest strategy selected");

    if config.access_tokens.is_none() {
        tracing::warn!("no access tokens configured; sheet-owner routes are open");
    }

    let state = Arc::new(AppState {
        storage: Arc::new(storage) as Arc<dyn Storage>,
        digest,
        access_tokens: config.access_tokens.clone(),
        base_url: config.base_url.clone(),
    });

    let router = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
