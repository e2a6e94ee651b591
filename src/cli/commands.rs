//! CLI command implementations
//!
//! Both commands load configuration, open the store and bootstrap its schema.
//! `init` stops there; `serve` goes on to run the HTTP server.

use std::path::Path;

use serde_json::json;
use sqlx::SqlitePool;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use crate::database;
use crate::http_server::HttpServer;
use crate::repository::AssetRepository;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Installs logging, parses arguments and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Create the store schema and exit
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    let rt = runtime()?;

    rt.block_on(async {
        let pool = open_store(&config).await?;
        pool.close().await;
        Ok::<_, CliError>(())
    })?;

    tracing::info!(url = %config.database.url, "store initialized");

    write_response(json!({
        "initialized": true,
        "database_url": config.database.url,
    }))
}

/// Start the HTTP server
///
/// 1. Load configuration, apply `--port`
/// 2. Open the store and bootstrap its schema
/// 3. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, port)?;
    let rt = runtime()?;

    rt.block_on(run_server(config))
}

async fn run_server(config: Config) -> CliResult<()> {
    let pool = open_store(&config).await?;
    let server = HttpServer::with_config(config.http, AssetRepository::new(pool.clone()));

    let result = server
        .start()
        .await
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

    pool.close().await;
    result
}

async fn open_store(config: &Config) -> CliResult<SqlitePool> {
    database::connect(&config.database)
        .await
        .map_err(|e| CliError::boot_failed(format!("Failed to open store: {}", e)))
}

/// Load configuration and apply command-line overrides
fn resolve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<Config> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    Ok(config)
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// `RUST_LOG` filter, `info` when unset
fn init_logging() {
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
