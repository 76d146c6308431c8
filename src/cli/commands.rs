//! CLI command implementations
//!
//! `serve` boots in a fixed order: configuration, logging, record store,
//! HTTP server. Any failure before the listener is bound aborts the boot.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::analyzer;
use crate::api::StringService;
use crate::http_server::HttpServer;
use crate::interpreter;
use crate::observability::{init_logging, Event};
use crate::store::{FileStore, MemoryStore, RecordStore};

use super::args::Command;
use super::config::{Config, ServeOverrides, StorageBackend};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            data_dir,
            memory,
        } => serve(
            config.as_deref(),
            ServeOverrides {
                host,
                port,
                data_dir,
                memory,
            },
        ),
        Command::Analyze { value } => analyze(&value),
        Command::Interpret { phrase } => interpret(&phrase),
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let config = Config::resolve(config_path, overrides)?;

    init_logging(&config.log_filter)?;
    info!(
        event = Event::ConfigLoaded.as_str(),
        backend = ?config.storage.backend,
        data_dir = %config.storage.data_dir,
        port = config.server.port,
        "configuration loaded"
    );

    let store = open_store(&config)?;
    let server = HttpServer::new(config.server.clone(), StringService::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Open the configured record store
pub fn open_store(config: &Config) -> CliResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::open(config.storage.data_path())?),
    };
    Ok(store)
}

/// Print the properties of one value
pub fn analyze(value: &str) -> CliResult<()> {
    let result = analyzer::analyze(value);
    write_json(result.properties())
}

/// Print the filters a phrase translates to
pub fn interpret(phrase: &str) -> CliResult<()> {
    let query = interpreter::interpret(phrase)?;
    write_json(&query)
}
