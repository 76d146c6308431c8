//! CLI module for strlens
//!
//! Provides command-line interface for:
//! - serve: Boot the service and serve HTTP
//! - analyze: One-shot property computation
//! - interpret: One-shot phrase interpretation

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{analyze, interpret, open_store, run, run_command, serve};
pub use config::{Config, ServeOverrides, StorageBackend, StorageConfig};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
