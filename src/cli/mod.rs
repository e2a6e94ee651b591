//! CLI module for assetdb
//!
//! Provides command-line interface for:
//! - init: Create the store schema
//! - serve: Open the store and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
