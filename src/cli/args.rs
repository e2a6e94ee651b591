//! CLI argument definitions using clap
//!
//! Commands:
//! - assetdb serve [--config <path>] [--port <port>]
//! - assetdb init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// assetdb - A minimal asset-inventory record keeper
#[derive(Parser, Debug)]
#[command(name = "assetdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the store schema and exit
    Init {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
