//! CLI argument definitions using clap
//!
//! Commands:
//! - crm serve [--config <path>] [--port <port>] [--no-seed]
//! - crm config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crm - In-memory customer record service
#[derive(Parser, Debug)]
#[command(name = "crm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,
    },

    /// Print the effective configuration as JSON and exit
    Config {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
