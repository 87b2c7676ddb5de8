//! Command-line configuration.
//!
//! Every value has a fixed default; flags (and `AUTOMOBILES_DB_PATH` for the
//! database) only override it.

use automobile_core::{default_log_level, LogTarget};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "automobiles.sqlite3";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CSV_PATH: &str = "Automobile_data.csv";

#[derive(Debug, Parser)]
#[command(name = "automobiles", version, about = "Automobile records service")]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the REST and GraphQL APIs.
    Serve(ServeArgs),
    /// Import a CSV file into the automobiles table.
    Load(LoadArgs),
}

#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files; stderr when omitted.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

impl LoggingArgs {
    pub fn level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    pub fn target(&self) -> LogTarget {
        match &self.log_dir {
            Some(dir) => LogTarget::Directory(dir.clone()),
            None => LogTarget::Stderr,
        }
    }
}

#[derive(Debug, Args)]
pub struct StoreArgs {
    /// SQLite database file (the store connection target).
    #[arg(long = "db", env = "AUTOMOBILES_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// CSV file with a `make,model,year,vin` header row.
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,
}
