//! Marquee - browse and search a movie catalog from the command line

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use marquee_core::config::CatalogConfig;
use marquee_core::{CatalogIndex, CatalogLoader};

mod catalog_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "marquee",
    about = "Browse and search the movie catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: catalog_cli::CatalogSubcommand,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,

    /// Movie data file (overrides MARQUEE_DATA_SOURCE and the config file)
    #[clap(long, global = true)]
    data: Option<PathBuf>,

    /// Override the configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so JSON written to stdout stays parseable.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let config = match &cli.config {
        Some(path) => CatalogConfig::load_from_path(path)?,
        None => CatalogConfig::load()?,
    };
    let loader = CatalogLoader::new(config.resolve_data_source(cli.data));
    debug!("Loading catalog from {}", loader.source().describe());

    // Built once; every command below only reads it
    let index = CatalogIndex::load(&loader);

    cli.command.execute(&index)
}
