//! rhoraires library root.
//! Exposes the CLI parser, the high-level run() function, and the extraction engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

pub use engine::{Extractor, Thresholds};
pub use models::record::Record;
pub use models::schedule::Schedule;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Extract { .. } => cli::commands::extract::handle(&cli.command, cfg),
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command, cfg),
        Commands::Overrides => cli::commands::overrides::handle(cfg),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once, from --config or the default location
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;
    log::debug!("configuration loaded from {}", config_path.display());

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
