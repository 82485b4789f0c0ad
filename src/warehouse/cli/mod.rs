//! # CLI Layer
//!
//! One possible UI client for the warehouse library: an interactive console.
//!
//! Startup order:
//! 1. Parse flags
//! 2. Load `config.json` from `--config-dir` or the platform config directory
//! 3. Initialize tracing (to stderr, so the REPL transcript stays clean)
//! 4. Pick the inventory: `--data`, then the config's `data_file`, then the bundled stock.
//!    With `--remember`, the `--data` path is written back to `config.json`
//! 5. Run the REPL on stdin/stdout

mod args;
mod console;
mod render;
mod repl;

use args::Cli;
use clap::Parser;
use console::Console;
use directories::ProjectDirs;
use repl::Repl;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use warehouse::api::WarehouseApi;
use warehouse::config::WarehouseConfig;
use warehouse::error::Result;
use warehouse::store::memory::InMemoryStore;
use warehouse::store::{fs, sample};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let config = match &config_dir {
        Some(dir) => WarehouseConfig::load(dir)?,
        None => WarehouseConfig::default(),
    };

    init_tracing(&cli, &config);
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let store = load_store(&cli, &config, config_dir.as_ref())?;
    tracing::debug!(items = store.len(), "inventory ready");
    if cli.remember {
        remember_data_file(&cli, config_dir.as_ref())?;
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    Repl::new(WarehouseApi::new(store), console).run()
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "warehouse", "warehouse").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_tracing(cli: &Cli, config: &WarehouseConfig) {
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn remember_data_file(cli: &Cli, config_dir: Option<&PathBuf>) -> Result<()> {
    match (config_dir, &cli.data) {
        (Some(dir), Some(data)) => {
            let config = WarehouseConfig::remember_data_file(dir, data)?;
            tracing::info!(data_file = ?config.data_file, "remembered inventory file");
        }
        _ => tracing::warn!("no config directory, inventory file not remembered"),
    }
    Ok(())
}

fn load_store(
    cli: &Cli,
    config: &WarehouseConfig,
    config_dir: Option<&PathBuf>,
) -> Result<InMemoryStore> {
    let configured = config_dir.and_then(|dir| config.data_path(dir));
    match cli.data.clone().or(configured) {
        Some(path) => fs::load(path),
        None => sample::sample_store(),
    }
}
