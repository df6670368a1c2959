//! pathcache - Persistent search-path lookup cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use pathcache::cli::{Cli, Commands};
use pathcache::config::{Config, ConfigManager};
use pathcache::error::PathCacheResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, config: &Config) {
    // 0 = warn, 1 = info, 2+ = debug
    let filter = match verbose {
        0 => EnvFilter::new("pathcache=warn"),
        1 => EnvFilter::new("pathcache=info"),
        _ => EnvFilter::new("pathcache=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run() -> PathCacheResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    // `config` must stay usable to repair a broken file
    let config = match config_manager.load() {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Config(_)) => {
            eprintln!("{} {}", style("Warning:").yellow(), e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    init_logging(cli.verbose, &config);
    pathcache::ui::init_theme();

    match cli.command {
        Commands::Resolve(args) => pathcache::cli::commands::resolve(args, &config),
        Commands::Locate(args) => pathcache::cli::commands::locate(args, &config),
        Commands::Show(args) => pathcache::cli::commands::show(args, &config),
        Commands::Compact(args) => pathcache::cli::commands::compact(args, &config),
        Commands::Clear(args) => pathcache::cli::commands::clear(args, &config),
        Commands::Path => pathcache::cli::commands::path(&config),
        Commands::Config(args) => {
            pathcache::cli::commands::config(args, &config, &config_manager)
        }
    }
}
