//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pathcache - Persistent search-path lookup cache
///
/// Finds which directories of a search path contain a file, remembering
/// the answers across runs.
#[derive(Parser, Debug)]
#[command(name = "pathcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PATHCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the directories containing each name
    Resolve(ResolveArgs),

    /// Print the first file matching a name
    Locate(LocateArgs),

    /// List cached entries
    Show(ShowArgs),

    /// Re-verify and deduplicate the cache file
    Compact(CompactArgs),

    /// Erase the cache
    Clear(ClearArgs),

    /// Show cache file path
    Path,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Candidate directories and suffixes shared by lookup commands
#[derive(Parser, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Candidate directory, searched in order (repeatable; defaults to search.path_var)
    #[arg(short, long = "dir", value_name = "DIR")]
    pub dirs: Vec<String>,

    /// Suffix tried when matching a name (repeatable; defaults to search.suffixes)
    #[arg(short, long = "suffix", value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffixes: Vec<String>,

    /// Bypass the cache for this run
    #[arg(long)]
    pub no_cache: bool,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// File names to resolve (without suffix)
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the locate command
#[derive(Parser, Debug)]
pub struct LocateArgs {
    /// File name to locate (without suffix)
    pub name: String,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the compact command
#[derive(Parser, Debug)]
pub struct CompactArgs {
    /// Dry run - show what would be written
    #[arg(long)]
    pub dry_run: bool,

    /// Suffixes used to re-verify entries (defaults to search.suffixes)
    #[arg(short, long = "suffix", value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffixes: Vec<String>,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., search.suffixes)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
