//! Resolve and locate commands - look names up through the cache

use crate::cache::PathCache;
use crate::cli::args::{LocateArgs, OutputFormat, ResolveArgs, SearchArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{PathCacheError, PathCacheResult};
use crate::hook::{setup, Filter};
use crate::search::{FsSearchHost, SearchHost};
use console::style;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Candidate directories and suffixes for one invocation
#[derive(Debug)]
struct Lookup {
    candidates: Vec<String>,
    suffixes: Vec<String>,
}

impl Lookup {
    fn prepare(args: &SearchArgs, config: &Config) -> PathCacheResult<Self> {
        let candidates = if args.dirs.is_empty() {
            candidates_from_env(&config.search.path_var)
        } else {
            args.dirs.clone()
        };

        if candidates.is_empty() {
            return Err(PathCacheError::NoCandidates(config.search.path_var.clone()));
        }

        let suffixes = if args.suffixes.is_empty() {
            config.search.suffixes.clone()
        } else {
            args.suffixes.clone()
        };

        debug!("Candidates: {:?}, suffixes: {:?}", candidates, suffixes);
        Ok(Self {
            candidates,
            suffixes,
        })
    }

    fn install(&self, config: &Config, no_cache: bool) -> Filter<FsSearchHost> {
        let host = FsSearchHost::new(self.suffixes.clone());
        let cache = PathCache::load(ConfigManager::cache_path(config));
        setup(host, cache, config.cache.enabled && !no_cache)
    }
}

/// Split a search-path environment variable into directory strings
fn candidates_from_env(var: &str) -> Vec<String> {
    let Some(value) = std::env::var_os(var) else {
        return vec![];
    };
    std::env::split_paths(&value)
        .map(|p| p.to_string_lossy().into_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Run the exit write, reporting a failure without failing the command
fn finish(filter: Filter<FsSearchHost>) {
    match filter.finish() {
        Ok(true) => debug!("Cache written"),
        Ok(false) => {}
        Err(e) => warn!("Cache not saved: {}", e),
    }
}

/// Execute the resolve command
pub fn resolve(args: ResolveArgs, config: &Config) -> PathCacheResult<()> {
    let lookup = Lookup::prepare(&args.search, config)?;
    let mut filter = lookup.install(config, args.search.no_cache);

    let mut results = Vec::with_capacity(args.names.len());
    for name in &args.names {
        let dirs = filter.filter(&lookup.candidates, name, &lookup.suffixes)?;
        results.push((name.clone(), dirs));
    }

    finish(filter);

    match args.format {
        OutputFormat::Table => print_resolved_table(&results),
        OutputFormat::Json => print_resolved_json(&results)?,
        OutputFormat::Plain => print_resolved_plain(&results),
    }

    Ok(())
}

fn print_resolved_table(results: &[(String, Vec<String>)]) {
    println!("{:<32} DIRECTORIES", "NAME");
    println!("{}", "-".repeat(72));

    for (name, dirs) in results {
        let shown = if dirs.is_empty() {
            style("(not found)").dim().to_string()
        } else {
            dirs.join(", ")
        };
        println!("{:<32} {}", name, shown);
    }
}

fn print_resolved_json(results: &[(String, Vec<String>)]) -> PathCacheResult<()> {
    let map: BTreeMap<&str, &Vec<String>> = results
        .iter()
        .map(|(name, dirs)| (name.as_str(), dirs))
        .collect();
    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}

fn print_resolved_plain(results: &[(String, Vec<String>)]) {
    for (name, dirs) in results {
        for dir in dirs {
            println!("{}\t{}", name, dir);
        }
    }
}

/// Execute the locate command
pub fn locate(args: LocateArgs, config: &Config) -> PathCacheResult<()> {
    let lookup = Lookup::prepare(&args.search, config)?;
    let mut filter = lookup.install(config, args.search.no_cache);

    let dirs = filter.filter(&lookup.candidates, &args.name, &lookup.suffixes)?;
    let found = filter
        .host()
        .locate_first_match(&args.name, &dirs, &lookup.suffixes)?;

    finish(filter);

    match found {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(PathCacheError::User(format!(
            "{} not found in {} candidate directories",
            args.name,
            lookup.candidates.len()
        ))),
    }
}
