//! Cache commands - inspect, compact and clear the cache file

use crate::cache::{persist, CacheEntry, PathCache, PrefixStore};
use crate::cli::args::{ClearArgs, CompactArgs, OutputFormat, ShowArgs};
use crate::config::{Config, ConfigManager};
use crate::error::PathCacheResult;
use crate::search::FsSearchHost;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the show command
pub fn show(args: ShowArgs, config: &Config) -> PathCacheResult<()> {
    let cache = PathCache::load(ConfigManager::cache_path(config));
    let store = cache.store();

    if store.is_empty() {
        if matches!(args.format, OutputFormat::Json) {
            println!("{{}}");
        } else {
            println!("No cached entries.");
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_store_table(store),
        OutputFormat::Json => print!("{}", persist::render(store)?),
        OutputFormat::Plain => print_store_plain(store),
    }

    Ok(())
}

fn print_store_table(store: &PrefixStore) {
    println!("{:<32} {:<10} DIRECTORIES", "NAME", "STATE");
    println!("{}", "-".repeat(72));

    for (name, entry) in store.iter() {
        let state = match entry {
            CacheEntry::Found(dirs) if !dirs.is_empty() => style("found").green().to_string(),
            _ => style("tombstone").dim().to_string(),
        };
        println!("{:<32} {:<10} {}", name, state, entry.dirs().join(", "));
    }

    println!();
    println!("Total: {} entries", store.len());
}

fn print_store_plain(store: &PrefixStore) {
    for (name, _) in store.iter() {
        println!("{}", name);
    }
}

/// Execute the compact command
pub fn compact(args: CompactArgs, config: &Config) -> PathCacheResult<()> {
    let ctx = UiContext::detect();
    let suffixes = if args.suffixes.is_empty() {
        config.search.suffixes.clone()
    } else {
        args.suffixes
    };
    let host = FsSearchHost::new(suffixes);
    let mut cache = PathCache::load(ConfigManager::cache_path(config));
    let before = cache.store().len();

    let compacted = if args.dry_run {
        cache.compacted(&host)?
    } else {
        cache.compact_now(&host)?
    };

    for (name, entry) in compacted.iter() {
        println!("  {} {} -> {}", style("•").cyan(), name, entry);
    }

    let summary = format!("{} of {} entries kept", compacted.len(), before);
    if args.dry_run {
        ui::remark(&ctx, &format!("Dry run - {}, nothing written.", summary));
    } else {
        ui::step_ok_detail(&ctx, "Cache compacted", &summary);
    }

    Ok(())
}

/// Execute the clear command
pub fn clear(args: ClearArgs, config: &Config) -> PathCacheResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let mut cache = PathCache::load(ConfigManager::cache_path(config));
    let count = cache.store().len();

    let prompt = format!("Clear {} cached entries at {}?", count, cache.path().display());
    if !ui::confirm(&ctx, &prompt, false)? {
        ui::step_warn_hint(&ctx, "Aborted, cache left as-is", "Use --yes to skip confirmation");
        return Ok(());
    }

    cache.clear_cache()?;
    ui::step_ok(&ctx, &format!("Cleared {} cached entries", count));

    Ok(())
}

/// Execute the path command
pub fn path(config: &Config) -> PathCacheResult<()> {
    println!("{}", ConfigManager::cache_path(config).display());
    Ok(())
}
