//! Latebind - Lazy Symbol Binding for Native Shared Libraries
//!
//! Main CLI entry point for inspecting the export catalog and probing
//! libraries against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use latebind::{BindConfig, Binder, Export, SharedLibrary, SymbolSource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "latebind")]
#[command(version)]
#[command(about = "Lazy symbol binding for native shared libraries", long_about = None)]
struct Cli {
    /// Configuration file (default: search for latebind.toml upward from cwd)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the export catalog with signatures
    List {
        /// Only show exports whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Resolve exports one at a time and report each outcome
    Probe {
        /// Export names to probe (default: the whole catalog)
        names: Vec<String>,

        /// Library to probe instead of the configured one
        #[arg(short, long)]
        library: Option<String>,
    },

    /// Bulk-bind the configured prebind set and print cache statistics
    Stats {
        /// Library to bind instead of the configured one
        #[arg(short, long)]
        library: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::List { filter } => cmd_list(filter.as_deref()),
        Commands::Probe { names, library } => cmd_probe(&config, &names, library.as_deref()),
        Commands::Stats { library } => cmd_stats(&config, library.as_deref()),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<BindConfig> {
    match path {
        Some(p) => {
            BindConfig::load(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
        None => BindConfig::load_from_cwd().context("Failed to load latebind.toml"),
    }
}

fn binder_for(config: &BindConfig, library: Option<&str>) -> Binder<SharedLibrary> {
    let source = match library {
        Some(name) => SharedLibrary::new(name),
        None => SharedLibrary::from_config(config),
    };
    Binder::new(source)
}

fn cmd_list(filter: Option<&str>) -> Result<()> {
    let mut shown = 0;
    for &export in Export::ALL {
        if let Some(needle) = filter {
            if !export.name().contains(needle) {
                continue;
            }
        }
        println!("  {:<12} {}", export.name(), export.signature());
        shown += 1;
    }

    println!();
    println!("{} of {} exports", shown, Export::COUNT);

    Ok(())
}

fn cmd_probe(config: &BindConfig, names: &[String], library: Option<&str>) -> Result<()> {
    let exports = if names.is_empty() {
        Export::ALL.to_vec()
    } else {
        names
            .iter()
            .map(|name| {
                Export::from_name(name).ok_or_else(|| anyhow::anyhow!("Unknown export: {}", name))
            })
            .collect::<Result<Vec<_>>>()?
    };

    let binder = binder_for(config, library);
    println!("Probing {}", binder.source().library_name());
    println!();

    let mut failures = 0;
    for export in exports {
        match binder.resolve(export) {
            Ok(symbol) => println!("  ok    {:<12} {:p}", export.name(), symbol.addr()),
            Err(e) => {
                failures += 1;
                println!("  FAIL  {:<12} {}", export.name(), e);
            }
        }
    }

    println!();
    println!("{} bound, {} failed", binder.bound_count(), failures);

    if failures > 0 {
        anyhow::bail!("{} exports failed to resolve", failures);
    }

    Ok(())
}

fn cmd_stats(config: &BindConfig, library: Option<&str>) -> Result<()> {
    let exports = config.prebind_exports()?;
    let binder = binder_for(config, library);

    binder.resolve_many(&exports).context("Bulk bind failed")?;

    println!("Library:   {}", binder.source().library_name());
    println!("Catalog:   {} exports", Export::COUNT);
    println!("Prebound:  {}", exports.len());
    println!("Bound:     {}", binder.bound_count());

    Ok(())
}
