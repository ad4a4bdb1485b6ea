//! k6-cid binary entry point.
//!
//! `hash` runs the `k6/x/cid` module outside a script host; `report`
//! converts benchmark summary files into CSV tables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use k6_cid::{init_registry, InvalidCidPolicy, K6CidConfig, HASH_METHOD, MODULE_NAME};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// k6-cid CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "k6-cid")]
#[command(about = "Content identifier hashing for k6 scripts, plus benchmark report conversion")]
struct Args {
    /// Configuration file (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the base58 multihash of a content identifier.
    Hash {
        /// Content identifier (CIDv0, multibase CIDv1 or /ipfs/<cid>).
        cid: String,

        /// Fail on invalid input instead of printing an empty line.
        #[arg(long)]
        strict: bool,
    },

    /// Convert summary JSON files into CSV tables.
    Report {
        /// Directory with one sub-directory of summary files per test.
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Output path of the find-providers table.
        #[arg(long)]
        find_provs_csv: Option<PathBuf>,

        /// Output path of the fetch table.
        #[arg(long)]
        fetch_csv: Option<PathBuf>,

        /// Include Kubo rows in the fetch table.
        #[arg(long)]
        include_kubo_fetch: bool,

        /// Include Kubo rows in the find-providers table.
        #[arg(long)]
        include_kubo_find_provs: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => K6CidConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => K6CidConfig::default(),
    };

    match args.command {
        Command::Hash { cid, strict } => {
            if strict {
                config.module.on_invalid = InvalidCidPolicy::Error;
            }
            let registry = init_registry(&config).context("Failed to register cid module")?;
            let hash = registry
                .call(MODULE_NAME, HASH_METHOD, &cid)
                .with_context(|| format!("Failed to hash {cid}"))?;
            println!("{hash}");
        }
        Command::Report {
            out_dir,
            find_provs_csv,
            fetch_csv,
            include_kubo_fetch,
            include_kubo_find_provs,
        } => {
            let mut report = config.report;
            if let Some(out_dir) = out_dir {
                report.out_dir = out_dir;
            }
            if let Some(path) = find_provs_csv {
                report.find_provs_csv = path;
            }
            if let Some(path) = fetch_csv {
                report.fetch_csv = path;
            }
            report.include_kubo_fetch |= include_kubo_fetch;
            report.include_kubo_find_provs |= include_kubo_find_provs;

            tracing::info!("Reading summaries from {:?}", report.out_dir);
            let written = k6_cid_report::generate(&report).context("Failed to generate report")?;
            if written.is_empty() {
                tracing::warn!("No test directories found in {:?}", report.out_dir);
            }
        }
    }

    Ok(())
}
