//! CLI tool for writing synthetic verification fixture files.
//!
//! Generates a dataset (optionally seeded) and writes it, or one of its
//! aggregate views, as JSON to a file or stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use dlc_mock_core::model::GeneratedDataset;
use dlc_mock_core::{summary, GenConfig, Generator};

/// Command-line arguments for the fixture tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a full hierarchical dataset
    Generate {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
        /// Omit synthetic phone numbers from pending gender slices
        #[arg(long, default_value_t = false)]
        no_pending_numbers: bool,
    },
    /// Write flattened per-bank map points
    Map {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print headline statistics and per-state rollups
    Summary {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Pretty-print the JSON
        #[arg(long, default_value_t = true)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Generate {
            seed,
            output,
            pretty,
            no_pending_numbers,
        } => {
            let config = GenConfig {
                attach_pending_numbers: !no_pending_numbers,
                ..Default::default()
            };
            let dataset = generate(seed, config)?;
            write_json(&dataset, output.as_deref(), pretty)
        }
        Command::Map { seed, output, pretty } => {
            let dataset = generate(seed, GenConfig::default())?;
            write_json(&summary::map_points(&dataset), output.as_deref(), pretty)
        }
        Command::Summary { seed, pretty } => {
            let dataset = generate(seed, GenConfig::default())?;
            let report = SummaryReport {
                stats: summary::stats(&dataset),
                states: summary::state_summaries(&dataset),
            };
            write_json(&report, None, pretty)
        }
    }
}

/// Combined output of the `summary` subcommand.
#[derive(Serialize)]
struct SummaryReport {
    stats: summary::StatsSummary,
    states: Vec<summary::StateSummary>,
}

fn generate(seed: Option<u64>, config: GenConfig) -> Result<GeneratedDataset> {
    let mut generator = match seed {
        Some(seed) => Generator::from_seed(seed, config),
        None => Generator::new(config),
    }
    .context("generator configuration rejected")?;

    generator.generate().context("dataset generation failed")
}

fn write_json<T: Serialize>(value: &T, output: Option<&std::path::Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .context("failed to serialize output")?;

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(&json)?;
            file.write_all(b"\n")?;
            eprintln!("Wrote {} bytes to {}", json.len() + 1, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&json)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
