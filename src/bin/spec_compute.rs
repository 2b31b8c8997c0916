// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! spec_compute — CLI for the brewing spec calculator
//!
//! Takes a selection on stdin or as --json, runs SpecCalculator and
//! MisoMatcher through BrewKernel, and prints the `{result, events}` JSON.
//!
//! Usage:
//!   echo '["soybean","rice-koji"]' | spec_compute --month 6 --region 関東
//!   spec_compute --json '[{"materialId":"soybean","count":2},"rice-koji"]'
//!   spec_compute --store-dir ~/.miso save --label 朝の味噌 --json '["soybean","rice-koji"]'
//!   spec_compute --store-dir ~/.miso list

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

use miso_core::combination::{expand_combination, generate_combination_label};
use miso_core::kernel::{parse_selection, parse_selection_strict, BrewKernel, KernelConfig};
use miso_core::materials::{Material, MaterialRegistry};
use miso_core::science::climate::BrewingConditions;
use miso_core::{CombinationStore, FileStore};

#[derive(Parser)]
#[command(name = "spec_compute")]
#[command(author, version, about = "Compute miso brewing specs for a material selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Selection JSON (reads stdin when omitted)
    #[arg(long, global = true)]
    json: Option<String>,

    /// Brewing month (1-12)
    #[arg(long, default_value_t = 1, global = true)]
    month: u32,

    /// Brewing region, e.g. 関東
    #[arg(long, default_value = "関東", global = true)]
    region: String,

    /// KernelConfig JSON file; missing fields keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on unknown material ids and invalid conditions instead of skipping
    #[arg(long, global = true)]
    strict: bool,

    /// Directory for saved combinations
    #[arg(long, default_value = ".miso", global = true)]
    store_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute specs for the selection (default)
    Compute,
    /// Save the selection as a named combination
    Save {
        /// Label; generated from the selection when omitted
        #[arg(short, long)]
        label: Option<String>,
    },
    /// List saved combinations
    List,
    /// Compute specs for a saved combination
    Load {
        /// Combination id
        id: String,
    },
    /// Delete a saved combination
    Delete {
        /// Combination id
        id: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let mut store = CombinationStore::new(FileStore::new(&cli.store_dir));

    match cli.command.as_ref().unwrap_or(&Commands::Compute) {
        Commands::Compute => {
            let materials = read_selection(&cli)?;
            print_specs(&cli, &materials, &config)?;
        }
        Commands::Save { label } => {
            let materials = read_selection(&cli)?;
            let label = label
                .clone()
                .unwrap_or_else(|| generate_combination_label(&materials));
            let saved = store.save(&label, &materials)?;
            info!(id = %saved.id, label = %saved.label, "saved combination");
            println!("{}", serde_json::to_string(&saved)?);
        }
        Commands::List => {
            println!("{}", serde_json::to_string(&store.list())?);
        }
        Commands::Load { id } => {
            let all = store.list();
            let combination = all
                .iter()
                .find(|c| &c.id == id)
                .with_context(|| format!("no saved combination with id {}", id))?;
            let materials = expand_combination(combination, MaterialRegistry::all());
            print_specs(&cli, &materials, &config)?;
        }
        Commands::Delete { id } => {
            store.delete(id)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<KernelConfig> {
    let Some(path) = path else {
        return Ok(KernelConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn read_selection(cli: &Cli) -> Result<Vec<&'static Material>> {
    let input = match &cli.json {
        Some(json) => json.clone(),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    if cli.strict {
        Ok(parse_selection_strict(&input).context("invalid selection")?)
    } else {
        Ok(parse_selection(&input).context("invalid selection")?.materials)
    }
}

fn print_specs(cli: &Cli, materials: &[&'static Material], config: &KernelConfig) -> Result<()> {
    if cli.strict {
        BrewingConditions::new(cli.month, cli.region.as_str()).validate()?;
    }
    let response = BrewKernel::compute(materials, cli.month, &cli.region, config);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
