//! Rigcheck: CPU and motherboard compatibility assistant
//!
//! Subcommands:
//! - `configure`: suggest CPU + motherboard pairs from brand and performance preferences
//! - `check`: tell whether a CPU and a motherboard fit together
//! - `recommend`: list parts compatible with a CPU or a motherboard
//! - `upgrades`: list CPUs that would upgrade the current one on a motherboard
//! - `describe`: dump the facts known about a component

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use compat_core::CompatEngine;

mod commands;
mod settings;

use settings::{OutputFormat, Settings};

#[derive(Parser)]
#[command(name = "rigcheck")]
#[command(about = "CPU and motherboard compatibility assistant", long_about = None)]
struct Cli {
    /// Settings file (TOML). Defaults to ./rigcheck.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (.toml or .json)
    #[arg(long, global = true, env = "RIGCHECK_DATASET")]
    dataset: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest CPU + motherboard configurations. Leave a preference out to not restrict it.
    Configure {
        /// Preferred CPU brand (e.g. Intel, AMD)
        #[arg(long, default_value = "")]
        cpu_brand: String,

        /// Preferred motherboard brand (e.g. ASUS, Gigabyte, MSI)
        #[arg(long, default_value = "")]
        board_brand: String,

        /// Brand to leave out entirely
        #[arg(long, default_value = "")]
        exclude_brand: String,

        /// Performance tier (Entry, Intermediate, Advanced, Premium)
        #[arg(long, default_value = "")]
        tier: String,

        /// Minimum number of cores; ignored unless a whole number
        #[arg(long, default_value = "")]
        min_cores: String,

        /// Minimum number of threads; ignored unless a whole number
        #[arg(long, default_value = "")]
        min_threads: String,
    },

    /// Check whether a CPU and a motherboard are compatible
    Check {
        /// CPU model, spaces allowed
        #[arg(long, required_unless_present = "board")]
        cpu: Option<String>,

        /// Motherboard model, spaces allowed
        #[arg(long)]
        board: Option<String>,
    },

    /// Recommend parts compatible with a CPU or a motherboard
    Recommend {
        /// CPU to find motherboards for
        #[arg(long)]
        cpu: Option<String>,

        /// Motherboard to find CPUs for
        #[arg(long)]
        board: Option<String>,

        /// Component of either kind; its kind is looked up
        #[arg(required_unless_present_any = ["cpu", "board"])]
        component: Option<String>,
    },

    /// List CPUs that would upgrade the current one
    Upgrades {
        /// Current CPU model
        #[arg(long)]
        cpu: String,

        /// Motherboard to upgrade on; any motherboard when omitted
        #[arg(long)]
        board: Option<String>,
    },

    /// Show every fact known about a component
    Describe {
        /// Component model, spaces allowed
        component: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(cli.dataset, cli.output);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| settings.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let engine = CompatEngine::load(&settings.dataset)
        .with_context(|| format!("cannot start without a dataset ({})", settings.dataset.display()))?;
    info!(
        dataset = %settings.dataset.display(),
        facts = engine.store().fact_count(),
        "engine ready"
    );

    let report = match cli.command {
        Commands::Configure {
            cpu_brand,
            board_brand,
            exclude_brand,
            tier,
            min_cores,
            min_threads,
        } => commands::configure(
            &engine,
            &compat_core::Preferences::from_raw(
                &cpu_brand,
                &board_brand,
                &exclude_brand,
                &tier,
                &min_cores,
                &min_threads,
            ),
        ),
        Commands::Check { cpu, board } => {
            commands::check(&engine, cpu.as_deref(), board.as_deref())
        }
        Commands::Recommend {
            cpu,
            board,
            component,
        } => commands::recommend(&engine, cpu.as_deref(), board.as_deref(), component.as_deref()),
        Commands::Upgrades { cpu, board } => {
            commands::upgrades(&engine, &cpu, board.as_deref())
        }
        Commands::Describe { component } => commands::describe(&engine, &component),
    };

    let rendered = match settings.output {
        OutputFormat::Text => report.text,
        OutputFormat::Json => serde_json::to_string_pretty(&report.json)?,
    };
    println!("{rendered}");
    Ok(())
}
