//! # wregdb CLI entry point
//!
//! Parses command-line arguments, resolves settings from flags and the
//! optional config file, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wregdb_cli::check::{run_check, CheckArgs};
use wregdb_cli::compare::{run_compare, CompareArgs};
use wregdb_cli::config::{CliConfig, OutputFormat, Overrides, Settings};
use wregdb_cli::countries::{run_countries, CountriesArgs};
use wregdb_cli::show::{run_show, ShowArgs};
use wregdb_cli::vector::{run_vector, VectorArgs};

/// Wi-Fi regulatory database inspector.
///
/// Parses `regulatory.db` text files and answers channel usability
/// questions per country.
#[derive(Parser, Debug)]
#[command(name = "wregdb", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Comma-separated catalog bands to evaluate (`24w,52,55,6l`).
    #[arg(long, value_delimiter = ',', global = true)]
    bands: Option<Vec<String>>,

    /// Store malformed numbers as NaN instead of failing the parse.
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List database entries.
    Countries(CountriesArgs),

    /// Print a country's permissions.
    Show(ShowArgs),

    /// Check one channel number against a country (exit 2 if not usable).
    Check(CheckArgs),

    /// Usability of every selected channel for a country.
    Vector(VectorArgs),

    /// Countries whose channel set relates to a reference country's.
    Compare(CompareArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG applies only when no -v is given.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("wregdb CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = resolve_settings(&cli).and_then(|settings| match &cli.command {
        Commands::Countries(args) => run_countries(args, &settings),
        Commands::Show(args) => run_show(args, &settings),
        Commands::Check(args) => run_check(args, &settings),
        Commands::Vector(args) => run_vector(args, &settings),
        Commands::Compare(args) => run_compare(args, &settings),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let settings = Settings::resolve(
        config,
        Overrides {
            bands: cli.bands.clone(),
            lenient: cli.lenient,
            format: cli.format,
        },
    )?;
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}
