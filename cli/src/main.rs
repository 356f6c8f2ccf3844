mod table;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cpv_core::render::to_pretty_text;
use cpv_core::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    /// Indented JSON
    #[default]
    Json,
    /// One row per dimension value
    Table,
}

#[derive(Parser)]
#[command(name = "cpv")]
#[command(about = "Cost per view by creative, rotation and day", long_about = None)]
struct Cli {
    /// Rotation windows CSV (start, end, name) [env: CPV_ROTATIONS]
    #[arg(long)]
    rotations: Option<PathBuf>,

    /// Aired spots CSV (date, time, creative, spend, views) [env: CPV_SPOTS]
    #[arg(long)]
    spots: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env(cli.rotations, cli.spots);
    info!(
        rotations = %settings.rotations_path.display(),
        spots = %settings.spots_path.display(),
        "computing CPV report"
    );

    let outcome = cpv_core::run(&settings).with_context(|| {
        format!(
            "failed to build report from {} and {}",
            settings.rotations_path.display(),
            settings.spots_path.display()
        )
    })?;

    match cli.format {
        Format::Json => println!("{}", to_pretty_text(&outcome.report)?),
        Format::Table => table::show_report(&outcome),
    }
    Ok(())
}
