//! Planimeter CLI - shape-area aggregation and reporting
//!
//! Usage: planimeter <COMMAND>
//!
//! Commands:
//!   report  Sum the areas in a scene file and print the total
//!   volume  Print the cubed-area figure for a scene file

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use planimeter::{AreaAggregator, AreaReport, CubedAreaCalculator, Scene};

/// Planimeter - shape-area aggregation and reporting
#[derive(Parser, Debug)]
#[command(name = "planimeter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sum the areas in a scene file and print the total
    Report {
        /// Path to a .toml or .json scene file
        #[arg(short, long)]
        scene: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Print the cubed-area figure ((sum of areas)^3) for a scene file
    Volume {
        /// Path to a .toml or .json scene file
        #[arg(short, long)]
        scene: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportFormat {
    /// `area is {total}` with two decimals
    Text,
    /// `{area:{total}}` legacy JSON-like form
    Json,
    /// Bare total, full precision
    Raw,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Raw => write!(f, "raw"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { scene, format } => cmd_report(&scene, format),
        Commands::Volume { scene } => cmd_volume(&scene),
    }
}

fn cmd_report(scene: &PathBuf, format: ReportFormat) -> Result<()> {
    let shapes = Scene::load(scene)?.into_shapes()?;
    let aggregator = AreaAggregator::new(shapes);
    let report = AreaReport::new(&aggregator);

    match format {
        ReportFormat::Text => println!("{}", report.to_text()),
        ReportFormat::Json => println!("{}", report.to_json()),
        ReportFormat::Raw => println!("{}", aggregator.total_area()),
    }
    Ok(())
}

fn cmd_volume(scene: &PathBuf) -> Result<()> {
    let shapes = Scene::load(scene)?.into_shapes()?;
    let calculator = CubedAreaCalculator::new(shapes);
    println!("{}", calculator.cubed_area());
    Ok(())
}
