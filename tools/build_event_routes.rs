/// Build Event Routes — writes the route side-event block for the game data.
///
/// Usage: build_event_routes [--data <tables.ron>] [--output <file>] [--check]
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use route_events::core::generator::{Generator, DEFAULT_OUTPUT};
use route_events::core::tables::RouteTables;

#[derive(Parser)]
#[command(name = "build_event_routes")]
#[command(about = "Generate the route side-event block", long_about = None)]
struct Cli {
    /// Route tables RON file (defaults to the built-in tables)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output file path
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Lint the tables and exit without writing
    #[arg(long, default_value = "false")]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tables = match cli.data {
        Some(ref path) => RouteTables::load_from_ron(path)
            .with_context(|| format!("failed to load route tables from '{}'", path.display()))?,
        None => RouteTables::embedded().context("built-in route tables are malformed")?,
    };

    let generator = Generator::builder()
        .with_tables(tables)
        .build()
        .context("route tables are invalid; run route_linter for the full report")?;

    for warning in &generator.lint_report().warnings {
        eprintln!("WARNING: {}", warning);
    }

    if cli.check {
        println!(
            "{} routes, {} events: tables OK",
            generator.tables().routes.len(),
            generator.tables().event_count()
        );
        return Ok(());
    }

    generator
        .write_file(&cli.output)
        .with_context(|| format!("failed to write '{}'", cli.output.display()))?;

    println!("{} updated", cli.output.display());
    Ok(())
}
