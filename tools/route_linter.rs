/// Route Linter — validates route side-event tables.
///
/// Usage: route_linter [<tables.ron>...]
use clap::Parser;
use std::path::PathBuf;
use std::process;

use route_events::core::lint::lint;
use route_events::core::tables::RouteTables;

#[derive(Parser)]
#[command(name = "route_linter")]
#[command(about = "Check route side-event tables for mistakes", long_about = None)]
struct Cli {
    /// Table files, merged in order; the built-in tables when omitted
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut tables = if cli.files.is_empty() {
        match RouteTables::embedded() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("ERROR: Built-in route tables failed to load: {}", e);
                process::exit(1);
            }
        }
    } else {
        RouteTables::default()
    };

    for path in &cli.files {
        match RouteTables::load_from_ron(path) {
            Ok(t) => {
                println!("  Loaded: {}", path.display());
                tables.merge(t);
            }
            Err(e) => {
                eprintln!("ERROR: Failed to load '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    println!(
        "Loaded {} routes, {} events, {} option pools",
        tables.routes.len(),
        tables.event_count(),
        tables.option_pools.len()
    );
    for (route, count) in tables.route_counts() {
        println!("  {:<10} {:>3} events", route.as_str(), count);
    }

    let report = lint(&tables);

    println!("\n=== Route Lint Report ===\n");

    if report.is_clean() {
        println!("All checks passed!");
    }

    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }

    for error in &report.errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        process::exit(1);
    }
}
