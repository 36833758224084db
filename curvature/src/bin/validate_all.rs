// SPDX-License-Identifier: AGPL-3.0-only

//! Runs the built-in validation suites (or a JSON case file).
//!
//! Exit code is 0 only if every selected case passes, 1 if any fails,
//! 2 if the cases could not be loaded.
//!
//! # Categories
//!
//! | Category | Checks |
//! |----------|--------|
//! | `constant_frequency` | δ identities for fixed frequencies |
//! | `first_order_shifts` | GP-A, Galileo, Pound-Rebka, GPS budget |
//! | `loop_closure` | I_ABC = 0, path independence |
//! | `relation_to_gr` | gradient, tides, perihelion, deflection |
//! | `ssz_integration` | N = N_SR + N_GR, weak-field SSZ |
//! | `ssz_physics` | Ξ(r), universal crossing, neutron stars |
//! | `nsr_ngr_separation` | removable kinematic part |
//! | `shapiro_delay` | solar system, pulsars, GW170817 |
//! | `experimental` | published measurements |
//! | `dynamic_loops` | I_ABC(t) along orbits |

use clap::Parser;
use freqcurve_curvature::data::{load_cases, write_report, write_tables};
use freqcurve_curvature::{suites, tables, Category, FormulaKind, ValidationError};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate frequency-based curvature predictions
#[derive(Parser, Debug)]
#[command(name = "validate_all", version, about, long_about = None)]
struct Cli {
    /// Only run these categories (repeatable, e.g. `--category shapiro_delay`)
    #[arg(short, long)]
    category: Vec<Category>,

    /// Load cases from a JSON file instead of the built-in suites
    #[arg(long)]
    cases: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Evaluate on the rayon thread pool
    #[arg(short, long)]
    parallel: bool,

    /// Print the SSZ, loop and experimental tables before the summary
    #[arg(long)]
    tables: bool,

    /// Write the SSZ, loop and experimental tables as JSON
    #[arg(long, value_name = "PATH")]
    tables_json: Option<PathBuf>,

    /// List categories and formulas, then exit
    #[arg(long)]
    list: bool,
}

fn list() -> Result<(), ValidationError> {
    println!("Categories:");
    for category in Category::ALL {
        let count = suites::by_category(category)?.len();
        println!("  {:<20} {:>3} cases  {}", category.identifier(), count, category.title());
    }
    println!("Formulas:");
    for kind in FormulaKind::ALL {
        println!("  {:<28} {}", kind.identifier(), kind.required_inputs().join(", "));
    }
    Ok(())
}

fn execute(cli: Cli) -> Result<(), ValidationError> {
    if cli.list {
        return list();
    }

    let mut cases = match &cli.cases {
        Some(path) => load_cases(path)?,
        None => suites::all_cases()?,
    };
    if !cli.category.is_empty() {
        cases.retain(|c| cli.category.contains(&c.category()));
    }
    info!(cases = cases.len(), parallel = cli.parallel, "cases selected");

    if cli.tables {
        print!("{}", tables::format_tables()?);
    }
    if let Some(path) = &cli.tables_json {
        write_tables(path)?;
        info!(path = %path.display(), "tables written");
    }

    let report = if cli.parallel {
        freqcurve_curvature::run_parallel(&cases)
    } else {
        freqcurve_curvature::run(&cases)
    };

    if let Some(path) = &cli.json {
        write_report(path, &report)?;
        info!(path = %path.display(), "report written");
    }

    report.finish("freqcurve")
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        eprintln!("error: {e}");
        process::exit(2);
    }
}
