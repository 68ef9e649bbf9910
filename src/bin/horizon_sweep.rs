//! Sweep required growth over a grid of target years and target GDPs
//!
//! Every grid cell is independent, so the grid is evaluated in parallel.
//! Writes one CSV row per (target year, target GDP).

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use clap::Parser;
use growth_projection::demographics::per_capita;
use growth_projection::{required_growth, Assumptions, PopulationProjector};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "horizon_sweep", about = "Required growth across target years and GDP goals")]
struct Args {
    /// Current GDP in billion USD
    #[arg(long, default_value_t = 3_900.0)]
    current_gdp_billion: f64,

    /// Base year (defaults to the current calendar year)
    #[arg(long)]
    current_year: Option<i32>,

    /// First target year of the sweep
    #[arg(long, default_value_t = 2030)]
    from_year: i32,

    /// Last target year of the sweep (inclusive)
    #[arg(long, default_value_t = 2050)]
    to_year: i32,

    /// Target GDPs in billion USD
    #[arg(long, value_delimiter = ',', default_values_t = vec![10_000.0, 20_000.0, 30_000.0])]
    targets_billion: Vec<f64>,

    /// Base population
    #[arg(long, default_value_t = 1.45e9)]
    population: f64,

    /// Year of the base population
    #[arg(long)]
    population_year: Option<i32>,

    /// Directory with assumption CSV files
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "horizon_sweep.csv")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    target_year: i32,
    target_gdp_billion: f64,
    horizon_years: i64,
    required_growth_pct: Option<f64>,
    projected_population: Option<f64>,
    projected_per_capita: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let current_year = args.current_year.unwrap_or_else(|| chrono::Local::now().year());
    if args.to_year < args.from_year {
        bail!("--to-year {} is before --from-year {}", args.to_year, args.from_year);
    }

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_reference(),
    };
    let projector = PopulationProjector::new(assumptions.population_schedule);
    let population_year = args.population_year.unwrap_or(current_year);
    let current_gdp = args.current_gdp_billion * 1e9;

    let grid: Vec<(i32, f64)> = (args.from_year..=args.to_year)
        .flat_map(|year| args.targets_billion.iter().map(move |&gdp| (year, gdp)))
        .collect();

    let start = Instant::now();
    println!("Evaluating {} scenarios...", grid.len());

    let rows: Vec<SweepRow> = grid
        .par_iter()
        .map(|&(target_year, target_billion)| {
            let horizon_years = i64::from(target_year) - i64::from(current_year);
            let target_gdp = target_billion * 1e9;

            let required_growth_pct =
                required_growth(current_gdp, target_gdp, horizon_years as f64).ok();
            let projected_population = projector
                .project(args.population, population_year, target_year)
                .ok();
            let projected_per_capita = projected_population
                .and_then(|pop| per_capita(target_gdp, pop).ok());

            SweepRow {
                target_year,
                target_gdp_billion: target_billion,
                horizon_years,
                required_growth_pct,
                projected_population,
                projected_per_capita,
            }
        })
        .collect();

    let skipped = rows.iter().filter(|r| r.required_growth_pct.is_none()).count();
    if skipped > 0 {
        log::warn!("{} scenarios have no required growth (target year not after {})", skipped, current_year);
    }

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Wrote {} rows to {} in {:?}", rows.len(), args.output.display(), start.elapsed());
    Ok(())
}
