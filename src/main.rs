//! Growth Projection CLI
//!
//! Computes the dashboard outlook from command-line values and optional
//! CSV histories, printing a report or JSON.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use growth_projection::comparison::PeerEconomy;
use growth_projection::demographics::estimate_median_age_series;
use growth_projection::series::{latest, load_sector_histories, load_series};
use growth_projection::{EconomicOutlook, OutlookInputs, OutlookRunner, TimeSeriesPoint};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "growth_projection", about = "Required GDP growth calculator for India")]
struct Args {
    /// Current GDP in billion USD
    #[arg(long, default_value_t = 3_900.0)]
    current_gdp_billion: f64,

    /// Target GDP in billion USD
    #[arg(long, default_value_t = 30_000.0)]
    target_gdp_billion: f64,

    /// Target year
    #[arg(long, default_value_t = 2047)]
    target_year: i32,

    /// Base year (defaults to the current calendar year)
    #[arg(long)]
    current_year: Option<i32>,

    /// Latest real GDP growth, as YEAR:PERCENT
    #[arg(long, value_parser = parse_observation)]
    latest_growth: Option<TimeSeriesPoint>,

    /// Latest population, as YEAR:COUNT
    #[arg(long, value_parser = parse_observation)]
    population: Option<TimeSeriesPoint>,

    /// Latest median age, as YEAR:AGE
    #[arg(long, value_parser = parse_observation)]
    median_age: Option<TimeSeriesPoint>,

    /// Latest dependency ratio, as YEAR:PERCENT
    #[arg(long, value_parser = parse_observation)]
    dependency_ratio: Option<TimeSeriesPoint>,

    /// CSV (Year,Value) of historical median ages
    #[arg(long)]
    median_age_history: Option<PathBuf>,

    /// CSV (Year,Value) of the population share aged 0-14, used to estimate
    /// median age when no median age history or observation is given
    #[arg(long)]
    youth_share_history: Option<PathBuf>,

    /// CSV (Year,Sector,Share) of sector shares of GDP
    #[arg(long)]
    sector_history: Option<PathBuf>,

    /// Comparison economy as COUNTRY:PER_CAPITA_USD (repeatable); the
    /// closest ones to the projected per-capita GDP are listed
    #[arg(long = "peer", value_parser = parse_peer)]
    peers: Vec<PeerEconomy>,

    /// Directory with assumption CSV files (in-memory reference if omitted)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the outlook as JSON
    #[arg(long)]
    json: bool,
}

fn parse_observation(s: &str) -> Result<TimeSeriesPoint, String> {
    let (year, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected YEAR:VALUE, got '{}'", s))?;
    let year: i32 = year.trim().parse().map_err(|e| format!("bad year '{}': {}", year, e))?;
    let value: f64 = value.trim().parse().map_err(|e| format!("bad value '{}': {}", value, e))?;
    Ok(TimeSeriesPoint::new(year, value))
}

fn parse_peer(s: &str) -> Result<PeerEconomy, String> {
    let (country, value) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected COUNTRY:PER_CAPITA, got '{}'", s))?;
    let country = country.trim();
    if country.is_empty() {
        return Err(format!("missing country name in '{}'", s));
    }
    let value: f64 = value.trim().parse().map_err(|e| format!("bad value '{}': {}", value, e))?;
    Ok(PeerEconomy::new(country, value))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.assumptions {
        Some(dir) => OutlookRunner::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => OutlookRunner::new(),
    };

    let mut median_age_history = args
        .median_age_history
        .as_ref()
        .map(|path| {
            load_series(path).with_context(|| format!("reading {}", path.display()))
        })
        .transpose()?;
    let mut median_age = args.median_age;

    if let Some(path) = &args.youth_share_history {
        let youth_share =
            load_series(path).with_context(|| format!("reading {}", path.display()))?;
        let estimated = estimate_median_age_series(&youth_share);
        if median_age.is_none() {
            median_age = latest(&estimated).copied();
            log::info!("median age estimated from youth share: {:?}", median_age);
        }
        if median_age_history.is_none() {
            median_age_history = Some(estimated);
        }
    }

    let sector_histories = args
        .sector_history
        .as_ref()
        .map(|path| {
            load_sector_histories(path).with_context(|| format!("reading {}", path.display()))
        })
        .transpose()?
        .unwrap_or_default();

    let inputs = OutlookInputs {
        current_gdp: args.current_gdp_billion * 1e9,
        target_gdp: args.target_gdp_billion * 1e9,
        current_year: args.current_year.unwrap_or_else(|| chrono::Local::now().year()),
        target_year: args.target_year,
        latest_growth: args.latest_growth,
        population: args.population,
        median_age,
        dependency_ratio: args.dependency_ratio,
        median_age_history,
        sector_histories,
        peers: args.peers,
        ..Default::default()
    };
    log::info!(
        "projecting {} -> {}",
        inputs.current_year, inputs.target_year
    );

    let outlook = runner.run(&inputs).context(
        "please enter positive values for all inputs and ensure target year is in the future",
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outlook)?);
    } else {
        print_report(&outlook);
    }
    Ok(())
}

fn or_na(value: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| "N/A".to_string())
}

fn print_report(outlook: &EconomicOutlook) {
    println!("Required GDP Growth Calculator");
    println!("==============================\n");

    println!("Horizon: {} -> {} ({} years)",
        outlook.current_year, outlook.target_year, outlook.horizon_years);
    println!("  Required Per Annum Growth: {}",
        or_na(outlook.required_growth, |r| format!("{:.2}%", r)));

    match &outlook.growth_comparison {
        Some(c) => println!(
            "  Latest GDP Growth ({}): {:.2}% [{}]",
            c.latest_year.map(|y| y.to_string()).unwrap_or_default(),
            c.latest_rate,
            if c.on_track { "on track" } else { "below required" },
        ),
        None => println!("  Latest GDP Growth: N/A"),
    }

    println!("\nPer Capita GDP");
    println!("  Current:   {}", or_na(outlook.current_per_capita, |v| format!("$ {:.2}", v)));
    println!("  Projected: {}", or_na(outlook.projected_per_capita, |v| format!("$ {:.2}", v)));
    if !outlook.closest_peers.is_empty() {
        println!("  Closest economies today:");
        for peer in &outlook.closest_peers {
            println!("    {:<20} $ {:.2}", peer.country, peer.per_capita_gdp);
        }
    }

    println!("\nDemographics ({})", outlook.target_year);
    println!("  Projected Population: {}", or_na(outlook.projected_population, |v| format!("{:.0}", v)));
    println!("  Projected Median Age: {}", or_na(outlook.projected_median_age, |v| format!("{:.1} years", v)));
    println!("  Population Category:  {}",
        outlook.age_category.map(|c| c.to_string()).unwrap_or_else(|| "N/A".to_string()));
    println!("  Dependency Level:     {}",
        outlook.dependency_level.map(|d| d.to_string()).unwrap_or_else(|| "N/A".to_string()));

    if outlook.sector_projections.is_empty() {
        println!("\nSector projections: N/A");
        return;
    }

    println!("\nSector Projections ({})", outlook.target_year);
    println!("{:<14} {:>9} {:>10} {:>10} {:>12}", "Sector", "Current", "Projected", "Share", "AnnualGrowth");
    println!("{}", "-".repeat(59));
    for (sector, p) in &outlook.sector_projections {
        let share = outlook
            .projected_sector_shares
            .as_ref()
            .and_then(|s| s.get(sector));
        println!("{:<14} {:>8.1}% {:>9.1}% {:>10} {:>12}",
            sector,
            p.current_value,
            p.projected_value,
            or_na(share, |s| format!("{:.1}%", s)),
            or_na(p.annual_growth_rate, |r| format!("{:.2}%", r)),
        );
    }
}
