//! Project every scenario and print the rating table and bond end values
//!
//! Uses the built-in Canada 2025 scenarios unless `--config` points at a JSON file.

use anyhow::{Context, Result};
use clap::Parser;
use macro_scenarios::report::{rating_table, trajectory_rows};
use macro_scenarios::Assumptions;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(about = "Project macro scenarios and compound bond returns")]
struct Args {
    /// Scenario configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write per-scenario, per-year rows to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print projections as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let assumptions = Assumptions::from_paths(args.config.as_deref(), None)
        .context("Failed to load scenario configuration")?;
    let engine = assumptions.engine()?;
    let projections = engine.project_all(&assumptions.scenarios)?;
    log::info!("projections complete in {:?}", start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
    } else {
        let table = rating_table(&projections);
        println!("Credit Rating Projections by Scenario:");
        let mut header = format!("{:<14}", "Scenario");
        if let Some(row) = table.first() {
            for (year, _) in &row.ratings {
                header.push_str(&format!("{:>6}", year));
            }
        }
        println!("{}", header);
        for row in &table {
            let mut line = format!("{:<14}", row.scenario);
            for (_, rating) in &row.ratings {
                line.push_str(&format!("{:>6}", rating.label()));
            }
            println!("{}", line);
        }

        println!("\nCumulative value of $1 invested in 10Y bonds:");
        for p in &projections {
            println!("  {} (End Value: ${:.2})", p.name, p.returns.end_value());
        }
    }

    if let Some(path) = &args.output {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        for row in trajectory_rows(&projections) {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        println!("\nOutput written to {}", path.display());
    }

    Ok(())
}
