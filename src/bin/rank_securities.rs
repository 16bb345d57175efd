//! Score the security table and print it sorted by attractiveness

use anyhow::{Context, Result};
use clap::Parser;
use macro_scenarios::report::{recommendation_counts, security_table};
use macro_scenarios::{rank_by_attractiveness, Assumptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Rank securities by attractiveness score")]
struct Args {
    /// Security table (CSV)
    #[arg(long)]
    securities: Option<PathBuf>,

    /// Only show the top N securities
    #[arg(long)]
    top: Option<usize>,

    /// Print rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let assumptions = Assumptions::from_paths(None, args.securities.as_deref())
        .context("Failed to load security table")?;
    let ranked = rank_by_attractiveness(&assumptions.securities);
    let mut rows = security_table(&ranked);
    if let Some(n) = args.top {
        rows.truncate(n);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Top Securities by Attractiveness Score:");
    println!(
        "{:<36} {:<13} {:<6} {:>6} {:>7} {:>8}  {}",
        "Security", "Type", "Rating", "YTM", "Spread", "Score", "Recommendation"
    );
    for row in &rows {
        println!(
            "{:<36} {:<13} {:<6} {:>6.2} {:>7.0} {:>8.4}  {}",
            row.security,
            row.security_type.label(),
            row.credit_rating.label(),
            row.ytm,
            row.spread_bps,
            row.attractiveness_score,
            row.recommendation
        );
    }

    println!();
    for (rec, count) in recommendation_counts(&ranked) {
        println!("  {:<20} {}", rec.label(), count);
    }

    Ok(())
}
