//! Flat rows for charting and tabular display
//!
//! Rendering itself happens elsewhere; these are the shapes handed over.

use crate::assumptions::{CreditRating, SecurityType};
use crate::projection::ScenarioProjection;
use crate::scoring::{Recommendation, ScoredSecurity};
use serde::Serialize;

/// Rating path of one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingTableRow {
    pub scenario: String,
    pub ratings: Vec<(i32, CreditRating)>,
}

/// One scenario-year of the projection, with the bond position's value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryRow {
    pub scenario: String,
    pub year: i32,
    pub gdp_growth: f64,
    pub debt_to_gdp: f64,
    pub unemployment: f64,
    pub bond_yield: f64,
    pub credit_rating: CreditRating,
    /// Return earned over the following year; empty in the final year
    pub annual_return: Option<f64>,
    pub cumulative_value: f64,
}

/// One line of the security opportunity table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityTableRow {
    pub security: String,
    #[serde(rename = "type")]
    pub security_type: SecurityType,
    pub credit_rating: CreditRating,
    pub ytm: f64,
    pub spread_bps: f64,
    pub attractiveness_score: f64,
    pub recommendation: Recommendation,
}

pub fn rating_table(projections: &[ScenarioProjection]) -> Vec<RatingTableRow> {
    projections
        .iter()
        .map(|p| RatingTableRow {
            scenario: p.name.clone(),
            ratings: p
                .trajectory
                .years()
                .iter()
                .copied()
                .zip(p.trajectory.credit_rating().iter().copied())
                .collect(),
        })
        .collect()
}

pub fn trajectory_rows(projections: &[ScenarioProjection]) -> Vec<TrajectoryRow> {
    let mut rows = Vec::new();
    for p in projections {
        let t = &p.trajectory;
        for (i, year) in t.years().iter().enumerate() {
            rows.push(TrajectoryRow {
                scenario: p.name.clone(),
                year: *year,
                gdp_growth: t.gdp_growth()[i],
                debt_to_gdp: t.debt_to_gdp()[i],
                unemployment: t.unemployment()[i],
                bond_yield: t.bond_yield()[i],
                credit_rating: t.credit_rating()[i],
                annual_return: p.returns.annual_returns().get(i).copied(),
                cumulative_value: p.returns.cumulative_value()[i],
            });
        }
    }
    rows
}

/// Table rows in the order given; pass a ranked slice for a descending table
pub fn security_table(scored: &[ScoredSecurity]) -> Vec<SecurityTableRow> {
    scored
        .iter()
        .map(|s| SecurityTableRow {
            security: s.security.name.clone(),
            security_type: s.security.security_type,
            credit_rating: s.security.credit_rating,
            ytm: s.security.ytm,
            spread_bps: s.security.spread_bps,
            attractiveness_score: s.attractiveness_score,
            recommendation: s.recommendation,
        })
        .collect()
}

/// Count per recommendation, best first, including empty buckets
pub fn recommendation_counts(scored: &[ScoredSecurity]) -> Vec<(Recommendation, usize)> {
    Recommendation::all()
        .into_iter()
        .map(|rec| (rec, scored.iter().filter(|s| s.recommendation == rec).count()))
        .collect()
}
