//! Year-by-year macro indicator paths produced by one projection run

use crate::assumptions::{CreditRating, InitialMetrics};
use serde::Serialize;

/// Index 0 holds the initial metrics, index i the value after i projected years.
/// Every field has `horizon + 1` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroTrajectory {
    years: Vec<i32>,
    gdp_growth: Vec<f64>,
    debt_to_gdp: Vec<f64>,
    unemployment: Vec<f64>,
    bond_yield: Vec<f64>,
    credit_rating: Vec<CreditRating>,
}

impl MacroTrajectory {
    pub(crate) fn start(base_year: i32, initial: &InitialMetrics, horizon: usize) -> Self {
        let mut trajectory = Self {
            years: Vec::with_capacity(horizon + 1),
            gdp_growth: Vec::with_capacity(horizon + 1),
            debt_to_gdp: Vec::with_capacity(horizon + 1),
            unemployment: Vec::with_capacity(horizon + 1),
            bond_yield: Vec::with_capacity(horizon + 1),
            credit_rating: Vec::with_capacity(horizon + 1),
        };
        trajectory.years.push(base_year);
        trajectory.gdp_growth.push(initial.gdp_growth);
        trajectory.debt_to_gdp.push(initial.debt_to_gdp);
        trajectory.unemployment.push(initial.unemployment);
        trajectory.bond_yield.push(initial.bond_yield_10y);
        trajectory.credit_rating.push(initial.credit_rating);
        trajectory
    }

    pub(crate) fn push_year(
        &mut self,
        gdp_growth: f64,
        debt_to_gdp: f64,
        unemployment: f64,
        bond_yield: f64,
        credit_rating: CreditRating,
    ) {
        let next_year = self.years.last().map_or(0, |y| y + 1);
        self.years.push(next_year);
        self.gdp_growth.push(gdp_growth);
        self.debt_to_gdp.push(debt_to_gdp);
        self.unemployment.push(unemployment);
        self.bond_yield.push(bond_yield);
        self.credit_rating.push(credit_rating);
    }

    /// Number of projected years (entries minus the initial year)
    pub fn horizon(&self) -> usize {
        self.years.len().saturating_sub(1)
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn gdp_growth(&self) -> &[f64] {
        &self.gdp_growth
    }

    pub fn debt_to_gdp(&self) -> &[f64] {
        &self.debt_to_gdp
    }

    pub fn unemployment(&self) -> &[f64] {
        &self.unemployment
    }

    pub fn bond_yield(&self) -> &[f64] {
        &self.bond_yield
    }

    pub fn credit_rating(&self) -> &[CreditRating] {
        &self.credit_rating
    }

    pub fn final_rating(&self) -> Option<CreditRating> {
        self.credit_rating.last().copied()
    }

    /// Net notches moved over the horizon; positive = upgraded
    pub fn net_notch_change(&self) -> i32 {
        match (self.credit_rating.first(), self.credit_rating.last()) {
            (Some(first), Some(last)) => first.ordinal() as i32 - last.ordinal() as i32,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_push() {
        let initial = InitialMetrics::canada_2025();
        let mut t = MacroTrajectory::start(2025, &initial, 2);
        assert_eq!(t.horizon(), 0);
        assert_eq!(t.credit_rating(), &[CreditRating::AaPlus]);

        t.push_year(0.02, 1.05, 0.06, 0.035, CreditRating::AaPlus);
        t.push_year(0.02, 1.12, 0.06, 0.036, CreditRating::Aa);
        assert_eq!(t.horizon(), 2);
        assert_eq!(t.years(), &[2025, 2026, 2027]);
        assert_eq!(t.bond_yield(), &[0.034, 0.035, 0.036]);
        assert_eq!(t.final_rating(), Some(CreditRating::Aa));
        assert_eq!(t.net_notch_change(), -1);
    }
}
