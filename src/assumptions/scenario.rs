//! Starting macro metrics and per-scenario parameter paths

use super::rating::CreditRating;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Macro indicators at the start of the horizon (year 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialMetrics {
    /// Real GDP growth rate (0.012 = 1.2%)
    pub gdp_growth: f64,
    /// Government debt as a ratio of GDP (1.07 = 107%)
    pub debt_to_gdp: f64,
    pub unemployment: f64,
    pub bond_yield_10y: f64,
    pub credit_rating: CreditRating,
}

impl InitialMetrics {
    /// Canada, 2025 (World Bank growth, IMF debt, StatCan unemployment, BoC yield, S&P rating)
    pub fn canada_2025() -> Self {
        Self {
            gdp_growth: 0.012,
            debt_to_gdp: 1.07,
            unemployment: 0.067,
            bond_yield_10y: 0.034,
            credit_rating: CreditRating::AaPlus,
        }
    }
}

impl Default for InitialMetrics {
    fn default() -> Self {
        Self::canada_2025()
    }
}

/// One named scenario's year-by-year parameter paths
///
/// All four paths have the same length, checked at construction. That length
/// is the scenario's horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioRecord", into = "ScenarioRecord")]
pub struct ScenarioParams {
    name: String,
    gdp_growth_path: Vec<f64>,
    debt_annual_change: Vec<f64>,
    unemployment_path: Vec<f64>,
    bond_yield_change: Vec<f64>,
    display_color: String,
}

/// Unvalidated wire form of [`ScenarioParams`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRecord {
    name: String,
    gdp_growth_path: Vec<f64>,
    debt_annual_change: Vec<f64>,
    unemployment_path: Vec<f64>,
    bond_yield_change: Vec<f64>,
    #[serde(default)]
    display_color: String,
}

impl TryFrom<ScenarioRecord> for ScenarioParams {
    type Error = ConfigError;

    fn try_from(r: ScenarioRecord) -> Result<Self> {
        ScenarioParams::new(
            r.name,
            r.gdp_growth_path,
            r.debt_annual_change,
            r.unemployment_path,
            r.bond_yield_change,
            r.display_color,
        )
    }
}

impl From<ScenarioParams> for ScenarioRecord {
    fn from(p: ScenarioParams) -> Self {
        Self {
            name: p.name,
            gdp_growth_path: p.gdp_growth_path,
            debt_annual_change: p.debt_annual_change,
            unemployment_path: p.unemployment_path,
            bond_yield_change: p.bond_yield_change,
            display_color: p.display_color,
        }
    }
}

impl ScenarioParams {
    pub fn new(
        name: impl Into<String>,
        gdp_growth_path: Vec<f64>,
        debt_annual_change: Vec<f64>,
        unemployment_path: Vec<f64>,
        bond_yield_change: Vec<f64>,
        display_color: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let lengths = [
            gdp_growth_path.len(),
            debt_annual_change.len(),
            unemployment_path.len(),
            bond_yield_change.len(),
        ];
        if lengths.iter().any(|&len| len != lengths[0]) {
            return Err(ConfigError::UnequalPathLengths {
                scenario: name,
                lengths,
            });
        }
        if lengths[0] == 0 {
            return Err(ConfigError::HorizonTooShort(0));
        }

        Ok(Self {
            name,
            gdp_growth_path,
            debt_annual_change,
            unemployment_path,
            bond_yield_change,
            display_color: display_color.into(),
        })
    }

    /// Steady growth, slow debt reduction, stable yields
    pub fn baseline() -> Self {
        Self {
            name: "Baseline".to_string(),
            gdp_growth_path: vec![0.018, 0.019, 0.017, 0.016, 0.017],
            debt_annual_change: vec![0.01, 0.005, 0.0, -0.005, -0.01],
            unemployment_path: vec![0.060, 0.059, 0.058, 0.058, 0.057],
            bond_yield_change: vec![0.001, 0.0, -0.001, -0.001, 0.0],
            display_color: "blue".to_string(),
        }
    }

    /// Strong growth, significant debt reduction, declining yields
    pub fn optimistic() -> Self {
        Self {
            name: "Optimistic".to_string(),
            gdp_growth_path: vec![0.022, 0.024, 0.026, 0.025, 0.024],
            debt_annual_change: vec![-0.01, -0.015, -0.02, -0.025, -0.03],
            unemployment_path: vec![0.058, 0.055, 0.052, 0.050, 0.048],
            bond_yield_change: vec![-0.002, -0.003, -0.003, -0.002, -0.001],
            display_color: "green".to_string(),
        }
    }

    /// Weak growth, rising debt and unemployment, rising yields
    pub fn pessimistic() -> Self {
        Self {
            name: "Pessimistic".to_string(),
            gdp_growth_path: vec![0.01, 0.008, 0.005, 0.006, 0.007],
            debt_annual_change: vec![0.02, 0.025, 0.03, 0.025, 0.02],
            unemployment_path: vec![0.063, 0.067, 0.070, 0.072, 0.070],
            bond_yield_change: vec![0.004, 0.005, 0.006, 0.004, 0.003],
            display_color: "red".to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of projected years
    pub fn horizon(&self) -> usize {
        self.gdp_growth_path.len()
    }

    pub fn gdp_growth_path(&self) -> &[f64] {
        &self.gdp_growth_path
    }

    pub fn debt_annual_change(&self) -> &[f64] {
        &self.debt_annual_change
    }

    pub fn unemployment_path(&self) -> &[f64] {
        &self.unemployment_path
    }

    pub fn bond_yield_change(&self) -> &[f64] {
        &self.bond_yield_change
    }

    pub fn display_color(&self) -> &str {
        &self.display_color
    }

    /// Check every path against an expected horizon
    pub fn check_horizon(&self, horizon: usize) -> Result<()> {
        if horizon < 1 {
            return Err(ConfigError::HorizonTooShort(horizon));
        }
        let paths: [(&'static str, usize); 4] = [
            ("gdp_growth_path", self.gdp_growth_path.len()),
            ("debt_annual_change", self.debt_annual_change.len()),
            ("unemployment_path", self.unemployment_path.len()),
            ("bond_yield_change", self.bond_yield_change.len()),
        ];
        for (field, actual) in paths {
            if actual != horizon {
                return Err(ConfigError::PathLengthMismatch {
                    scenario: self.name.clone(),
                    field,
                    expected: horizon,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Scenarios in declaration order, names unique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScenarioParams>", into = "Vec<ScenarioParams>")]
pub struct ScenarioSet {
    scenarios: Vec<ScenarioParams>,
}

impl ScenarioSet {
    pub fn new(scenarios: Vec<ScenarioParams>) -> Result<Self> {
        let mut seen = HashSet::new();
        for scenario in &scenarios {
            if !seen.insert(scenario.name()) {
                return Err(ConfigError::DuplicateScenario(scenario.name().to_string()));
            }
        }
        Ok(Self { scenarios })
    }

    /// Baseline, Optimistic, Pessimistic
    pub fn canada_2025() -> Self {
        Self {
            scenarios: vec![
                ScenarioParams::baseline(),
                ScenarioParams::optimistic(),
                ScenarioParams::pessimistic(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioParams> {
        self.scenarios.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioParams> {
        self.scenarios.iter()
    }

    pub fn as_slice(&self) -> &[ScenarioParams] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl TryFrom<Vec<ScenarioParams>> for ScenarioSet {
    type Error = ConfigError;

    fn try_from(scenarios: Vec<ScenarioParams>) -> Result<Self> {
        Self::new(scenarios)
    }
}

impl From<ScenarioSet> for Vec<ScenarioParams> {
    fn from(set: ScenarioSet) -> Self {
        set.scenarios
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self::canada_2025()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenarios_are_consistent() {
        let set = ScenarioSet::canada_2025();
        let names: Vec<&str> = set.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Baseline", "Optimistic", "Pessimistic"]);

        for scenario in set.iter() {
            assert_eq!(scenario.horizon(), 5);
            assert!(scenario.check_horizon(5).is_ok());
        }
        assert_eq!(set.get("Pessimistic").unwrap().display_color(), "red");
        assert!(set.get("Stagflation").is_none());
    }

    #[test]
    fn test_unequal_paths_rejected() {
        let err = ScenarioParams::new(
            "Broken",
            vec![0.01, 0.02],
            vec![0.0, 0.0],
            vec![0.05],
            vec![0.0, 0.0],
            "grey",
        )
        .unwrap_err();
        match err {
            ConfigError::UnequalPathLengths { scenario, lengths } => {
                assert_eq!(scenario, "Broken");
                assert_eq!(lengths, [2, 2, 1, 2]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_paths_rejected() {
        let err = ScenarioParams::new("Empty", vec![], vec![], vec![], vec![], "").unwrap_err();
        assert!(matches!(err, ConfigError::HorizonTooShort(0)));
    }

    #[test]
    fn test_check_horizon_reports_field() {
        let err = ScenarioParams::baseline().check_horizon(6).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PathLengthMismatch { field: "gdp_growth_path", expected: 6, actual: 5, .. }
        ));
        assert!(matches!(
            ScenarioParams::baseline().check_horizon(0),
            Err(ConfigError::HorizonTooShort(0))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ScenarioSet::new(vec![ScenarioParams::baseline(), ScenarioParams::baseline()])
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateScenario(ref n) if n == "Baseline"));
    }

    #[test]
    fn test_deserialize_validates_lengths() {
        let json = r#"{
            "name": "Short",
            "gdp_growth_path": [0.01, 0.02],
            "debt_annual_change": [0.0],
            "unemployment_path": [0.05, 0.05],
            "bond_yield_change": [0.0, 0.0]
        }"#;
        let parsed: std::result::Result<ScenarioParams, _> = serde_json::from_str(json);
        assert!(parsed.is_err());

        let json = serde_json::to_string(&ScenarioParams::optimistic()).unwrap();
        let back: ScenarioParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ScenarioParams::optimistic());
    }

    #[test]
    fn test_initial_metrics_rating_label() {
        let json = r#"{
            "gdp_growth": 0.012,
            "debt_to_gdp": 1.07,
            "unemployment": 0.067,
            "bond_yield_10y": 0.034,
            "credit_rating": "AA+"
        }"#;
        let metrics: InitialMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics, InitialMetrics::canada_2025());
    }
}
