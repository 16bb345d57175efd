//! Static inputs: starting metrics, scenario paths, rating ladder and security table

mod rating;
mod scenario;
mod securities;
pub mod loader;

pub use rating::{CreditRating, RatingScale};
pub use scenario::{InitialMetrics, ScenarioParams, ScenarioSet};
pub use securities::{Security, SecurityType};
pub use loader::{load_scenario_config, load_securities, ScenarioConfig};

use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine};
use std::path::Path;

/// Everything a run needs
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub initial: InitialMetrics,
    pub scenarios: ScenarioSet,
    pub securities: Vec<Security>,
    pub projection: ProjectionConfig,
}

impl Assumptions {
    /// Canada 2025 starting point, three scenarios and ten securities
    pub fn default_canada() -> Self {
        Self {
            initial: InitialMetrics::canada_2025(),
            scenarios: ScenarioSet::canada_2025(),
            securities: Security::canada_2025(),
            projection: ProjectionConfig::default(),
        }
    }

    /// Load from the shipped files under `data/`
    pub fn from_data_dir(dir: &Path) -> Result<Self> {
        Self::from_paths(
            Some(&dir.join(loader::DEFAULT_SCENARIO_FILE)),
            Some(&dir.join(loader::DEFAULT_SECURITIES_FILE)),
        )
    }

    /// Either file may be omitted, in which case the built-in default is used
    pub fn from_paths(scenarios: Option<&Path>, securities: Option<&Path>) -> Result<Self> {
        let mut assumptions = Self::default_canada();

        if let Some(path) = scenarios {
            let config = load_scenario_config(path)?;
            assumptions.projection = ProjectionConfig {
                horizon: config.resolved_horizon(),
                base_year: config.base_year,
                rule: config.rating_rule,
                ..ProjectionConfig::default()
            };
            assumptions.initial = config.initial_metrics;
            assumptions.scenarios = config.scenarios;
        }
        if let Some(path) = securities {
            assumptions.securities = load_securities(path)?;
        }

        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Initial rating on scale, every scenario sized to the horizon
    pub fn validate(&self) -> Result<()> {
        self.engine()?;
        for scenario in self.scenarios.iter() {
            scenario.check_horizon(self.projection.horizon)?;
        }
        for security in &self.securities {
            security.validate()?;
        }
        Ok(())
    }

    pub fn engine(&self) -> Result<ProjectionEngine> {
        ProjectionEngine::new(self.initial, self.projection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assumptions_valid() {
        let assumptions = Assumptions::default_canada();
        assert!(assumptions.validate().is_ok());
        assert_eq!(assumptions.projection.horizon, 5);
        assert_eq!(assumptions.scenarios.len(), 3);
        assert_eq!(assumptions.securities.len(), 10);
    }

    #[test]
    fn test_horizon_mismatch_detected() {
        let mut assumptions = Assumptions::default_canada();
        assumptions.projection.horizon = 4;
        assert!(assumptions.validate().is_err());
    }

    #[test]
    fn test_data_dir_matches_defaults() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(loader::DEFAULT_DATA_PATH);
        let loaded = Assumptions::from_data_dir(&dir).expect("Failed to load data dir");
        let defaults = Assumptions::default_canada();

        assert_eq!(loaded.initial, defaults.initial);
        assert_eq!(loaded.scenarios, defaults.scenarios);
        assert_eq!(loaded.securities, defaults.securities);
        assert_eq!(loaded.projection.horizon, defaults.projection.horizon);
        assert_eq!(loaded.projection.base_year, defaults.projection.base_year);
    }
}
