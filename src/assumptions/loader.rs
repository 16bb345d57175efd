//! Load scenario configuration (JSON) and the security table (CSV) from disk

use super::scenario::{InitialMetrics, ScenarioSet};
use super::securities::{Security, SecurityRecord};
use crate::error::{ConfigError, Result};
use crate::projection::{RatingTransitionRule, DEFAULT_BASE_YEAR};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default location of the shipped data files
pub const DEFAULT_DATA_PATH: &str = "data";

/// Scenario file relative to [`DEFAULT_DATA_PATH`]
pub const DEFAULT_SCENARIO_FILE: &str = "scenarios/canada_2025.json";

/// Security table relative to [`DEFAULT_DATA_PATH`]
pub const DEFAULT_SECURITIES_FILE: &str = "securities/canada_2025.csv";

/// Contents of a scenario configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_base_year")]
    pub base_year: i32,
    /// Taken from the scenario paths when omitted
    #[serde(default)]
    pub horizon: Option<usize>,
    pub initial_metrics: InitialMetrics,
    pub scenarios: ScenarioSet,
    #[serde(default)]
    pub rating_rule: RatingTransitionRule,
}

fn default_base_year() -> i32 {
    DEFAULT_BASE_YEAR
}

impl ScenarioConfig {
    /// Explicit horizon, else the first scenario's path length
    pub fn resolved_horizon(&self) -> usize {
        self.horizon
            .or_else(|| self.scenarios.iter().next().map(|s| s.horizon()))
            .unwrap_or(crate::projection::DEFAULT_HORIZON)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_scenario_config(path: &Path) -> Result<ScenarioConfig> {
    let config = load_scenario_config_from_reader(open(path)?)?;
    log::info!(
        "loaded {} scenarios from {}",
        config.scenarios.len(),
        path.display()
    );
    Ok(config)
}

pub fn load_scenario_config_from_reader<R: Read>(reader: R) -> Result<ScenarioConfig> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_securities(path: &Path) -> Result<Vec<Security>> {
    let securities = load_securities_from_reader(open(path)?)?;
    log::info!("loaded {} securities from {}", securities.len(), path.display());
    Ok(securities)
}

/// Parse a security CSV; any empty cell is a missing attribute
pub fn load_securities_from_reader<R: Read>(reader: R) -> Result<Vec<Security>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut securities = Vec::new();
    for record in rdr.deserialize::<SecurityRecord>() {
        securities.push(Security::try_from(record?)?);
    }
    Ok(securities)
}
