//! Macro trajectory projector

use super::returns::{compound_returns, ReturnSeries};
use super::state::{RatingState, RatingTransitionRule};
use super::MacroTrajectory;
use crate::assumptions::{InitialMetrics, RatingScale, ScenarioParams, ScenarioSet};
use crate::error::{ConfigError, Result};
use rayon::prelude::*;
use serde::Serialize;

/// Settings shared by every scenario in a run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of projected years
    pub horizon: usize,
    /// Calendar year of index 0
    pub base_year: i32,
    pub rule: RatingTransitionRule,
    pub scale: RatingScale,
}

impl ProjectionConfig {
    pub fn with_horizon(horizon: usize) -> Self {
        Self {
            horizon,
            ..Default::default()
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon: super::DEFAULT_HORIZON,
            base_year: super::DEFAULT_BASE_YEAR,
            rule: RatingTransitionRule::default(),
            scale: RatingScale::sovereign(),
        }
    }
}

/// Projection output for one named scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioProjection {
    pub name: String,
    pub display_color: String,
    pub trajectory: MacroTrajectory,
    pub returns: ReturnSeries,
}

/// Projects scenarios from a fixed starting point
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    initial: InitialMetrics,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Fails if the horizon is zero or the initial rating is off the scale
    pub fn new(initial: InitialMetrics, config: ProjectionConfig) -> Result<Self> {
        if config.horizon < 1 {
            return Err(ConfigError::HorizonTooShort(config.horizon));
        }
        config.scale.check(initial.credit_rating)?;
        Ok(Self { initial, config })
    }

    pub fn initial(&self) -> &InitialMetrics {
        &self.initial
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Build the full trajectory for one scenario, or fail without partial output
    pub fn project(&self, params: &ScenarioParams) -> Result<MacroTrajectory> {
        let horizon = self.config.horizon;
        params.check_horizon(horizon)?;

        let mut rating = RatingState::new(self.initial.credit_rating, self.config.scale)?;
        let mut trajectory = MacroTrajectory::start(self.config.base_year, &self.initial, horizon);
        let mut debt_to_gdp = self.initial.debt_to_gdp;
        let mut bond_yield = self.initial.bond_yield_10y;

        for i in 0..horizon {
            let gdp_growth = params.gdp_growth_path()[i];
            let unemployment = params.unemployment_path()[i];

            // Additive change, then deflated by nominal growth of the denominator
            debt_to_gdp = (debt_to_gdp + params.debt_annual_change()[i]) / (1.0 + gdp_growth);
            bond_yield += params.bond_yield_change()[i];

            if debt_to_gdp < 0.0 {
                log::warn!(
                    "scenario '{}' year {}: debt-to-GDP went negative ({:.4})",
                    params.name(),
                    i + 1,
                    debt_to_gdp
                );
            }

            let credit_rating = rating.step(&self.config.rule, debt_to_gdp, unemployment);
            trajectory.push_year(gdp_growth, debt_to_gdp, unemployment, bond_yield, credit_rating);
        }

        Ok(trajectory)
    }

    /// Trajectory plus bond return series for one scenario
    pub fn project_scenario(&self, params: &ScenarioParams) -> Result<ScenarioProjection> {
        let trajectory = self.project(params)?;
        let returns = compound_returns(&trajectory);
        Ok(ScenarioProjection {
            name: params.name().to_string(),
            display_color: params.display_color().to_string(),
            trajectory,
            returns,
        })
    }

    /// Project every scenario in parallel; output keeps the input order
    pub fn project_all(&self, scenarios: &ScenarioSet) -> Result<Vec<ScenarioProjection>> {
        let projections = scenarios
            .as_slice()
            .par_iter()
            .map(|params| self.project_scenario(params))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "projected {} scenarios over {} years from {}",
            projections.len(),
            self.config.horizon,
            self.config.base_year
        );
        Ok(projections)
    }
}

/// Project one scenario with the default rule, scale and base year
pub fn project(
    initial: &InitialMetrics,
    params: &ScenarioParams,
    horizon: usize,
) -> Result<MacroTrajectory> {
    ProjectionEngine::new(*initial, ProjectionConfig::with_horizon(horizon))?.project(params)
}
