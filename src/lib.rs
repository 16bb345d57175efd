//! Macro Scenarios - deterministic sovereign macro projections and fixed income scoring
//!
//! This library provides:
//! - Year-by-year projection of GDP growth, debt-to-GDP, unemployment and the
//!   10-year bond yield under named scenarios
//! - A rule-based credit rating state machine driven by the projected metrics
//! - Compounded hold-to-horizon bond returns per scenario
//! - Attractiveness scoring and recommendation buckets for a security table

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod scoring;
pub mod report;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use assumptions::{Assumptions, CreditRating, InitialMetrics, ScenarioParams, ScenarioSet, Security};
pub use projection::{project, compound_returns, MacroTrajectory, ProjectionEngine, ReturnSeries};
pub use scoring::{rank_by_attractiveness, score, Recommendation, ScoredSecurity};
