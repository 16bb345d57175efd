//! Security attractiveness scoring and recommendation buckets

mod scorer;

pub use scorer::{rank_by_attractiveness, score, score_all, Recommendation, ScoredSecurity};

// ============================================================================
// Scoring Weights
// ============================================================================
// Risk-adjusted return carries the most weight, then ESG, then liquidity.
// Duration is a mild penalty.

/// Added to the default probability (in percent) before dividing
pub const DEFAULT_PROBABILITY_FLOOR: f64 = 0.05;

pub const RISK_ADJUSTED_RETURN_WEIGHT: f64 = 1.5;
pub const ESG_WEIGHT: f64 = 1.2;
pub const LIQUIDITY_WEIGHT: f64 = 1.0;
pub const DURATION_PENALTY: f64 = 0.2;

/// Lower bounds (inclusive) of the recommendation buckets
pub const HIGHLY_RECOMMENDED_MIN: f64 = 4.0;
pub const RECOMMENDED_MIN: f64 = 3.0;
pub const NEUTRAL_MIN: f64 = 2.0;
