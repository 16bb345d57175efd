//! Per-security scoring

use super::{
    DEFAULT_PROBABILITY_FLOOR, DURATION_PENALTY, ESG_WEIGHT, HIGHLY_RECOMMENDED_MIN,
    LIQUIDITY_WEIGHT, NEUTRAL_MIN, RECOMMENDED_MIN, RISK_ADJUSTED_RETURN_WEIGHT,
};
use crate::assumptions::Security;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation category, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    Underweight,
    Neutral,
    Recommended,
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
}

impl Recommendation {
    /// Bucket an attractiveness score, checking the highest bucket first
    pub fn from_score(attractiveness: f64) -> Self {
        if attractiveness >= HIGHLY_RECOMMENDED_MIN {
            Recommendation::HighlyRecommended
        } else if attractiveness >= RECOMMENDED_MIN {
            Recommendation::Recommended
        } else if attractiveness >= NEUTRAL_MIN {
            Recommendation::Neutral
        } else {
            Recommendation::Underweight
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Underweight => "Underweight",
            Recommendation::Neutral => "Neutral",
            Recommendation::Recommended => "Recommended",
            Recommendation::HighlyRecommended => "Highly Recommended",
        }
    }

    /// Best first
    pub fn all() -> [Recommendation; 4] {
        [
            Recommendation::HighlyRecommended,
            Recommendation::Recommended,
            Recommendation::Neutral,
            Recommendation::Underweight,
        ]
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A security with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSecurity {
    #[serde(flatten)]
    pub security: Security,
    pub risk_adjusted_return: f64,
    pub attractiveness_score: f64,
    pub recommendation: Recommendation,
}

/// Score one security. Pure; no clamping of extreme values.
pub fn score(security: &Security) -> ScoredSecurity {
    let risk_adjusted_return =
        (security.spread_bps / 100.0) / (security.default_probability_pct + DEFAULT_PROBABILITY_FLOOR);

    let attractiveness_score = risk_adjusted_return * RISK_ADJUSTED_RETURN_WEIGHT
        + (security.esg_score / 100.0) * ESG_WEIGHT
        + (security.liquidity_score / 10.0) * LIQUIDITY_WEIGHT
        - (security.duration_years / 10.0) * DURATION_PENALTY;

    ScoredSecurity {
        security: security.clone(),
        risk_adjusted_return,
        attractiveness_score,
        recommendation: Recommendation::from_score(attractiveness_score),
    }
}

/// Score each security in parallel, keeping input order
pub fn score_all(securities: &[Security]) -> Vec<ScoredSecurity> {
    securities.par_iter().map(score).collect()
}

/// Score and sort by attractiveness, most attractive first. Ties keep input order.
pub fn rank_by_attractiveness(securities: &[Security]) -> Vec<ScoredSecurity> {
    let mut scored = score_all(securities);
    scored.sort_by(|a, b| b.attractiveness_score.total_cmp(&a.attractiveness_score));
    log::info!("ranked {} securities", scored.len());
    scored
}
