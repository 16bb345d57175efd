//! Credit rating state machine
//!
//! Once per projected year the rating may move by at most one notch, driven by
//! that year's own debt-to-GDP and unemployment. Upgrade is tested first, so
//! it wins if both conditions could hold.

use crate::assumptions::{CreditRating, RatingScale};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Thresholds for the annual rating review
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingTransitionRule {
    /// Upgrade requires debt-to-GDP strictly below this...
    pub upgrade_max_debt_to_gdp: f64,
    /// ...and unemployment strictly below this
    pub upgrade_max_unemployment: f64,
    /// Downgrade if debt-to-GDP is strictly above this...
    pub downgrade_min_debt_to_gdp: f64,
    /// ...or unemployment is strictly above this
    pub downgrade_min_unemployment: f64,
}

impl Default for RatingTransitionRule {
    fn default() -> Self {
        Self {
            upgrade_max_debt_to_gdp: 0.85,
            upgrade_max_unemployment: 0.055,
            downgrade_min_debt_to_gdp: 1.10,
            downgrade_min_unemployment: 0.07,
        }
    }
}

/// Outcome of one annual review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingTransition {
    Upgrade,
    Downgrade,
    Hold,
}

impl RatingTransitionRule {
    pub fn evaluate(&self, debt_to_gdp: f64, unemployment: f64) -> RatingTransition {
        if debt_to_gdp < self.upgrade_max_debt_to_gdp
            && unemployment < self.upgrade_max_unemployment
        {
            RatingTransition::Upgrade
        } else if debt_to_gdp > self.downgrade_min_debt_to_gdp
            || unemployment > self.downgrade_min_unemployment
        {
            RatingTransition::Downgrade
        } else {
            RatingTransition::Hold
        }
    }
}

/// Current rating, kept within a scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingState {
    current: CreditRating,
    scale: RatingScale,
}

impl RatingState {
    /// Fails if `initial` is not on `scale`
    pub fn new(initial: CreditRating, scale: RatingScale) -> Result<Self> {
        Ok(Self {
            current: scale.check(initial)?,
            scale,
        })
    }

    pub fn current(&self) -> CreditRating {
        self.current
    }

    pub fn apply(&mut self, transition: RatingTransition) -> CreditRating {
        self.current = match transition {
            RatingTransition::Upgrade => self.scale.upgrade(self.current),
            RatingTransition::Downgrade => self.scale.downgrade(self.current),
            RatingTransition::Hold => self.current,
        };
        self.current
    }

    /// Review one year and return the rating recorded for it
    pub fn step(
        &mut self,
        rule: &RatingTransitionRule,
        debt_to_gdp: f64,
        unemployment: f64,
    ) -> CreditRating {
        let transition = rule.evaluate(debt_to_gdp, unemployment);
        let before = self.current;
        let after = self.apply(transition);
        if before != after {
            log::debug!(
                "rating {:?}: {} -> {} (debt {:.4}, unemployment {:.4})",
                transition,
                before,
                after,
                debt_to_gdp,
                unemployment
            );
        }
        after
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn state(rating: CreditRating) -> RatingState {
        RatingState::new(rating, RatingScale::sovereign()).unwrap()
    }

    #[test]
    fn test_upgrade_and_downgrade_one_notch() {
        let rule = RatingTransitionRule::default();

        let mut s = state(CreditRating::AaPlus);
        assert_eq!(s.step(&rule, 0.80, 0.05), CreditRating::Aaa);
        assert_eq!(s.current().ordinal(), 1);

        let mut s = state(CreditRating::AaPlus);
        assert_eq!(s.step(&rule, 1.15, 0.05), CreditRating::Aa);
        assert_eq!(s.current().ordinal(), 3);
    }

    #[test]
    fn test_dead_zone_holds() {
        let rule = RatingTransitionRule::default();
        assert_eq!(rule.evaluate(1.00, 0.06), RatingTransition::Hold);
        // Low debt alone is not enough to upgrade
        assert_eq!(rule.evaluate(0.80, 0.06), RatingTransition::Hold);
        // Thresholds are strict
        assert_eq!(rule.evaluate(0.85, 0.05), RatingTransition::Hold);
        assert_eq!(rule.evaluate(1.10, 0.07), RatingTransition::Hold);
        assert_eq!(rule.evaluate(1.00, 0.0701), RatingTransition::Downgrade);
    }

    #[test]
    fn test_upgrade_takes_precedence() {
        // Overlapping thresholds make both conditions true
        let rule = RatingTransitionRule {
            upgrade_max_debt_to_gdp: 2.0,
            upgrade_max_unemployment: 0.10,
            downgrade_min_debt_to_gdp: 0.5,
            downgrade_min_unemployment: 0.01,
        };
        assert_eq!(rule.evaluate(1.0, 0.05), RatingTransition::Upgrade);
    }

    #[test]
    fn test_clamped_on_pathological_paths() {
        let rule = RatingTransitionRule::default();
        let scale = RatingScale::sovereign();

        let mut s = state(CreditRating::AaMinus);
        for _ in 0..20 {
            let r = s.step(&rule, 0.10, 0.01);
            assert!(scale.contains(r));
        }
        assert_eq!(s.current(), CreditRating::Aaa);

        let mut s = state(CreditRating::AaMinus);
        for _ in 0..20 {
            let r = s.step(&rule, 3.0, 0.20);
            assert!(scale.contains(r));
        }
        assert_eq!(s.current(), CreditRating::APlus);
    }

    #[test]
    fn test_nan_inputs_hold() {
        let rule = RatingTransitionRule::default();
        assert_eq!(rule.evaluate(f64::NAN, f64::NAN), RatingTransition::Hold);
    }

    #[test]
    fn test_initial_rating_must_be_on_scale() {
        let err = RatingState::new(CreditRating::BbbPlus, RatingScale::sovereign()).unwrap_err();
        assert!(matches!(err, ConfigError::RatingOutsideScale { .. }));
    }

    #[test]
    fn test_partial_rule_deserializes_with_defaults() {
        let rule: RatingTransitionRule =
            serde_json::from_str(r#"{"downgrade_min_debt_to_gdp": 1.2}"#).unwrap();
        assert_eq!(rule.downgrade_min_debt_to_gdp, 1.2);
        assert_eq!(rule.upgrade_max_debt_to_gdp, 0.85);
    }
}
