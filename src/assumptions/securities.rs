//! Security attribute table for the opportunity scoring pass

use super::rating::CreditRating;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityType {
    #[serde(rename = "GoC Bond")]
    GocBond,
    #[serde(rename = "T-Bill")]
    TBill,
    Provincial,
    #[serde(rename = "Bank Senior")]
    BankSenior,
    #[serde(rename = "Covered Bond")]
    CoveredBond,
    Corporate,
    #[serde(rename = "Green Bond")]
    GreenBond,
    #[serde(rename = "Maple Bond")]
    MapleBond,
}

impl SecurityType {
    pub fn label(self) -> &'static str {
        match self {
            SecurityType::GocBond => "GoC Bond",
            SecurityType::TBill => "T-Bill",
            SecurityType::Provincial => "Provincial",
            SecurityType::BankSenior => "Bank Senior",
            SecurityType::CoveredBond => "Covered Bond",
            SecurityType::Corporate => "Corporate",
            SecurityType::GreenBond => "Green Bond",
            SecurityType::MapleBond => "Maple Bond",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the security table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Security {
    #[serde(rename = "security")]
    pub name: String,
    #[serde(rename = "type")]
    pub security_type: SecurityType,
    pub credit_rating: CreditRating,
    /// Yield to maturity in percent (3.12 = 3.12%)
    pub ytm: f64,
    /// Spread over the GoC benchmark in basis points
    pub spread_bps: f64,
    pub duration_years: f64,
    /// 1 (illiquid) to 10 (most liquid)
    pub liquidity_score: f64,
    /// 0 to 100
    pub esg_score: f64,
    /// Default probability over the investment horizon, in percent
    pub default_probability_pct: f64,
}

impl Security {
    /// Range checks on the numeric attributes
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f64, bool, &'static str); 5] = [
            (
                "liquidity_score",
                self.liquidity_score,
                (1.0..=10.0).contains(&self.liquidity_score),
                "[1, 10]",
            ),
            (
                "esg_score",
                self.esg_score,
                (0.0..=100.0).contains(&self.esg_score),
                "[0, 100]",
            ),
            (
                "default_probability_pct",
                self.default_probability_pct,
                self.default_probability_pct >= 0.0,
                "[0, inf)",
            ),
            ("spread_bps", self.spread_bps, self.spread_bps >= 0.0, "[0, inf)"),
            (
                "duration_years",
                self.duration_years,
                self.duration_years >= 0.0,
                "[0, inf)",
            ),
        ];
        for (attribute, value, ok, range) in checks {
            if !ok {
                return Err(ConfigError::AttributeOutOfRange {
                    security: self.name.clone(),
                    attribute,
                    value,
                    range,
                });
            }
        }
        Ok(())
    }

    /// Two securities per category from the 2025 Canadian fixed income universe
    pub fn canada_2025() -> Vec<Security> {
        use CreditRating::*;
        use SecurityType::*;

        // (name, type, rating, ytm, spread, duration, liquidity, esg, default prob)
        let rows: [(&str, SecurityType, CreditRating, f64, f64, f64, f64, f64, f64); 10] = [
            ("Canada 2.25% Mar 2029", GocBond, Aaa, 3.12, 0.0, 3.6, 10.0, 80.0, 0.01),
            ("Canada T-Bill Jun 2026", TBill, Aaa, 3.05, 0.0, 1.2, 10.0, 80.0, 0.01),
            ("Ontario 2.60% Jun 2027", Provincial, AaMinus, 3.50, 45.0, 2.3, 8.0, 75.0, 0.15),
            ("British Columbia 2.95% Dec 2028", Provincial, Aaa, 3.35, 25.0, 3.5, 7.0, 90.0, 0.05),
            ("TD 3.25% Apr 2026", BankSenior, AaMinus, 3.70, 60.0, 1.1, 8.0, 72.0, 0.18),
            ("RBC Covered 1.875% Jun 2026", CoveredBond, Aaa, 3.25, 15.0, 1.2, 7.0, 70.0, 0.08),
            ("BCE 3.50% Sep 2027", Corporate, BbbPlus, 4.25, 115.0, 2.5, 6.0, 65.0, 1.20),
            ("Brookfield 3.80% Mar 2028", Corporate, AMinus, 4.30, 120.0, 2.8, 5.0, 78.0, 0.90),
            ("Green Ontario 2.65% Feb 2030", GreenBond, AaMinus, 3.60, 55.0, 4.2, 6.0, 95.0, 0.15),
            ("Maple Bond - Toyota 2.35% Jul 2027", MapleBond, APlus, 3.80, 70.0, 2.3, 4.0, 75.0, 0.35),
        ];

        rows.iter()
            .map(|&(name, security_type, credit_rating, ytm, spread, duration, liquidity, esg, pd)| {
                Security {
                    name: name.to_string(),
                    security_type,
                    credit_rating,
                    ytm,
                    spread_bps: spread,
                    duration_years: duration,
                    liquidity_score: liquidity,
                    esg_score: esg,
                    default_probability_pct: pd,
                }
            })
            .collect()
    }
}

/// CSV row before required attributes are checked
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SecurityRecord {
    pub security: Option<String>,
    #[serde(rename = "type")]
    pub security_type: Option<SecurityType>,
    pub credit_rating: Option<String>,
    pub ytm: Option<f64>,
    pub spread_bps: Option<f64>,
    pub duration_years: Option<f64>,
    pub liquidity_score: Option<f64>,
    pub esg_score: Option<f64>,
    pub default_probability_pct: Option<f64>,
}

impl TryFrom<SecurityRecord> for Security {
    type Error = ConfigError;

    fn try_from(r: SecurityRecord) -> Result<Self> {
        let name = r
            .security
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingAttribute {
                security: "<unnamed>".to_string(),
                attribute: "security",
            })?;
        let missing = |attribute: &'static str| ConfigError::MissingAttribute {
            security: name.clone(),
            attribute,
        };

        let security = Security {
            security_type: r.security_type.ok_or_else(|| missing("type"))?,
            credit_rating: r
                .credit_rating
                .ok_or_else(|| missing("credit_rating"))?
                .parse()?,
            ytm: r.ytm.ok_or_else(|| missing("ytm"))?,
            spread_bps: r.spread_bps.ok_or_else(|| missing("spread_bps"))?,
            duration_years: r.duration_years.ok_or_else(|| missing("duration_years"))?,
            liquidity_score: r.liquidity_score.ok_or_else(|| missing("liquidity_score"))?,
            esg_score: r.esg_score.ok_or_else(|| missing("esg_score"))?,
            default_probability_pct: r
                .default_probability_pct
                .ok_or_else(|| missing("default_probability_pct"))?,
            name: name.clone(),
        };
        security.validate()?;
        Ok(security)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SecurityRecord {
        SecurityRecord {
            security: Some("TD 3.25% Apr 2026".to_string()),
            security_type: Some(SecurityType::BankSenior),
            credit_rating: Some("AA-".to_string()),
            ytm: Some(3.70),
            spread_bps: Some(60.0),
            duration_years: Some(1.1),
            liquidity_score: Some(8.0),
            esg_score: Some(72.0),
            default_probability_pct: Some(0.18),
        }
    }

    #[test]
    fn test_default_universe() {
        let securities = Security::canada_2025();
        assert_eq!(securities.len(), 10);
        assert!(securities.iter().all(|s| s.validate().is_ok()));

        let bce = securities.iter().find(|s| s.name.starts_with("BCE")).unwrap();
        assert_eq!(bce.credit_rating, CreditRating::BbbPlus);
        assert_eq!(bce.security_type, SecurityType::Corporate);
    }

    #[test]
    fn test_record_conversion() {
        let security = Security::try_from(record()).unwrap();
        assert_eq!(security.name, "TD 3.25% Apr 2026");
        assert_eq!(security.credit_rating, CreditRating::AaMinus);
        assert_eq!(security.spread_bps, 60.0);
    }

    #[test]
    fn test_missing_attribute() {
        let mut r = record();
        r.esg_score = None;
        let err = Security::try_from(r).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingAttribute { attribute: "esg_score", ref security } if security == "TD 3.25% Apr 2026"
        ));

        let mut r = record();
        r.security = Some("  ".to_string());
        assert!(matches!(
            Security::try_from(r),
            Err(ConfigError::MissingAttribute { attribute: "security", .. })
        ));
    }

    #[test]
    fn test_unknown_rating_and_range() {
        let mut r = record();
        r.credit_rating = Some("Junk".to_string());
        assert!(matches!(Security::try_from(r), Err(ConfigError::UnknownRating(_))));

        let mut r = record();
        r.liquidity_score = Some(11.0);
        assert!(matches!(
            Security::try_from(r),
            Err(ConfigError::AttributeOutOfRange { attribute: "liquidity_score", .. })
        ));

        let mut r = record();
        r.default_probability_pct = Some(-0.1);
        assert!(Security::try_from(r).is_err());
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(SecurityType::GocBond.to_string(), "GoC Bond");
        let parsed: SecurityType = serde_json::from_str("\"Maple Bond\"").unwrap();
        assert_eq!(parsed, SecurityType::MapleBond);
    }
}
