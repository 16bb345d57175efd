//! Credit rating ladder and the notch arithmetic used by the rating state machine
//!
//! Labels and ordinals live in one table (`RATING_TABLE`); both lookup
//! directions go through it. Lower ordinal = better rating.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// S&P-style investment grade ladder, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CreditRating {
    Aaa,
    AaPlus,
    Aa,
    AaMinus,
    APlus,
    A,
    AMinus,
    BbbPlus,
    Bbb,
    BbbMinus,
}

/// Position in this table + 1 is the rating's ordinal
const RATING_TABLE: [(CreditRating, &str); 10] = [
    (CreditRating::Aaa, "AAA"),
    (CreditRating::AaPlus, "AA+"),
    (CreditRating::Aa, "AA"),
    (CreditRating::AaMinus, "AA-"),
    (CreditRating::APlus, "A+"),
    (CreditRating::A, "A"),
    (CreditRating::AMinus, "A-"),
    (CreditRating::BbbPlus, "BBB+"),
    (CreditRating::Bbb, "BBB"),
    (CreditRating::BbbMinus, "BBB-"),
];

impl CreditRating {
    /// Ordinal on the full ladder (AAA = 1)
    pub fn ordinal(self) -> u8 {
        RATING_TABLE
            .iter()
            .position(|(r, _)| *r == self)
            .map(|idx| idx as u8 + 1)
            .unwrap_or(u8::MAX)
    }

    /// Inverse of [`CreditRating::ordinal`]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        let idx = (ordinal as usize).checked_sub(1)?;
        RATING_TABLE.get(idx).map(|(r, _)| *r)
    }

    pub fn label(self) -> &'static str {
        RATING_TABLE
            .iter()
            .find(|(r, _)| *r == self)
            .map(|(_, label)| *label)
            .unwrap_or("NR")
    }

    /// All ratings in ladder order
    pub fn all() -> impl Iterator<Item = CreditRating> {
        RATING_TABLE.iter().map(|(r, _)| *r)
    }
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CreditRating {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        RATING_TABLE
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(r, _)| *r)
            .ok_or_else(|| ConfigError::UnknownRating(label.to_string()))
    }
}

impl TryFrom<String> for CreditRating {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CreditRating> for String {
    fn from(rating: CreditRating) -> Self {
        rating.label().to_string()
    }
}

/// Inclusive [best, worst] window a rating is allowed to move within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingScale {
    best: CreditRating,
    worst: CreditRating,
}

impl RatingScale {
    pub fn new(best: CreditRating, worst: CreditRating) -> Result<Self> {
        if best.ordinal() > worst.ordinal() {
            return Err(ConfigError::InvalidScale {
                best: best.to_string(),
                worst: worst.to_string(),
            });
        }
        Ok(Self { best, worst })
    }

    /// Five-notch sovereign scale AAA..A+
    pub fn sovereign() -> Self {
        Self {
            best: CreditRating::Aaa,
            worst: CreditRating::APlus,
        }
    }

    pub fn best(&self) -> CreditRating {
        self.best
    }

    pub fn worst(&self) -> CreditRating {
        self.worst
    }

    pub fn contains(&self, rating: CreditRating) -> bool {
        (self.best.ordinal()..=self.worst.ordinal()).contains(&rating.ordinal())
    }

    /// Fails with `RatingOutsideScale` if `rating` is not on this scale
    pub fn check(&self, rating: CreditRating) -> Result<CreditRating> {
        if self.contains(rating) {
            Ok(rating)
        } else {
            Err(ConfigError::RatingOutsideScale {
                rating: rating.to_string(),
                best: self.best.to_string(),
                worst: self.worst.to_string(),
            })
        }
    }

    /// One notch better, clamped at `best`
    pub fn upgrade(&self, rating: CreditRating) -> CreditRating {
        self.clamp_ordinal(rating.ordinal().saturating_sub(1))
    }

    /// One notch worse, clamped at `worst`
    pub fn downgrade(&self, rating: CreditRating) -> CreditRating {
        self.clamp_ordinal(rating.ordinal().saturating_add(1))
    }

    fn clamp_ordinal(&self, ordinal: u8) -> CreditRating {
        let clamped = ordinal.clamp(self.best.ordinal(), self.worst.ordinal());
        CreditRating::from_ordinal(clamped).unwrap_or(self.worst)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::sovereign()
    }
}
