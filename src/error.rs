//! Configuration errors
//!
//! Every failure in this crate is a configuration problem detected before any
//! numbers are produced. Degenerate numeric results (negative debt ratios,
//! returns below -100%) are valid outputs and never surface here.

use thiserror::Error;

/// Fatal configuration error. Construction is all-or-nothing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("projection horizon must be at least 1 year, got {0}")]
    HorizonTooShort(usize),

    #[error("scenario '{scenario}': {field} has {actual} entries, expected {expected}")]
    PathLengthMismatch {
        scenario: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("scenario '{scenario}': parameter paths have unequal lengths ({lengths:?})")]
    UnequalPathLengths {
        scenario: String,
        lengths: [usize; 4],
    },

    #[error("unknown credit rating '{0}'")]
    UnknownRating(String),

    #[error("credit rating {rating} lies outside the scale {best}..{worst}")]
    RatingOutsideScale {
        rating: String,
        best: String,
        worst: String,
    },

    #[error("invalid rating scale: best {best} is worse than worst {worst}")]
    InvalidScale { best: String, worst: String },

    #[error("security '{security}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        security: String,
        attribute: &'static str,
    },

    #[error("security '{security}': {attribute} = {value} is outside {range}")]
    AttributeOutOfRange {
        security: String,
        attribute: &'static str,
        value: f64,
        range: &'static str,
    },

    #[error("scenario '{0}' is defined more than once")]
    DuplicateScenario(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::PathLengthMismatch {
            scenario: "Baseline".to_string(),
            field: "gdp_growth_path",
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "scenario 'Baseline': gdp_growth_path has 4 entries, expected 5"
        );

        let err = ConfigError::MissingAttribute {
            security: "TD 3.25% Apr 2026".to_string(),
            attribute: "spread_bps",
        };
        assert!(err.to_string().contains("spread_bps"));
    }
}
