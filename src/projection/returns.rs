//! Hold-to-horizon return on a 10-year government bond position

use super::MacroTrajectory;
use serde::Serialize;

/// Price sensitivity to a yield move, for an assumed duration of 7 years
pub const DURATION_FACTOR: f64 = -7.0;

/// Annual returns and the growth of 1.0 invested at the start of the horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSeries {
    annual_returns: Vec<f64>,
    cumulative_value: Vec<f64>,
}

impl ReturnSeries {
    /// Year i earns the opening yield plus the price effect of the yield move
    /// from i to i+1. No clamping: a return of -1 zeroes the position and
    /// anything below flips it negative.
    pub fn from_yields(bond_yield: &[f64]) -> Self {
        let annual_returns: Vec<f64> = bond_yield
            .windows(2)
            .map(|w| w[0] + DURATION_FACTOR * (w[1] - w[0]))
            .collect();

        let mut cumulative_value = Vec::with_capacity(annual_returns.len() + 1);
        cumulative_value.push(1.0);
        let mut value = 1.0;
        for (year, annual) in annual_returns.iter().enumerate() {
            if *annual <= -1.0 {
                log::warn!("year {}: annual return {:.4} wipes out the position", year, annual);
            }
            value *= 1.0 + annual;
            cumulative_value.push(value);
        }

        Self {
            annual_returns,
            cumulative_value,
        }
    }

    /// One entry per projected year
    pub fn annual_returns(&self) -> &[f64] {
        &self.annual_returns
    }

    /// Starts at 1.0; one entry per year including year 0
    pub fn cumulative_value(&self) -> &[f64] {
        &self.cumulative_value
    }

    pub fn end_value(&self) -> f64 {
        self.cumulative_value.last().copied().unwrap_or(1.0)
    }

    pub fn total_return(&self) -> f64 {
        self.end_value() - 1.0
    }
}

/// Return series for a projected bond yield path
pub fn compound_returns(trajectory: &MacroTrajectory) -> ReturnSeries {
    ReturnSeries::from_yields(trajectory.bond_yield())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_baseline_yields() {
        let series = ReturnSeries::from_yields(&[0.034, 0.035, 0.035, 0.034, 0.033, 0.033]);
        assert_eq!(series.annual_returns().len(), 5);
        assert_eq!(series.cumulative_value().len(), 6);

        // 0.034 - 7 * 0.001
        assert_abs_diff_eq!(series.annual_returns()[0], 0.027, epsilon = 1e-12);
        assert_abs_diff_eq!(series.annual_returns()[1], 0.035, epsilon = 1e-12);
        assert_abs_diff_eq!(series.end_value(), 1.1910488205575696, epsilon = 1e-9);
    }

    #[test]
    fn test_cumulative_recurrence_is_exact() {
        let series = ReturnSeries::from_yields(&[0.05, 0.02, 0.09, 0.01, 0.04]);
        let cv = series.cumulative_value();
        assert_eq!(cv[0], 1.0);
        for (i, r) in series.annual_returns().iter().enumerate() {
            assert_eq!(cv[i + 1], cv[i] * (1.0 + r));
        }
    }

    #[test]
    fn test_return_of_minus_one_zeroes_position() {
        // 0.75 - 7 * 0.25 = -1 exactly
        let series = ReturnSeries::from_yields(&[0.75, 1.0, 1.0]);
        assert_eq!(series.annual_returns()[0], -1.0);
        assert_eq!(series.cumulative_value(), &[1.0, 0.0, 0.0]);
        assert!(series.cumulative_value().iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_deeply_negative_returns_continue_arithmetically() {
        // 0.0 - 7 * 0.5 = -3.5, then 0.5 - 7 * (-0.5) = 4.0
        let series = ReturnSeries::from_yields(&[0.0, 0.5, 0.0]);
        assert_eq!(series.annual_returns(), &[-3.5, 4.0]);
        assert_eq!(series.cumulative_value(), &[1.0, -2.5, -12.5]);
        assert!(series.cumulative_value().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_flat_single_point() {
        let series = ReturnSeries::from_yields(&[0.03]);
        assert!(series.annual_returns().is_empty());
        assert_eq!(series.end_value(), 1.0);
        assert_eq!(series.total_return(), 0.0);
    }
}
