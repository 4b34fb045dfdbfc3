//! RS-Ratio and RS-Momentum.
//!
//! Both are normalised around 100:
//!
//! ```text
//! RS-Ratio    = 100 * ((SMA(ratio, 10) - SMA(ratio, 26)) / SMA(ratio, 26) + 1)
//! RS-Momentum = 100 * ((RS-Ratio - SMA(RS-Ratio, 4)) / SMA(RS-Ratio, 4) + 1)
//! ```

use crate::config::RrgConfig;
use crate::indicators::{sma, sma_values, MinPeriods};
use crate::types::{AlignedRatioSeries, RotationPoint};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fast window over the price ratio.
pub const RATIO_SHORT_WINDOW: usize = 10;
/// Slow window over the price ratio.
pub const RATIO_LONG_WINDOW: usize = 26;
/// Window over RS-Ratio for the momentum baseline.
pub const MOMENTUM_WINDOW: usize = 4;
/// Decimal places of reported values.
pub const DECIMALS: i32 = 2;

/// Per-date RS-Ratio and RS-Momentum over an aligned ratio series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationSeries {
    pub dates: Vec<NaiveDate>,
    pub rs_ratio: Vec<Option<f64>>,
    pub rs_momentum: Vec<Option<f64>>,
}

impl RotationSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The last `n` dates where both values are defined, oldest first.
    ///
    /// Values are unrounded; this is the rotation trail drawn on a chart.
    pub fn trail(&self, n: usize) -> Vec<(NaiveDate, f64, f64)> {
        let mut trail: Vec<_> = self
            .dates
            .iter()
            .zip(self.rs_ratio.iter().zip(&self.rs_momentum))
            .rev()
            .filter_map(|(&date, (ratio, momentum))| Some((date, (*ratio)?, (*momentum)?)))
            .take(n)
            .collect();
        trail.reverse();
        trail
    }
}

/// Computes rotation metrics with a fixed set of policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMetric {
    min_periods: MinPeriods,
    max_abs_value: Option<f64>,
}

impl Default for RotationMetric {
    fn default() -> Self {
        Self::from_config(&RrgConfig::default())
    }
}

impl RotationMetric {
    pub fn new(min_periods: MinPeriods, max_abs_value: Option<f64>) -> Self {
        Self {
            min_periods,
            max_abs_value,
        }
    }

    pub fn from_config(config: &RrgConfig) -> Self {
        Self::new(config.min_periods, config.max_abs_value)
    }

    /// RS-Ratio and RS-Momentum for every date of the aligned series.
    pub fn series(&self, aligned: &AlignedRatioSeries) -> RotationSeries {
        let ratios = aligned.ratios();

        let rs1 = sma_values(ratios, RATIO_SHORT_WINDOW, self.min_periods);
        let rs2 = sma_values(ratios, RATIO_LONG_WINDOW, self.min_periods);
        let rs_ratio: Vec<Option<f64>> = rs1
            .iter()
            .zip(&rs2)
            .map(|(&fast, &slow)| normalized(fast, slow))
            .collect();

        let rm1 = sma(&rs_ratio, 1, self.min_periods);
        let rm2 = sma(&rs_ratio, MOMENTUM_WINDOW, self.min_periods);
        let rs_momentum = rm1
            .iter()
            .zip(&rm2)
            .map(|(&fast, &slow)| normalized(fast, slow))
            .collect();

        RotationSeries {
            dates: aligned.dates().to_vec(),
            rs_ratio,
            rs_momentum,
        }
    }

    /// Latest RS-Ratio and RS-Momentum, each rounded to [`DECIMALS`] places.
    ///
    /// Each component comes from the latest date where it is defined and is
    /// undefined if no such date exists or the outlier guard rejects it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{Duration, NaiveDate};
    /// use rrg_core::{rotation::{align, RotationMetric}, PriceSeries};
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let series = |price: f64| {
    ///     PriceSeries::from_prices("X", (0..60).map(|i| (start + Duration::days(i), price))).unwrap()
    /// };
    ///
    /// let aligned = align(&series(110.0), &series(100.0), 30).unwrap();
    /// let point = RotationMetric::default().compute(&aligned);
    ///
    /// assert_eq!(point.rs_ratio, Some(100.0));
    /// assert_eq!(point.rs_momentum, Some(100.0));
    /// ```
    pub fn compute(&self, aligned: &AlignedRatioSeries) -> RotationPoint {
        let series = self.series(aligned);
        RotationPoint::new(
            self.report(&series.rs_ratio),
            self.report(&series.rs_momentum),
        )
    }

    fn report(&self, values: &[Option<f64>]) -> Option<f64> {
        let latest = values.iter().rev().find_map(|v| *v)?;
        let rounded = round_to(latest, DECIMALS);

        match self.max_abs_value {
            Some(limit) if rounded.abs() > limit => None,
            _ => Some(rounded),
        }
    }
}

/// `100 * ((fast - slow) / slow + 1)`, undefined for a missing or zero `slow`.
fn normalized(fast: Option<f64>, slow: Option<f64>) -> Option<f64> {
    let (fast, slow) = (fast?, slow?);
    if slow == 0.0 {
        return None;
    }

    let value = 100.0 * ((fast - slow) / slow + 1.0);
    value.is_finite().then_some(value)
}

/// Round to `decimals` places, exact halves to even.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    fn aligned(ratios: &[f64]) -> AlignedRatioSeries {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        AlignedRatioSeries {
            dates: (0..ratios.len())
                .map(|i| start + Duration::days(i as i64))
                .collect(),
            ratios: ratios.to_vec(),
        }
    }

    #[test]
    fn test_constant_ratio_centres_at_100() {
        for min_periods in [MinPeriods::Partial, MinPeriods::Full] {
            let metric = RotationMetric::new(min_periods, None);
            let point = metric.compute(&aligned(&[1.1; 60]));

            assert_eq!(point.rs_ratio, Some(100.0));
            assert_eq!(point.rs_momentum, Some(100.0));
        }
    }

    #[test]
    fn test_breakout_leads() {
        let mut ratios = vec![1.0; 50];
        ratios.extend([1.2; 3]);
        let point = RotationMetric::default().compute(&aligned(&ratios));

        assert!(point.rs_ratio.unwrap() > 100.0);
        assert!(point.rs_momentum.unwrap() > 100.0);
    }

    #[test]
    fn test_breakdown_lags() {
        let mut ratios = vec![1.0; 50];
        ratios.extend([0.8; 3]);
        let point = RotationMetric::default().compute(&aligned(&ratios));

        assert!(point.rs_ratio.unwrap() < 100.0);
        assert!(point.rs_momentum.unwrap() < 100.0);
    }

    #[test]
    fn test_rs_ratio_matches_formula() {
        let ratios: Vec<f64> = (0..40).map(|i| 1.0 + (i as f64 * 0.3).sin() * 0.1).collect();
        let series = RotationMetric::new(MinPeriods::Full, None).series(&aligned(&ratios));

        let last = ratios.len() - 1;
        let fast = ratios[last - 9..].iter().sum::<f64>() / 10.0;
        let slow = ratios[last - 25..].iter().sum::<f64>() / 26.0;
        let expected = 100.0 * ((fast - slow) / slow + 1.0);

        assert_relative_eq!(series.rs_ratio[last].unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_full_windows_leave_warm_up_undefined() {
        let ratios: Vec<f64> = (0..40).map(|i| 1.0 + i as f64 * 0.001).collect();
        let series = RotationMetric::new(MinPeriods::Full, None).series(&aligned(&ratios));

        // RS-Ratio needs 26 ratios, RS-Momentum 4 more RS-Ratio values
        assert!(series.rs_ratio[..25].iter().all(Option::is_none));
        assert!(series.rs_ratio[25].is_some());
        assert!(series.rs_momentum[..28].iter().all(Option::is_none));
        assert!(series.rs_momentum[28].is_some());
    }

    #[test]
    fn test_partial_windows_define_every_date() {
        let ratios: Vec<f64> = (0..40).map(|i| 1.0 + i as f64 * 0.001).collect();
        let series = RotationMetric::new(MinPeriods::Partial, None).series(&aligned(&ratios));

        assert!(series.rs_ratio.iter().all(Option::is_some));
        assert!(series.rs_momentum.iter().all(Option::is_some));
        // One sample: both averages equal the ratio itself
        assert_eq!(series.rs_ratio[0], Some(100.0));
    }

    #[test]
    fn test_too_short_for_full_windows_is_undefined() {
        let point = RotationMetric::new(MinPeriods::Full, None).compute(&aligned(&[1.0; 20]));
        assert_eq!(point, RotationPoint::undefined());
    }

    #[test]
    fn test_empty_series_is_undefined() {
        let point = RotationMetric::default().compute(&AlignedRatioSeries::default());
        assert_eq!(point, RotationPoint::undefined());
    }

    #[test]
    fn test_zero_ratios_are_undefined() {
        // A zero slow average cannot normalise anything
        let point = RotationMetric::default().compute(&aligned(&[0.0; 40]));
        assert_eq!(point.rs_ratio, None);
        assert_eq!(point.rs_momentum, None);
    }

    #[test]
    fn test_outlier_guard() {
        // Negative prices can push the slow average towards zero
        let mut ratios = vec![1.0; 10];
        ratios.extend([-1.0; 16]);
        ratios.extend([1.6026; 10]);

        let guarded = RotationMetric::new(MinPeriods::Partial, Some(1000.0));
        let point = guarded.compute(&aligned(&ratios));
        assert_eq!(point.rs_ratio, None);

        let unguarded = RotationMetric::new(MinPeriods::Partial, None);
        assert!(unguarded.compute(&aligned(&ratios)).rs_ratio.unwrap() > 1000.0);
    }

    #[test]
    fn test_values_are_rounded() {
        let ratios: Vec<f64> = (0..50).map(|i| 1.0 + (i as f64 * 0.7).cos() * 0.05).collect();
        let point = RotationMetric::default().compute(&aligned(&ratios));

        for value in [point.rs_ratio.unwrap(), point.rs_momentum.unwrap()] {
            assert_relative_eq!(value * 100.0, (value * 100.0).round(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_trail_returns_latest_defined_points() {
        let ratios: Vec<f64> = (0..40).map(|i| 1.0 + i as f64 * 0.002).collect();
        let series = RotationMetric::new(MinPeriods::Full, None).series(&aligned(&ratios));

        let trail = series.trail(5);
        assert_eq!(trail.len(), 5);
        assert_eq!(trail[4].0, *series.dates.last().unwrap());
        assert!(trail.windows(2).all(|w| w[0].0 < w[1].0));

        // Only 40 - 28 dates have both values
        assert_eq!(series.trail(100).len(), 12);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(100.004999, 2), 100.0);
        assert_eq!(round_to(99.996, 2), 100.0);
        assert_eq!(round_to(101.236, 2), 101.24);
    }

    #[test]
    fn test_round_to_half_even() {
        // 100.125 and 100.375 are exact in binary
        assert_eq!(round_to(100.125, 2), 100.12);
        assert_eq!(round_to(100.375, 2), 100.38);
        assert_eq!(round_to(-100.125, 2), -100.12);
        assert_eq!(round_to(99.995_000_1, 2), 100.0);
    }
}
