//! Trailing simple moving average over series with gaps.

use serde::{Deserialize, Serialize};

/// How many defined values a window needs before it yields an average.
///
/// `Partial` averages whatever is available (the first `period - 1`
/// outputs use shorter windows). `Full` leaves those positions undefined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MinPeriods {
    #[default]
    Partial,
    Full,
}

impl MinPeriods {
    /// Minimum count of defined values for a window of `period`.
    pub fn required(&self, period: usize) -> usize {
        match self {
            MinPeriods::Partial => 1,
            MinPeriods::Full => period,
        }
    }
}

/// Calculate a trailing Simple Moving Average over optional values.
///
/// # Arguments
///
/// * `data` - Series values, `None` where undefined
/// * `period` - Window length
/// * `min_periods` - Edge policy for windows with fewer defined values
///
/// # Returns
///
/// A vector the same length as `data`. Each output is the mean of the
/// defined values among the last `period` inputs, or `None` when fewer than
/// `min_periods.required(period)` of them are defined. A period of 1
/// returns the input unchanged; a period of 0 yields no values.
///
/// # Example
///
/// ```rust
/// use rrg_core::indicators::{sma, MinPeriods};
///
/// let data = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
///
/// let partial = sma(&data, 3, MinPeriods::Partial);
/// assert_eq!(partial[0], Some(1.0));
/// assert_eq!(partial[1], Some(1.5));
///
/// let full = sma(&data, 3, MinPeriods::Full);
/// assert_eq!(full[1], None);
/// assert_eq!(full[3], Some(3.0));
/// ```
pub fn sma(data: &[Option<f64>], period: usize, min_periods: MinPeriods) -> Vec<Option<f64>> {
    if period == 1 {
        return data.to_vec();
    }
    if period == 0 {
        return vec![None; data.len()];
    }

    let required = min_periods.required(period);

    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(period);
            let (sum, count) = data[start..=i]
                .iter()
                .flatten()
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

            (count >= required).then(|| sum / count as f64)
        })
        .collect()
}

/// [`sma`] over a fully defined series.
pub fn sma_values(data: &[f64], period: usize, min_periods: MinPeriods) -> Vec<Option<f64>> {
    let data: Vec<Option<f64>> = data.iter().copied().map(Some).collect();
    sma(&data, period, min_periods)
}
