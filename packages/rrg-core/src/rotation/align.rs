//! Instrument/benchmark alignment and price ratio.

use crate::types::{AlignedRatioSeries, PriceSeries};
use std::cmp::Ordering;

/// Too few shared samples to compute rotation metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("insufficient aligned data: {samples} samples, need {required}")]
pub struct Insufficient {
    /// Samples left after alignment
    pub samples: usize,
    /// Configured minimum
    pub required: usize,
}

/// Align an instrument with its benchmark and compute their price ratio.
///
/// Missing values are dropped from both series, the remaining dates are
/// intersected, and `instrument / benchmark` is taken on each shared date.
/// Non-finite ratios (a zero benchmark price) are dropped. The sample
/// count is checked against `min_samples` both before and after that drop.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, NaiveDate};
/// use rrg_core::{rotation::align, PriceSeries};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let dates = |n: i64| (0..n).map(move |i| start + Duration::days(i));
///
/// let stock = PriceSeries::from_prices("XLK", dates(40).map(|d| (d, 220.0))).unwrap();
/// let bench = PriceSeries::from_prices("SPY", dates(35).map(|d| (d, 440.0))).unwrap();
///
/// let aligned = align(&stock, &bench, 30).unwrap();
/// assert_eq!(aligned.len(), 35);
/// assert_eq!(aligned.ratios()[0], 0.5);
///
/// assert!(align(&stock, &bench, 36).is_err());
/// ```
pub fn align(
    instrument: &PriceSeries,
    benchmark: &PriceSeries,
    min_samples: usize,
) -> Result<AlignedRatioSeries, Insufficient> {
    let shared = intersect(instrument, benchmark);
    check(shared.len(), min_samples)?;

    let mut aligned = AlignedRatioSeries {
        dates: Vec::with_capacity(shared.len()),
        ratios: Vec::with_capacity(shared.len()),
    };

    for (date, price, bench_price) in shared {
        let ratio = price / bench_price;
        if ratio.is_finite() {
            aligned.dates.push(date);
            aligned.ratios.push(ratio);
        }
    }

    check(aligned.len(), min_samples)?;
    Ok(aligned)
}

fn check(samples: usize, required: usize) -> Result<(), Insufficient> {
    if samples < required {
        return Err(Insufficient { samples, required });
    }
    Ok(())
}

/// Merge-join the valid points of two date-ordered series.
fn intersect(
    instrument: &PriceSeries,
    benchmark: &PriceSeries,
) -> Vec<(chrono::NaiveDate, f64, f64)> {
    let mut shared = Vec::new();
    let mut left = instrument.valid().peekable();
    let mut right = benchmark.valid().peekable();

    loop {
        let (Some(&(l_date, l_price)), Some(&(r_date, r_price))) = (left.peek(), right.peek())
        else {
            break;
        };

        match l_date.cmp(&r_date) {
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                shared.push((l_date, l_price, r_price));
                left.next();
                right.next();
            }
        }
    }

    shared
}
