//! Core data types for the rotation engine.

use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observation in a price series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    /// Bar date (daily close date, or week-ending Friday for weekly bars)
    pub date: NaiveDate,
    /// Closing price; `None` when the provider had no value
    pub price: Option<f64>,
}

impl PricePoint {
    /// Create a point with a known price.
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price: Some(price),
        }
    }

    /// Create a point with no price.
    pub fn missing(date: NaiveDate) -> Self {
        Self { date, price: None }
    }

    /// The price, if present and finite.
    pub fn value(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite())
    }
}

/// Ordered price history for one instrument at one resolution.
///
/// Dates are strictly increasing. Missing values are kept so the aligner
/// can decide what to drop.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting duplicate or out-of-order dates.
    pub fn new(id: &str, points: Vec<PricePoint>) -> Result<Self> {
        if points.windows(2).any(|w| w[0].date >= w[1].date) {
            return Err(Error::UnorderedSeries { id: id.to_string() });
        }
        Ok(Self { points })
    }

    /// Build a series from `(date, price)` pairs.
    pub fn from_prices(
        id: &str,
        prices: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Result<Self> {
        let points = prices
            .into_iter()
            .map(|(date, price)| PricePoint::new(date, price))
            .collect();
        Self::new(id, points)
    }

    /// All points, including missing ones.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points, including missing ones.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(date, price)` for points that carry a usable value.
    pub fn valid(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value().map(|v| (p.date, v)))
    }

    /// Resample daily bars into weeks ending on Friday.
    ///
    /// Each week is labelled with its Friday and carries the last valid
    /// price seen in that week. Weeks without any valid price are skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use rrg_core::PriceSeries;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    /// // Mon 1st .. Mon 8th
    /// let daily = PriceSeries::from_prices("X", (1..=8).map(|day| (d(day), day as f64))).unwrap();
    /// let weekly = daily.resample_weekly();
    ///
    /// assert_eq!(weekly.len(), 2);
    /// assert_eq!(weekly.points()[0].date, d(5));
    /// assert_eq!(weekly.points()[0].price, Some(5.0));
    /// assert_eq!(weekly.points()[1].date, d(12));
    /// ```
    pub fn resample_weekly(&self) -> PriceSeries {
        let mut points: Vec<PricePoint> = Vec::new();

        for (date, price) in self.valid() {
            let week_end = week_ending_friday(date);
            match points.last_mut() {
                Some(last) if last.date == week_end => last.price = Some(price),
                _ => points.push(PricePoint::new(week_end, price)),
            }
        }

        PriceSeries { points }
    }
}

/// The Friday that closes the week containing `date` (Saturday and Sunday
/// roll forward to the next Friday).
fn week_ending_friday(date: NaiveDate) -> NaiveDate {
    let from_monday = date.weekday().num_days_from_monday() as i64;
    let friday = Weekday::Fri.num_days_from_monday() as i64;
    let offset = (friday - from_monday).rem_euclid(7);
    date + Duration::days(offset)
}

/// Price ratio of an instrument to its benchmark on their shared dates.
///
/// Every ratio is finite.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedRatioSeries {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) ratios: Vec<f64>,
}

impl AlignedRatioSeries {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Latest date in the series.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

/// RS-Ratio and RS-Momentum at the latest available date.
///
/// `None` means the value could not be computed, which is distinct from
/// any numeric value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RotationPoint {
    pub rs_ratio: Option<f64>,
    pub rs_momentum: Option<f64>,
}

impl RotationPoint {
    pub fn new(rs_ratio: Option<f64>, rs_momentum: Option<f64>) -> Self {
        Self {
            rs_ratio,
            rs_momentum,
        }
    }

    /// A point with neither component defined.
    pub fn undefined() -> Self {
        Self::default()
    }

    /// True when both components are defined.
    pub fn is_complete(&self) -> bool {
        self.rs_ratio.is_some() && self.rs_momentum.is_some()
    }
}

/// Rotation quadrant of an instrument relative to its benchmark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Leading,
    Weakening,
    Improving,
    Lagging,
    #[serde(rename = "No Data")]
    NoData,
}

impl Quadrant {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Leading => "Leading",
            Quadrant::Weakening => "Weakening",
            Quadrant::Improving => "Improving",
            Quadrant::Lagging => "Lagging",
            Quadrant::NoData => "No Data",
        }
    }

    /// Table sort priority (lower sorts first).
    pub fn priority(&self) -> u8 {
        match self {
            Quadrant::Leading => 0,
            Quadrant::Improving => 1,
            Quadrant::Weakening => 2,
            Quadrant::Lagging => 3,
            Quadrant::NoData => 4,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bar resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Weekly,
    Daily,
}

impl Timeframe {
    pub fn name(&self) -> &'static str {
        match self {
            Timeframe::Weekly => "weekly",
            Timeframe::Daily => "daily",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One instrument's rotation state at both resolutions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationRow {
    /// Instrument identifier
    pub id: String,
    pub weekly_quadrant: Quadrant,
    pub weekly_rs_ratio: Option<f64>,
    pub weekly_rs_momentum: Option<f64>,
    pub daily_quadrant: Quadrant,
    pub daily_rs_ratio: Option<f64>,
    pub daily_rs_momentum: Option<f64>,
}

impl RotationRow {
    pub fn new(id: &str, weekly: RotationPoint, daily: RotationPoint) -> Self {
        Self {
            id: id.to_string(),
            weekly_quadrant: crate::rotation::classify(weekly.rs_ratio, weekly.rs_momentum),
            weekly_rs_ratio: weekly.rs_ratio,
            weekly_rs_momentum: weekly.rs_momentum,
            daily_quadrant: crate::rotation::classify(daily.rs_ratio, daily.rs_momentum),
            daily_rs_ratio: daily.rs_ratio,
            daily_rs_momentum: daily.rs_momentum,
        }
    }

    /// A row with no data at either resolution.
    pub fn no_data(id: &str) -> Self {
        Self::new(id, RotationPoint::undefined(), RotationPoint::undefined())
    }
}

/// Why an instrument produced no usable row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    #[error("no {timeframe} series")]
    MissingSeries { timeframe: Timeframe },

    #[error("{samples} aligned {timeframe} samples, need {required}")]
    Insufficient {
        timeframe: Timeframe,
        samples: usize,
        required: usize,
    },

    #[error("{timeframe} RS-Ratio or RS-Momentum undefined")]
    Undefined { timeframe: Timeframe },
}

/// An instrument left out of (or marked empty in) the table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exclusion {
    pub id: String,
    pub reason: ExclusionReason,
}

/// Rotation rows for a universe, ordered by weekly quadrant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationTable {
    /// Benchmark identifier the rows are measured against
    pub benchmark: String,
    /// Rows in quadrant priority order
    pub rows: Vec<RotationRow>,
    /// Instruments without a complete result, in processing order
    pub excluded: Vec<Exclusion>,
}

impl RotationTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by instrument identifier.
    pub fn row(&self, id: &str) -> Option<&RotationRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}

/// API response wrapper for CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
