//! RRG Core - Relative Rotation Graph analytics.
//!
//! This crate turns instrument and benchmark price series into a rotation
//! table:
//!
//! - **Alignment**: shared dates, missing values dropped, price ratio
//! - **Smoothing**: trailing SMA with an explicit warm-up policy
//! - **Rotation metrics**: RS-Ratio and RS-Momentum centred on 100
//! - **Quadrants**: Leading, Weakening, Lagging, Improving or No Data
//! - **Tables**: weekly and daily quadrants per instrument, sorted
//!
//! Fetching, caching and rendering prices are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use rrg_core::{PriceSeries, Quadrant, RotationTableBuilder, SeriesMap};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let flat = |id: &str, step: i64, price: f64| {
//!     let prices = (0..60).map(|i| (start + Duration::days(i * step), price));
//!     (id.to_string(), PriceSeries::from_prices(id, prices).unwrap())
//! };
//!
//! let weekly: SeriesMap = [flat("SPY", 7, 100.0), flat("XLK", 7, 110.0)].into();
//! let daily: SeriesMap = [flat("SPY", 1, 100.0), flat("XLK", 1, 110.0)].into();
//!
//! let table = RotationTableBuilder::default()
//!     .build(&["XLK"], "SPY", &weekly, &daily)
//!     .unwrap();
//!
//! assert_eq!(table.rows[0].weekly_quadrant, Quadrant::Leading);
//! assert_eq!(table.rows[0].weekly_rs_ratio, Some(100.0));
//! ```

pub mod config;
pub mod dataset;
pub mod indicators;
pub mod rotation;
pub mod types;
pub mod universe;

// Re-export commonly used types
pub use types::{
    AlignedRatioSeries, ApiResponse, Exclusion, ExclusionReason, PricePoint, PriceSeries,
    Quadrant, RotationPoint, RotationRow, RotationTable, Timeframe,
};

// Re-export main functionality
pub use config::{ExclusionPolicy, RrgConfig, DEFAULT_MAX_ABS_VALUE, DEFAULT_MIN_SAMPLES};
pub use dataset::{PriceData, Selection};
pub use indicators::MinPeriods;
pub use rotation::{
    align, classify, Insufficient, RotationMetric, RotationSeries, RotationTableBuilder,
    SeriesMap,
};
pub use universe::{get_universe, list_universes, Universe, BUILTIN_UNIVERSES};

/// Error types for rrg-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Benchmark {benchmark} has no {timeframe} series")]
    MissingBenchmark {
        benchmark: String,
        timeframe: Timeframe,
    },

    #[error("No instrument has rotation data against {benchmark} ({} excluded)", .excluded.len())]
    EmptyResult {
        benchmark: String,
        excluded: Vec<Exclusion>,
    },

    #[error("No benchmark: pass one explicitly, pick a universe, or name it in the price data")]
    NoBenchmark,

    #[error("Series {id} has duplicate or unordered dates")]
    UnorderedSeries { id: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown universe: {0}")]
    UnknownUniverse(String),
}

/// Result type for rrg-core operations.
pub type Result<T> = std::result::Result<T, Error>;
