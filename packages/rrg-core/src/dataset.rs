//! Price data files consumed by the `rrg` command.
//!
//! ```json
//! {
//!   "benchmark": "^GSPC",
//!   "daily":  { "AAPL": [{ "date": "2024-01-02", "price": 185.6 }, ...] },
//!   "weekly": { "AAPL": [{ "date": "2024-01-05", "price": 181.2 }, ...] }
//! }
//! ```
//!
//! `weekly` is optional and derived from `daily` when absent.

use crate::rotation::SeriesMap;
use crate::types::{PricePoint, PriceSeries};
use crate::universe::Universe;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawPriceData {
    #[serde(default)]
    benchmark: Option<String>,
    daily: BTreeMap<String, Vec<PricePoint>>,
    #[serde(default)]
    weekly: Option<BTreeMap<String, Vec<PricePoint>>>,
}

/// Benchmark and instruments chosen for one table build.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub benchmark: String,
    pub ids: Vec<String>,
}

/// Validated daily and weekly series for a set of instruments.
#[derive(Debug, Clone, Default)]
pub struct PriceData {
    /// Benchmark named in the file, if any
    pub benchmark: Option<String>,
    pub weekly: SeriesMap,
    pub daily: SeriesMap,
}

impl PriceData {
    /// Read a JSON price file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a JSON price document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawPriceData = serde_json::from_str(content)?;

        let daily = to_series(raw.daily)?;
        let weekly = match raw.weekly {
            Some(weekly) => to_series(weekly)?,
            None => daily
                .iter()
                .map(|(id, series)| (id.clone(), series.resample_weekly()))
                .collect(),
        };

        Ok(Self {
            benchmark: raw.benchmark,
            weekly,
            daily,
        })
    }

    /// Identifiers with daily data, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.daily.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Choose the benchmark and instruments for a table build.
    ///
    /// The benchmark is taken from `benchmark`, then the universe, then the
    /// file. Instruments come from the universe, then `tickers` (trimmed,
    /// blanks dropped), then every daily id in sorted order.
    ///
    /// # Errors
    ///
    /// [`Error::NoBenchmark`] if none of the three names a benchmark.
    pub fn select(
        &self,
        universe: Option<&Universe>,
        tickers: Option<Vec<String>>,
        benchmark: Option<String>,
    ) -> Result<Selection> {
        let benchmark = benchmark
            .or_else(|| universe.map(|u| u.benchmark.clone()))
            .or_else(|| self.benchmark.clone())
            .ok_or(Error::NoBenchmark)?;

        let ids = match (universe, tickers) {
            (Some(universe), _) => universe.tickers.clone(),
            (None, Some(tickers)) => tickers
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            (None, None) => self.ids().into_iter().map(str::to_string).collect(),
        };

        Ok(Selection { benchmark, ids })
    }
}

fn to_series(raw: BTreeMap<String, Vec<PricePoint>>) -> Result<SeriesMap> {
    let mut series = HashMap::with_capacity(raw.len());
    for (id, points) in raw {
        let parsed = PriceSeries::new(&id, points)?;
        series.insert(id, parsed);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "benchmark": "SPY",
        "daily": {
            "SPY": [
                { "date": "2024-01-04", "price": 470.0 },
                { "date": "2024-01-05", "price": 472.5 },
                { "date": "2024-01-08", "price": null },
                { "date": "2024-01-09", "price": 475.0 }
            ],
            "AAPL": [
                { "date": "2024-01-05", "price": 181.2 }
            ]
        }
    }"#;

    #[test]
    fn test_parse_and_derive_weekly() {
        let data = PriceData::from_json_str(SAMPLE).unwrap();

        assert_eq!(data.benchmark.as_deref(), Some("SPY"));
        assert_eq!(data.ids(), vec!["AAPL", "SPY"]);
        assert_eq!(data.daily["SPY"].len(), 4);
        assert_eq!(data.daily["SPY"].points()[2].price, None);

        let weekly = &data.weekly["SPY"];
        assert_eq!(weekly.len(), 2);
        assert_eq!(
            weekly.points()[0],
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 472.5)
        );
        assert_eq!(
            weekly.points()[1],
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(), 475.0)
        );
    }

    #[test]
    fn test_explicit_weekly_is_kept() {
        let json = r#"{
            "daily": { "X": [{ "date": "2024-01-02", "price": 1.0 }] },
            "weekly": { "X": [{ "date": "2023-12-29", "price": 0.9 }] }
        }"#;
        let data = PriceData::from_json_str(json).unwrap();

        assert!(data.benchmark.is_none());
        assert_eq!(data.weekly["X"].points()[0].price, Some(0.9));
    }

    #[test]
    fn test_unordered_series_rejected() {
        let json = r#"{
            "daily": { "X": [
                { "date": "2024-01-03", "price": 1.0 },
                { "date": "2024-01-02", "price": 1.0 }
            ] }
        }"#;
        let err = PriceData::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::UnorderedSeries { ref id } if id == "X"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = PriceData::from_json_str("{ \"daily\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.json");
        fs::write(&path, SAMPLE).unwrap();

        let data = PriceData::from_json_file(&path).unwrap();
        assert_eq!(data.daily.len(), 2);

        let err = PriceData::from_json_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    fn tickers(ids: &[&str]) -> Option<Vec<String>> {
        Some(ids.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_select_explicit_benchmark_wins() {
        let data = PriceData::from_json_str(SAMPLE).unwrap();
        let universe = Universe::new("Test", "ACWI", &["AAPL"]);

        let selection = data
            .select(Some(&universe), None, Some("QQQ".to_string()))
            .unwrap();
        assert_eq!(selection.benchmark, "QQQ");
        assert_eq!(selection.ids, vec!["AAPL"]);
    }

    #[test]
    fn test_select_universe_beats_file() {
        let data = PriceData::from_json_str(SAMPLE).unwrap();
        let universe = Universe::new("Test", "ACWI", &["MSFT", "AAPL"]);

        let selection = data.select(Some(&universe), None, None).unwrap();
        assert_eq!(
            selection,
            Selection {
                benchmark: "ACWI".to_string(),
                ids: vec!["MSFT".to_string(), "AAPL".to_string()],
            }
        );
    }

    #[test]
    fn test_select_file_benchmark_and_sorted_ids() {
        let data = PriceData::from_json_str(SAMPLE).unwrap();

        let selection = data.select(None, None, None).unwrap();
        assert_eq!(selection.benchmark, "SPY");
        assert_eq!(selection.ids, vec!["AAPL", "SPY"]);
    }

    #[test]
    fn test_select_tickers_trimmed() {
        let data = PriceData::from_json_str(SAMPLE).unwrap();

        let selection = data
            .select(None, tickers(&[" MSFT", "", "  ", "AAPL "]), None)
            .unwrap();
        assert_eq!(selection.benchmark, "SPY");
        assert_eq!(selection.ids, vec!["MSFT", "AAPL"]);
    }

    #[test]
    fn test_select_without_benchmark() {
        let json = r#"{ "daily": { "X": [{ "date": "2024-01-02", "price": 1.0 }] } }"#;
        let data = PriceData::from_json_str(json).unwrap();

        let err = data.select(None, tickers(&["X"]), None).unwrap_err();
        assert!(matches!(err, Error::NoBenchmark));

        let selection = data.select(None, None, Some("X".to_string())).unwrap();
        assert_eq!(selection.ids, vec!["X"]);
    }
}
