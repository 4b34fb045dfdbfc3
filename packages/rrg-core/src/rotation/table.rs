//! Rotation table for an instrument universe.

use super::align::align;
use super::metric::RotationMetric;
use crate::config::{ExclusionPolicy, RrgConfig};
use crate::types::{
    Exclusion, ExclusionReason, PriceSeries, RotationPoint, RotationRow, RotationTable, Timeframe,
};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Price series keyed by instrument identifier.
pub type SeriesMap = HashMap<String, PriceSeries>;

/// Builds [`RotationTable`]s from weekly and daily price series.
///
/// Holds configuration only; every build is computed from its arguments.
#[derive(Debug, Clone, Default)]
pub struct RotationTableBuilder {
    config: RrgConfig,
    metric: RotationMetric,
}

/// Result of evaluating one instrument.
struct Outcome {
    row: Option<RotationRow>,
    exclusion: Option<Exclusion>,
}

impl RotationTableBuilder {
    pub fn new(config: RrgConfig) -> Self {
        Self {
            metric: RotationMetric::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &RrgConfig {
        &self.config
    }

    /// Build the rotation table for `universe` against `benchmark`.
    ///
    /// The benchmark itself is skipped if it appears in the universe, and
    /// repeated ids are evaluated once, at their first position.
    /// Instruments without a complete weekly and daily result are listed in
    /// [`RotationTable::excluded`] and, under [`ExclusionPolicy::MarkNoData`],
    /// also kept as rows. Rows are stable-sorted by weekly quadrant.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingBenchmark`] if either map lacks the benchmark series
    /// - [`Error::EmptyResult`] if no instrument produced a row
    pub fn build<S: AsRef<str>>(
        &self,
        universe: &[S],
        benchmark: &str,
        weekly: &SeriesMap,
        daily: &SeriesMap,
    ) -> Result<RotationTable> {
        let bench_weekly = benchmark_series(weekly, benchmark, Timeframe::Weekly)?;
        let bench_daily = benchmark_series(daily, benchmark, Timeframe::Daily)?;

        let mut seen = HashSet::with_capacity(universe.len());
        let candidates: Vec<&str> = universe
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| *id != benchmark && seen.insert(*id))
            .collect();

        let evaluate = |id: &&str| {
            self.evaluate(
                id,
                (weekly.get(*id), bench_weekly),
                (daily.get(*id), bench_daily),
            )
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<Outcome> = {
            use rayon::prelude::*;
            candidates.par_iter().map(evaluate).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Outcome> = candidates.iter().map(evaluate).collect();

        let mut rows = Vec::with_capacity(outcomes.len());
        let mut excluded = Vec::new();
        for outcome in outcomes {
            if let Some(exclusion) = outcome.exclusion {
                tracing::debug!("Excluded {}: {}", exclusion.id, exclusion.reason);
                excluded.push(exclusion);
            }
            rows.extend(outcome.row);
        }

        if rows.is_empty() {
            tracing::warn!(
                "No rotation rows against {} ({} instruments excluded)",
                benchmark,
                excluded.len()
            );
            return Err(Error::EmptyResult {
                benchmark: benchmark.to_string(),
                excluded,
            });
        }

        rows.sort_by_key(|row| row.weekly_quadrant.priority());

        tracing::info!(
            "Built rotation table against {}: {} rows, {} excluded",
            benchmark,
            rows.len(),
            excluded.len()
        );

        Ok(RotationTable {
            benchmark: benchmark.to_string(),
            rows,
            excluded,
        })
    }

    fn evaluate(
        &self,
        id: &str,
        weekly: (Option<&PriceSeries>, &PriceSeries),
        daily: (Option<&PriceSeries>, &PriceSeries),
    ) -> Outcome {
        let (Some(weekly_series), Some(daily_series)) = (weekly.0, daily.0) else {
            let timeframe = if weekly.0.is_none() {
                Timeframe::Weekly
            } else {
                Timeframe::Daily
            };
            return Outcome {
                row: None,
                exclusion: Some(Exclusion {
                    id: id.to_string(),
                    reason: ExclusionReason::MissingSeries { timeframe },
                }),
            };
        };

        let (weekly_point, weekly_issue) = self.point(Timeframe::Weekly, weekly_series, weekly.1);
        let (daily_point, daily_issue) = self.point(Timeframe::Daily, daily_series, daily.1);
        let row = RotationRow::new(id, weekly_point, daily_point);

        match weekly_issue.or(daily_issue) {
            None => Outcome {
                row: Some(row),
                exclusion: None,
            },
            Some(reason) => Outcome {
                row: (self.config.exclusion == ExclusionPolicy::MarkNoData).then_some(row),
                exclusion: Some(Exclusion {
                    id: id.to_string(),
                    reason,
                }),
            },
        }
    }

    /// Rotation point for one timeframe, with the reason it is unusable if so.
    fn point(
        &self,
        timeframe: Timeframe,
        series: &PriceSeries,
        benchmark: &PriceSeries,
    ) -> (RotationPoint, Option<ExclusionReason>) {
        let aligned = match align(series, benchmark, self.config.min_samples) {
            Ok(aligned) => aligned,
            Err(insufficient) => {
                let reason = ExclusionReason::Insufficient {
                    timeframe,
                    samples: insufficient.samples,
                    required: insufficient.required,
                };
                return (RotationPoint::undefined(), Some(reason));
            }
        };

        let point = self.metric.compute(&aligned);
        if point.is_complete() {
            (point, None)
        } else {
            (point, Some(ExclusionReason::Undefined { timeframe }))
        }
    }
}

fn benchmark_series<'a>(
    series: &'a SeriesMap,
    benchmark: &str,
    timeframe: Timeframe,
) -> Result<&'a PriceSeries> {
    series.get(benchmark).ok_or_else(|| Error::MissingBenchmark {
        benchmark: benchmark.to_string(),
        timeframe,
    })
}
