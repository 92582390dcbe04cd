//! Period-over-period variance detection.
//!
//! Each category carries a chronologically ordered spend series. The evaluator
//! looks only at the last two periods, computes the relative change, and flags
//! categories whose change exceeds the configured threshold. A zero prior
//! period makes the change undefined; that category is reported as
//! indeterminate instead of surfacing a division error or an infinity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of evaluating one category's series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variance {
    /// Relative change of the last two periods, and whether it crossed
    /// the threshold.
    Computed { relative_change: f64, high: bool },
    /// Prior period was zero; relative change is undefined.
    Indeterminate,
    /// Fewer than two periods; nothing to compare.
    NotApplicable,
}

impl Variance {
    pub fn is_high(&self) -> bool {
        matches!(self, Variance::Computed { high: true, .. })
    }

    pub fn relative_change(&self) -> Option<f64> {
        match self {
            Variance::Computed { relative_change, .. } => Some(*relative_change),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variance::Computed { high: true, .. } => "high",
            Variance::Computed { high: false, .. } => "normal",
            Variance::Indeterminate => "indeterminate",
            Variance::NotApplicable => "not_applicable",
        }
    }
}

/// Evaluate every category independently. One indeterminate or short series
/// never aborts the rest of the map.
///
/// `threshold_pct` is expressed in percent (15 means a 15% change); the
/// comparison is strict, so a change exactly at the threshold stays normal.
pub fn evaluate(
    series_by_category: &BTreeMap<String, Vec<f64>>,
    threshold_pct: f64,
) -> BTreeMap<String, Variance> {
    series_by_category
        .iter()
        .map(|(category, series)| (category.clone(), evaluate_series(series, threshold_pct)))
        .collect()
}

/// Classify a single series against the threshold.
pub fn evaluate_series(series: &[f64], threshold_pct: f64) -> Variance {
    if series.len() < 2 {
        return Variance::NotApplicable;
    }
    let previous = series[series.len() - 2];
    let latest = series[series.len() - 1];
    if previous == 0.0 {
        return Variance::Indeterminate;
    }
    let relative_change = ((latest - previous) / previous).abs();
    Variance::Computed {
        relative_change,
        high: relative_change > threshold_pct / 100.0,
    }
}
