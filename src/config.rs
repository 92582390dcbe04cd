//! Env-driven dashboard configuration.
//!
//! All widget-style inputs (revenue, comparison mode, variance threshold)
//! arrive here, get validated and clamped, and flow into the compute passes
//! as one explicit value object. The evaluator itself never sees raw input.

use serde::Serialize;

/// Which period granularity the variance comparison runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Annual,
    Quarterly,
}

impl ComparisonMode {
    pub fn from_env() -> Self {
        match std::env::var("COMPARISON_MODE").as_deref() {
            Ok("annual") => ComparisonMode::Annual,
            _ => ComparisonMode::Quarterly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Annual => "annual",
            ComparisonMode::Quarterly => "quarterly",
        }
    }

    /// Default number of periods a simulated series carries for this mode.
    pub fn default_periods(&self) -> usize {
        match self {
            ComparisonMode::Annual => 3,
            ComparisonMode::Quarterly => 8,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardConfig {
    /// Annual revenue in absolute dollars (env value is in $M).
    pub annual_revenue: f64,
    pub comparison: ComparisonMode,
    /// Variance threshold in percent, clamped to [0, 100].
    pub variance_threshold_pct: f64,
    /// Periods per simulated series; at least 2 so variance is defined.
    pub periods: usize,
    /// Seed for the simulated data source.
    pub seed: u64,
    pub html_out: String,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let comparison = ComparisonMode::from_env();
        // Non-finite parses fall back to the defaults; a NaN threshold would
        // make every comparison false downstream.
        let revenue_musd: f64 = std::env::var("REVENUE_MUSD")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &f64| v.is_finite())
            .unwrap_or(100.0)
            .max(1.0);
        let threshold: f64 = std::env::var("VARIANCE_TH_PCT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &f64| v.is_finite())
            .unwrap_or(15.0);
        let periods: usize = std::env::var("PERIODS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| comparison.default_periods());
        Self {
            annual_revenue: revenue_musd * 1_000_000.0,
            comparison,
            variance_threshold_pct: threshold.clamp(0.0, 100.0),
            periods: periods.max(2),
            seed: std::env::var("SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(42),
            html_out: std::env::var("HTML_OUT")
                .unwrap_or_else(|_| "out/dashboard.html".to_string()),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            annual_revenue: 100.0 * 1_000_000.0,
            comparison: ComparisonMode::Quarterly,
            variance_threshold_pct: 15.0,
            periods: 8,
            seed: 42,
            html_out: "out/dashboard.html".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_original_widget_defaults() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.annual_revenue, 100_000_000.0);
        assert_eq!(cfg.variance_threshold_pct, 15.0);
        assert!(cfg.periods >= 2);
    }

    #[test]
    fn from_env_clamps_and_rejects_bad_input() {
        // One test body for all env mutations so parallel tests cannot race.
        std::env::set_var("VARIANCE_TH_PCT", "-10");
        std::env::set_var("REVENUE_MUSD", "0");
        std::env::set_var("PERIODS", "1");
        let cfg = DashboardConfig::from_env();
        assert_eq!(cfg.variance_threshold_pct, 0.0);
        assert_eq!(cfg.annual_revenue, 1_000_000.0);
        assert_eq!(cfg.periods, 2);

        std::env::set_var("VARIANCE_TH_PCT", "250");
        assert_eq!(DashboardConfig::from_env().variance_threshold_pct, 100.0);

        // "NaN" and "inf" parse as f64 but must not reach the evaluator,
        // where `change > NaN` would read as normal for every category.
        std::env::set_var("VARIANCE_TH_PCT", "NaN");
        assert_eq!(DashboardConfig::from_env().variance_threshold_pct, 15.0);
        std::env::set_var("VARIANCE_TH_PCT", "inf");
        assert_eq!(DashboardConfig::from_env().variance_threshold_pct, 15.0);
        std::env::set_var("REVENUE_MUSD", "NaN");
        assert_eq!(DashboardConfig::from_env().annual_revenue, 100_000_000.0);

        std::env::remove_var("VARIANCE_TH_PCT");
        std::env::remove_var("REVENUE_MUSD");
        std::env::remove_var("PERIODS");
    }
}
