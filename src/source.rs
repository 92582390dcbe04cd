//! Data-source seam between input acquisition and computation.
//!
//! The evaluator and KPI passes only see what a `SpendSource` hands them, so
//! the canned placeholder figures and the simulated generator can be swapped
//! for live finance feeds without touching any compute code.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeMap;

use crate::config::ComparisonMode;
use crate::model::{canned_risk_impact, canned_spend, CategorySpend, RiskImpact, CATEGORIES};

/// Supplies everything one render pass consumes.
pub trait SpendSource {
    /// Current annual spend per category.
    fn category_spend(&self) -> Vec<CategorySpend>;

    /// Chronologically ordered period series per category for the selected
    /// comparison mode. Insertion order is chronological order.
    fn period_series(&self, mode: ComparisonMode) -> BTreeMap<String, Vec<f64>>;

    /// Risk-adjusted impact figures for protective categories.
    fn risk_impact(&self) -> Vec<RiskImpact>;

    fn name(&self) -> &'static str;
}

/// The original canned executive figures. Period series are fixed sequences
/// derived from the annual base, so output is identical across passes.
pub struct CannedSource;

// Per-period multipliers applied to each category's base figure. Every
// third category takes an extra jump on the final period (LAST_STEP_JUMP)
// so the default 15% threshold flags some series and leaves others normal.
const QUARTERLY_SHAPE: [f64; 4] = [0.96, 1.02, 0.99, 1.07];
const ANNUAL_SHAPE: [f64; 3] = [0.90, 1.00, 1.06];
const LAST_STEP_JUMP: f64 = 0.20;

impl SpendSource for CannedSource {
    fn category_spend(&self) -> Vec<CategorySpend> {
        canned_spend()
    }

    fn period_series(&self, mode: ComparisonMode) -> BTreeMap<String, Vec<f64>> {
        let shape: &[f64] = match mode {
            ComparisonMode::Quarterly => &QUARTERLY_SHAPE,
            ComparisonMode::Annual => &ANNUAL_SHAPE,
        };
        canned_spend()
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let per_period = match mode {
                    ComparisonMode::Quarterly => record.spend / 4.0,
                    ComparisonMode::Annual => record.spend,
                };
                // Stagger the shape per category so series are not clones.
                let series = shape
                    .iter()
                    .enumerate()
                    .map(|(p, m)| {
                        let mut m = m + 0.015 * ((idx + p) % 3) as f64;
                        if p == shape.len() - 1 && idx % 3 == 1 {
                            m += LAST_STEP_JUMP;
                        }
                        per_period * m
                    })
                    .collect();
                (record.category, series)
            })
            .collect()
    }

    fn risk_impact(&self) -> Vec<RiskImpact> {
        canned_risk_impact()
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

/// Seeded random walk around the canned base figures, a stand-in for real
/// historical data. The same seed always yields the same series.
pub struct SimulatedSource {
    seed: u64,
    periods: usize,
}

impl SimulatedSource {
    pub fn new(seed: u64, periods: usize) -> Self {
        // Two periods minimum, matching the variance contract.
        Self {
            seed,
            periods: periods.max(2),
        }
    }
}

impl SpendSource for SimulatedSource {
    fn category_spend(&self) -> Vec<CategorySpend> {
        canned_spend()
    }

    fn period_series(&self, mode: ComparisonMode) -> BTreeMap<String, Vec<f64>> {
        // Fresh RNG per call keeps passes independent and idempotent.
        let mut rng = StdRng::seed_from_u64(self.seed);
        let base = canned_spend();
        CATEGORIES
            .iter()
            .enumerate()
            .map(|(idx, category)| {
                let annual = base[idx].spend;
                let start = match mode {
                    ComparisonMode::Quarterly => annual / 4.0,
                    ComparisonMode::Annual => annual,
                };
                let mut series = Vec::with_capacity(self.periods);
                let mut value = start;
                for _ in 0..self.periods {
                    series.push(value);
                    // Step within ±25%; spend never walks to zero.
                    value *= 1.0 + rng.gen_range(-0.25..0.25);
                }
                (category.to_string(), series)
            })
            .collect()
    }

    fn risk_impact(&self) -> Vec<RiskImpact> {
        canned_risk_impact()
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Pick a source from `DATA_MODE` ("canned" or "sim").
pub fn source_from_env(seed: u64, periods: usize) -> Box<dyn SpendSource> {
    match std::env::var("DATA_MODE").as_deref() {
        Ok("sim") => Box::new(SimulatedSource::new(seed, periods)),
        _ => Box::new(CannedSource),
    }
}
