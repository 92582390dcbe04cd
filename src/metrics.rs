//! KPI aggregation over category spend and risk-impact figures.

use serde::Serialize;

use crate::model::{CategorySpend, RiskImpact};

/// Headline numbers for the top of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    /// Sum of all category spend, absolute dollars.
    pub total_spend: f64,
    /// IT spend as a percentage of annual revenue.
    pub it_ratio_pct: f64,
    /// Summed revenue-protected percentage across risk categories.
    pub revenue_protected_pct: f64,
}

/// Compute the KPI summary for one render pass.
///
/// `annual_revenue` is guaranteed positive by config clamping, so the ratio
/// is always defined.
pub fn compute_kpis(
    spend: &[CategorySpend],
    risk: &[RiskImpact],
    annual_revenue: f64,
) -> KpiSummary {
    let total_spend: f64 = spend.iter().map(|s| s.spend).sum();
    KpiSummary {
        total_spend,
        it_ratio_pct: total_spend / annual_revenue * 100.0,
        revenue_protected_pct: risk.iter().map(|r| r.revenue_protected_pct).sum(),
    }
}
