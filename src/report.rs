//! Text summary and chart-series construction.
//!
//! Everything here is presentation-shaping: formatted KPI lines, the
//! high-variance warning banner, and the labeled/colored points the HTML
//! layer plots. No numbers are computed here beyond formatting.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::metrics::KpiSummary;
use crate::model::{CategorySpend, RiskImpact};
use crate::variance::Variance;

/// Palette color for unflagged series.
pub const NORMAL_COLOR: &str = "lightskyblue";
/// Palette color for high-variance series.
pub const ALERT_COLOR: &str = "crimson";

/// One bar in the spend breakdown chart.
#[derive(Debug, Clone, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// One point in the ROPR line chart.
#[derive(Debug, Clone, Serialize)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
}

/// One slice of the revenue-protection pie.
#[derive(Debug, Clone, Serialize)]
pub struct PiePoint {
    pub label: String,
    pub value: f64,
}

/// Warning banner content: flagged categories plus data-quality notes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VarianceBanner {
    /// `"<category>: <delta>%"` lines for high-variance categories.
    pub high: Vec<String>,
    /// Categories whose prior period was zero; delta undefined.
    pub indeterminate: Vec<String>,
}

impl VarianceBanner {
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.indeterminate.is_empty()
    }
}

/// Build the banner from evaluator output. Not-applicable categories are
/// omitted entirely; there is nothing to warn about.
pub fn warning_banner(outcomes: &BTreeMap<String, Variance>) -> VarianceBanner {
    let mut banner = VarianceBanner::default();
    for (category, outcome) in outcomes {
        match outcome {
            Variance::Computed {
                relative_change,
                high: true,
            } => banner
                .high
                .push(format!("{}: {:.1}%", category, relative_change * 100.0)),
            Variance::Indeterminate => banner.indeterminate.push(category.clone()),
            _ => {}
        }
    }
    banner
}

/// Headline KPI lines in the dashboard's display order.
pub fn kpi_lines(kpis: &KpiSummary) -> Vec<String> {
    vec![
        format!("Total IT Spend: ${}", group_thousands(kpis.total_spend)),
        format!("IT Spend / Revenue: {:.2}%", kpis.it_ratio_pct),
        format!(
            "Revenue at Risk (Protected): {:.0}%",
            kpis.revenue_protected_pct
        ),
    ]
}

/// Spend bars, colored by the category's variance outcome.
pub fn spend_bars(
    spend: &[CategorySpend],
    outcomes: &BTreeMap<String, Variance>,
) -> Vec<BarPoint> {
    spend
        .iter()
        .map(|record| {
            let flagged = outcomes
                .get(&record.category)
                .map(Variance::is_high)
                .unwrap_or(false);
            BarPoint {
                label: record.category.clone(),
                value: record.spend,
                color: if flagged { ALERT_COLOR } else { NORMAL_COLOR }.to_string(),
            }
        })
        .collect()
}

/// ROPR multiples for the line chart.
pub fn ropr_line(risk: &[RiskImpact]) -> Vec<LinePoint> {
    risk.iter()
        .map(|r| LinePoint {
            label: r.category.clone(),
            value: r.ropr,
        })
        .collect()
}

/// Protected-revenue shares for the pie chart.
pub fn protection_pie(risk: &[RiskImpact]) -> Vec<PiePoint> {
    risk.iter()
        .map(|r| PiePoint {
            label: r.category.clone(),
            value: r.revenue_protected_pct,
        })
        .collect()
}

/// Group an amount with comma separators, rounding to whole dollars.
pub fn group_thousands(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{canned_risk_impact, canned_spend};
    use crate::variance;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_740_000.0), "1,740,000");
        assert_eq!(group_thousands(-12_500.0), "-12,500");
    }

    #[test]
    fn banner_formats_high_variance_categories() {
        let mut series = BTreeMap::new();
        series.insert("Telecom".to_string(), vec![100.0, 140.0]);
        series.insert("Hardware".to_string(), vec![100.0, 105.0]);
        series.insert("BC/DR".to_string(), vec![0.0, 50.0]);
        series.insert("Software".to_string(), vec![280.0]);
        let outcomes = variance::evaluate(&series, 15.0);

        let banner = warning_banner(&outcomes);
        assert_eq!(banner.high, vec!["Telecom: 40.0%".to_string()]);
        assert_eq!(banner.indeterminate, vec!["BC/DR".to_string()]);
    }

    #[test]
    fn empty_banner_when_all_normal() {
        let mut series = BTreeMap::new();
        series.insert("Hardware".to_string(), vec![100.0, 101.0]);
        let banner = warning_banner(&variance::evaluate(&series, 15.0));
        assert!(banner.is_empty());
    }

    #[test]
    fn flagged_bars_switch_to_alert_color() {
        let mut series = BTreeMap::new();
        series.insert("Personnel".to_string(), vec![100.0, 160.0]);
        let outcomes = variance::evaluate(&series, 15.0);

        let bars = spend_bars(&canned_spend(), &outcomes);
        for bar in &bars {
            if bar.label == "Personnel" {
                assert_eq!(bar.color, ALERT_COLOR);
            } else {
                assert_eq!(bar.color, NORMAL_COLOR);
            }
        }
    }

    #[test]
    fn kpi_lines_match_canned_dataset() {
        let kpis = crate::metrics::compute_kpis(
            &canned_spend(),
            &canned_risk_impact(),
            100_000_000.0,
        );
        let lines = kpi_lines(&kpis);
        assert_eq!(lines[0], "Total IT Spend: $1,740,000");
        assert_eq!(lines[1], "IT Spend / Revenue: 1.74%");
        assert_eq!(lines[2], "Revenue at Risk (Protected): 43%");
    }

    #[test]
    fn ropr_and_pie_mirror_risk_figures() {
        let risk = canned_risk_impact();
        let line = ropr_line(&risk);
        assert_eq!(line.len(), 2);
        assert_eq!(line[0].value, 6.5);
        let pie = protection_pie(&risk);
        assert_eq!(pie[1].value, 18.0);
    }
}
