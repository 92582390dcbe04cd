//! Domain types for the spend dashboard: category spend records, risk-impact
//! figures, and the canned executive dataset used until live modules are wired.

use serde::{Deserialize, Serialize};

/// Fixed spend buckets tracked by the dashboard, in display order.
pub const CATEGORIES: [&str; 7] = [
    "Hardware",
    "Software",
    "Personnel",
    "Maintenance",
    "Telecom",
    "Cybersecurity",
    "BC/DR",
];

/// Annual spend for one category, in absolute dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub spend: f64,
}

impl CategorySpend {
    pub fn new(category: &str, spend: f64) -> Self {
        Self {
            category: category.to_string(),
            spend,
        }
    }
}

/// Risk-adjusted impact figures for categories that protect revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskImpact {
    pub category: String,
    /// Share of annual revenue protected by this investment, in percent.
    pub revenue_protected_pct: f64,
    /// Return on risk prevention, as a multiple of spend.
    pub ropr: f64,
}

impl RiskImpact {
    pub fn new(category: &str, revenue_protected_pct: f64, ropr: f64) -> Self {
        Self {
            category: category.to_string(),
            revenue_protected_pct,
            ropr,
        }
    }
}

/// Canned annual spend figures, placeholders for live finance feeds.
pub fn canned_spend() -> Vec<CategorySpend> {
    vec![
        CategorySpend::new("Hardware", 320_000.0),
        CategorySpend::new("Software", 280_000.0),
        CategorySpend::new("Personnel", 500_000.0),
        CategorySpend::new("Maintenance", 160_000.0),
        CategorySpend::new("Telecom", 120_000.0),
        CategorySpend::new("Cybersecurity", 220_000.0),
        CategorySpend::new("BC/DR", 140_000.0),
    ]
}

/// Canned risk-impact figures for the protective spend buckets.
pub fn canned_risk_impact() -> Vec<RiskImpact> {
    vec![
        RiskImpact::new("Cybersecurity", 25.0, 6.5),
        RiskImpact::new("BC/DR", 18.0, 4.2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_spend_covers_all_categories() {
        let spend = canned_spend();
        assert_eq!(spend.len(), CATEGORIES.len());
        for (record, name) in spend.iter().zip(CATEGORIES.iter()) {
            assert_eq!(record.category, *name);
            assert!(record.spend > 0.0);
        }
    }

    #[test]
    fn risk_impact_categories_exist_in_spend_set() {
        for impact in canned_risk_impact() {
            assert!(
                CATEGORIES.contains(&impact.category.as_str()),
                "unknown risk category {}",
                impact.category
            );
        }
    }
}
