//! Render-pass driver: env config → data source → KPIs → variance →
//! text summary + static HTML dashboard.
//!
//! Environment knobs: REVENUE_MUSD, COMPARISON_MODE (annual|quarterly),
//! VARIANCE_TH_PCT, DATA_MODE (canned|sim), SEED, PERIODS, HTML_OUT.

use anyhow::Result;

use spendlens::config::DashboardConfig;
use spendlens::logging::{self, log, obj, v_num, v_str, Domain, Level};
use spendlens::metrics::compute_kpis;
use spendlens::render::{write_dashboard, DashboardData, VarianceRow};
use spendlens::report;
use spendlens::source::source_from_env;
use spendlens::variance;

fn main() -> Result<()> {
    let cfg = DashboardConfig::from_env();
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[
            ("mode", v_str(cfg.comparison.as_str())),
            ("revenue", v_num(cfg.annual_revenue)),
            ("threshold_pct", v_num(cfg.variance_threshold_pct)),
        ]),
    );

    let source = source_from_env(cfg.seed, cfg.periods);
    let spend = source.category_spend();
    let risk = source.risk_impact();
    let series = source.period_series(cfg.comparison);
    log(
        Level::Info,
        Domain::Source,
        "loaded",
        obj(&[
            ("source", v_str(source.name())),
            ("categories", v_num(series.len() as f64)),
        ]),
    );

    let kpis = compute_kpis(&spend, &risk, cfg.annual_revenue);
    log(
        Level::Info,
        Domain::Metrics,
        "kpis",
        obj(&[
            ("total_spend", v_num(kpis.total_spend)),
            ("it_ratio_pct", v_num(kpis.it_ratio_pct)),
            ("revenue_protected_pct", v_num(kpis.revenue_protected_pct)),
        ]),
    );

    let outcomes = variance::evaluate(&series, cfg.variance_threshold_pct);
    let banner = report::warning_banner(&outcomes);
    log(
        Level::Info,
        Domain::Variance,
        "evaluated",
        obj(&[
            ("high", v_num(banner.high.len() as f64)),
            ("indeterminate", v_num(banner.indeterminate.len() as f64)),
        ]),
    );

    println!();
    println!("== Key Metrics ==");
    for line in report::kpi_lines(&kpis) {
        println!("  {}", line);
    }
    println!();
    if banner.high.is_empty() {
        println!("No high-variance categories this period.");
    } else {
        println!(
            "WARNING: high variance (> {:.0}%):",
            cfg.variance_threshold_pct
        );
        for line in &banner.high {
            println!("  {}", line);
        }
    }
    for category in &banner.indeterminate {
        println!("  {}: indeterminate (zero prior period)", category);
    }

    let data = DashboardData {
        generated: logging::ts_now(),
        source: source.name().to_string(),
        kpi_lines: report::kpi_lines(&kpis),
        spend_bars: report::spend_bars(&spend, &outcomes),
        ropr_line: report::ropr_line(&risk),
        protection_pie: report::protection_pie(&risk),
        variance_table: outcomes
            .iter()
            .map(|(category, outcome)| VarianceRow::from_outcome(category, outcome))
            .collect(),
        banner,
        kpis,
        config: cfg.clone(),
    };
    write_dashboard(&cfg.html_out, &data)?;
    log(
        Level::Info,
        Domain::Render,
        "written",
        obj(&[("path", v_str(&cfg.html_out))]),
    );
    println!();
    println!("Dashboard written to {}", cfg.html_out);

    Ok(())
}
