//! Static HTML dashboard generator.
//!
//! All pass output is collected into one serializable blob, injected into a
//! self-contained template, and written to disk. The page has no external
//! assets; client-side script draws the charts from the embedded JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::DashboardConfig;
use crate::metrics::KpiSummary;
use crate::report::{BarPoint, LinePoint, PiePoint, VarianceBanner};
use crate::variance::Variance;

/// Everything the page needs, in render order.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub generated: String,
    pub config: DashboardConfig,
    pub source: String,
    pub kpi_lines: Vec<String>,
    pub kpis: KpiSummary,
    pub spend_bars: Vec<BarPoint>,
    pub ropr_line: Vec<LinePoint>,
    pub protection_pie: Vec<PiePoint>,
    pub variance_table: Vec<VarianceRow>,
    pub banner: VarianceBanner,
}

/// One row of the per-category variance table.
#[derive(Debug, Serialize)]
pub struct VarianceRow {
    pub category: String,
    pub status: String,
    /// Delta in percent, absent for indeterminate/not-applicable rows.
    pub delta_pct: Option<f64>,
}

impl VarianceRow {
    pub fn from_outcome(category: &str, outcome: &Variance) -> Self {
        Self {
            category: category.to_string(),
            status: outcome.as_str().to_string(),
            delta_pct: outcome.relative_change().map(|c| c * 100.0),
        }
    }
}

/// Render the page as a string.
pub fn render_html(data: &DashboardData) -> Result<String> {
    let blob = serde_json::to_string(data).context("serialize dashboard data")?;
    Ok(TEMPLATE.replace("__DASHBOARD_DATA__", &blob))
}

/// Render and write the page, creating parent directories as needed.
pub fn write_dashboard(path: &str, data: &DashboardData) -> Result<()> {
    let html = render_html(data)?;
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
    }
    fs::write(path, &html).with_context(|| format!("write dashboard to {}", path))?;
    Ok(())
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Unified Executive Dashboard</title>
<style>
  :root { --bg:#0d1117; --panel:#161b22; --fg:#e6edf3; --fg-subtle:#8b949e;
          --accent:#87cefa; --alert:#dc143c; --green:#3fb950; }
  body { background:var(--bg); color:var(--fg); font:14px/1.5 system-ui,sans-serif;
         margin:0; padding:2rem; }
  h1 { font-size:1.4rem; } h2 { font-size:1.05rem; margin-top:2rem; }
  .meta { color:var(--fg-subtle); font-size:0.8rem; }
  .panel { background:var(--panel); border-radius:8px; padding:1rem 1.25rem; margin-top:0.75rem; }
  .kpis { display:flex; gap:1rem; flex-wrap:wrap; }
  .kpi { background:var(--panel); border-radius:8px; padding:0.9rem 1.2rem; font-size:1.05rem; }
  .banner { border-left:4px solid var(--alert); }
  .banner.clear { border-left-color:var(--green); }
  .bar-row { display:flex; align-items:center; gap:0.6rem; margin:0.3rem 0; }
  .bar-label { width:110px; color:var(--fg-subtle); text-align:right; }
  .bar { height:18px; border-radius:3px; }
  .bar-value { font-size:0.8rem; color:var(--fg-subtle); }
  table { border-collapse:collapse; width:100%; }
  th, td { text-align:left; padding:0.3rem 0.75rem 0.3rem 0; border-bottom:1px solid #21262d; }
  .status-high { color:var(--alert); } .status-normal { color:var(--green); }
  .status-indeterminate, .status-not_applicable { color:var(--fg-subtle); }
  svg text { fill:var(--fg-subtle); font-size:11px; }
  .pie-legend span { margin-right:1rem; }
  .swatch { display:inline-block; width:10px; height:10px; border-radius:2px; margin-right:4px; }
</style>
</head>
<body>
<h1>&#128202; Unified Executive Dashboard</h1>
<div class="meta" id="meta"></div>
<div class="kpis" id="kpis"></div>
<div class="panel banner" id="banner"></div>
<h2>IT Spend Breakdown by Category</h2>
<div class="panel" id="spend"></div>
<h2>Risk-Related ROI (ROPR)</h2>
<div class="panel" id="ropr"></div>
<h2>Revenue Protected by Category</h2>
<div class="panel" id="pie"></div>
<h2>Variance by Category</h2>
<div class="panel" id="variance"></div>
<script id="data" type="application/json">__DASHBOARD_DATA__</script>
<script>
const D = JSON.parse(document.getElementById('data').textContent);
const fmt = n => n.toLocaleString('en-US', {maximumFractionDigits: 0});

document.getElementById('meta').textContent =
  `generated ${D.generated} | source: ${D.source} | mode: ${D.config.comparison} | threshold: ${D.config.variance_threshold_pct}%`;

document.getElementById('kpis').innerHTML =
  D.kpi_lines.map(l => `<div class="kpi">${l}</div>`).join('');

const banner = document.getElementById('banner');
if (D.banner.high.length === 0 && D.banner.indeterminate.length === 0) {
  banner.classList.add('clear');
  banner.textContent = 'No high-variance categories this period.';
} else {
  let html = '';
  if (D.banner.high.length) {
    html += '<strong>High variance:</strong> ' + D.banner.high.join(' &middot; ');
  }
  if (D.banner.indeterminate.length) {
    html += `<div class="meta">Indeterminate (zero prior period): ${D.banner.indeterminate.join(', ')}</div>`;
  }
  banner.innerHTML = html;
}

const maxSpend = Math.max(...D.spend_bars.map(b => b.value), 1);
document.getElementById('spend').innerHTML = D.spend_bars.map(b => `
  <div class="bar-row">
    <div class="bar-label">${b.label}</div>
    <div class="bar" style="width:${(b.value / maxSpend * 60).toFixed(1)}%;background:${b.color};"></div>
    <div class="bar-value">$${fmt(b.value)}</div>
  </div>`).join('');

(function drawLine() {
  const pts = D.ropr_line;
  if (!pts.length) { document.getElementById('ropr').textContent = 'No risk-impact data.'; return; }
  const w = 520, h = 160, pad = 34;
  const maxY = Math.max(...pts.map(p => p.value)) * 1.15;
  const x = i => pts.length === 1 ? w / 2 : pad + i * (w - 2 * pad) / (pts.length - 1);
  const y = v => h - pad - v / maxY * (h - 2 * pad);
  const path = pts.map((p, i) => `${x(i)},${y(p.value)}`).join(' ');
  let svg = `<svg viewBox="0 0 ${w} ${h}" width="${w}">`;
  svg += `<polyline points="${path}" fill="none" stroke="seagreen" stroke-width="3"/>`;
  pts.forEach((p, i) => {
    svg += `<circle cx="${x(i)}" cy="${y(p.value)}" r="4" fill="seagreen"/>`;
    svg += `<text x="${x(i)}" y="${h - 10}" text-anchor="middle">${p.label}</text>`;
    svg += `<text x="${x(i)}" y="${y(p.value) - 9}" text-anchor="middle">${p.value}x</text>`;
  });
  svg += '</svg>';
  document.getElementById('ropr').innerHTML = svg;
})();

(function drawPie() {
  const pts = D.protection_pie;
  if (!pts.length) { document.getElementById('pie').textContent = 'No protection data.'; return; }
  const palette = ['#87cefa', '#3fb950', '#d29922', '#bc8cff', '#ff7b72'];
  const total = pts.reduce((s, p) => s + p.value, 0);
  let angle = 0;
  const stops = pts.map((p, i) => {
    const from = angle; angle += p.value / total * 360;
    return `${palette[i % palette.length]} ${from.toFixed(1)}deg ${angle.toFixed(1)}deg`;
  }).join(', ');
  const legend = pts.map((p, i) =>
    `<span><span class="swatch" style="background:${palette[i % palette.length]}"></span>${p.label} (${p.value}%)</span>`).join('');
  document.getElementById('pie').innerHTML =
    `<div style="display:flex;align-items:center;gap:1.5rem;">
       <div style="width:140px;height:140px;border-radius:50%;background:conic-gradient(${stops});"></div>
       <div class="pie-legend">${legend}</div>
     </div>`;
})();

document.getElementById('variance').innerHTML =
  '<table><thead><tr><th>Category</th><th>Status</th><th>Delta</th></tr></thead><tbody>' +
  D.variance_table.map(r => `<tr>
     <td>${r.category}</td>
     <td class="status-${r.status}">${r.status.replace('_', ' ')}</td>
     <td>${r.delta_pct === null ? '&mdash;' : r.delta_pct.toFixed(1) + '%'}</td>
   </tr>`).join('') + '</tbody></table>';
</script>
</body>
</html>
"##;
