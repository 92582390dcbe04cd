//! spendlens: IT-spend executive dashboard engine.
//!
//! Each invocation is one synchronous render pass: pull spend figures and
//! period series from a data source, aggregate KPIs, classify per-category
//! variance against a threshold, then emit a text summary and a static HTML
//! dashboard. No state survives between passes.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod render;
pub mod report;
pub mod source;
pub mod variance;
