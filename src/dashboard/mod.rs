// src/dashboard/mod.rs
// Display-ready output for the rendering layer

pub mod format;
pub mod pipeline;

pub use format::{format_millions, format_thousands, kpi_metrics, KpiMetric};
pub use pipeline::{build_dashboard, Dashboard, DashboardOptions};
