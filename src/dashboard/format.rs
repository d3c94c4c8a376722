// src/dashboard/format.rs
use crate::analysis::kpi::KpiSnapshot;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

pub const TOTAL_SALES: &str = "Total Sales";
pub const TOTAL_ORDERS: &str = "Total Orders";
pub const AVERAGE_SALES_PER_ORDER: &str = "Average Sales per Order";
pub const UNIQUE_CUSTOMERS: &str = "Unique Customers";

/// A labelled, display-ready KPI value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiMetric {
    pub label: String,
    pub value: String,
}

impl KpiMetric {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// `2_871_000` -> `"2.87M"`
pub fn format_millions(amount: Decimal) -> String {
    format!("{:.2}M", (amount / dec!(1000000)).round_dp(2))
}

/// `2_871` -> `"2.87K"`
pub fn format_thousands(amount: Decimal) -> String {
    format!("{:.2}K", (amount / dec!(1000)).round_dp(2))
}

pub fn kpi_metrics(kpis: &KpiSnapshot) -> Vec<KpiMetric> {
    vec![
        KpiMetric::new(TOTAL_SALES, format_millions(kpis.total_sales)),
        KpiMetric::new(TOTAL_ORDERS, kpis.total_orders.to_string()),
        KpiMetric::new(
            AVERAGE_SALES_PER_ORDER,
            format_thousands(kpis.average_sales_per_order),
        ),
        KpiMetric::new(UNIQUE_CUSTOMERS, kpis.unique_customers.to_string()),
    ]
}
