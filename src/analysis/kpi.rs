// src/analysis/kpi.rs
use crate::domain::models::OrderRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

/// The four headline metrics of a filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSnapshot {
    pub total_sales: Decimal,
    /// Distinct order numbers
    pub total_orders: usize,
    /// Zero when there are no orders
    pub average_sales_per_order: Decimal,
    /// Distinct customer names
    pub unique_customers: usize,
}

impl KpiSnapshot {
    pub fn is_empty(&self) -> bool {
        self.total_orders == 0
    }
}

pub fn calculate_kpis(rows: &[&OrderRecord]) -> KpiSnapshot {
    let total_sales: Decimal = rows.iter().map(|r| r.sales).sum();
    let total_orders = rows
        .iter()
        .map(|r| r.order_number)
        .collect::<HashSet<_>>()
        .len();
    let unique_customers = rows
        .iter()
        .map(|r| r.customer_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let average_sales_per_order = if total_orders == 0 {
        Decimal::ZERO
    } else {
        total_sales
            .checked_div(Decimal::from(total_orders))
            .unwrap_or(Decimal::ZERO)
    };

    KpiSnapshot {
        total_sales,
        total_orders,
        average_sales_per_order,
        unique_customers,
    }
}
