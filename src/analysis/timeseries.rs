// src/analysis/timeseries.rs
use crate::domain::models::OrderRecord;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the sales-over-time chart splits its series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesMode {
    /// A single series across all product lines
    #[default]
    Combined,
    /// One series per product line
    ByProductLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub order_date: NaiveDateTime,
    /// Set only in `SeriesMode::ByProductLine`
    pub product_line: Option<String>,
    pub sales: Decimal,
}

/// Sales summed per order timestamp, ascending by date then product line.
pub fn sales_over_time(rows: &[&OrderRecord], mode: SeriesMode) -> Vec<SeriesPoint> {
    let mut buckets: BTreeMap<(NaiveDateTime, Option<&str>), Decimal> = BTreeMap::new();

    for row in rows {
        let line = match mode {
            SeriesMode::Combined => None,
            SeriesMode::ByProductLine => Some(row.product_line.as_str()),
        };
        *buckets.entry((row.order_date, line)).or_insert(Decimal::ZERO) += row.sales;
    }

    buckets
        .into_iter()
        .map(|((order_date, line), sales)| SeriesPoint {
            order_date,
            product_line: line.map(str::to_string),
            sales,
        })
        .collect()
}
