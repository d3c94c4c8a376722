// src/analysis/mod.rs
// Stateless transforms over a filtered view of the dataset

pub mod filter;
pub mod kpi;
pub mod ranking;
pub mod timeseries;

pub use filter::{filter_by_date, filter_by_dimension, FilterOptions, FilterSelection};
pub use kpi::{calculate_kpis, KpiSnapshot};
pub use ranking::{
    sales_by_product_line, top_customers, top_products, CustomerSales, ProductLineSales,
    ProductSales, TOP_N,
};
pub use timeseries::{sales_over_time, SeriesMode, SeriesPoint};
