// src/dashboard/pipeline.rs
use crate::analysis::filter::{FilterOptions, FilterSelection};
use crate::analysis::kpi::{calculate_kpis, KpiSnapshot};
use crate::analysis::ranking::{
    sales_by_product_line, top_customers, top_products, CustomerSales, ProductLineSales,
    ProductSales, TOP_N,
};
use crate::analysis::timeseries::{sales_over_time, SeriesMode, SeriesPoint};
use crate::dashboard::format::{kpi_metrics, KpiMetric};
use crate::sales_data::Dataset;
use serde::{Deserialize, Serialize};

/// Presentation switches that do not change which rows are selected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOptions {
    pub series_mode: SeriesMode,
}

/// Everything the page renders for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub filter_options: FilterOptions,
    pub selection: FilterSelection,
    /// Order lines left after filtering
    pub row_count: usize,
    pub kpis: KpiSnapshot,
    pub metrics: Vec<KpiMetric>,
    pub sales_over_time: Vec<SeriesPoint>,
    pub top_customers: Vec<CustomerSales>,
    pub top_products: Vec<ProductSales>,
    pub sales_by_product_line: Vec<ProductLineSales>,
}

/// Filter the dataset and derive every KPI and table from the result.
///
/// Pure: the output depends only on the arguments.
pub fn build_dashboard(
    dataset: &Dataset,
    selection: &FilterSelection,
    options: &DashboardOptions,
) -> Dashboard {
    let rows = selection.apply(dataset);
    let kpis = calculate_kpis(&rows);
    if kpis.is_empty() && !dataset.is_empty() {
        log::warn!("Filter selection excludes all {} order lines", dataset.len());
    }
    log::debug!(
        "Dashboard over {} rows: sales={} orders={} customers={}",
        rows.len(),
        kpis.total_sales,
        kpis.total_orders,
        kpis.unique_customers
    );

    Dashboard {
        filter_options: FilterOptions::from_dataset(dataset),
        selection: selection.clone(),
        row_count: rows.len(),
        metrics: kpi_metrics(&kpis),
        sales_over_time: sales_over_time(&rows, options.series_mode),
        top_customers: top_customers(&rows, TOP_N),
        top_products: top_products(&rows, TOP_N),
        sales_by_product_line: sales_by_product_line(&rows),
        kpis,
    }
}
