// src/analysis/filter.rs
use crate::domain::models::{DateRange, Dimension, OrderRecord};
use crate::sales_data::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keep rows whose `dimension` value is in `values`.
///
/// An empty `values` set means "no restriction" and returns the input unchanged.
pub fn filter_by_dimension<'a>(
    rows: &[&'a OrderRecord],
    dimension: Dimension,
    values: &BTreeSet<String>,
) -> Vec<&'a OrderRecord> {
    if values.is_empty() {
        return rows.to_vec();
    }

    let kept: Vec<&'a OrderRecord> = rows
        .iter()
        .copied()
        .filter(|r| values.contains(dimension.value_of(r)))
        .collect();

    log::debug!(
        "{} filter ({} values): {} -> {} rows",
        dimension,
        values.len(),
        rows.len(),
        kept.len()
    );
    kept
}

/// Keep rows ordered on a day inside `range` (both ends inclusive).
pub fn filter_by_date<'a>(rows: &[&'a OrderRecord], range: &DateRange) -> Vec<&'a OrderRecord> {
    if range.is_empty() {
        log::debug!("Date filter {} is empty: {} -> 0 rows", range, rows.len());
        return Vec::new();
    }

    let kept: Vec<&'a OrderRecord> = rows
        .iter()
        .copied()
        .filter(|r| range.contains(&r.order_date))
        .collect();

    log::debug!("Date filter {}: {} -> {} rows", range, rows.len(), kept.len());
    kept
}

/// User-chosen restriction on the base dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// `None` leaves the date column unrestricted
    pub date_range: Option<DateRange>,
    pub product_lines: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub statuses: BTreeSet<String>,
}

impl FilterSelection {
    /// Selection that passes every row through.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Default sidebar state: the full observed date range and every
    /// product line selected, no country or status restriction.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            date_range: dataset.date_bounds(),
            product_lines: dataset
                .distinct_values(Dimension::ProductLine)
                .into_iter()
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_values<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.values_mut(dimension) = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn values(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::ProductLine => &self.product_lines,
            Dimension::Country => &self.countries,
            Dimension::Status => &self.statuses,
        }
    }

    fn values_mut(&mut self, dimension: Dimension) -> &mut BTreeSet<String> {
        match dimension {
            Dimension::ProductLine => &mut self.product_lines,
            Dimension::Country => &mut self.countries,
            Dimension::Status => &mut self.statuses,
        }
    }

    /// Apply every restriction in turn (logical AND across dimensions).
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a OrderRecord> {
        let mut rows: Vec<&'a OrderRecord> = dataset.records().iter().collect();

        if let Some(range) = &self.date_range {
            rows = filter_by_date(&rows, range);
        }
        for dimension in [Dimension::ProductLine, Dimension::Country, Dimension::Status] {
            rows = filter_by_dimension(&rows, dimension, self.values(dimension));
        }
        rows
    }
}

/// Values a user can pick from, derived from the dataset itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub date_bounds: Option<DateRange>,
    /// Sorted alphabetically
    pub product_lines: Vec<String>,
    /// In order of first appearance
    pub countries: Vec<String>,
    /// In order of first appearance
    pub statuses: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut product_lines = dataset.distinct_values(Dimension::ProductLine);
        product_lines.sort();

        Self {
            date_bounds: dataset.date_bounds(),
            product_lines,
            countries: dataset.distinct_values(Dimension::Country),
            statuses: dataset.distinct_values(Dimension::Status),
        }
    }
}
