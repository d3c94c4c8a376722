// src/sales_data/mod.rs
// Base sales dataset: loading, caching and the immutable record set

pub mod cache;
pub mod loader;

pub use cache::{content_hash, DatasetCache};
pub use loader::{decode_latin1, load_dataset, parse_dataset, parse_order_date};

use crate::domain::models::{DateRange, Dimension, OrderRecord};
use std::collections::HashSet;

/// Immutable, fully parsed copy of the sales CSV
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source: String,
    content_hash: Option<String>,
    records: Vec<OrderRecord>,
}

impl Dataset {
    pub(crate) fn new(source: &str, content_hash: String, records: Vec<OrderRecord>) -> Self {
        Self {
            source: source.to_string(),
            content_hash: Some(content_hash),
            records,
        }
    }

    /// Build a dataset from records that never came from a file.
    ///
    /// Unlike the loader this does not bound the sales magnitudes; callers
    /// must keep the sum of absolute sales within `Decimal::MAX`.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self {
            source: "<memory>".to_string(),
            content_hash: None,
            records,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// SHA-256 of the raw file bytes, `None` for in-memory datasets.
    pub fn content_hash(&self) -> Option<&str> {
        self.content_hash.as_deref()
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed span of order dates, `None` when the dataset is empty.
    pub fn date_bounds(&self) -> Option<DateRange> {
        let start = self.records.iter().map(|r| r.order_date.date()).min()?;
        let end = self.records.iter().map(|r| r.order_date.date()).max()?;
        Some(DateRange::new(start, end))
    }

    /// Distinct values of a dimension in order of first appearance.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| dimension.value_of(r))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }
}
