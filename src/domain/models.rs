// src/domain/models.rs
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One order line from the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub order_number: u64,
    pub order_date: NaiveDateTime,
    pub product_code: String,
    pub product_line: String,
    pub country: String,
    pub status: String,
    pub customer_name: String,
    pub sales: Decimal,
}

/// Categorical columns a selection can restrict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    ProductLine,
    Country,
    Status,
}

impl Dimension {
    pub fn value_of<'a>(&self, record: &'a OrderRecord) -> &'a str {
        match self {
            Dimension::ProductLine => &record.product_line,
            Dimension::Country => &record.country,
            Dimension::Status => &record.status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::ProductLine => "PRODUCTLINE",
            Dimension::Country => "COUNTRY",
            Dimension::Status => "STATUS",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when the day of `timestamp` lies within `[start, end]`.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let day = timestamp.date();
        self.start <= day && day <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
