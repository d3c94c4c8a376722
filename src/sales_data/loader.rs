// src/sales_data/loader.rs
use crate::domain::errors::{DataError, DataResult};
use crate::domain::models::OrderRecord;
use crate::sales_data::cache::content_hash;
use crate::sales_data::Dataset;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const DATETIME_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Positions of the columns the dashboard reads
struct ColumnIndex {
    order_number: usize,
    order_date: usize,
    product_code: usize,
    product_line: usize,
    country: usize,
    status: usize,
    customer_name: usize,
    sales: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> DataResult<Self> {
        let find = |name: &str| -> DataResult<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            order_number: find("ORDERNUMBER")?,
            order_date: find("ORDERDATE")?,
            product_code: find("PRODUCTCODE")?,
            product_line: find("PRODUCTLINE")?,
            country: find("COUNTRY")?,
            status: find("STATUS")?,
            customer_name: find("CUSTOMERNAME")?,
            sales: find("SALES")?,
        })
    }

    fn parse_row(&self, record: &csv::StringRecord, row: usize) -> DataResult<OrderRecord> {
        let field = |i: usize| record.get(i).map(str::trim).unwrap_or_default();

        let order_number = field(self.order_number);
        let order_number = order_number
            .parse::<u64>()
            .map_err(|_| DataError::InvalidNumber {
                row,
                field: "ORDERNUMBER",
                value: order_number.to_string(),
            })?;

        let order_date = field(self.order_date);
        let order_date = parse_order_date(order_date).ok_or_else(|| DataError::InvalidDate {
            row,
            value: order_date.to_string(),
        })?;

        let sales = field(self.sales);
        let sales = Decimal::from_str(sales).map_err(|_| DataError::InvalidNumber {
            row,
            field: "SALES",
            value: sales.to_string(),
        })?;

        Ok(OrderRecord {
            order_number,
            order_date,
            product_code: field(self.product_code).to_string(),
            product_line: field(self.product_line).to_string(),
            country: field(self.country).to_string(),
            status: field(self.status).to_string(),
            customer_name: field(self.customer_name).to_string(),
            sales,
        })
    }
}

/// Read and parse the sales CSV at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> DataResult<Dataset> {
    let path = path.as_ref();
    let bytes = read_source(path)?;
    parse_dataset(&bytes, &path.display().to_string())
}

/// Parse raw CSV bytes; `source` only labels the result.
pub fn parse_dataset(bytes: &[u8], source: &str) -> DataResult<Dataset> {
    parse_with_hash(bytes, source, content_hash(bytes))
}

pub(crate) fn read_source(path: &Path) -> DataResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| DataError::Missing {
        path: path.display().to_string(),
        source,
    })
}

pub(crate) fn parse_with_hash(bytes: &[u8], source: &str, hash: String) -> DataResult<Dataset> {
    let text = decode_latin1(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes));

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataError::Malformed {
            row: 0,
            reason: e.to_string(),
        })?
        .clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    // Sum of |sales| bounds every subset sum taken later, in any order
    let mut magnitude = Decimal::ZERO;
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| DataError::Malformed {
            row,
            reason: e.to_string(),
        })?;
        let order = columns.parse_row(&record, row)?;
        magnitude = magnitude
            .checked_add(order.sales.abs())
            .ok_or(DataError::SalesOverflow { row })?;
        records.push(order);
    }

    log::info!("Loaded {} order lines from {}", records.len(), source);
    Ok(Dataset::new(source, hash, records))
}

/// Decode ISO-8859-1 bytes. Each byte is the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse an `ORDERDATE` cell; date-only values land at midnight.
pub fn parse_order_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
