// src/analysis/ranking.rs
use crate::domain::models::OrderRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Row limit of the ranked tables
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSales {
    pub customer_name: String,
    pub sales: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSales {
    pub product_code: String,
    pub product_line: String,
    pub sales: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductLineSales {
    pub product_line: String,
    pub sales: Decimal,
}

/// Sum sales per key, keeping groups in order of first appearance.
fn sum_by_key<'a, K, F>(rows: &[&'a OrderRecord], key: F) -> Vec<(K, Decimal)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a OrderRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Decimal)> = Vec::new();

    for &row in rows {
        let k = key(row);
        match positions.get(&k) {
            Some(&i) => groups[i].1 += row.sales,
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, row.sales));
            }
        }
    }
    groups
}

/// Highest sales first; equal totals keep first-appearance order.
fn rank_descending<K>(mut groups: Vec<(K, Decimal)>, limit: usize) -> Vec<(K, Decimal)> {
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.truncate(limit);
    groups
}

pub fn top_customers(rows: &[&OrderRecord], limit: usize) -> Vec<CustomerSales> {
    let groups = sum_by_key(rows, |r| r.customer_name.as_str());
    rank_descending(groups, limit)
        .into_iter()
        .map(|(name, sales)| CustomerSales {
            customer_name: name.to_string(),
            sales,
        })
        .collect()
}

/// Products are keyed by (product code, product line).
pub fn top_products(rows: &[&OrderRecord], limit: usize) -> Vec<ProductSales> {
    let groups = sum_by_key(rows, |r| (r.product_code.as_str(), r.product_line.as_str()));
    rank_descending(groups, limit)
        .into_iter()
        .map(|((code, line), sales)| ProductSales {
            product_code: code.to_string(),
            product_line: line.to_string(),
            sales,
        })
        .collect()
}

/// Total sales of every product line, sorted by product line name.
pub fn sales_by_product_line(rows: &[&OrderRecord]) -> Vec<ProductLineSales> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.product_line.as_str()).or_insert(Decimal::ZERO) += row.sales;
    }

    totals
        .into_iter()
        .map(|(line, sales)| ProductLineSales {
            product_line: line.to_string(),
            sales,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(customer: &str, code: &str, line: &str, sales: Decimal) -> OrderRecord {
        OrderRecord {
            order_number: 10100,
            order_date: NaiveDate::from_ymd_opt(2005, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            product_code: code.to_string(),
            product_line: line.to_string(),
            country: "Norway".to_string(),
            status: "Shipped".to_string(),
            customer_name: customer.to_string(),
            sales,
        }
    }

    #[test]
    fn customers_are_summed_and_ranked() {
        let records = vec![
            record("Alpha", "P1", "Planes", dec!(100)),
            record("Beta", "P2", "Planes", dec!(300)),
            record("Alpha", "P1", "Planes", dec!(250)),
        ];
        let rows: Vec<&OrderRecord> = records.iter().collect();

        let top = top_customers(&rows, TOP_N);
        assert_eq!(
            top,
            vec![
                CustomerSales {
                    customer_name: "Alpha".to_string(),
                    sales: dec!(350)
                },
                CustomerSales {
                    customer_name: "Beta".to_string(),
                    sales: dec!(300)
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_appearance() {
        let records = vec![
            record("Gamma", "P1", "Planes", dec!(10)),
            record("Alpha", "P1", "Planes", dec!(10)),
            record("Beta", "P1", "Planes", dec!(10)),
        ];
        let rows: Vec<&OrderRecord> = records.iter().collect();

        let names: Vec<String> = top_customers(&rows, TOP_N)
            .into_iter()
            .map(|c| c.customer_name)
            .collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn tables_are_capped_at_limit() {
        let records: Vec<OrderRecord> = (0..15)
            .map(|i| {
                record(
                    &format!("Customer {}", i),
                    &format!("P{}", i),
                    "Planes",
                    Decimal::from(i),
                )
            })
            .collect();
        let rows: Vec<&OrderRecord> = records.iter().collect();

        let customers = top_customers(&rows, TOP_N);
        assert_eq!(customers.len(), TOP_N);
        assert_eq!(customers[0].sales, dec!(14));
        assert_eq!(top_products(&rows, TOP_N).len(), TOP_N);
        assert_eq!(top_customers(&rows[..3], TOP_N).len(), 3);
    }

    #[test]
    fn products_group_by_code_and_line() {
        let records = vec![
            record("Alpha", "S10_1678", "Motorcycles", dec!(100)),
            record("Beta", "S10_1678", "Motorcycles", dec!(40)),
            record("Beta", "S10_1678", "Vintage Cars", dec!(500)),
        ];
        let rows: Vec<&OrderRecord> = records.iter().collect();

        let top = top_products(&rows, TOP_N);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].product_line, "Vintage Cars");
        assert_eq!(top[1].sales, dec!(140));
    }

    #[test]
    fn product_ties_keep_first_appearance() {
        let records = vec![
            record("Alpha", "S24_2011", "Ships", dec!(60)),
            record("Beta", "S18_1749", "Vintage Cars", dec!(25)),
            record("Gamma", "S18_1749", "Vintage Cars", dec!(35)),
            record("Delta", "S10_1678", "Motorcycles", dec!(60)),
        ];
        let rows: Vec<&OrderRecord> = records.iter().collect();

        let order: Vec<(String, String)> = top_products(&rows, TOP_N)
            .into_iter()
            .map(|p| (p.product_code, p.product_line))
            .collect();
        assert_eq!(
            order,
            vec![
                ("S24_2011".to_string(), "Ships".to_string()),
                ("S18_1749".to_string(), "Vintage Cars".to_string()),
                ("S10_1678".to_string(), "Motorcycles".to_string()),
            ]
        );
    }

    #[test]
    fn product_line_totals_are_sorted_and_complete() {
        let records = vec![
            record("Alpha", "P1", "Trains", dec!(5)),
            record("Beta", "P2", "Planes", dec!(7)),
            record("Gamma", "P3", "Trains", dec!(1.5)),
        ];
        let rows: Vec<&OrderRecord> = records.iter().collect();

        let totals = sales_by_product_line(&rows);
        assert_eq!(
            totals,
            vec![
                ProductLineSales {
                    product_line: "Planes".to_string(),
                    sales: dec!(7)
                },
                ProductLineSales {
                    product_line: "Trains".to_string(),
                    sales: dec!(6.5)
                },
            ]
        );
    }

    #[test]
    fn empty_view_gives_empty_tables() {
        assert!(top_customers(&[], TOP_N).is_empty());
        assert!(top_products(&[], TOP_N).is_empty());
        assert!(sales_by_product_line(&[]).is_empty());
    }
}
