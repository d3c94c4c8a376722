// src/lib.rs
// Main library module declarations

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod sales_data;
