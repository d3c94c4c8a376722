// src/domain/mod.rs
pub mod errors;
pub mod models;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, DataError, DataResult};
pub use models::{DateRange, Dimension, OrderRecord};
