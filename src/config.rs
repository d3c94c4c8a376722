// src/config.rs
use crate::analysis::filter::FilterSelection;
use crate::analysis::timeseries::SeriesMode;
use crate::dashboard::pipeline::DashboardOptions;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::models::{DateRange, Dimension};
use crate::sales_data::Dataset;
use chrono::NaiveDate;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DEFAULT_DATA_PATH: &str = "data/sales_data_sample.csv";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sales dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset location
    pub data: DataConfig,

    /// Initial filter selection
    pub filters: FilterConfig,

    /// Output switches
    pub display: DisplayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path of the sales CSV
    pub path: String,
}

/// Filter selection; empty lists and missing dates leave the sidebar defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub product_lines: Vec<String>,
    pub countries: Vec<String>,
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Draw one sales series instead of one per product line
    pub combine_product_lines: bool,

    /// Pretty-print the JSON output
    pub pretty: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let data_config = DataConfig {
            path: env::var("SALES_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
        };

        let filter_config = FilterConfig {
            start_date: parse_date_var("FILTER_START_DATE")?,
            end_date: parse_date_var("FILTER_END_DATE")?,
            product_lines: parse_list_var("FILTER_PRODUCT_LINES"),
            countries: parse_list_var("FILTER_COUNTRIES"),
            statuses: parse_list_var("FILTER_STATUSES"),
        };

        let display_config = DisplayConfig {
            combine_product_lines: env::var("COMBINE_PRODUCT_LINES")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            pretty: env::var("OUTPUT_PRETTY")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        };

        let logging_config = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            to_file: env::var("LOG_TO_FILE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            file_path: env::var("LOG_FILE_PATH").ok(),
        };

        Ok(Config {
            data: data_config,
            filters: filter_config,
            display: display_config,
            logging: logging_config,
        })
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path)
            .map_err(|e| AppError::Config(format!("Failed to open config file: {}", e)))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Turn the configured filters into a selection over `dataset`.
    ///
    /// Starts from the dataset defaults (full date range, every product line)
    /// and overrides whatever the configuration sets.
    pub fn filter_selection(&self, dataset: &Dataset) -> FilterSelection {
        let mut selection = FilterSelection::for_dataset(dataset);
        let filters = &self.filters;

        let bounds = selection.date_range;
        let start = filters.start_date.or(bounds.map(|b| b.start));
        let end = filters.end_date.or(bounds.map(|b| b.end));
        if let (Some(start), Some(end)) = (start, end) {
            selection = selection.with_date_range(DateRange::new(start, end));
        }

        if !filters.product_lines.is_empty() {
            selection =
                selection.with_values(Dimension::ProductLine, filters.product_lines.iter().cloned());
        }
        selection
            .with_values(Dimension::Country, filters.countries.iter().cloned())
            .with_values(Dimension::Status, filters.statuses.iter().cloned())
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            series_mode: if self.display.combine_product_lines {
                SeriesMode::Combined
            } else {
                SeriesMode::ByProductLine
            },
        }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        // Set log level
        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);

        // Logs go to stderr unless redirected; stdout carries the dashboard
        builder.target(env_logger::Target::Stderr);
        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path)
                    .map_err(|e| AppError::Config(format!("Failed to create log file: {}", e)))?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        builder
            .try_init()
            .map_err(|e| AppError::Config(format!("Failed to initialize logger: {}", e)))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                path: DEFAULT_DATA_PATH.to_string(),
            },
            filters: FilterConfig::default(),
            display: DisplayConfig {
                combine_product_lines: true,
                pretty: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}

fn parse_date_var(name: &str) -> AppResult<Option<NaiveDate>> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => parse_date(&value)
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        _ => Ok(None),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| format!("invalid date {:?} (expected YYYY-MM-DD): {}", value, e))
}

fn parse_list_var(name: &str) -> Vec<String> {
    env::var(name).map(|v| parse_list(&v)).unwrap_or_default()
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
