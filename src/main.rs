// src/main.rs
use sales_dashboard::config::Config;
use sales_dashboard::dashboard::build_dashboard;
use sales_dashboard::domain::errors::AppResult;
use sales_dashboard::sales_data::DatasetCache;

fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting sales_dashboard v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Reading sales data from {}", config.data.path);

    let mut cache = DatasetCache::new();
    let dataset = cache.get_or_load(&config.data.path).map_err(|e| {
        match e.row() {
            Some(row) => log::error!("{} rejected at data row {}", config.data.path, row),
            None => log::error!("{} could not be loaded", config.data.path),
        }
        e
    })?;

    let selection = config.filter_selection(&dataset);
    let dashboard = build_dashboard(&dataset, &selection, &config.dashboard_options());

    for metric in &dashboard.metrics {
        log::info!("{}: {}", metric.label, metric.value);
    }

    let output = if config.display.pretty {
        serde_json::to_string_pretty(&dashboard)?
    } else {
        serde_json::to_string(&dashboard)?
    };
    println!("{}", output);

    Ok(())
}
