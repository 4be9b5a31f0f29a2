use std::sync::Arc;

use dashboard::config::Config;
use dashboard::invoices::SharedInvoiceSource;
use dashboard::startup::initialize_database;
use dashboard::ui::{make_config, App};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();

    // The store is opened on its own runtime; it has to outlive the UI
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let database = match runtime.block_on(initialize_database(&config)) {
        Ok(database) => database,
        Err(e) => {
            error!("Failed to open invoice database: {}", e);
            std::process::exit(1);
        }
    };
    let source: SharedInvoiceSource = Arc::new(database);

    info!("Launching dashboard");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(source)
        .launch(App);
}
