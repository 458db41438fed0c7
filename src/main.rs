use std::sync::Arc;
use tokio::sync::Notify;

mod api;
mod config;
mod data;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

/// Config file used when no path is given on the command line
const DEFAULT_CONFIG: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // Create the Tokio runtime, sizing the worker pool from configuration
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers.filter(|&w| w > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(config::AppState::new(cfg));
    let shutdown = Arc::new(Notify::new());

    server::start_signal_handler(Arc::clone(&shutdown));
    server::serve(state, shutdown).await?;
    Ok(())
}
