// Application state module
// Everything a request needs, built once at startup and shared read-only

use std::sync::atomic::AtomicUsize;

use super::types::Config;
use crate::data::DataSource;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Where the posts and comments documents live
    pub data: DataSource,
    /// Connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let data = DataSource::from_config(&config.data);

        Self {
            config,
            data,
            active_connections: AtomicUsize::new(0),
        }
    }
}
