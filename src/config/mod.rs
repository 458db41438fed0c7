// Configuration module entry point
// Loads layered configuration (defaults, config file, environment) and builds runtime state

mod state;
mod types;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::net::SocketAddr;
use std::path::Path;

// Re-export public types
pub use state::AppState;
pub use types::{Config, DataConfig, HealthConfig, HttpConfig};

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. `BLOG__<SECTION>__<KEY>` environment variables
    /// override both the file and the built-in defaults. Relative data paths
    /// are taken from the directory holding the config file, so the default
    /// `config` path keeps them relative to the working directory.
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let mut config: Self = Self::defaults()?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("BLOG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(base) = Path::new(config_path).parent() {
            config.data.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Build configuration from TOML text layered over the defaults
    #[cfg(test)]
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("data.posts_file", "data/posts.json")?
            .set_default("data.comments_file", "data/comments.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "blog_api/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.pretty_json", false)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
