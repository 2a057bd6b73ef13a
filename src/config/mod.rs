// Configuration module entry point
// Loads application configuration and holds the runtime state built from it

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    ApiConfig, Config, HttpConfig, LoggingConfig, PageConfig, PerformanceConfig, RoutesConfig,
    ServerConfig, ShowIdConfig,
};

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// A missing file is not an error: every section falls back to its defaults.
    /// Environment variables prefixed with `APP_` override file values,
    /// e.g. `APP_SERVER__PORT=9000`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
