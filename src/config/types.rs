// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub routes: RoutesConfig,
    pub api: ApiConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `debug` enables route resolution logging
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            access_log: true,
            access_log_format: "combined".to_string(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
    /// Listen backlog passed to `listen(2)`
    pub backlog: i32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive_timeout: 75,
            read_timeout: 30,
            write_timeout: 30,
            max_connections: None,
            backlog: 128,
        }
    }
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    /// Content type used when a handler does not set one
    pub default_content_type: String,
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            default_content_type: "text/html; charset=utf-8".to_string(),
            server_name: "Tokio-Hyper/1.0".to_string(),
            enable_cors: false,
            max_body_size: 10_485_760, // 10MB
        }
    }
}

/// Routes configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RoutesConfig {
    /// Custom `/show-id` route, registered ahead of all other routes
    pub show_id: ShowIdConfig,
    /// Literal URL paths mapped to single files on disk
    pub pages: Vec<PageConfig>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            show_id: ShowIdConfig::default(),
            pages: vec![PageConfig {
                url: "forms/html/Sample".to_string(),
                file: "Forms/Sample.html".to_string(),
            }],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShowIdConfig {
    pub enabled: bool,
    pub path: String,
    pub param: String,
}

impl Default for ShowIdConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/show-id".to_string(),
            param: "id".to_string(),
        }
    }
}

/// Page route: `url` is written without a leading slash
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub url: String,
    pub file: String,
}

/// API configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub enabled: bool,
    pub message_path: String,
    /// Text returned by the message service
    pub message: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            message_path: "api/message".to_string(),
            message: "Hello from MessageService".to_string(),
        }
    }
}
