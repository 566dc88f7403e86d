// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub api: ApiConfig,
    pub ajax: AjaxConfig,
    pub pages: PagesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// API endpoint configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Path of the register endpoint
    pub register_path: String,
    /// Health check path (plain text `ok`)
    #[serde(default = "default_health_path")]
    pub health_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_path() -> String {
    "/healthz".to_string()
}

/// Ajax request policy
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AjaxConfig {
    /// Reject requests that are not recognized as ajax calls
    pub ajax_only: bool,
    /// Treat `Accept: application/json` as an ajax marker
    pub accept_json: bool,
    /// Allowed `Origin` values; empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Page field endpoint configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PagesConfig {
    pub enabled: bool,
    pub mount: String,
    /// TOML file holding `[[page]]` entries
    #[serde(default)]
    pub file: Option<String>,
    /// Allow the `?debug` short-circuit
    pub debug: bool,
}
