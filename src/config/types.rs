use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the university directory is fetched from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the directory service (e.g., "http://universities.hipolabs.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Country passed to the search endpoint.
    #[serde(default = "default_country")]
    pub country: String,
    /// Optional name filter passed to the search endpoint.
    #[serde(default)]
    pub name: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Cards materialized above and below the visible window (default: 2).
    #[serde(default = "default_overscan_rows")]
    pub overscan_rows: usize,
    /// Columns after which a name is clipped (default: 40).
    #[serde(default = "default_name_max_width")]
    pub name_max_width: u16,
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Messages {
    #[serde(default = "default_header")]
    pub header: String,
    #[serde(default = "default_loading")]
    pub loading: String,
    #[serde(default = "default_error_generic")]
    pub error_generic: String,
    #[serde(default = "default_error_io")]
    pub error_io: String,
    #[serde(default = "default_retry")]
    pub retry: String,
    #[serde(default = "default_retry_io")]
    pub retry_io: String,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache dir>/unibrowse/unibrowse.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://universities.hipolabs.com".to_string()
}

fn default_country() -> String {
    "Indonesia".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_overscan_rows() -> usize {
    2
}

fn default_name_max_width() -> u16 {
    40
}

fn default_header() -> String {
    "Universities".to_string()
}

fn default_loading() -> String {
    "Loading universities...".to_string()
}

fn default_error_generic() -> String {
    "Failed to load data.".to_string()
}

fn default_error_io() -> String {
    "Connection problem. Check your network.".to_string()
}

fn default_retry() -> String {
    "Retry".to_string()
}

fn default_retry_io() -> String {
    "Try again".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            country: default_country(),
            name: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            overscan_rows: default_overscan_rows(),
            name_max_width: default_name_max_width(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            header: default_header(),
            loading: default_loading(),
            error_generic: default_error_generic(),
            error_io: default_error_io(),
            retry: default_retry(),
            retry_io: default_retry_io(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
