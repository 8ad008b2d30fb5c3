//! Bookmaker site settings.

use serde::Deserialize;

/// HTTP client configuration shared by all sites.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per request; timeouts and connect errors are retried.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds, multiplied by the attempt.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// User agent sent to bookmakers.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3000
}

const fn default_http_retry_max_attempts() -> u32 {
    1
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

fn default_user_agent() -> String {
    concat!("betbot/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
            user_agent: default_user_agent(),
        }
    }
}

/// Sisal mobile listing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SisalConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_sisal_base_url")]
    pub base_url: String,
}

fn default_sisal_base_url() -> String {
    "http://mobile.sisal.it".into()
}

impl Default for SisalConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_sisal_base_url(),
        }
    }
}

/// Bwin betting-offer feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BwinConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_bwin_base_url")]
    pub base_url: String,
    /// Access id sent as `x-bwin-accessid`, if the feed requires one.
    #[serde(default)]
    pub access_id: Option<String>,
}

fn default_bwin_base_url() -> String {
    "https://sports.bwin.it".into()
}

impl Default for BwinConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_bwin_base_url(),
            access_id: None,
        }
    }
}

const fn default_enabled() -> bool {
    true
}

/// Per-site configuration sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitesConfig {
    #[serde(default)]
    pub sisal: SisalConfig,
    #[serde(default)]
    pub bwin: BwinConfig,
}
