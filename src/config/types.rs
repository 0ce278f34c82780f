use serde::Deserialize;

/// Main configuration structure for Xinsheng-Pulse
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address and port the HTTP server listens on (e.g., "127.0.0.1:8080")
    #[serde(rename = "bind-address")]
    pub bind_address: String,

    /// Root directory for static assets; /css, /js and /image are served
    /// from subdirectories of this path
    #[serde(rename = "static-dir")]
    pub static_dir: String,

    /// Path to the dashboard HTML template
    #[serde(rename = "template-path")]
    pub template_path: String,

    /// Path to the append-only error log file
    #[serde(rename = "log-path")]
    pub log_path: String,
}

/// Remote search endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// URL of the search endpoint with a single `{category}` substitution
    /// token; every other query parameter is fixed
    #[serde(rename = "url-template")]
    pub url_template: String,

    /// Transport-level request timeout in milliseconds. Absent means no
    /// timeout: a hanging upstream blocks that category's task indefinitely.
    #[serde(rename = "request-timeout-ms")]
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}
