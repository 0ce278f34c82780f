//! Xinsheng-Pulse: a forum search activity dashboard
//!
//! This crate polls a remote forum search endpoint for four time-window
//! categories (day/week/month/year), extracts a result count from each page
//! and a list of post summaries from the day page, and serves the aggregate
//! as a rendered HTML dashboard.

pub mod config;
pub mod search;
pub mod server;

use thiserror::Error;

/// Main error type for Xinsheng-Pulse operations
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors produced while fetching a category result page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Failed to read result page from {url}: {source}")]
    Parse { url: String, source: reqwest::Error },
}

/// Errors produced while rendering the dashboard template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Template {path} is missing the {placeholder} placeholder")]
    MissingPlaceholder { path: String, placeholder: String },
}

/// Result type alias for Xinsheng-Pulse operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use search::{AggregateView, Aggregator, Category, PostSummary, FAILED_COUNT};
