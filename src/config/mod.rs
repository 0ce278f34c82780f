//! Configuration module for Xinsheng-Pulse
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use xinsheng_pulse::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Server will bind to: {}", config.server.bind_address);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, SearchConfig, ServerConfig};

// Re-export parser functions
pub use parser::load_config;
