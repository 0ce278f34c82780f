use crate::config::types::{Config, SearchConfig, ServerConfig};
use crate::search::CATEGORY_TOKEN;
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_search_config(&config.search)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address '{}' is not a valid socket address: {}",
            config.bind_address, e
        ))
    })?;

    if config.static_dir.is_empty() {
        return Err(ConfigError::Validation(
            "static_dir cannot be empty".to_string(),
        ));
    }

    if config.template_path.is_empty() {
        return Err(ConfigError::Validation(
            "template_path cannot be empty".to_string(),
        ));
    }

    if config.log_path.is_empty() {
        return Err(ConfigError::Validation(
            "log_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates search endpoint configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let token_count = config.url_template.matches(CATEGORY_TOKEN).count();
    if token_count != 1 {
        return Err(ConfigError::Validation(format!(
            "url_template must contain exactly one '{}' token, found {}",
            CATEGORY_TOKEN, token_count
        )));
    }

    // Substitute a real category token and check the result is a usable URL
    let sample = config.url_template.replace(CATEGORY_TOKEN, "day");
    let url = Url::parse(&sample)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid url_template: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "url_template must use an http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    if let Some(timeout) = config.request_timeout_ms {
        if timeout == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_ms must be greater than zero when set".to_string(),
            ));
        }
    }

    Ok(())
}
