//! HTTP fetcher for category result pages
//!
//! This module handles the outbound side of the pipeline:
//! - Building the shared HTTP client
//! - Formatting the search URL for a category
//! - Fetching one result page and parsing it into a document

use crate::config::SearchConfig;
use crate::{FetchError, FetchResult};
use reqwest::Client;
use scraper::Html;
use std::fmt;
use std::time::Duration;

/// Substitution token that marks the category slot in the URL template
pub const CATEGORY_TOKEN: &str = "{category}";

/// Time-window bucket of the remote search results
///
/// Each category is fetched independently and feeds its own field of the
/// aggregate view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Day,
    Week,
    Month,
    Year,
}

impl Category {
    /// All categories, in the order their counts appear on the dashboard
    pub const ALL: [Category; 4] = [
        Category::Day,
        Category::Week,
        Category::Month,
        Category::Year,
    ];

    /// The token substituted into the URL template for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Day => "day",
            Category::Week => "week",
            Category::Month => "month",
            Category::Year => "year",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the HTTP client shared by all category fetches
///
/// The client carries no custom headers and no authentication; the only
/// transport tuning is the optional request timeout from configuration.
/// With no timeout configured a hanging upstream blocks that category's
/// task until the connection dies.
///
/// # Arguments
///
/// * `config` - The search endpoint configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &SearchConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(timeout_ms) = config.request_timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }

    builder.build()
}

/// Formats the request URL for a category
pub fn category_url(url_template: &str, category: Category) -> String {
    url_template.replace(CATEGORY_TOKEN, category.as_str())
}

/// Fetches the result page for one category and parses it into a document
///
/// A non-2xx status is not an error by itself: it is logged as a warning and
/// the body is parsed anyway. Only transport-level failures and an unreadable
/// response body fail the fetch.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url_template` - Search URL template with a `{category}` token
/// * `category` - The category to fetch
///
/// # Returns
///
/// * `Ok(Html)` - The parsed result page
/// * `Err(FetchError)` - Transport failure or unreadable body
pub async fn fetch_category(
    client: &Client,
    url_template: &str,
    category: Category,
) -> FetchResult<Html> {
    let url = category_url(url_template, category);

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(source) => {
            tracing::error!("failed to open {}: {}", url, source);
            return Err(FetchError::Transport { url, source });
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("status code is {} for {}", status.as_u16(), url);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(source) => {
            tracing::error!("failed to read result page from {}: {}", url, source);
            return Err(FetchError::Parse { url, source });
        }
    };

    Ok(Html::parse_document(&body))
}
