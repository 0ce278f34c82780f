//! Search polling module for the fetch-aggregate pipeline
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching of per-category result pages
//! - Count and post-summary extraction from the result markup
//! - Concurrent aggregation across all categories

mod aggregate;
mod extract;
mod fetcher;

pub use aggregate::{AggregateView, Aggregator, FAILED_COUNT};
pub use extract::{extract_count, extract_items, PostSummary};
pub use fetcher::{build_http_client, category_url, fetch_category, Category, CATEGORY_TOKEN};
