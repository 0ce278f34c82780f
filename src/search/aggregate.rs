//! Concurrent fetch-aggregate pipeline
//!
//! One task per category, all spawned up front and joined before the view
//! is returned. Categories are fully independent: a failure in one never
//! aborts the others, and the view always comes back with every field set.

use crate::config::SearchConfig;
use crate::search::extract::{extract_count, extract_items, PostSummary};
use crate::search::fetcher::{build_http_client, fetch_category, Category};
use reqwest::Client;

/// Sentinel count recorded for a category whose fetch failed,
/// distinguishable from a genuine zero result
pub const FAILED_COUNT: i64 = -1;

/// Aggregated dashboard data for one polling run
///
/// Counts are non-negative on success or [`FAILED_COUNT`] when the fetch
/// for that category failed. `today_posts` is populated only when the day
/// fetch succeeded with a positive count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateView {
    pub day_count: i64,
    pub week_count: i64,
    pub month_count: i64,
    pub year_count: i64,
    pub today_posts: Vec<PostSummary>,
}

/// Runs the concurrent fan-out over all categories
///
/// Owns the HTTP client shared by the per-category tasks; one instance
/// serves the whole process. Each call to [`Aggregator::aggregate`] is an
/// independent full fan-out with no caching or coalescing.
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: Client,
    url_template: String,
}

impl Aggregator {
    /// Creates an aggregator for the configured search endpoint
    pub fn new(config: &SearchConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;
        Ok(Self {
            client,
            url_template: config.url_template.clone(),
        })
    }

    /// Fetches all categories concurrently and assembles the aggregate view
    ///
    /// Spawns one task per category and blocks until every task has
    /// completed. There is no aggregation-level timeout: wall-clock duration
    /// is bounded only by the slowest fetch. Failures are contained per
    /// category and reported through the sentinel count.
    pub async fn aggregate(&self) -> AggregateView {
        let mut handles = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let client = self.client.clone();
            let url_template = self.url_template.clone();
            handles.push((
                category,
                tokio::spawn(async move { poll_category(&client, &url_template, category).await }),
            ));
        }

        let mut view = AggregateView::default();
        for (category, handle) in handles {
            let (count, posts) = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    // A task that died without reporting counts as a failed fetch
                    tracing::warn!("task for {} category did not complete: {}", category, e);
                    (FAILED_COUNT, Vec::new())
                }
            };

            match category {
                Category::Day => {
                    view.day_count = count;
                    view.today_posts = posts;
                }
                Category::Week => view.week_count = count,
                Category::Month => view.month_count = count,
                Category::Year => view.year_count = count,
            }
        }

        view
    }
}

/// Fetches and extracts one category
///
/// On fetch failure the category reports the sentinel count and no posts.
/// On success the count is always extracted; posts are extracted only for
/// the day category, and only when its count is positive.
async fn poll_category(
    client: &Client,
    url_template: &str,
    category: Category,
) -> (i64, Vec<PostSummary>) {
    let document = match fetch_category(client, url_template, category).await {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("fetch for {} category failed: {}", category, e);
            return (FAILED_COUNT, Vec::new());
        }
    };

    let count = extract_count(&document);
    let posts = if category == Category::Day && count > 0 {
        extract_items(&document)
    } else {
        Vec::new()
    };

    (count, posts)
}
