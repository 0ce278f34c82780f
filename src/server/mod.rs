//! Dashboard HTTP server
//!
//! One page: `GET /` runs a full aggregation fan-out and renders the result
//! through the template shell. Static assets are served from subdirectories
//! of the configured static root, mirroring the site layout the dashboard's
//! markup expects (/css, /js, /image).

mod templates;

pub use templates::{render_index, FALLBACK_MESSAGE};

use crate::config::Config;
use crate::search::Aggregator;
use crate::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state for request handlers
pub struct AppState {
    aggregator: Aggregator,
    template_path: PathBuf,
}

/// Builds the dashboard router from configuration
///
/// # Arguments
///
/// * `config` - The full application configuration
///
/// # Returns
///
/// * `Ok(Router)` - The router with the index and static routes mounted
/// * `Err(PulseError)` - The HTTP client could not be built
pub fn build_router(config: &Config) -> Result<Router> {
    let aggregator = Aggregator::new(&config.search)?;
    let state = Arc::new(AppState {
        aggregator,
        template_path: PathBuf::from(&config.server.template_path),
    });

    let static_root = Path::new(&config.server.static_dir);

    let router = Router::new()
        .route("/", get(index))
        .nest_service("/css", ServeDir::new(static_root.join("css")))
        .nest_service("/js", ServeDir::new(static_root.join("js")))
        .nest_service("/image", ServeDir::new(static_root.join("image")))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Serves the dashboard page
///
/// Every request triggers an independent aggregation fan-out; there is no
/// caching and no coalescing of concurrent requests. A template failure is
/// contained to this request: it is logged at error level and answered with
/// the fixed fallback body.
async fn index(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    let view = state.aggregator.aggregate().await;

    match render_index(&view, &state.template_path) {
        Ok(page) => (StatusCode::OK, Html(page)),
        Err(e) => {
            tracing::error!("failed to render dashboard: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(FALLBACK_MESSAGE.to_string()),
            )
        }
    }
}
