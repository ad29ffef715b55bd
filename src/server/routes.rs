//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and /gallery are the same page; /gallery is the picker's target
        .route("/", get(handlers::gallery_page))
        .route("/gallery", get(handlers::gallery_page))
        // Per-day detail page (used when scripts are unavailable)
        .route("/day/:date", get(handlers::day_detail))
        // JSON API
        .route("/api/coverage", get(handlers::api_coverage))
        .route("/api/window", get(handlers::api_window))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/gallery.js", get(handlers::serve_js))
        .route("/static/fallback.svg", get(handlers::serve_fallback))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
