//! Static file serving handlers.

use axum::{http::header, response::IntoResponse};

use super::super::assets;

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}

/// Serve JavaScript.
pub async fn serve_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        assets::JS,
    )
}

/// Serve the fallback thumbnail.
pub async fn serve_fallback() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        assets::FALLBACK_SVG,
    )
}
