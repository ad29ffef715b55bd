//! HTTP request handlers for the web server.

mod api;
mod detail;
mod gallery;
mod helpers;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_coverage, api_window};
pub use detail::day_detail;
pub use gallery::gallery_page;
pub use static_files::{serve_css, serve_fallback, serve_js};
