//! Web server for browsing the gallery.
//!
//! Provides:
//! - The nine-day gallery page with a start-date picker
//! - A detail modal per card, with a `/day/{date}` page as no-script fallback
//! - A small JSON API for coverage and windows

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::sync::Arc;

use crate::config::Settings;
use crate::gallery::Gallery;

/// Shared state for the web server.
///
/// The gallery is loaded once before the server starts and never changes.
/// `None` means the load failed and every page reports it.
#[derive(Clone)]
pub struct AppState {
    pub gallery: Option<Arc<Gallery>>,
    pub fallback_image: Arc<str>,
}

impl AppState {
    pub fn new(gallery: Gallery, settings: &Settings) -> Self {
        Self {
            gallery: Some(Arc::new(gallery)),
            fallback_image: Arc::from(settings.fallback_image.as_str()),
        }
    }

    /// State for a server whose feed could not be loaded.
    pub fn unavailable(settings: &Settings) -> Self {
        Self {
            gallery: None,
            fallback_image: Arc::from(settings.fallback_image.as_str()),
        }
    }
}

/// Start the web server.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
