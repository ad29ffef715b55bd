//! Shared helper functions for CLI commands.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::feed::{load_gallery, source_for, FeedError};
use crate::gallery::Gallery;

/// Load the gallery once, showing a spinner while the feed is fetched.
pub async fn load_with_spinner(settings: &Settings) -> Result<Gallery, FeedError> {
    let source = source_for(settings)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Loading APOD feed from {}", source.describe()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = load_gallery(source.as_ref()).await;
    pb.finish_and_clear();
    result
}
