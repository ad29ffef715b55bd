//! Static asset constants (CSS, JavaScript and images).

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("styles.css");

/// JavaScript for the detail modal and date picker.
pub const JS: &str = include_str!("gallery.js");

/// Placeholder shown for video days without a usable thumbnail.
pub const FALLBACK_SVG: &str = include_str!("fallback.svg");
