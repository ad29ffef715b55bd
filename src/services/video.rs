//! Video link resolution for YouTube-hosted entries.
//!
//! Video days in the feed point at YouTube rather than an image. Cards and the
//! detail view show the provider's still thumbnail instead of embedding a
//! player, and fall back to a generic placeholder when the link can't be
//! understood.

use url::Url;

/// Base URL for YouTube still thumbnails.
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Check if a URL is a YouTube video URL.
pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com/watch")
        || url.contains("youtube.com/embed/")
        || url.contains("youtu.be/")
        || url.contains("youtube.com/v/")
}

/// Extract the video identifier from a YouTube URL.
///
/// Recognizes `youtube.com` links (the `v` query parameter, or the
/// `/embed/ID` and `/v/ID` paths) and `youtu.be/ID` short links. Returns
/// `None` for anything else, including strings that don't parse as URLs.
pub fn youtube_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;

    let id = if host.contains("youtube.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .or_else(|| {
                let mut segments = parsed.path_segments()?;
                match segments.next()? {
                    "embed" | "v" => segments.next().map(String::from),
                    _ => None,
                }
            })
    } else if host.contains("youtu.be") {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(String::from)
    } else {
        None
    };

    id.filter(|id| !id.is_empty())
}

/// Thumbnail image for a video link, or `fallback` when no id can be found.
pub fn thumbnail_url(url: &str, fallback: &str) -> String {
    match youtube_id(url) {
        Some(id) => format!("{}/{}/hqdefault.jpg", THUMBNAIL_BASE, id),
        None => {
            tracing::debug!("No video id in {:?}, using fallback thumbnail", url);
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "/static/fallback.svg";

    #[test]
    fn test_is_youtube_url() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=abc123"));
        assert!(is_youtube_url("https://youtube.com/embed/abc123"));
        assert!(is_youtube_url("https://youtu.be/abc123"));
        assert!(!is_youtube_url("https://example.com/video.mp4"));
        assert!(!is_youtube_url("https://vimeo.com/123456"));
    }

    #[test]
    fn test_short_link_id() {
        assert_eq!(youtube_id("https://youtu.be/abc123"), Some("abc123".to_string()));
        assert_eq!(
            youtube_id("https://youtu.be/abc123?t=42"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_watch_link_id() {
        assert_eq!(
            youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=x"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_link_id() {
        assert_eq!(
            youtube_id("https://www.youtube.com/embed/xyz789?rel=0"),
            Some("xyz789".to_string())
        );
    }

    #[test]
    fn test_unrecognized_links() {
        assert_eq!(youtube_id("not a url"), None);
        assert_eq!(youtube_id("https://vimeo.com/123456"), None);
        assert_eq!(youtube_id("https://www.youtube.com/watch"), None);
        assert_eq!(youtube_id("https://youtu.be/"), None);
        assert_eq!(youtube_id(""), None);
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("https://youtu.be/abc123", FALLBACK),
            "https://img.youtube.com/vi/abc123/hqdefault.jpg"
        );
        assert_eq!(thumbnail_url("not a url", FALLBACK), FALLBACK);
    }
}
