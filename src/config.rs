//! Configuration management for apodview using the prefer crate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Mirror of the APOD archive used when nothing else is configured.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Default address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Placeholder image served for video days without a recognizable link.
pub const DEFAULT_FALLBACK_IMAGE: &str = "/static/fallback.svg";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Feed location: an http(s) URL, a `file://` URL, or a local path.
    pub feed: String,
    /// User agent for the feed request.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Address the web server binds to.
    pub bind: String,
    /// Image shown when a video thumbnail can't be derived.
    pub fallback_image: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            feed: DEFAULT_FEED_URL.to_string(),
            user_agent: format!("apodview/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: 30,
            bind: DEFAULT_BIND.to_string(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feed URL or path.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "feed_url")]
    pub feed: Option<String>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Server bind address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Fallback image for unrecognized video links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_image: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers apodview config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("apodview").await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => match Self::load_from_path(path).await {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                None => Self::default(),
            },
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config = Self::parse(&contents, ext)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse config contents in the format named by `ext`.
    pub fn parse(contents: &str, ext: &str) -> Result<Self, String> {
        match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e)),
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e)),
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
        }
    }

    /// Get the base directory for resolving relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a feed location from the config file.
    /// URLs are returned unchanged; relative paths are resolved against the
    /// config file's directory.
    fn resolve_feed(&self, feed: &str) -> String {
        if feed.contains("://") {
            return feed.to_string();
        }
        let expanded = shellexpand::tilde(feed);
        let path = Path::new(expanded.as_ref());
        match self.base_dir() {
            Some(base) if path.is_relative() => base.join(path).display().to_string(),
            _ => path.display().to_string(),
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref feed) = self.feed {
            settings.feed = self.resolve_feed(feed);
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(ref fallback) = self.fallback_image {
            settings.fallback_image = fallback.clone();
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Feed location from the command line or `APOD_FEED_URL`.
    pub feed: Option<String>,
}

/// Resolve settings: CLI/env overrides, then config file, then defaults.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> anyhow::Result<(Settings, Config)> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path)
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?,
        None => Config::load().await,
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);

    if let Some(feed) = options.feed {
        settings.feed = feed;
    }

    tracing::debug!("Resolved settings: {:?}", settings);
    Ok((settings, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.feed, DEFAULT_FEED_URL);
        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.user_agent.starts_with("apodview/"));
    }

    #[test]
    fn test_parse_formats() {
        let toml = Config::parse("feed = \"https://example.com/feed.json\"\nrequest_timeout = 5", "toml")
            .unwrap();
        assert_eq!(toml.feed.as_deref(), Some("https://example.com/feed.json"));
        assert_eq!(toml.request_timeout, Some(5));

        let yaml = Config::parse("bind: 0.0.0.0:8080\n", "yaml").unwrap();
        assert_eq!(yaml.bind.as_deref(), Some("0.0.0.0:8080"));

        let json = Config::parse(r#"{"feed_url": "https://example.com/a.json"}"#, "json").unwrap();
        assert_eq!(json.feed.as_deref(), Some("https://example.com/a.json"));

        assert!(Config::parse("feed = [", "toml").is_err());
    }

    #[test]
    fn test_apply_to_settings() {
        let config = Config {
            feed: Some("https://mirror.example/data.json".to_string()),
            request_timeout: Some(3),
            fallback_image: Some("/img/logo.jpg".to_string()),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);

        assert_eq!(settings.feed, "https://mirror.example/data.json");
        assert_eq!(settings.request_timeout, 3);
        assert_eq!(settings.fallback_image, "/img/logo.jpg");
        assert_eq!(settings.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_relative_feed_path_resolves_against_config_dir() {
        let config = Config {
            feed: Some("data/feed.json".to_string()),
            source_path: Some(PathBuf::from("/etc/apodview/apodview.toml")),
            ..Default::default()
        };
        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings);
        assert_eq!(settings.feed, "/etc/apodview/data/feed.json");
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apodview.yaml");
        std::fs::write(&path, "feed: feed.json\nuser_agent: test-agent\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.user_agent.as_deref(), Some("test-agent"));

        let (settings, _) = load_settings_with_options(LoadOptions {
            config_path: Some(path.clone()),
            feed: None,
        })
        .await
        .unwrap();
        assert_eq!(settings.feed, dir.path().join("feed.json").display().to_string());
        assert_eq!(settings.user_agent, "test-agent");
    }

    #[tokio::test]
    async fn test_cli_feed_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apodview.json");
        std::fs::write(&path, r#"{"feed": "https://from-config.example/feed.json"}"#).unwrap();

        let (settings, _) = load_settings_with_options(LoadOptions {
            config_path: Some(path),
            feed: Some("https://from-cli.example/feed.json".to_string()),
        })
        .await
        .unwrap();
        assert_eq!(settings.feed, "https://from-cli.example/feed.json");
    }
}
