//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Target site endpoints
    #[serde(default)]
    pub site: SiteConfig,

    /// CSS selectors for the listing and detail pages
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        Url::parse(&self.site.archive_url)?;

        let selectors = [
            ("selectors.row", &self.selectors.row),
            ("selectors.title", &self.selectors.title),
            ("selectors.meta", &self.selectors.meta),
            ("selectors.content", &self.selectors.content),
            ("selectors.author", &self.selectors.author),
            ("selectors.date", &self.selectors.date),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(AppError::config(format!("{name} is empty")));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Endpoints of the scraped site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Archive search endpoint (form POST). Relative article links resolve against it.
    #[serde(default = "defaults::archive_url")]
    pub archive_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            archive_url: defaults::archive_url(),
        }
    }
}

/// CSS selectors for the archive listing and article pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// One element per listed article
    #[serde(default = "defaults::row")]
    pub row: String,

    /// Anchor inside a row (text is the title, `href` the link)
    #[serde(default = "defaults::title")]
    pub title: String,

    /// `date | tag` line inside a row
    #[serde(default = "defaults::meta")]
    pub meta: String,

    /// Article body on the detail page
    #[serde(default = "defaults::content")]
    pub content: String,

    /// Byline on the detail page
    #[serde(default = "defaults::author")]
    pub author: String,

    /// Publication date on the detail page
    #[serde(default = "defaults::date")]
    pub date: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            row: defaults::row(),
            title: defaults::title(),
            meta: defaults::meta(),
            content: defaults::content(),
            author: defaults::author(),
            date: defaults::date(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; newscrawl/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Site defaults
    pub fn archive_url() -> String {
        "https://www.fijitimes.com.fj/wp-content/themes/fijitimes/generate-archive.php".into()
    }

    // Selector defaults
    pub fn row() -> String {
        ".archive-post-container .archive-post".into()
    }
    pub fn title() -> String {
        "a".into()
    }
    pub fn meta() -> String {
        "p".into()
    }
    pub fn content() -> String {
        ".single-cat-content".into()
    }
    pub fn author() -> String {
        ".header-extras .byline".into()
    }
    pub fn date() -> String {
        ".header-extras .section-date".into()
    }
}
