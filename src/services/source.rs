// src/services/source.rs

//! Where listing and article HTML comes from.

use reqwest::blocking::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::{http, resolve_url};

/// Supplies raw HTML for the archive search and for article pages.
pub trait ArchiveSource {
    /// Run the archive search for a category and keyword.
    fn fetch_listing(&self, category_id: &str, search: &str) -> Result<String>;

    /// Fetch one article page.
    fn fetch_detail(&self, url: &str) -> Result<String>;
}

/// Live site over blocking HTTP.
pub struct HttpSource {
    client: Client,
    archive_url: Url,
}

impl HttpSource {
    /// Create a source from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: http::create_client(&config.crawler)?,
            archive_url: Url::parse(&config.site.archive_url)?,
        })
    }
}

impl ArchiveSource for HttpSource {
    fn fetch_listing(&self, category_id: &str, search: &str) -> Result<String> {
        log::debug!(
            "POST {} catID={} search={}",
            self.archive_url,
            category_id,
            search
        );
        http::post_form(
            &self.client,
            self.archive_url.as_str(),
            &[("catID", category_id), ("search", search)],
        )
    }

    fn fetch_detail(&self, url: &str) -> Result<String> {
        if url.trim().is_empty() {
            return Err(AppError::crawl("fetch_detail", "article has no link"));
        }
        let url = resolve_url(&self.archive_url, url);
        http::get_text(&self.client, &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Start a mock site and point a source's archive URL at it.
    ///
    /// The server lives on `rt`; the blocking client is driven from the test
    /// thread, outside any async context.
    fn mock_site(rt: &Runtime) -> (MockServer, HttpSource) {
        let server = rt.block_on(MockServer::start());
        let mut config = Config::default();
        config.site.archive_url = format!("{}/wp-content/gen.php", server.uri());
        let source = HttpSource::new(&config).unwrap();
        (server, source)
    }

    #[test]
    fn test_new_rejects_bad_archive_url() {
        let mut config = Config::default();
        config.site.archive_url = "::".to_string();
        assert!(matches!(HttpSource::new(&config), Err(AppError::Url(_))));
    }

    #[test]
    fn test_empty_link_fails_without_request() {
        let source = HttpSource::new(&Config::default()).unwrap();
        let err = source.fetch_detail("  ").unwrap_err();
        assert!(matches!(err, AppError::Crawl { .. }));
    }

    #[test]
    fn test_listing_search_is_form_encoded() {
        let rt = Runtime::new().unwrap();
        let (server, source) = mock_site(&rt);
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/wp-content/gen.php"))
                .and(header("content-type", "application/x-www-form-urlencoded"))
                .and(body_string("catID=9&search=a%26b%3Dc+d"))
                .respond_with(ResponseTemplate::new(200).set_body_string("listing"))
                .mount(&server),
        );

        assert_eq!(source.fetch_listing("9", "a&b=c d").unwrap(), "listing");
    }

    #[test]
    fn test_detail_not_found_is_http_error() {
        let rt = Runtime::new().unwrap();
        let (server, source) = mock_site(&rt);
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/missing"))
                .respond_with(ResponseTemplate::new(404))
                .mount(&server),
        );

        let err = source
            .fetch_detail(&format!("{}/missing", server.uri()))
            .unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }

    #[test]
    fn test_relative_link_resolves_against_archive_url() {
        let rt = Runtime::new().unwrap();
        let (server, source) = mock_site(&rt);
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/a1"))
                .respond_with(ResponseTemplate::new(200).set_body_string("article"))
                .mount(&server),
        );

        assert_eq!(source.fetch_detail("/a1").unwrap(), "article");
    }
}
