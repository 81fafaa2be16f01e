// src/pipeline/crawl.rs

//! Archive crawling: one search, then every listed article in turn.

use crate::error::Result;
use crate::models::{Article, Config};
use crate::services::{ArchiveSource, DetailExtractor, ListingExtractor};

/// Search the archive and read every listed article.
///
/// Articles come back in listing order. Any failed fetch aborts the crawl.
pub fn run_crawler(
    config: &Config,
    source: &dyn ArchiveSource,
    category_id: &str,
    search: &str,
) -> Result<Vec<Article>> {
    let listing = ListingExtractor::new(&config.selectors)?;
    let detail = DetailExtractor::new(&config.selectors)?;

    let html = source.fetch_listing(category_id, search)?;
    let stubs = listing.extract_html(&html)?;
    log::info!("Found {} articles for catID={} search={:?}", stubs.len(), category_id, search);

    let mut articles = Vec::with_capacity(stubs.len());
    for (i, stub) in stubs.into_iter().enumerate() {
        log::info!("{} -> {}", i, stub.url);
        let page = source.fetch_detail(&stub.url)?;
        let article = Article::from_stub(stub, detail.extract_html(&page));
        log::debug!("{:?}", article);
        articles.push(article);
    }

    Ok(articles)
}
