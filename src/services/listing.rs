// src/services/listing.rs

//! Archive listing extraction.
//!
//! Turns the archive search response into article stubs, one per listed
//! post, in page order.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ArticleStub, SelectorConfig};
use crate::utils::dom::{Node, parse_selector, text_of};

/// Extracts article stubs from an archive listing page.
pub struct ListingExtractor {
    row: Selector,
    title: Selector,
    meta: Selector,
}

impl ListingExtractor {
    /// Compile the listing selectors.
    pub fn new(selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            row: parse_selector(&selectors.row)?,
            title: parse_selector(&selectors.title)?,
            meta: parse_selector(&selectors.meta)?,
        })
    }

    /// Parse raw HTML and extract stubs.
    pub fn extract_html(&self, html: &str) -> Result<Vec<ArticleStub>> {
        let document = Html::parse_document(html);
        self.extract(&&document)
    }

    /// Extract one stub per row. No rows is an empty result, not an error.
    pub fn extract<'a, N: Node<'a>>(&self, document: &N) -> Result<Vec<ArticleStub>> {
        document
            .select_all(&self.row)
            .iter()
            .enumerate()
            .map(|(index, row)| self.parse_row(index, row))
            .collect()
    }

    fn parse_row<'a, N: Node<'a>>(&self, index: usize, row: &N) -> Result<ArticleStub> {
        let anchor = row.select_one(&self.title);
        let title = anchor.map(|a| Node::text(&a)).unwrap_or_default();
        let url = anchor
            .and_then(|a| a.attr("href"))
            .unwrap_or("")
            .to_string();

        let meta = text_of(row, &self.meta);
        let (date, tag) = split_meta(&meta).ok_or_else(|| AppError::MissingSeparator {
            index,
            text: meta.clone(),
        })?;

        Ok(ArticleStub {
            tag: tag.to_string(),
            title,
            url,
            date: date.to_string(),
        })
    }
}

/// Split a `date | tag` line. Anything after a second `|` is ignored.
fn split_meta(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('|');
    let date = parts.next()?;
    let tag = parts.next()?;
    Some((date.trim(), tag.trim()))
}
