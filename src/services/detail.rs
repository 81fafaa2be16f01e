//! Article page extraction.

use scraper::{Html, Selector};

use crate::error::Result;
use crate::models::{DetailFields, SelectorConfig};
use crate::utils::dom::{Node, parse_selector, text_of_all};

/// Extracts author, body and date from an article page.
pub struct DetailExtractor {
    content: Selector,
    author: Selector,
    date: Selector,
}

impl DetailExtractor {
    /// Compile the detail page selectors.
    pub fn new(selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            content: parse_selector(&selectors.content)?,
            author: parse_selector(&selectors.author)?,
            date: parse_selector(&selectors.date)?,
        })
    }

    pub fn extract_html(&self, html: &str) -> DetailFields {
        let document = Html::parse_document(html);
        self.extract(&&document)
    }

    /// Text of all matches is joined untrimmed; absent elements give empty strings.
    pub fn extract<'a, N: Node<'a>>(&self, document: &N) -> DetailFields {
        DetailFields {
            author: text_of_all(document, &self.author),
            content: text_of_all(document, &self.content),
            date: text_of_all(document, &self.date),
        }
    }
}
