//! Selector-based access to parsed HTML.
//!
//! The extractors only need four operations: select the first match, select
//! every match, read concatenated text and read an attribute. `Node` exposes
//! exactly those over `scraper`'s document and element types.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// Read access to a document or element.
pub trait Node<'a> {
    /// Every descendant matching `selector`, in document order.
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>>;

    /// First descendant matching `selector`.
    fn select_one(&self, selector: &Selector) -> Option<ElementRef<'a>>;

    /// All descendant text nodes, concatenated as-is.
    fn text(&self) -> String;

    /// Attribute value, if present.
    fn attr(&self, name: &str) -> Option<&'a str>;
}

impl<'a> Node<'a> for &'a Html {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        let html: &'a Html = *self;
        html.select(selector).collect()
    }

    fn select_one(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        let html: &'a Html = *self;
        html.select(selector).next()
    }

    fn text(&self) -> String {
        self.root_element().text().collect()
    }

    fn attr(&self, _name: &str) -> Option<&'a str> {
        None
    }
}

impl<'a> Node<'a> for ElementRef<'a> {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn select_one(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }
}

/// Text of the first match, or an empty string when nothing matches.
pub fn text_of<'a, N: Node<'a>>(node: &N, selector: &Selector) -> String {
    node.select_one(selector)
        .map(|el| Node::text(&el))
        .unwrap_or_default()
}

/// Text of every match joined together, or an empty string when nothing matches.
pub fn text_of_all<'a, N: Node<'a>>(node: &N, selector: &Selector) -> String {
    node.select_all(selector)
        .iter()
        .map(|el| Node::text(el))
        .collect()
}

/// Compile a CSS selector.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
