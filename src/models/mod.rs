// src/models/mod.rs

//! Domain models for the scraper.

mod article;
mod category;
mod config;
mod request;

// Re-export all public types
pub use article::{Article, ArticleStub, DetailFields};
pub use category::{CATEGORIES, Category};
pub use config::{Config, CrawlerConfig, SelectorConfig, SiteConfig};
pub use request::{CrawlRequest, OutputFormat, RawRequest};
