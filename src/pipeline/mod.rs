//! Pipeline entry points.
//!
//! - `run_crawler`: search the archive and read every listed article
//! - `run_pipeline`: validate input, crawl, and save the result

pub mod crawl;
pub mod pipeline;

pub use crawl::run_crawler;
pub use pipeline::{RunOutcome, run_pipeline};
