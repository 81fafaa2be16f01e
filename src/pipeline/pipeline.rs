// src/pipeline/pipeline.rs

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{Config, CrawlRequest, RawRequest};
use crate::services::ArchiveSource;
use crate::storage;

use super::crawl::run_crawler;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Articles were written to `path`.
    Saved { path: PathBuf, count: usize },
    /// The search returned nothing; no file was written.
    NoData,
}

/// Validate input, crawl, and write the output file.
///
/// Input is checked before `source` is touched, so a bad flag never causes
/// a request.
pub fn run_pipeline(
    config: &Config,
    raw: RawRequest,
    source: &dyn ArchiveSource,
) -> Result<RunOutcome> {
    let request = CrawlRequest::from_raw(raw)?;
    config.validate()?;

    let articles = run_crawler(config, source, &request.category_id, &request.search)?;
    if articles.is_empty() {
        return Ok(RunOutcome::NoData);
    }

    storage::save(&request.out, &articles, request.format)?;
    log::info!(
        "Saved {} articles as {} to {}",
        articles.len(),
        request.format,
        request.out.display()
    );

    Ok(RunOutcome::Saved {
        path: request.out,
        count: articles.len(),
    })
}
