//! A validated scrape request and its output format.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(AppError::validation(
                "The file format only support 'json' and 'csv'.",
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

/// Unchecked user input, as read from the command line.
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub out: Option<PathBuf>,
    pub format: Option<String>,
}

/// Everything needed to run one scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    /// Sent to the archive endpoint as typed
    pub category_id: String,
    pub search: String,
    pub out: PathBuf,
    pub format: OutputFormat,
}

impl CrawlRequest {
    /// Check required fields in order: category, search terms, output path, format.
    pub fn from_raw(raw: RawRequest) -> Result<Self> {
        let category_id = non_empty(raw.category_id)
            .ok_or_else(|| AppError::validation("Must input category id for crawler."))?;
        let search = non_empty(raw.search)
            .ok_or_else(|| AppError::validation("Must input search keywords for crawler."))?;
        let out = raw
            .out
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| AppError::validation("Must input file path for crawler."))?;
        let format = match raw.format {
            Some(f) => f.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            category_id,
            search,
            out,
            format,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
