//! Service layer for the scraper.
//!
//! - Archive listing parsing (`ListingExtractor`)
//! - Article page parsing (`DetailExtractor`)
//! - Page fetching (`ArchiveSource`, `HttpSource`)

mod detail;
mod listing;
mod source;

pub use detail::DetailExtractor;
pub use listing::ListingExtractor;
pub use source::{ArchiveSource, HttpSource};
