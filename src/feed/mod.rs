// Feed ingestion: HTTPS fetch of the published CSV exports plus the
// header-keyed row mapping the normalizer consumes.

pub mod fetcher;
pub mod rows;

// Re-export the pieces the rest of the crate actually touches.
pub use fetcher::{FeedFetcher, HttpFetcher};
pub use rows::{FeedRow, parse_rows};
