//! # fisl-crawler
//!
//! Crawler for the FISL Papers NG proposal platform.
//!
//! Every proposal page is addressed by a numeric `id`. For each identifier in a
//! range the crawler fetches the page, decodes its HTML character references,
//! pulls out the title, abstract, proposal text and track, and finally writes
//! all records as CSV or JSON.
//!
//! ## Pipeline
//!
//! - [`fetcher`] - one GET per identifier, failures classified by category
//! - [`entities`] - HTML character reference decoding
//! - [`extractor`] - all-or-nothing record matching over a whole page
//! - [`serializer`] - CSV / JSON output
//! - [`crawler`] - sequential driver tying the above together
//!
//! ## Quick Start
//!
//! ```no_run
//! use fisl_crawler::{Config, Crawler, IdRange, OutputFormat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.range = IdRange::new(1, 20);
//!     config.output.format = OutputFormat::Json;
//!     config.output.indent = Some(2);
//!     config.validate()?;
//!
//!     let crawler = Crawler::from_config(&config)?;
//!     let summary = crawler.run(std::io::stdout()).await?;
//!     eprintln!("{} of {} pages had a proposal", summary.extracted, summary.visited);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Crawl pipeline driver
pub mod crawler;
/// HTML character reference decoding
pub mod entities;
/// Error types
pub mod error;
/// Record extraction
pub mod extractor;
/// Page retrieval
pub mod fetcher;
/// CSV and JSON output
pub mod serializer;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::{BASE_PROPOSAL_URL, Config, HttpConfig, OutputConfig};
pub use crawler::{CrawlOutput, CrawlSummary, Crawler};
pub use error::{Error, FetchError, Result};
pub use extractor::RecordExtractor;
pub use fetcher::{FetchResult, HttpFetcher, PageFetcher};
pub use types::{IdRange, OutputFormat, Record};
