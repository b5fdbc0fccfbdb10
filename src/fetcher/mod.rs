//! Proposal page retrieval
//!
//! The crawler only talks to a [`PageFetcher`]. [`HttpFetcher`] is the real
//! implementation, issuing one GET per identifier against the platform; tests
//! substitute their own fetchers.
//!
//! ## Usage
//!
//! ```no_run
//! use fisl_crawler::Config;
//! use fisl_crawler::fetcher::{HttpFetcher, PageFetcher};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = HttpFetcher::new(&Config::default())?;
//!
//!     match fetcher.fetch(42).await {
//!         Ok(page) => println!("{} bytes", page.len()),
//!         Err(e) => println!("no page ({}): {}", e.category(), e),
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Reqwest-backed fetcher
pub mod http;
/// Fetcher trait
pub mod traits;

pub use http::HttpFetcher;
pub use traits::{FetchResult, PageFetcher};
