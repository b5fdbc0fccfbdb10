//! Crawl pipeline: fetch, extract, accumulate, serialize
//!
//! [`Crawler`] walks the identifier range strictly in ascending order, one
//! request at a time. Fetch failures and pages that do not match the record
//! pattern are logged and counted, never fatal: a crawl always covers the whole
//! range and then writes whatever table resulted, exactly once.

use crate::config::{Config, OutputConfig};
use crate::error::Result;
use crate::extractor::RecordExtractor;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::serializer;
use crate::types::{IdRange, Record};
use std::io::Write;
use tracing::{debug, info};

/// Counters for one crawl
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Identifiers requested
    pub visited: u64,
    /// Records extracted
    pub extracted: u64,
    /// Identifiers whose page could not be fetched
    pub fetch_failures: u64,
    /// Pages fetched that did not contain a complete record
    pub extraction_misses: u64,
}

/// Records collected by a crawl, in ascending identifier order
#[derive(Clone, Debug, Default)]
pub struct CrawlOutput {
    /// Extracted records
    pub records: Vec<Record>,
    /// What happened along the way
    pub summary: CrawlSummary,
}

/// Sequential crawler over an identifier range
///
/// # Examples
///
/// ```no_run
/// use fisl_crawler::{Config, Crawler};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::default();
///     let crawler = Crawler::from_config(&config)?;
///
///     let summary = crawler.run(std::io::stdout()).await?;
///     eprintln!("{} records", summary.extracted);
///     Ok(())
/// }
/// ```
pub struct Crawler<F> {
    fetcher: F,
    extractor: RecordExtractor,
    range: IdRange,
    output: OutputConfig,
}

impl Crawler<HttpFetcher> {
    /// Crawler that fetches over HTTP as described by `config`
    ///
    /// # Errors
    /// Returns error if the HTTP fetcher cannot be created
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?, config))
    }
}

impl<F: PageFetcher> Crawler<F> {
    /// Crawler over `config.range` using the given fetcher and the default extractor
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            extractor: RecordExtractor::new(),
            range: config.range,
            output: config.output.clone(),
        }
    }

    /// Replace the record extractor
    #[must_use]
    pub fn with_extractor(mut self, extractor: RecordExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Identifiers this crawler visits
    pub fn range(&self) -> IdRange {
        self.range
    }

    /// Fetch and extract every identifier in the range
    pub async fn collect(&self) -> CrawlOutput {
        let mut output = CrawlOutput::default();
        info!(
            range = %self.range,
            fetcher = self.fetcher.name(),
            "Starting crawl"
        );

        for id in self.range.iter() {
            output.summary.visited += 1;
            debug!(id, "Getting page");

            let page = match self.fetcher.fetch(id).await {
                Ok(page) => page,
                Err(e) => {
                    info!(id, category = e.category(), "No data: {}", e);
                    output.summary.fetch_failures += 1;
                    continue;
                }
            };

            match self.extractor.extract(&page, id) {
                Some(record) => {
                    debug!(id, title = %record.title, "Extracted record");
                    output.records.push(record);
                    output.summary.extracted += 1;
                }
                None => {
                    info!(id, "No data: page does not contain a proposal");
                    output.summary.extraction_misses += 1;
                }
            }
        }

        info!(
            visited = output.summary.visited,
            extracted = output.summary.extracted,
            fetch_failures = output.summary.fetch_failures,
            extraction_misses = output.summary.extraction_misses,
            "Crawl finished"
        );
        output
    }

    /// Crawl the whole range, then write the table to `sink` once
    ///
    /// The sink is consumed and dropped after the write, whether or not the
    /// write succeeded.
    ///
    /// # Errors
    /// Returns error if the table cannot be written; see
    /// [`serializer::write_table`]
    pub async fn run<W: Write>(&self, mut sink: W) -> Result<CrawlSummary> {
        let output = self.collect().await;

        debug!(
            records = output.records.len(),
            format = %self.output.format,
            "Writing results"
        );
        serializer::write_table(
            &mut sink,
            &output.records,
            self.output.format,
            self.output.indent,
        )?;

        Ok(output.summary)
    }
}
