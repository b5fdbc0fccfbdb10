//! Configuration types for fisl-crawler
//!
//! A [`Config`] is built once (usually from command-line flags), validated, and
//! then handed to the fetcher and the crawler. Nothing mutates it during a run.

use crate::error::{Error, Result};
use crate::types::{IdRange, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Proposal view page of the FISL 11 Papers NG platform
pub const BASE_PROPOSAL_URL: &str = "http://verdi.softwarelivre.org/papers_ng/activity/view";

/// How the result table is written
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (default: csv)
    #[serde(default)]
    pub format: OutputFormat,

    /// Spaces per nesting level for JSON output (None = compact)
    #[serde(default)]
    pub indent: Option<usize>,

    /// Output file (None = stdout)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// HTTP client settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (None = client default, no timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Main configuration for a crawl
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Page URL the `id` query parameter is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifiers to visit (default: 1..=5)
    #[serde(default)]
    pub range: IdRange,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Log every fetch and extraction outcome
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            range: IdRange::default(),
            output: OutputConfig::default(),
            http: HttpConfig::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Check the configuration before any network activity
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if:
    /// - the range starts below 1
    /// - the base URL is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.range.start < 1 {
            return Err(Error::config("start", "start id must be at least 1"));
        }

        let url = url::Url::parse(&self.base_url).map_err(|e| {
            Error::config(
                "base_url",
                format!("invalid base URL '{}': {}", self.base_url, e),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(
                "base_url",
                format!("base URL must use http or https, got '{}'", url.scheme()),
            ));
        }

        if self.range.is_empty() {
            warn!(
                start = self.range.start,
                end = self.range.end,
                "start id is after end id, no pages will be fetched"
            );
        }
        if self.output.indent.is_some() && self.output.format != OutputFormat::Json {
            warn!(format = %self.output.format, "indent only applies to json output, ignoring it");
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    BASE_PROPOSAL_URL.to_string()
}

fn default_user_agent() -> String {
    format!("fisl-crawler/{}", env!("CARGO_PKG_VERSION"))
}
