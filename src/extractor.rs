//! Record extraction from proposal pages
//!
//! A proposal page is matched as a whole against one pattern that must find,
//! in document order, the title, abstract, description and track name. Either
//! all four are found or the page yields nothing.

use crate::entities;
use crate::error::{Error, Result};
use crate::types::Record;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Default pattern for Papers NG proposal pages
///
/// Lazy captures with `.` matching newlines; when several `<area>` blocks
/// follow the description, the first one's `<name>` is taken.
pub const DEFAULT_PATTERN: &str = concat!(
    r"(?s)<title>(?P<title>.*?)</title>",
    r".*?<abstract>(?P<abstract>.*?)</abstract>",
    r".*?<descr>(?P<proposal>.*?)</descr>",
    r".*?<area id.*?<name>(?P<track>.*?)</name>",
);

/// Capture groups every extraction pattern must define
pub const REQUIRED_GROUPS: [&str; 4] = ["title", "abstract", "proposal", "track"];

/// Compiled DFA size limit for extraction patterns
const PATTERN_SIZE_LIMIT: usize = 1024 * 1024;

/// Pulls [`Record`]s out of raw proposal pages
#[derive(Clone, Debug)]
pub struct RecordExtractor {
    pattern: Regex,
}

impl RecordExtractor {
    /// Extractor using [`DEFAULT_PATTERN`]
    pub fn new() -> Self {
        #[allow(clippy::expect_used)]
        let pattern = Self::compile(DEFAULT_PATTERN).expect("default extraction pattern is valid");
        Self { pattern }
    }

    /// Extractor using a custom pattern
    ///
    /// The pattern must define the named groups `title`, `abstract`, `proposal`
    /// and `track`. Add `(?s)` if captures should span lines.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] if the pattern does not compile or a
    /// required group is missing
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Self::compile(pattern)?,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| Error::InvalidPattern(e.to_string()))?;

        let names: Vec<&str> = regex.capture_names().flatten().collect();
        if let Some(missing) = REQUIRED_GROUPS.iter().find(|g| !names.contains(*g)) {
            return Err(Error::InvalidPattern(format!(
                "missing capture group '{}'",
                missing
            )));
        }

        Ok(regex)
    }

    /// The pattern source this extractor matches with
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract the record for page `id`
    ///
    /// Character references are decoded over the whole page before matching,
    /// so the captured fields come out already decoded. Returns `None` when the
    /// page lacks any of the four fields; that is an expected outcome for empty
    /// or withdrawn proposals.
    pub fn extract(&self, page: &str, id: u64) -> Option<Record> {
        let decoded = entities::decode(page);

        let Some(caps) = self.pattern.captures(&decoded) else {
            debug!(id, "Page did not match the proposal pattern");
            return None;
        };

        Some(Record {
            id,
            title: caps.name("title")?.as_str().to_string(),
            abstract_text: caps.name("abstract")?.as_str().to_string(),
            proposal: caps.name("proposal")?.as_str().to_string(),
            track: caps.name("track")?.as_str().to_string(),
        })
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<activity id="123">
  <title>Rust para sistemas embarcados</title>
  <author><name>Fulano</name></author>
  <abstract>Uma introdu&ccedil;&atilde;o &agrave; linguagem.</abstract>
  <descr>Nesta palestra veremos
como usar &lt;no_std&gt; em microcontroladores.</descr>
  <area id="7">
    <name>Desenvolvimento</name>
  </area>
  <area id="9">
    <name>Kernel</name>
  </area>
</activity>"#;

    #[test]
    fn test_extract_full_page() {
        let record = RecordExtractor::new().extract(PAGE, 123).unwrap();

        assert_eq!(record.id, 123);
        assert_eq!(record.title, "Rust para sistemas embarcados");
        assert_eq!(record.abstract_text, "Uma introdução à linguagem.");
        assert_eq!(
            record.proposal,
            "Nesta palestra veremos\ncomo usar <no_std> em microcontroladores."
        );
        assert_eq!(record.track, "Desenvolvimento");
    }

    #[test]
    fn test_extract_skips_names_before_area() {
        // The author's <name> precedes <descr>, so it never becomes the track.
        let record = RecordExtractor::new().extract(PAGE, 1).unwrap();
        assert_ne!(record.track, "Fulano");
    }

    #[test]
    fn test_extract_first_area_wins() {
        let record = RecordExtractor::new().extract(PAGE, 1).unwrap();
        assert_eq!(record.track, "Desenvolvimento");
    }

    #[test]
    fn test_extract_missing_any_field_is_no_match() {
        let extractor = RecordExtractor::new();
        let without = |tag: &str| {
            PAGE.replace(&format!("<{tag}>"), "<removed>")
                .replace(&format!("</{tag}>"), "</removed>")
        };

        assert!(extractor.extract(&without("title"), 1).is_none());
        assert!(extractor.extract(&without("abstract"), 1).is_none());
        assert!(extractor.extract(&without("descr"), 1).is_none());
        assert!(extractor.extract(&PAGE.replace("<area id", "<zone id"), 1).is_none());
    }

    #[test]
    fn test_extract_out_of_order_is_no_match() {
        let page = "<abstract>A</abstract><title>T</title><descr>P</descr><area id=\"1\"><name>K</name></area>";
        assert!(RecordExtractor::new().extract(page, 1).is_none());
    }

    #[test]
    fn test_extract_empty_page_is_no_match() {
        assert!(RecordExtractor::new().extract("", 1).is_none());
        assert!(RecordExtractor::new()
            .extract("<html><body>Proposta n&atilde;o encontrada</body></html>", 1)
            .is_none());
    }

    #[test]
    fn test_extract_allows_empty_fields() {
        let page = "<title></title><abstract></abstract><descr></descr><area id=\"1\"><name></name>";
        let record = RecordExtractor::new().extract(page, 5).unwrap();
        assert_eq!(record.id, 5);
        assert!(record.title.is_empty());
        assert!(record.track.is_empty());
    }

    #[test]
    fn test_extract_decodes_before_matching() {
        // An encoded closing tag turns into real markup once decoded, so the
        // title capture stops there.
        let page = "<title>A &lt;/title&gt; B</title><abstract>x</abstract><descr>y</descr><area id=\"1\"><name>z</name>";
        let record = RecordExtractor::new().extract(page, 1).unwrap();
        assert_eq!(record.title, "A ");
    }

    #[test]
    fn test_custom_pattern() {
        let extractor = RecordExtractor::with_pattern(
            r"(?s)<h1>(?P<title>.*?)</h1>.*?<p>(?P<abstract>.*?)</p>.*?<pre>(?P<proposal>.*?)</pre>.*?<em>(?P<track>.*?)</em>",
        )
        .unwrap();
        let record = extractor
            .extract("<h1>T</h1><p>A</p><pre>P</pre><em>K</em>", 2)
            .unwrap();

        assert_eq!(
            (record.title.as_str(), record.abstract_text.as_str()),
            ("T", "A")
        );
        assert_eq!((record.proposal.as_str(), record.track.as_str()), ("P", "K"));
    }

    #[test]
    fn test_custom_pattern_requires_all_groups() {
        match RecordExtractor::with_pattern(r"<title>(?P<title>.*?)</title>") {
            Err(Error::InvalidPattern(msg)) => assert!(msg.contains("abstract")),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_pattern_must_compile() {
        assert!(matches!(
            RecordExtractor::with_pattern("(unclosed"),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_default_pattern_exposes_required_groups() {
        let extractor = RecordExtractor::default();
        assert_eq!(extractor.pattern(), DEFAULT_PATTERN);
    }
}
