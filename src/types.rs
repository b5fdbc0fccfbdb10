//! Core types: proposal records, identifier ranges and output formats

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One proposal extracted from a single page
///
/// A record only exists when all four text fields were found on the page.
/// Field declaration order is the column order of every output format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier the page was fetched with
    pub id: u64,
    /// Proposal title
    pub title: String,
    /// Short abstract
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Full proposal description
    pub proposal: String,
    /// Track (area) the proposal was submitted to
    pub track: String,
}

impl Record {
    /// Column names, in output order
    pub const FIELDS: [&'static str; 5] = ["id", "title", "abstract", "proposal", "track"];
}

/// Closed interval of page identifiers, visited in ascending order
///
/// `start <= end` is expected but not enforced; an inverted range is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    /// First identifier (inclusive)
    pub start: u64,
    /// Last identifier (inclusive)
    pub end: u64,
}

impl IdRange {
    /// Create a range covering `start..=end`
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Identifiers in visiting order
    pub fn iter(&self) -> std::ops::RangeInclusive<u64> {
        self.start..=self.end
    }

    /// Number of identifiers the range covers
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Whether the range covers no identifiers
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Default for IdRange {
    fn default() -> Self {
        Self { start: 1, end: 5 }
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Serialization format of the output table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header line followed by fully quoted rows
    #[default]
    Csv,
    /// Array of objects, optionally indented
    Json,
}

impl OutputFormat {
    /// Names accepted by [`OutputFormat::from_str`]
    pub const NAMES: [&'static str; 2] = ["csv", "json"];

    /// Lowercase name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_range_visits_inclusive_ascending() {
        let range = IdRange::new(3, 6);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_id_range_single_and_inverted() {
        assert_eq!(IdRange::new(7, 7).iter().collect::<Vec<_>>(), vec![7]);

        let inverted = IdRange::new(5, 2);
        assert!(inverted.is_empty());
        assert_eq!(inverted.len(), 0);
        assert_eq!(inverted.iter().count(), 0);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        match "xml".parse::<OutputFormat>() {
            Err(Error::UnsupportedFormat(name)) => assert_eq!(name, "xml"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_record_serializes_abstract_key() {
        let record = Record {
            id: 1,
            title: "T".to_string(),
            abstract_text: "A".to_string(),
            proposal: "P".to_string(),
            track: "K".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["abstract"], "A");
        assert!(value.get("abstract_text").is_none());
    }
}
