//! Output table serialization (CSV and JSON)

use crate::error::{Error, Result};
use crate::types::{OutputFormat, Record};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Write `records` to `sink` in the given format
///
/// - CSV: an unquoted header line, then one fully quoted row per record.
///   Requires at least one record.
/// - JSON: an array of objects. `indent` pretty-prints with that many spaces
///   per level; `None` writes compact JSON. Ignored for CSV.
///
/// The sink is flushed before returning.
///
/// # Errors
/// Returns [`Error::EmptyTable`] for CSV output without records, or the
/// underlying I/O / serialization error
pub fn write_table<W: Write>(
    sink: &mut W,
    records: &[Record],
    format: OutputFormat,
    indent: Option<usize>,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(sink, records)?,
        OutputFormat::Json => write_json(sink, records, indent)?,
    }
    sink.flush()?;
    Ok(())
}

/// Header line, then every field of every record double-quoted
pub fn write_csv<W: Write>(sink: &mut W, records: &[Record]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::EmptyTable);
    }

    writeln!(sink, "{}", Record::FIELDS.join(","))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// JSON array of records, compact or indented by `indent` spaces
pub fn write_json<W: Write>(
    sink: &mut W,
    records: &[Record],
    indent: Option<usize>,
) -> Result<()> {
    match indent {
        Some(width) => {
            let spaces = " ".repeat(width);
            let formatter = PrettyFormatter::with_indent(spaces.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut *sink, formatter);
            records.serialize(&mut serializer)?;
        }
        None => serde_json::to_writer(&mut *sink, records)?,
    }
    writeln!(sink)?;

    Ok(())
}
