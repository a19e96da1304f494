//! CSV text parsing into a [`Dataset`].

use thiserror::Error;
use tracing::{debug, warn};

use crate::data::{Dataset, Record};
use crate::error::ErrorKind;

/// Error type for parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No non-blank lines in the input
    #[error("No CSV data provided")]
    EmptyInput,
    /// Only a header line, no data lines
    #[error("CSV needs a header line and at least one data line, got {lines} line(s)")]
    InsufficientRows { lines: usize },
    /// Every data line had a different column count than the header
    #[error("No valid rows found ({skipped} row(s) had the wrong number of columns)")]
    NoValidRows { skipped: usize },
}

impl ParseError {
    /// Stable kind for the calling shell to pick a localized message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::EmptyInput => ErrorKind::EmptyInput,
            ParseError::InsufficientRows { .. } => ErrorKind::InsufficientRows,
            ParseError::NoValidRows { .. } => ErrorKind::NoValidRows,
        }
    }
}

/// Parse CSV text into a [`Dataset`].
///
/// The first non-blank line is the header. Every following non-blank line
/// becomes a record when it has the same number of fields as the header;
/// lines with a different field count are skipped and their line numbers are
/// kept in [`Dataset::skipped_lines`].
///
/// Both `\n` and `\r\n` line endings are accepted. A leading byte order mark
/// is dropped.
///
/// ## Example
///
/// ```rust
/// use csv_chart_core::parse_csv;
///
/// let dataset = parse_csv("month,sales\nJan,10\nFeb,12\n").unwrap();
/// assert_eq!(dataset.headers(), ["month", "sales"]);
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.records()[1].get("sales"), Some("12"));
/// ```
pub fn parse_csv(text: &str) -> Result<Dataset, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if lines.len() < 2 {
        return Err(ParseError::InsufficientRows { lines: lines.len() });
    }

    let headers = split_csv_line(lines[0]);
    let mut records = Vec::with_capacity(lines.len() - 1);
    let mut skipped_lines = Vec::new();

    for (i, line) in lines.iter().enumerate().skip(1) {
        let fields = split_csv_line(line);
        if fields.len() != headers.len() {
            // Line numbers count non-blank lines, header included.
            warn!(
                line = i + 1,
                expected = headers.len(),
                found = fields.len(),
                "skipping row with wrong number of columns"
            );
            skipped_lines.push(i + 1);
            continue;
        }
        records.push(Record::zip(&headers, fields));
    }

    if records.is_empty() {
        return Err(ParseError::NoValidRows {
            skipped: skipped_lines.len(),
        });
    }

    debug!(
        columns = headers.len(),
        rows = records.len(),
        skipped = skipped_lines.len(),
        "parsed csv"
    );

    Ok(Dataset::new(headers, records, skipped_lines))
}

/// Split a single CSV line into trimmed fields.
///
/// A double quote toggles quoted mode and is dropped; commas inside quotes are
/// kept as text. A doubled `""` is not an escape, it toggles twice and adds
/// nothing. An unmatched quote simply stays open until the end of the line.
///
/// The result always has one more field than there are commas outside quotes.
///
/// ## Example
///
/// ```rust
/// use csv_chart_core::split_csv_line;
///
/// assert_eq!(split_csv_line(r#""a","b,c""#), vec!["a", "b,c"]);
/// assert_eq!(split_csv_line(" x , y ,"), vec!["x", "y", ""]);
/// ```
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}
