//! DataMark parsing.
//!
//! Parsing is a three-stage pipeline over immutable text:
//!
//! 1. [`strip_comments`] removes `/* ... */` spans
//! 2. [`split_records`] partitions the result on `¡`, guarding value spans
//! 3. each candidate record goes through per-record extraction, which walks
//!    `SEEK_KEY_DELIM → SEEK_VALUE_START → SEEK_VALUE_END → ACCEPT` and
//!    rejects as soon as the next expected marker is absent
//!
//! Under [`Policy::Lenient`] a rejected record is skipped and the outer
//! iteration continues; under [`Policy::Strict`] it fails the whole parse
//! with [`Error::MalformedRecord`]. Duplicate keys resolve last-wins.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use datamark::from_str;
//!
//! let doc = from_str("¡title:\n^Hello World~").unwrap();
//! assert_eq!(doc.get("title").map(String::as_str), Some("Hello World"));
//! ```

use crate::grammar::{split_records, strip_comments, KEY_DELIMITER, VALUE_END, VALUE_START};
use crate::{Document, Error, ParseOptions, Policy, Result};

/// Why one candidate record failed extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reject {
    MissingKeyDelimiter,
    MissingValueStart,
    MissingValueEnd,
    ValueEndBeforeStart,
    EmptyKey,
}

impl Reject {
    fn as_str(self) -> &'static str {
        match self {
            Reject::MissingKeyDelimiter => "missing key delimiter `:`",
            Reject::MissingValueStart => "missing value-start marker `^`",
            Reject::MissingValueEnd => "missing value-end marker `~`",
            Reject::ValueEndBeforeStart => "value-end marker precedes value-start marker",
            Reject::EmptyKey => "key is empty",
        }
    }
}

/// Extracts the (key, value) pair from one trimmed candidate record.
///
/// The key ends at the first `:`; the value starts after the first `^`
/// following it and ends before the last `~` in the record. Both are
/// trimmed.
fn parse_record(record: &str) -> std::result::Result<(String, String), Reject> {
    let delim = record.find(KEY_DELIMITER).ok_or(Reject::MissingKeyDelimiter)?;

    let start = record[delim + 1..]
        .find(VALUE_START)
        .map(|i| delim + 1 + i)
        .ok_or(Reject::MissingValueStart)?;

    let end = record.rfind(VALUE_END).ok_or(Reject::MissingValueEnd)?;

    if end <= start {
        return Err(Reject::ValueEndBeforeStart);
    }

    let key = record[..delim].trim();
    if key.is_empty() {
        return Err(Reject::EmptyKey);
    }

    let value = record[start + VALUE_START.len_utf8()..end].trim();

    Ok((key.to_string(), value.to_string()))
}

/// Parses raw DataMark text into a [`Document`] under the given options.
///
/// The returned document is a fresh value owned by the caller. Lenient
/// parsing never fails because of malformed records; strict parsing reports
/// the first malformed record and produces nothing.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] under [`Policy::Strict`] when a
/// record is missing one of its markers or its key trims to empty.
pub fn parse_document(text: &str, options: &ParseOptions) -> Result<Document> {
    let stripped = strip_comments(text);
    let records = split_records(stripped.trim());

    let mut doc = Document::with_capacity(records.len());

    for record in records {
        match parse_record(record) {
            Ok((key, value)) => {
                doc.insert(key, value);
            }
            Err(reject) => match options.policy {
                Policy::Lenient => continue,
                Policy::Strict => return Err(Error::malformed(record, reject.as_str())),
            },
        }
    }

    Ok(doc)
}
