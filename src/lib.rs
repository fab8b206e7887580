//! # datamark
//!
//! A reader and writer for the DataMark format: a plain-text encoding for a
//! flat mapping of string keys to string values, with embedded comments.
//!
//! ## What is DataMark?
//!
//! A DataMark file is a sequence of records, each carrying one key/value
//! pair, plus optional `/* ... */` comments:
//!
//! ```text
//! /* greeting data */
//!
//! ¡title:
//! ^Hello World~
//!
//! ¡body:
//! ^Line one~
//! ```
//!
//! Four reserved characters carry all structure: `¡` starts a record, `:`
//! ends the key, and `^`/`~` bracket the value. Everything else, including
//! newlines inside comments and raw UTF-8 text in values, is ordinary
//! content. See the [`spec`] module for the full format description.
//!
//! ## Key Features
//!
//! - **Two parse policies**: lenient (skip malformed records, the default)
//!   or strict (fail the whole parse on the first malformed record)
//! - **Canonical output**: serialization sorts entries by key and always
//!   produces byte-identical text for the same entries
//! - **Validated writes**: reserved characters in keys or values are
//!   rejected before any text is emitted
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use datamark::{document, from_str, to_string};
//!
//! let doc = from_str("¡title:\n^Hello World~").unwrap();
//! assert_eq!(doc.get("title").map(String::as_str), Some("Hello World"));
//!
//! let text = to_string(&document! { "title" => "Hello World" }).unwrap();
//! assert_eq!(text, "¡title:\n^Hello World~");
//! ```
//!
//! ### Reading and writing files
//!
//! ```rust,no_run
//! use datamark::{document, read_file, write_file};
//!
//! let doc = document! { "name" => "Alice", "role" => "admin" };
//! write_file("users.dmk", &doc).unwrap();
//!
//! let doc_back = read_file("users.dmk").unwrap();
//! assert_eq!(doc, doc_back);
//! ```
//!
//! ### Strict parsing
//!
//! ```rust
//! use datamark::{from_str, from_str_strict, Error};
//!
//! let text = "¡good:\n^kept~\n\n¡broken:\n^no end marker";
//!
//! // Lenient: the malformed record is dropped silently.
//! let doc = from_str(text).unwrap();
//! assert_eq!(doc.len(), 1);
//!
//! // Strict: the malformed record fails the parse.
//! assert!(matches!(from_str_strict(text), Err(Error::MalformedRecord { .. })));
//! ```
//!
//! ## Concurrency
//!
//! All core operations are pure computations over immutable input text and
//! may run concurrently on independent inputs without coordination. The
//! backing file is the one shared resource, and this library does not lock
//! it: concurrent writers to the same path can interleave with a reader.

pub mod document;
pub mod error;
pub mod fs;
pub mod grammar;
pub mod macros;
pub mod options;
pub mod parse;
pub mod spec;
pub mod write;

pub use document::Document;
pub use error::{Error, Result};
pub use options::{ParseOptions, Policy};
pub use parse::parse_document;
pub use write::EXAMPLE_DOCUMENT;

use std::io;
use std::path::Path;

/// Parses DataMark text into a [`Document`] under the lenient policy.
///
/// Malformed records are skipped silently; use [`from_str_strict`] to fail
/// on them instead. Duplicate keys resolve last-occurrence-wins.
///
/// # Examples
///
/// ```rust
/// use datamark::from_str;
///
/// let doc = from_str("¡a:\n^1~\n\n¡b:\n^2~").unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
///
/// # Errors
///
/// Lenient parsing never fails because of malformed records alone.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    parse_document(s, &ParseOptions::new())
}

/// Parses DataMark text into a [`Document`] under the strict policy.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] for the first record missing one of
/// its markers, aborting the whole parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_strict(s: &str) -> Result<Document> {
    parse_document(s, &ParseOptions::strict())
}

/// Parses DataMark text into a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use datamark::{from_str_with_options, ParseOptions, Policy};
///
/// let options = ParseOptions::new().with_policy(Policy::Strict);
/// let doc = from_str_with_options("¡k:\n^v~", options).unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if the input is rejected under the selected policy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: ParseOptions) -> Result<Document> {
    parse_document(s, &options)
}

/// Parses a [`Document`] from an I/O stream of DataMark text.
///
/// Reads the stream to the end, then parses under the lenient policy.
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the bytes are not
/// valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

/// Renders a [`Document`] as canonical DataMark text.
///
/// Entries are validated first (no partial output on failure), then
/// emitted sorted by key.
///
/// # Errors
///
/// Returns [`Error::ReservedCharacter`] if a key or value contains one of
/// the reserved markers, or [`Error::EmptyKey`] for an empty key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(doc: &Document) -> Result<String> {
    write::to_string(doc)
}

/// Serializes a [`Document`] to a writer in DataMark format.
///
/// # Errors
///
/// Returns an error if validation fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, doc: &Document) -> Result<()> {
    let text = to_string(doc)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Reads and parses the DataMark file at `path` under the lenient policy.
///
/// # Errors
///
/// Returns [`Error::BlankPath`], [`Error::FileNotFound`],
/// [`Error::NotReadable`], or [`Error::IsDirectory`] for path problems.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    read_file_with_options(path, ParseOptions::new())
}

/// Reads and parses the DataMark file at `path` with custom options.
///
/// # Errors
///
/// Returns a path error for an unusable path, or a parse error under the
/// selected policy.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn read_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let text = fs::read_text(path)?;
    parse_document(&text, &options)
}

/// Serializes `doc` and writes it to the file at `path`, overwriting any
/// existing content.
///
/// Validation runs before the file is touched: a document with reserved
/// characters leaves the file untouched.
///
/// # Errors
///
/// Returns a validation error, [`Error::BlankPath`],
/// [`Error::IsDirectory`], or [`Error::Io`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_file<P: AsRef<Path>>(path: P, doc: &Document) -> Result<()> {
    let text = to_string(doc)?;
    fs::write_text(path, &text, false)
}

/// Writes the [`EXAMPLE_DOCUMENT`] template to `path`, seeding a new data
/// file with format guidance.
///
/// # Errors
///
/// Returns [`Error::BlankPath`], [`Error::IsDirectory`], or [`Error::Io`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_example_file<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::write_text(path, EXAMPLE_DOCUMENT, false)
}
