//! Error types for DataMark parsing, validation, and file access.
//!
//! ## Error Categories
//!
//! - **Path Errors**: the caller handed us a path we cannot use
//!   (blank, missing, unreadable, or a directory)
//! - **Format Errors**: a record failed strict parsing, carrying the
//!   offending record text
//! - **Validation Errors**: a key or value on the write path contains a
//!   reserved grammar character
//!
//! Malformed records under the *lenient* policy are the single exception to
//! "every failure is reported": they are dropped without signaling. Callers
//! that need the failure must parse with [`Policy::Strict`](crate::Policy).
//!
//! ## Examples
//!
//! ```rust
//! use datamark::{from_str_strict, Error};
//!
//! let result = from_str_strict("¡broken:^no end marker");
//! assert!(matches!(result, Err(Error::MalformedRecord { .. })));
//! ```

use thiserror::Error;

/// All failures the DataMark reader and writer can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The supplied path was empty or whitespace-only.
    #[error("path cannot be blank")]
    BlankPath,

    /// The path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The path exists but cannot be read (permissions).
    #[error("file cannot be read: {0}")]
    NotReadable(String),

    /// The path names a directory, not a file.
    #[error("path is a directory: {0}")]
    IsDirectory(String),

    /// A record failed extraction under the strict policy.
    #[error("malformed record `{record}`: {reason}")]
    MalformedRecord { record: String, reason: String },

    /// A key or value on the write path contains a reserved character.
    #[error("{field} `{text}` contains reserved character {character:?}")]
    ReservedCharacter {
        field: &'static str,
        character: char,
        text: String,
    },

    /// A key on the write path was empty after trimming.
    #[error("key cannot be empty")]
    EmptyKey,

    /// Underlying I/O failure not covered by a more specific variant.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a strict-policy parse error for one offending record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datamark::Error;
    ///
    /// let err = Error::malformed("k:^v", "missing value-end marker `~`");
    /// assert!(err.to_string().contains("k:^v"));
    /// ```
    pub fn malformed(record: &str, reason: &str) -> Self {
        Error::MalformedRecord {
            record: record.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a write-path validation error naming the offending field.
    pub fn reserved(field: &'static str, character: char, text: &str) -> Self {
        Error::ReservedCharacter {
            field,
            character,
            text: text.to_string(),
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
