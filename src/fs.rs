//! Text-level file access for DataMark documents.
//!
//! This is the boundary the core parsing and serialization logic sits
//! behind: "given a path, return its decoded text" and "given a path and
//! text, persist it". Failures are typed ([`Error::BlankPath`],
//! [`Error::FileNotFound`], [`Error::NotReadable`], [`Error::IsDirectory`])
//! and surfaced to the caller; nothing is retried, since a bad path is a
//! caller configuration problem rather than a transient condition.
//!
//! Concurrent writers to the same path are not coordinated: there is no
//! locking, and a writer interleaving with a reader can produce a torn
//! read.

use crate::{Error, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

fn check_path(path: &Path) -> Result<()> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(Error::BlankPath);
    }
    if path.is_dir() {
        return Err(Error::IsDirectory(path.display().to_string()));
    }
    Ok(())
}

/// Reads the file at `path` and returns its contents as UTF-8 text.
///
/// # Errors
///
/// - [`Error::BlankPath`] if the path is empty or whitespace-only
/// - [`Error::IsDirectory`] if the path names a directory
/// - [`Error::FileNotFound`] if the file does not exist
/// - [`Error::NotReadable`] if the file exists but cannot be read
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    check_path(path)?;

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.display().to_string()),
        ErrorKind::PermissionDenied => Error::NotReadable(path.display().to_string()),
        _ => Error::io(&e.to_string()),
    })
}

/// Writes `text` to the file at `path`, creating it if absent.
///
/// Overwrites existing content unless `append` is set, in which case `text`
/// is added at the end.
///
/// # Errors
///
/// - [`Error::BlankPath`] if the path is empty or whitespace-only
/// - [`Error::IsDirectory`] if the path names a directory
/// - [`Error::Io`] for any other I/O failure
pub fn write_text<P: AsRef<Path>>(path: P, text: &str, append: bool) -> Result<()> {
    let path = path.as_ref();
    check_path(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(append)
        .write(true)
        .truncate(!append)
        .open(path)
        .map_err(|e| Error::io(&e.to_string()))?;

    file.write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
