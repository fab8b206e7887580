//! DataMark serialization.
//!
//! Rendering a [`Document`] happens in two phases: every entry is validated
//! first, then text is emitted. A validation failure therefore aborts the
//! whole write with no partial output.
//!
//! Output is canonical and deterministic: entries are sorted by key
//! (ascending, byte-ordinal), each rendered as
//!
//! ```text
//! ¡key:
//! ^value~
//! ```
//!
//! with a blank line between records, and the final concatenation trimmed.
//! The same entries always yield byte-identical output regardless of
//! insertion order.

use crate::grammar::{is_reserved, KEY_DELIMITER, SECTION_SEPARATOR, VALUE_END, VALUE_START};
use crate::{Document, Error, Result};

/// A template document illustrating the format, suitable for seeding a new
/// data file.
pub const EXAMPLE_DOCUMENT: &str = "\
¡<key>:
^<value>~

/*comment*/
/*
¡ -> Data separator
^ -> Value start
~ -> Value end
*/";

fn validate_field(field: &'static str, text: &str) -> Result<()> {
    if let Some(ch) = text.chars().find(|ch| is_reserved(*ch)) {
        return Err(Error::reserved(field, ch, text));
    }
    Ok(())
}

/// Renders `doc` as canonical DataMark text.
///
/// # Errors
///
/// Returns [`Error::ReservedCharacter`] if any key or value contains one of
/// the four reserved markers, or [`Error::EmptyKey`] for a key that trims
/// to empty. Nothing is emitted on failure.
///
/// # Examples
///
/// ```rust
/// use datamark::{document, to_string};
///
/// let doc = document! {
///     "title" => "Hello World",
///     "body" => "Line one",
/// };
///
/// // Entries come out sorted by key.
/// let text = to_string(&doc).unwrap();
/// assert_eq!(text, "¡body:\n^Line one~\n\n¡title:\n^Hello World~");
/// ```
pub fn to_string(doc: &Document) -> Result<String> {
    let mut entries: Vec<(&String, &String)> = doc.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (key, value) in &entries {
        if key.trim().is_empty() {
            return Err(Error::EmptyKey);
        }
        validate_field("key", key)?;
        validate_field("value", value)?;
    }

    let mut out = String::with_capacity(doc.len() * 16);
    for (key, value) in entries {
        out.push(SECTION_SEPARATOR);
        out.push_str(key);
        out.push(KEY_DELIMITER);
        out.push('\n');
        out.push(VALUE_START);
        out.push_str(value);
        out.push(VALUE_END);
        out.push_str("\n\n");
    }

    Ok(out.trim().to_string())
}
