//! The DataMark grammar: reserved markers, comment stripping, record splitting.
//!
//! Four single characters carry all structure in a DataMark document:
//!
//! | Marker | Character | Role |
//! |--------|-----------|------|
//! | `SECTION_SEPARATOR` | `¡` | starts a record |
//! | `KEY_DELIMITER` | `:` | ends the key |
//! | `VALUE_START` | `^` | opens the value span |
//! | `VALUE_END` | `~` | closes the value span |
//!
//! Comments are C-style `/* ... */` spans, removed before any structural
//! parsing. They may contain newlines and any of the markers above; removal
//! is non-greedy (the nearest `*/` closes the nearest `/*`) and comments do
//! not nest.

use std::borrow::Cow;

/// Starts a record.
pub const SECTION_SEPARATOR: char = '¡';
/// Separates the key from the value span.
pub const KEY_DELIMITER: char = ':';
/// Opens the value span.
pub const VALUE_START: char = '^';
/// Closes the value span.
pub const VALUE_END: char = '~';

/// Opens a comment span.
pub const COMMENT_OPEN: &str = "/*";
/// Closes a comment span.
pub const COMMENT_CLOSE: &str = "*/";

/// The characters rejected in keys and values on the write path.
pub const RESERVED: [char; 4] = [SECTION_SEPARATOR, KEY_DELIMITER, VALUE_START, VALUE_END];

/// Returns `true` if `ch` has grammatical meaning and is therefore
/// disallowed inside keys and values.
///
/// # Examples
///
/// ```rust
/// use datamark::grammar::is_reserved;
///
/// assert!(is_reserved(':'));
/// assert!(is_reserved('¡'));
/// assert!(!is_reserved('a'));
/// ```
#[must_use]
pub fn is_reserved(ch: char) -> bool {
    RESERVED.contains(&ch)
}

/// Removes every `/* ... */` span from `text`.
///
/// Removal is non-greedy, left to right. An open marker with no matching
/// close extends to the end of the text and is not an error. Removing a
/// span can splice the surrounding text into a new open marker (a `/`
/// ending up against a `*`), so passes repeat until no open marker
/// remains; the result is a fixpoint and stripping is idempotent. Borrows
/// the input unchanged when it contains no open marker.
///
/// # Examples
///
/// ```rust
/// use datamark::grammar::strip_comments;
///
/// assert_eq!(strip_comments("a /* gone */ b"), "a  b");
/// assert_eq!(strip_comments("a /* unterminated"), "a ");
/// assert_eq!(strip_comments("no comments"), "no comments");
///
/// // Removal splices `/` and `*` into a new marker; it is removed too.
/// assert_eq!(strip_comments("x//*c*/*y"), "x");
/// ```
#[must_use]
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains(COMMENT_OPEN) {
        return Cow::Borrowed(text);
    }

    let mut out = strip_pass(text);
    while out.contains(COMMENT_OPEN) {
        out = strip_pass(&out);
    }
    Cow::Owned(out)
}

/// One left-to-right removal pass. Always shrinks the text when it
/// contains an open marker, so the fixpoint loop above terminates.
fn strip_pass(text: &str) -> String {
    let first = match text.find(COMMENT_OPEN) {
        Some(idx) => idx,
        None => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut rest = &text[first..];

    loop {
        // `rest` begins at an open marker.
        match rest[COMMENT_OPEN.len()..].find(COMMENT_CLOSE) {
            Some(close) => {
                rest = &rest[COMMENT_OPEN.len() + close + COMMENT_CLOSE.len()..];
            }
            // Unterminated comment: discard through end of text.
            None => return out,
        }

        match rest.find(COMMENT_OPEN) {
            Some(open) => {
                out.push_str(&rest[..open]);
                rest = &rest[open..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Splits comment-stripped text into candidate record slices.
///
/// Splits on [`SECTION_SEPARATOR`], except that a separator occurring inside
/// a value span (after a `^` not yet matched by a `~`) is value text, not a
/// boundary. Candidates are trimmed and empty candidates are dropped, so
/// leading or repeated separators produce nothing.
///
/// # Examples
///
/// ```rust
/// use datamark::grammar::split_records;
///
/// let records = split_records("¡a:^1~ ¡b:^2~");
/// assert_eq!(records, vec!["a:^1~", "b:^2~"]);
///
/// // A separator inside the value span does not split.
/// let records = split_records("¡a:^one ¡ two~");
/// assert_eq!(records, vec!["a:^one ¡ two~"]);
/// ```
#[must_use]
pub fn split_records(text: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_value = false;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            VALUE_START if !in_value => in_value = true,
            VALUE_END if in_value => in_value = false,
            SECTION_SEPARATOR if !in_value => {
                let candidate = text[start..idx].trim();
                if !candidate.is_empty() {
                    records.push(candidate);
                }
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        records.push(tail);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_multiple_spans() {
        let text = "a/*1*/b/*2*/c";
        assert_eq!(strip_comments(text), "abc");
    }

    #[test]
    fn test_strip_is_non_greedy() {
        // The nearest close terminates; the second `*/` is plain text.
        assert_eq!(strip_comments("/*a*/b*/"), "b*/");
    }

    #[test]
    fn test_strip_spans_newlines() {
        assert_eq!(strip_comments("keep/*line one\nline two*/ this"), "keep this");
    }

    #[test]
    fn test_strip_unterminated_extends_to_end() {
        assert_eq!(strip_comments("before /* never closed\n¡k:^v~"), "before ");
    }

    #[test]
    fn test_strip_borrows_when_clean() {
        assert!(matches!(strip_comments("¡k:^v~"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_removes_spliced_open_marker() {
        // Removing `/*c*/` leaves `/` against `*`; the spliced marker is
        // an unterminated comment and goes too.
        assert_eq!(strip_comments("x//*c*/*y"), "x");

        // Spliced marker with a close: both rounds of removal happen in
        // one call.
        assert_eq!(strip_comments("a//*c*/*gone*/b"), "ab");
    }

    #[test]
    fn test_strip_output_is_a_fixpoint() {
        for text in ["x//*c*/*y", "a//*c*/*gone*/b", "/*a*/b*/", "//**"] {
            let once = strip_comments(text).into_owned();
            let twice = strip_comments(&once).into_owned();
            assert_eq!(once, twice, "stripping {text:?} twice diverged");
        }
    }

    #[test]
    fn test_split_drops_empty_slices() {
        assert_eq!(split_records("¡¡a:^1~¡¡"), vec!["a:^1~"]);
        assert!(split_records("").is_empty());
        assert!(split_records("  \n ¡ \n").is_empty());
    }

    #[test]
    fn test_split_guards_value_span() {
        // Closed span: the separator after `~` splits again.
        let records = split_records("¡a:^x¡y~¡b:^2~");
        assert_eq!(records, vec!["a:^x¡y~", "b:^2~"]);
    }

    #[test]
    fn test_split_unclosed_span_absorbs_tail() {
        let records = split_records("¡a:^never closed ¡b:^2~");
        assert_eq!(records.len(), 1);
    }
}
