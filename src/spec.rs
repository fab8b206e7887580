//! DataMark Format Specification
//!
//! This module documents the DataMark format as implemented by this
//! library.
//!
//! # Overview
//!
//! DataMark is a plain-text encoding for a flat mapping of string keys to
//! string values, designed for small hand-editable data files. It has no
//! types (every value is an opaque string), no nesting, and no escaping;
//! structure comes entirely from four reserved marker characters plus a
//! C-style comment syntax.
//!
//! # Grammar
//!
//! ```text
//! document := { comment | record }
//! comment  := "/*" any-text-non-greedy "*/"
//! record   := '¡' key ':' ws* '^' value '~'
//! key      := text-without(':')   ; trimmed, non-empty
//! value    := text-without('~')   ; trimmed, may be empty
//! ```
//!
//! A complete document:
//!
//! ```text
//! ¡title:
//! ^Hello World~
//!
//! ¡body:
//! ^Line one~
//! ```
//!
//! ## Reserved characters
//!
//! | Character | Role |
//! |-----------|------|
//! | `¡` (U+00A1) | section separator, starts a record |
//! | `:` | key/value delimiter |
//! | `^` | value-start marker |
//! | `~` | value-end marker |
//!
//! None of the four may appear in a key or value on the write path; the
//! writer rejects such entries before emitting anything. The read path
//! tolerates them insofar as the grammar's own delimiters still define
//! record boundaries (e.g. a stray `~` inside a value is absorbed because
//! the *last* `~` in a record closes the value).
//!
//! ## Comments
//!
//! `/* ... */` spans are removed before any structural parsing. Spans may
//! contain newlines and reserved characters; removal is non-greedy (the
//! nearest `*/` closes the nearest `/*`) and comments do not nest. An open
//! marker with no matching close extends to the end of the text; this is a
//! deliberate deterministic fallback, not an error.
//!
//! Removal repeats until no open marker remains, so an open marker spliced
//! together by a removal (a `/` ending up against a `*`) is removed as
//! well. Stripped text never contains `/*`, which makes stripping
//! idempotent.
//!
//! ## Record boundaries
//!
//! Records are split on `¡`, except that a `¡` occurring inside a value
//! span (after `^`, before its `~`) is value text, not a boundary. Empty
//! slices from leading or repeated separators are dropped.
//!
//! # Parsing policies
//!
//! A record is *malformed* when it is missing its `:`, missing a `^` after
//! the `:`, missing a `~`, has its `~` at or before the `^`, or its key
//! trims to empty.
//!
//! - **Lenient** (default): malformed records are silently skipped and
//!   parsing continues. Parsing never fails because of malformed records.
//! - **Strict**: the first malformed record fails the whole parse,
//!   reporting the offending record text.
//!
//! Duplicate keys resolve last-occurrence-wins under either policy.
//!
//! # Canonical rendering
//!
//! Writers emit entries sorted by key (ascending, byte-ordinal), each as
//!
//! ```text
//! ¡key:
//! ^value~
//! ```
//!
//! with a blank line between records and the final document trimmed of
//! surrounding whitespace. Rendering is deterministic: the same entries
//! yield byte-identical output regardless of insertion order, and
//! `parse(render(doc)) == doc` for any document free of reserved
//! characters.
//!
//! # Limitations
//!
//! - **Flat**: no nested structures, no lists, no typed values
//! - **No escaping**: reserved characters cannot be represented inside keys
//!   or values at all
//! - **No coordination**: concurrent writers to the same file are not
//!   serialized by this library; a torn read is possible
//! - **Whitespace**: keys and values are always trimmed, so leading and
//!   trailing whitespace cannot round-trip

// This module contains only documentation; no implementation code
