//! Configuration for DataMark parsing.
//!
//! The only knob is the malformed-record policy:
//!
//! - [`Policy::Lenient`] (default): a record missing one of its markers is
//!   dropped silently and parsing continues
//! - [`Policy::Strict`]: the first malformed record fails the whole parse
//!
//! ## Examples
//!
//! ```rust
//! use datamark::{from_str_with_options, ParseOptions, Policy};
//!
//! let text = "¡good:^1~ ¡broken:^2";
//!
//! let doc = from_str_with_options(text, ParseOptions::new()).unwrap();
//! assert_eq!(doc.len(), 1);
//!
//! let err = from_str_with_options(text, ParseOptions::strict());
//! assert!(err.is_err());
//! ```

/// How the parser treats a record that fails extraction.
///
/// Callers should pick one policy per document and stick with it; the two
/// behaviors are deliberately asymmetric (lenient never signals the drop).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Policy {
    /// Skip malformed records silently; parsing never fails because of
    /// malformed records alone.
    #[default]
    Lenient,
    /// Fail the whole parse on the first malformed record.
    Strict,
}

/// Configuration options for DataMark parsing.
///
/// # Examples
///
/// ```rust
/// use datamark::{ParseOptions, Policy};
///
/// let options = ParseOptions::new();
/// assert_eq!(options.policy, Policy::Lenient);
///
/// let options = ParseOptions::strict();
/// assert_eq!(options.policy, Policy::Strict);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub policy: Policy,
}

impl ParseOptions {
    /// Creates default options (lenient policy).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with the strict policy.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            policy: Policy::Strict,
        }
    }

    /// Sets the malformed-record policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}
