/// Builds a [`Document`](crate::Document) from literal entries.
///
/// Later entries overwrite earlier ones with the same key, matching the
/// parser's duplicate-key behavior.
///
/// # Examples
///
/// ```rust
/// use datamark::document;
///
/// let doc = document! {
///     "title" => "Hello World",
///     "body" => "Line one",
/// };
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.get("title").map(String::as_str), Some("Hello World"));
/// ```
#[macro_export]
macro_rules! document {
    // Handle empty document
    {} => {
        $crate::Document::new()
    };

    // Handle non-empty document
    { $($key:expr => $value:expr),+ $(,)? } => {{
        let mut doc = $crate::Document::new();
        $(
            doc.insert($key.to_string(), $value.to_string());
        )+
        doc
    }};
}
