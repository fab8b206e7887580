use datamark::{document, from_str, to_string, Document};

#[test]
fn test_macro_builds_empty_document() {
    let doc = document! {};
    assert!(doc.is_empty());
    assert_eq!(doc, Document::new());
}

#[test]
fn test_macro_builds_entries() {
    let doc = document! {
        "title" => "Hello World",
        "body" => "Line one",
    };

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("title").map(String::as_str), Some("Hello World"));
    assert_eq!(doc.get("body").map(String::as_str), Some("Line one"));
}

#[test]
fn test_macro_accepts_expressions() {
    let key = String::from("computed");
    let count = 3;

    let doc = document! {
        key => format!("{count} items"),
    };

    assert_eq!(doc.get("computed").map(String::as_str), Some("3 items"));
}

#[test]
fn test_macro_without_trailing_comma() {
    let doc = document! { "k" => "v" };
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_macro_output_round_trips() {
    let doc = document! {
        "a" => "1",
        "b" => "2",
        "c" => "3",
    };

    let text = to_string(&doc).unwrap();
    assert_eq!(from_str(&text).unwrap(), doc);
}
