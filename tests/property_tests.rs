//! Property-based tests for the format's core guarantees: round-trip,
//! deterministic rendering, idempotent comment stripping, and the lenient
//! policy's never-fail contract.

use datamark::grammar::strip_comments;
use datamark::{from_str, from_str_strict, to_string, Document};
use proptest::prelude::*;
use std::collections::HashMap;

// Keys and values are drawn trim-stable and free of reserved characters so
// they survive the writer's validation and the parser's trimming.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "([a-z0-9][a-z0-9 _,.]{0,16}[a-z0-9])?"
}

fn document_strategy() -> impl Strategy<Value = Document> {
    prop::collection::hash_map(key_strategy(), value_strategy(), 0..8).prop_map(Document::from)
}

proptest! {
    #[test]
    fn prop_round_trip(doc in document_strategy()) {
        let text = to_string(&doc).unwrap();
        prop_assert_eq!(from_str(&text).unwrap(), doc.clone());
        // Canonical output is well-formed, so strict agrees.
        prop_assert_eq!(from_str_strict(&text).unwrap(), doc);
    }

    #[test]
    fn prop_rendering_ignores_insertion_order(doc in document_strategy()) {
        let reversed: Document = doc.clone().into_iter().rev().collect();
        prop_assert_eq!(to_string(&doc).unwrap(), to_string(&reversed).unwrap());
    }

    #[test]
    fn prop_lenient_never_fails(text in any::<String>()) {
        prop_assert!(from_str(&text).is_ok());
    }

    #[test]
    fn prop_strip_comments_idempotent(
        // The alphabet includes `/` and `*` so removal can splice new
        // markers together; stripping must still reach a fixpoint.
        parts in prop::collection::vec(("[a-z/* ¡:^~\n]{0,8}", "[a-z/* ¡:^~\n]{0,8}"), 0..5),
        tail in "[a-z/* ¡:^~\n]{0,8}",
    ) {
        let mut text = String::new();
        for (segment, inner) in &parts {
            text.push_str(segment);
            text.push_str("/*");
            text.push_str(inner);
            text.push_str("*/");
        }
        text.push_str(&tail);

        let once = strip_comments(&text).into_owned();
        let twice = strip_comments(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_strip_comments_idempotent_on_arbitrary_text(text in any::<String>()) {
        let once = strip_comments(&text).into_owned();
        let twice = strip_comments(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_round_trip_via_hashmap(map in prop::collection::hash_map(key_strategy(), value_strategy(), 0..8)) {
        let doc = Document::from(map.clone());
        let text = to_string(&doc).unwrap();
        let back: HashMap<String, String> = from_str(&text).unwrap().into();
        prop_assert_eq!(back, map);
    }
}
