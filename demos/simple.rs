//! Basic DataMark parsing and rendering.
//!
//! Run with: cargo run --example simple

use datamark::{document, from_str, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
/* a small greeting file */

¡title:
^Hello World~

¡body:
^Line one~";

    // Parse into a Document
    let doc = from_str(text)?;
    println!("Parsed {} entries:", doc.len());
    for (key, value) in &doc {
        println!("  {key} = {value}");
    }

    // Render back to canonical text (sorted by key, comments gone)
    let rendered = to_string(&doc)?;
    println!("\nCanonical form:\n{rendered}\n");

    let doc_back = from_str(&rendered)?;
    assert_eq!(doc, doc_back);

    // Documents can also be built directly
    let built = document! {
        "title" => "Hello World",
        "body" => "Line one",
    };
    assert_eq!(to_string(&built)?, rendered);
    println!("✓ Round-trip successful");

    Ok(())
}
