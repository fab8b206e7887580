//! Writing a Document to disk and reading it back.
//!
//! Run with: cargo run --example file_roundtrip

use datamark::{document, read_file, write_example_file, write_file};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir();
    let path = dir.join("datamark_demo.dmk");

    let doc = document! {
        "name" => "Alice",
        "role" => "admin",
        "motto" => "ship it",
    };

    write_file(&path, &doc)?;
    println!("Wrote {}", path.display());

    let doc_back = read_file(&path)?;
    assert_eq!(doc, doc_back);
    println!("Read back {} entries", doc_back.len());

    // A template file documenting the syntax, handy for seeding configs.
    let example_path = dir.join("datamark_example.dmk");
    write_example_file(&example_path)?;
    println!("Example template at {}", example_path.display());

    Ok(())
}
