//! The two malformed-record policies side by side.
//!
//! Run with: cargo run --example strict_vs_lenient

use datamark::{from_str, from_str_strict};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // The second record never closes its value span.
    let text = "\
¡good:
^this one is fine~

¡broken:
^no end marker";

    // Lenient (the default): the broken record vanishes silently.
    let doc = from_str(text)?;
    println!("Lenient parse kept {} record(s):", doc.len());
    for (key, value) in &doc {
        println!("  {key} = {value}");
    }

    // Strict: the broken record fails the whole parse.
    match from_str_strict(text) {
        Ok(_) => unreachable!("strict parsing must reject the broken record"),
        Err(err) => println!("\nStrict parse failed as expected:\n  {err}"),
    }

    Ok(())
}
