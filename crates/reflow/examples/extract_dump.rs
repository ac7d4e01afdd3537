//! Extract the text of each page of a JSON block dump.
//!
//! Usage: `cargo run --example extract_dump -- <path-to-dump.json> [columns]`

use reflow::{DocumentDump, extract_page};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: extract_dump <path-to-dump.json> [columns]");
        std::process::exit(1);
    });
    let columns = std::env::args()
        .nth(2)
        .and_then(|c| c.parse().ok())
        .unwrap_or(1);

    let dump = DocumentDump::open_file(&path).unwrap_or_else(|e| {
        eprintln!("Error opening dump: {e}");
        std::process::exit(1);
    });

    println!("Pages: {}", dump.page_count());
    println!();

    for number in 1..=dump.page_count() {
        let page = dump.page(number).unwrap();
        let result = extract_page(page.blocks(), page.geometry(), columns);
        println!("--- Page {number} ---");
        for header in result.headers() {
            println!("[header] {header}");
        }
        for (i, column) in result.columns.iter().enumerate() {
            println!("[column {}]", i + 1);
            println!("{column}");
        }
        for footer in result.footers() {
            println!("[footer] {footer}");
        }
        println!();
    }
}
