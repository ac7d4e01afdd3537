use std::path::Path;

use reflow::PageProvider;

use crate::cli::OutputFormat;
use crate::shared::open_dump;

pub fn run(file: &Path, format: OutputFormat) -> Result<(), i32> {
    let dump = open_dump(file)?;

    let mut pages = Vec::with_capacity(dump.page_count);
    for page in 1..=dump.page_count {
        let content = dump.provider.page(&dump.document_id, page).map_err(|e| {
            eprintln!("Error reading page {page}: {e}");
            1
        })?;
        pages.push(content);
    }

    match format {
        OutputFormat::Text => {
            println!("File: {}", dump.document_id);
            println!("Pages: {}", dump.page_count);
            for content in &pages {
                println!(
                    "  Page {}: {:.2} x {:.2}, {} blocks",
                    content.page_number(),
                    content.width(),
                    content.height(),
                    content.blocks().len()
                );
            }
        }
        OutputFormat::Json => {
            let page_info: Vec<_> = pages
                .iter()
                .map(|content| {
                    serde_json::json!({
                        "page": content.page_number(),
                        "width": content.width(),
                        "height": content.height(),
                        "blocks": content.blocks().len(),
                    })
                })
                .collect();
            let obj = serde_json::json!({
                "file_id": dump.document_id,
                "page_count": dump.page_count,
                "pages": page_info,
            });
            println!("{obj}");
        }
    }

    Ok(())
}
