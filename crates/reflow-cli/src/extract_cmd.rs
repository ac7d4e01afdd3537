use std::path::Path;

use reflow::{ClassifiedPage, ExtractOptions, extract_from};

use crate::cli::OutputFormat;
use crate::shared::{ProgressReporter, open_dump, resolve_pages};

pub fn run(
    file: &Path,
    pages: Option<&str>,
    columns: usize,
    format: OutputFormat,
) -> Result<(), i32> {
    let dump = open_dump(file)?;
    let page_numbers = resolve_pages(pages, dump.page_count)?;
    let progress = ProgressReporter::new(page_numbers.len());
    let options = ExtractOptions { columns };

    tracing::info!(
        document_id = %dump.document_id,
        pages = page_numbers.len(),
        columns,
        "extracting"
    );

    for (i, &page) in page_numbers.iter().enumerate() {
        progress.report(i + 1);

        let extraction =
            extract_from(&dump.provider, &dump.document_id, page, &options).map_err(|e| {
                eprintln!("Error reading page {page}: {e}");
                1
            })?;

        match format {
            OutputFormat::Text => {
                println!("--- Page {page} ---");
                print!("{}", render_text(&extraction.text));
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(&extraction).map_err(|e| {
                    eprintln!("Error: failed to serialize page {page}: {e}");
                    1
                })?;
                println!("{line}");
            }
        }
    }

    progress.finish();
    Ok(())
}

/// Render a classified page as plain text: headers, titles, body, footers.
///
/// Titles are printed with a `# ` prefix. With more than one column each
/// column gets its own `[column N]` label.
fn render_text(page: &ClassifiedPage) -> String {
    let mut out = String::new();

    for header in page.headers() {
        if page.titles().contains(header) {
            out.push_str("# ");
        }
        out.push_str(header);
        out.push('\n');
    }

    let labelled = page.columns.len() > 1;
    for (i, column) in page.columns.iter().enumerate() {
        if labelled {
            out.push_str(&format!("[column {}]\n", i + 1));
        }
        if !column.is_empty() {
            out.push_str(column);
            out.push('\n');
        }
    }

    for footer in page.footers() {
        out.push_str(footer);
        out.push('\n');
    }

    out
}
