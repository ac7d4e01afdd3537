use std::io::{self, IsTerminal, Write};
use std::path::Path;

use reflow::{DirectoryProvider, InMemoryProvider};

use crate::page_range::parse_page_range;

/// A dump file parsed once and held in memory for page lookups.
pub struct OpenDump {
    /// Holds the parsed dump under `document_id`.
    pub provider: InMemoryProvider,
    /// File stem of the dump, used as the document id.
    pub document_id: String,
    pub page_count: usize,
}

/// Open a dump file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing,
/// has no usable name, or is not a valid dump.
pub fn open_dump(file: &Path) -> Result<OpenDump, i32> {
    if !file.is_file() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let document_id = match (file.extension(), file.file_stem()) {
        (Some(ext), Some(stem)) if ext == "json" => stem.to_string_lossy().into_owned(),
        _ => {
            eprintln!("Error: expected a .json block dump: {}", file.display());
            return Err(1);
        }
    };

    let root = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => ".".into(),
    };
    let loaded = DirectoryProvider::new(root).load(&document_id).map_err(|e| {
        eprintln!("Error: failed to open dump: {e}");
        1
    })?;
    let page_count = loaded.page_count();

    let mut provider = InMemoryProvider::new();
    provider.insert(document_id.clone(), loaded);

    Ok(OpenDump {
        provider,
        document_id,
        page_count,
    })
}

/// Resolve an optional page range string into 1-based page numbers.
///
/// If `pages` is `None`, returns all pages (1..=page_count).
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((1..=page_count).collect()),
    }
}

/// A progress reporter that prints "Processing page N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter for `total` pages.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            is_tty: io::stderr().is_terminal(),
        }
    }

    /// Report progress for page `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if self.is_tty {
            eprint!("\rProcessing page {}/{}...", current, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line (if TTY).
    pub fn finish(&self) {
        if self.is_tty {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
