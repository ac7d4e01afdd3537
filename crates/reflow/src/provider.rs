//! Document page providers.
//!
//! A provider resolves `(document id, 1-based page number)` to the page's
//! geometry and text blocks. Providers own all storage concerns; the
//! classifier only ever sees [`PageContent`] values.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::dump::DocumentDump;
use crate::error::{ReflowError, Result};
use crate::page::PageContent;

/// Source of page text blocks for stored documents.
pub trait PageProvider {
    /// Number of pages in a document.
    ///
    /// # Errors
    ///
    /// [`ReflowError::NotFound`] if the document is unknown.
    fn page_count(&self, document_id: &str) -> Result<usize>;

    /// Fetch one page (1-based).
    ///
    /// # Errors
    ///
    /// [`ReflowError::NotFound`] if the document is unknown,
    /// [`ReflowError::InvalidPage`] if the page is outside `[1, page_count]`.
    fn page(&self, document_id: &str, page_number: usize) -> Result<PageContent>;
}

/// Provider backed by dumps held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    documents: HashMap<String, DocumentDump>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document, replacing any previous one with the same id.
    pub fn insert(&mut self, document_id: impl Into<String>, dump: DocumentDump) {
        self.documents.insert(document_id.into(), dump);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn document(&self, document_id: &str) -> Result<&DocumentDump> {
        self.documents
            .get(document_id)
            .ok_or_else(|| ReflowError::not_found(document_id))
    }
}

impl PageProvider for InMemoryProvider {
    fn page_count(&self, document_id: &str) -> Result<usize> {
        Ok(self.document(document_id)?.page_count())
    }

    fn page(&self, document_id: &str, page_number: usize) -> Result<PageContent> {
        self.document(document_id)?.page(page_number)
    }
}

/// Provider reading `<root>/<document_id>.json` dumps on every request.
///
/// Use [`DirectoryProvider::load`] to read a dump once for repeated access.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the dump path for a document id.
    ///
    /// Ids that are empty or could escape `root` resolve to nothing.
    fn path_for(&self, document_id: &str) -> Option<PathBuf> {
        let escapes = document_id.is_empty()
            || document_id.contains(['/', '\\'])
            || document_id.starts_with('.');
        if escapes {
            return None;
        }
        Some(self.root.join(format!("{document_id}.json")))
    }

    /// Read and parse the whole dump of a document.
    ///
    /// Every [`PageProvider`] call on this type loads the dump again. Callers
    /// visiting many pages should load once and query the returned
    /// [`DocumentDump`] directly.
    ///
    /// # Errors
    ///
    /// [`ReflowError::NotFound`] for a missing file or an unsafe id, and
    /// [`ReflowError::Json`] for a malformed dump.
    pub fn load(&self, document_id: &str) -> Result<DocumentDump> {
        let path = self
            .path_for(document_id)
            .ok_or_else(|| ReflowError::not_found(document_id))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(document_id, path = %path.display(), "loading block dump");

        match DocumentDump::open_file(&path) {
            Err(ReflowError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Err(ReflowError::not_found(document_id))
            }
            other => other,
        }
    }
}

impl PageProvider for DirectoryProvider {
    fn page_count(&self, document_id: &str) -> Result<usize> {
        Ok(self.load(document_id)?.page_count())
    }

    fn page(&self, document_id: &str, page_number: usize) -> Result<PageContent> {
        self.load(document_id)?.page(page_number)
    }
}
