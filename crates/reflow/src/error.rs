//! Error types for provider-backed extraction.
//!
//! Classification itself never fails; every variant here comes from looking
//! up a document or page, or from reading a block dump.

use thiserror::Error;

/// Errors raised while resolving a document page.
#[derive(Debug, Error)]
pub enum ReflowError {
    /// No document is stored under the given id.
    #[error("document not found: {document_id}")]
    NotFound { document_id: String },

    /// The requested 1-based page is outside `[1, page_count]`.
    #[error("invalid page {page} (document has {page_count} pages)")]
    InvalidPage { page: usize, page_count: usize },

    /// Error reading a block dump.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A block dump is not valid JSON or does not match the dump layout.
    #[error("invalid block dump: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReflowError {
    pub(crate) fn not_found(document_id: impl Into<String>) -> Self {
        ReflowError::NotFound {
            document_id: document_id.into(),
        }
    }

    /// HTTP status an API layer should answer with for this error.
    ///
    /// Unknown documents map to 404, out-of-range pages to 400, and anything
    /// else to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            ReflowError::NotFound { .. } => 404,
            ReflowError::InvalidPage { .. } => 400,
            ReflowError::Io(_) | ReflowError::Json(_) => 500,
        }
    }
}

/// Result alias for provider-backed operations.
pub type Result<T> = std::result::Result<T, ReflowError>;
