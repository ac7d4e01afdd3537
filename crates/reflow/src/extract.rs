//! Page extraction entry points.

use reflow_core::{ClassifiedPage, PageGeometry, TextBlock, classify};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::provider::PageProvider;

/// Options for provider-backed extraction.
///
/// The header/footer band fractions are fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Number of equal-width reading columns. Values below 1 act as 1 and
    /// values above [`MAX_COLUMNS`](crate::MAX_COLUMNS) act as the maximum.
    pub columns: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { columns: 1 }
    }
}

/// Extraction result for one page of a stored document.
///
/// Serializes as `{"file_id", "page", "text"}`, the response body of the
/// page-extract endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageExtraction {
    #[serde(rename = "file_id")]
    pub document_id: String,
    /// Page number (1-based).
    pub page: usize,
    pub text: ClassifiedPage,
}

/// Classify one page's blocks.
///
/// Pure and synchronous; never fails.
pub fn extract_page(
    blocks: &[TextBlock],
    geometry: &PageGeometry,
    column_count: usize,
) -> ClassifiedPage {
    classify(blocks, geometry, column_count)
}

/// Fetch a page from `provider` and classify it.
///
/// # Errors
///
/// Propagates the provider's [`NotFound`](crate::ReflowError::NotFound) and
/// [`InvalidPage`](crate::ReflowError::InvalidPage) errors unchanged.
pub fn extract_from<P: PageProvider + ?Sized>(
    provider: &P,
    document_id: &str,
    page: usize,
    options: &ExtractOptions,
) -> Result<PageExtraction> {
    let content = provider.page(document_id, page).inspect_err(|_err| {
        #[cfg(feature = "tracing")]
        tracing::warn!(document_id, page, error = %_err, "page lookup failed");
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        document_id,
        page,
        blocks = content.blocks().len(),
        columns = options.columns,
        "classifying page"
    );

    let text = extract_page(content.blocks(), content.geometry(), options.columns);
    Ok(PageExtraction {
        document_id: document_id.to_string(),
        page,
        text,
    })
}

/// Extract several pages in order, one result per requested page.
///
/// A failing page does not stop the others.
pub fn extract_pages<P: PageProvider + ?Sized>(
    provider: &P,
    document_id: &str,
    pages: &[usize],
    options: &ExtractOptions,
) -> Vec<Result<PageExtraction>> {
    pages
        .iter()
        .map(|&page| extract_from(provider, document_id, page, options))
        .collect()
}

/// Extract several pages concurrently using rayon.
///
/// The returned Vec is ordered like `pages`, regardless of processing order.
#[cfg(feature = "parallel")]
pub fn extract_pages_parallel<P: PageProvider + Sync + ?Sized>(
    provider: &P,
    document_id: &str,
    pages: &[usize],
    options: &ExtractOptions,
) -> Vec<Result<PageExtraction>> {
    use rayon::prelude::*;

    pages
        .par_iter()
        .map(|&page| extract_from(provider, document_id, page, options))
        .collect()
}
