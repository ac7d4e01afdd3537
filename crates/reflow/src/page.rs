//! Page type handed from a provider to the classifier.

use reflow_core::{ClassifiedPage, PageGeometry, TextBlock, TitlePredicate, classify_with};

/// The raw text blocks of one document page.
///
/// Produced by a [`PageProvider`](crate::PageProvider); lives only for the
/// duration of one extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// Page number (1-based).
    page_number: usize,
    geometry: PageGeometry,
    blocks: Vec<TextBlock>,
}

impl PageContent {
    pub fn new(page_number: usize, geometry: PageGeometry, blocks: Vec<TextBlock>) -> Self {
        Self {
            page_number,
            geometry,
            blocks,
        }
    }

    /// Returns the page number (1-based).
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Returns the page width.
    pub fn width(&self) -> f64 {
        self.geometry.width
    }

    /// Returns the page height.
    pub fn height(&self) -> f64 {
        self.geometry.height
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Returns the text blocks in the order the document engine emitted them.
    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// Classify this page's blocks with a custom title predicate.
    pub fn classify_with(
        &self,
        column_count: usize,
        titles: &dyn TitlePredicate,
    ) -> ClassifiedPage {
        classify_with(&self.blocks, &self.geometry, column_count, titles)
    }
}
