//! Header/footer band classification.
//!
//! A page is split vertically into three regions: the header band (top 15%),
//! the footer band (bottom 15%) and the body in between. A block belongs to
//! the header band only if it ends above the header line, and to the footer
//! band only if it starts below the footer line.

use crate::geometry::{PageGeometry, TextBlock};

/// Fraction of page height below which a block's bottom edge marks it as a header.
pub const HEADER_BAND_FRACTION: f64 = 0.15;

/// Fraction of page height above which a block's top edge marks it as a footer.
pub const FOOTER_BAND_FRACTION: f64 = 0.85;

/// The vertical region of a page a block was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageRegion {
    Header,
    Footer,
    Body,
}

impl PageGeometry {
    /// The y-coordinate a block's bottom edge must stay strictly above to be a header.
    pub fn header_limit(&self) -> f64 {
        self.height * HEADER_BAND_FRACTION
    }

    /// The y-coordinate a block's top edge must strictly exceed to be a footer.
    pub fn footer_limit(&self) -> f64 {
        self.height * FOOTER_BAND_FRACTION
    }
}

/// Classify a block by vertical position.
///
/// The header test runs first, so a block that satisfies both tests (only
/// possible with inverted geometry) is a header.
pub fn classify_region(block: &TextBlock, geometry: &PageGeometry) -> PageRegion {
    if block.y1 < geometry.header_limit() {
        PageRegion::Header
    } else if block.y0 > geometry.footer_limit() {
        PageRegion::Footer
    } else {
        PageRegion::Body
    }
}
