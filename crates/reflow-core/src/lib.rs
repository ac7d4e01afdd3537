//! reflow-core: Page-layout text reconstruction.
//!
//! Takes the positioned text blocks of one page and rebuilds readable text:
//! header/footer bands are separated from the body, titles are picked out of
//! the headers, the body is split into reading columns, and every piece is
//! run through the line-merging [`normalize`] pass.
//!
//! All operations are pure and total. Nothing here performs I/O.

pub mod classify;
pub mod columns;
pub mod geometry;
pub mod normalize;
pub mod regions;
pub mod title;

pub use classify::{ClassifiedPage, PageBands, classify, classify_with};
pub use columns::{BodyBlock, MAX_COLUMNS, column_index};
pub use geometry::{PageGeometry, TextBlock};
pub use normalize::{LineKind, normalize};
pub use regions::{FOOTER_BAND_FRACTION, HEADER_BAND_FRACTION, PageRegion, classify_region};
pub use title::{TitlePredicate, UppercaseTitle};
