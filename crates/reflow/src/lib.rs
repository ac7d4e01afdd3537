//! reflow: Rebuild readable text from positioned page blocks.
//!
//! This is the public API facade crate. It re-exports the classifier and
//! normalizer from reflow-core and adds the document side: page providers,
//! JSON block dumps, and extraction by document id and page number.
//!
//! # Architecture
//!
//! - **reflow-core**: Pure classification and normalization
//! - **reflow** (this crate): Providers, errors, and extraction entry points
//!
//! # Example
//!
//! ```
//! use reflow::{PageGeometry, TextBlock, extract_page};
//!
//! let blocks = vec![
//!     TextBlock::new(10.0, 300.0, 200.0, 315.0, "Hello wor-"),
//!     TextBlock::new(10.0, 320.0, 200.0, 335.0, "ld this is"),
//!     TextBlock::new(10.0, 340.0, 200.0, 355.0, "a test."),
//! ];
//! let page = extract_page(&blocks, &PageGeometry::new(300.0, 800.0), 1);
//! assert_eq!(page.columns, vec!["Hello world this is a test."]);
//! ```

pub mod dump;
pub mod error;
pub mod extract;
pub mod page;
pub mod provider;

pub use reflow_core;
pub use reflow_core::{
    ClassifiedPage, LineKind, MAX_COLUMNS, PageBands, PageGeometry, PageRegion, TextBlock,
    TitlePredicate, UppercaseTitle, classify, classify_with, normalize,
};

pub use dump::{DocumentDump, PageDump};
pub use error::{ReflowError, Result};
#[cfg(feature = "parallel")]
pub use extract::extract_pages_parallel;
pub use extract::{ExtractOptions, PageExtraction, extract_from, extract_page, extract_pages};
pub use page::PageContent;
pub use provider::{DirectoryProvider, InMemoryProvider, PageProvider};
