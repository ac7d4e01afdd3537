//! JSON block dumps.
//!
//! A dump is the output of a document engine saved for later extraction:
//!
//! ```json
//! {"pages": [{"width": 612.0, "height": 792.0,
//!             "blocks": [{"x0": 72.0, "y0": 90.0, "x1": 540.0, "y1": 110.0, "text": "..."}]}]}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use reflow_core::{PageGeometry, TextBlock};
use serde::{Deserialize, Serialize};

use crate::error::{ReflowError, Result};
use crate::page::PageContent;

/// One page of a block dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDump {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

/// All pages of one document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDump {
    pub pages: Vec<PageDump>,
}

impl DocumentDump {
    /// Parse a dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dump from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse a dump file.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Return a 1-based page, or [`ReflowError::InvalidPage`] when out of range.
    pub fn page(&self, page_number: usize) -> Result<PageContent> {
        let page_count = self.page_count();
        if page_number < 1 || page_number > page_count {
            return Err(ReflowError::InvalidPage {
                page: page_number,
                page_count,
            });
        }
        let dump = &self.pages[page_number - 1];
        Ok(PageContent::new(
            page_number,
            PageGeometry::new(dump.width, dump.height),
            dump.blocks.clone(),
        ))
    }
}
