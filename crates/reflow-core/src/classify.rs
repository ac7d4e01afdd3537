//! Block classification: headers, titles, footers, and body columns.

use std::collections::HashSet;

use crate::columns::{BodyBlock, MAX_COLUMNS, join_top_to_bottom, split_columns};
use crate::geometry::{PageGeometry, TextBlock};
use crate::normalize::normalize;
use crate::regions::{PageRegion, classify_region};
use crate::title::{TitlePredicate, UppercaseTitle};

/// Normalized header, title, and footer text of a page.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageBands {
    /// Header-band blocks in reading order.
    pub headers: Vec<String>,
    /// Header blocks recognized as titles, first occurrence only.
    pub titles: Vec<String>,
    /// Footer-band blocks in reading order.
    pub footers: Vec<String>,
}

/// The reconstructed text of one page.
///
/// `bands` is `None` only for a page without any non-blank block.
/// `joined_text` is set only by multi-column classification.
///
/// When deserializing, `bands` is `Some` as soon as any of the `headers`,
/// `titles` or `footers` keys is present; missing band keys read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::ClassifiedPageBody"))]
pub struct ClassifiedPage {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub bands: Option<PageBands>,
    /// Normalized body text, one entry per column.
    pub columns: Vec<String>,
    /// Non-empty columns joined with newlines.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub joined_text: Option<String>,
}

impl ClassifiedPage {
    pub fn headers(&self) -> &[String] {
        self.bands.as_ref().map_or(&[], |b| &b.headers)
    }

    pub fn titles(&self) -> &[String] {
        self.bands.as_ref().map_or(&[], |b| &b.titles)
    }

    pub fn footers(&self) -> &[String] {
        self.bands.as_ref().map_or(&[], |b| &b.footers)
    }

    /// Returns `true` for the degenerate result of a page with no text.
    pub fn is_empty(&self) -> bool {
        self.bands.is_none() && self.columns.is_empty()
    }
}

#[cfg(feature = "serde")]
mod wire {
    use super::{ClassifiedPage, PageBands};

    /// Flat response body, with each band key optional.
    #[derive(serde::Deserialize)]
    pub(super) struct ClassifiedPageBody {
        headers: Option<Vec<String>>,
        titles: Option<Vec<String>>,
        footers: Option<Vec<String>>,
        columns: Vec<String>,
        #[serde(default)]
        joined_text: Option<String>,
    }

    impl From<ClassifiedPageBody> for ClassifiedPage {
        fn from(body: ClassifiedPageBody) -> Self {
            let has_bands =
                body.headers.is_some() || body.titles.is_some() || body.footers.is_some();
            let bands = has_bands.then(|| PageBands {
                headers: body.headers.unwrap_or_default(),
                titles: body.titles.unwrap_or_default(),
                footers: body.footers.unwrap_or_default(),
            });
            ClassifiedPage {
                bands,
                columns: body.columns,
                joined_text: body.joined_text,
            }
        }
    }
}

/// Classify a page's blocks using the default [`UppercaseTitle`] predicate.
///
/// See [`classify_with`].
pub fn classify(
    blocks: &[TextBlock],
    geometry: &PageGeometry,
    column_count: usize,
) -> ClassifiedPage {
    classify_with(blocks, geometry, column_count, &UppercaseTitle)
}

/// Classify a page's blocks into headers, titles, footers, and body columns.
///
/// The algorithm:
/// 1. Drop blocks whose trimmed text is empty
/// 2. Stable-sort the rest by `(y0, x0)` (reading order)
/// 3. Header-band blocks are normalized into `headers`; those accepted by
///    `titles` are also added to `titles` once
/// 4. Footer-band blocks are normalized into `footers`
/// 5. Remaining blocks are body text, split into `column_count` columns
///
/// A `column_count` of 0 is treated as 1 and counts above [`MAX_COLUMNS`] are
/// clamped to it. With one column the body is joined
/// top-to-bottom and normalized once, and `joined_text` is left unset.
pub fn classify_with(
    blocks: &[TextBlock],
    geometry: &PageGeometry,
    column_count: usize,
    titles: &dyn TitlePredicate,
) -> ClassifiedPage {
    let column_count = column_count.min(MAX_COLUMNS);
    let mut ordered: Vec<&TextBlock> = blocks.iter().filter(|b| !b.is_blank()).collect();
    if ordered.is_empty() {
        return ClassifiedPage::default();
    }
    ordered.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));

    let mut bands = PageBands::default();
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut body: Vec<BodyBlock<'_>> = Vec::new();

    for block in ordered {
        let text = block.text.trim();
        match classify_region(block, geometry) {
            PageRegion::Header => {
                let cleaned = normalize(text);
                if titles.is_title(text) && seen_titles.insert(cleaned.clone()) {
                    bands.titles.push(cleaned.clone());
                }
                bands.headers.push(cleaned);
            }
            PageRegion::Footer => bands.footers.push(normalize(text)),
            PageRegion::Body => body.push(BodyBlock {
                x0: block.x0,
                y0: block.y0,
                text,
            }),
        }
    }

    if column_count <= 1 {
        return ClassifiedPage {
            bands: Some(bands),
            columns: vec![normalize(&join_top_to_bottom(&mut body))],
            joined_text: None,
        };
    }

    let columns = split_columns(&body, geometry.width, column_count);
    let joined_text = columns
        .iter()
        .filter(|c| !c.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    ClassifiedPage {
        bands: Some(bands),
        columns,
        joined_text: Some(joined_text),
    }
}
