//! Column bucketing for body blocks.
//!
//! The page width is divided into `column_count` equal slices and each body
//! block goes to the slice containing its left edge. Within a slice, blocks
//! are read top-to-bottom.

use crate::normalize::normalize;

/// Largest supported column count. Larger requests are clamped to it.
pub const MAX_COLUMNS: usize = 64;

/// A body block retained for column assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBlock<'a> {
    pub x0: f64,
    pub y0: f64,
    /// Trimmed, un-normalized block text.
    pub text: &'a str,
}

/// Determine which column a left edge falls into.
///
/// Blocks at or beyond the last boundary land in the last column. Negative or
/// non-finite positions land in the first column.
pub fn column_index(x0: f64, page_width: f64, column_count: usize) -> usize {
    if column_count <= 1 {
        return 0;
    }
    let col_width = page_width / column_count as f64;
    // `as usize` saturates: negatives and NaN become 0, +inf becomes usize::MAX
    let idx = (x0 / col_width).floor() as usize;
    idx.min(column_count - 1)
}

/// Join blocks top-to-bottom with newlines, without normalizing.
///
/// The sort is stable, so blocks sharing a `y0` keep their incoming order.
pub fn join_top_to_bottom(blocks: &mut [BodyBlock<'_>]) -> String {
    blocks.sort_by(|a, b| a.y0.total_cmp(&b.y0));
    blocks
        .iter()
        .map(|b| b.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split body blocks into `column_count` buckets and normalize each one.
///
/// Returns exactly `column_count` entries, clamped to [`MAX_COLUMNS`]; a
/// bucket with no blocks yields an empty string.
pub fn split_columns(
    body: &[BodyBlock<'_>],
    page_width: f64,
    column_count: usize,
) -> Vec<String> {
    let column_count = column_count.min(MAX_COLUMNS);
    let mut buckets: Vec<Vec<BodyBlock<'_>>> = vec![Vec::new(); column_count];
    for block in body {
        buckets[column_index(block.x0, page_width, column_count)].push(*block);
    }

    buckets
        .iter_mut()
        .map(|bucket| normalize(&join_top_to_bottom(bucket)).trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x0: f64, y0: f64, text: &str) -> BodyBlock<'_> {
        BodyBlock { x0, y0, text }
    }

    #[test]
    fn column_index_left_edge_is_first_column() {
        assert_eq!(column_index(0.0, 600.0, 2), 0);
        assert_eq!(column_index(299.9, 600.0, 2), 0);
    }

    #[test]
    fn column_index_on_boundary_is_next_column() {
        assert_eq!(column_index(300.0, 600.0, 2), 1);
        assert_eq!(column_index(200.0, 600.0, 3), 1);
        assert_eq!(column_index(400.0, 600.0, 3), 2);
    }

    #[test]
    fn column_index_clamped_to_last_column() {
        assert_eq!(column_index(600.0, 600.0, 2), 1);
        assert_eq!(column_index(10_000.0, 600.0, 3), 2);
    }

    #[test]
    fn column_index_negative_and_nan_clamped_to_first() {
        assert_eq!(column_index(-50.0, 600.0, 3), 0);
        assert_eq!(column_index(f64::NAN, 600.0, 3), 0);
    }

    #[test]
    fn column_index_zero_width_page() {
        assert_eq!(column_index(10.0, 0.0, 3), 2);
    }

    #[test]
    fn column_index_single_column() {
        assert_eq!(column_index(500.0, 600.0, 1), 0);
        assert_eq!(column_index(500.0, 600.0, 0), 0);
    }

    #[test]
    fn join_sorts_by_top_edge() {
        let mut blocks = vec![
            body(0.0, 30.0, "third"),
            body(0.0, 10.0, "first"),
            body(0.0, 20.0, "second"),
        ];
        assert_eq!(join_top_to_bottom(&mut blocks), "first\nsecond\nthird");
    }

    #[test]
    fn join_is_stable_for_equal_top_edges() {
        let mut blocks = vec![body(0.0, 10.0, "left"), body(200.0, 10.0, "right")];
        assert_eq!(join_top_to_bottom(&mut blocks), "left\nright");
    }

    #[test]
    fn split_columns_buckets_by_left_edge() {
        let blocks = vec![
            body(320.0, 100.0, "Right top."),
            body(10.0, 200.0, "Left bottom."),
            body(10.0, 100.0, "Left top."),
            body(330.0, 200.0, "Right bottom."),
        ];
        let cols = split_columns(&blocks, 600.0, 2);
        assert_eq!(cols, vec!["Left top.\nLeft bottom.", "Right top.\nRight bottom."]);
    }

    #[test]
    fn split_columns_keeps_empty_buckets() {
        let blocks = vec![body(10.0, 100.0, "Only left.")];
        let cols = split_columns(&blocks, 600.0, 3);
        assert_eq!(cols, vec!["Only left.", "", ""]);
    }

    #[test]
    fn split_columns_clamps_huge_counts() {
        let blocks = vec![body(10.0, 100.0, "Only left.")];
        let cols = split_columns(&blocks, 600.0, usize::MAX);
        assert_eq!(cols.len(), MAX_COLUMNS);
        assert_eq!(cols[0], "Only left.");
    }
}
