/// A positioned fragment of text as emitted by a document engine.
///
/// Coordinates use a top-left origin:
/// - `x0`: left edge
/// - `y0`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `y1`: bottom edge (distance from top of page)
///
/// Geometry is not validated; a block with `x1 < x0` is processed as-is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlock {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Raw extracted text, possibly spanning several lines.
    pub text: String,
}

impl TextBlock {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64, text: impl Into<String>) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            text: text.into(),
        }
    }

    /// Returns `true` if the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Page dimensions in the same units as the block coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_new() {
        let block = TextBlock::new(10.0, 20.0, 30.0, 40.0, "hello");
        assert_eq!(block.x0, 10.0);
        assert_eq!(block.y0, 20.0);
        assert_eq!(block.x1, 30.0);
        assert_eq!(block.y1, 40.0);
        assert_eq!(block.text, "hello");
    }

    #[test]
    fn test_blank_detection() {
        assert!(TextBlock::new(0.0, 0.0, 1.0, 1.0, "").is_blank());
        assert!(TextBlock::new(0.0, 0.0, 1.0, 1.0, " \n\t ").is_blank());
        assert!(!TextBlock::new(0.0, 0.0, 1.0, 1.0, " a ").is_blank());
    }
}
