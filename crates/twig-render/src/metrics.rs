//! Text measurement.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Size;

/// Measures rendered text extents.
///
/// Widgets that size themselves from their text (buttons, labels) ask this
/// capability for the extent of a string in device pixels.
pub trait TextMetrics {
    /// The extent of `text` rendered on a single line.
    fn measure_text(&self, text: &str) -> Size;

    /// The height of one line of text.
    fn line_height(&self) -> f32;
}

/// Fixed-cell metrics: every grapheme cluster occupies one cell.
///
/// Used by the console and recording backends, where there is no real font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    cell_width: f32,
    cell_height: f32,
}

impl MonospaceMetrics {
    /// Create metrics with the given cell size.
    pub fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width: cell_width.max(0.0),
            cell_height: cell_height.max(0.0),
        }
    }

    /// Number of cells `text` occupies.
    pub fn cells(text: &str) -> usize {
        text.graphemes(true).count()
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure_text(&self, text: &str) -> Size {
        Size::new(Self::cells(text) as f32 * self.cell_width, self.cell_height)
    }

    fn line_height(&self) -> f32 {
        self.cell_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_graphemes() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.measure_text("OK"), Size::new(16.0, 16.0));
        // "e" + combining acute is one cluster.
        assert_eq!(metrics.measure_text("e\u{301}"), Size::new(8.0, 16.0));
        assert_eq!(metrics.measure_text("").width, 0.0);
    }
}
