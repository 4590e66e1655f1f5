//! Grid layout: children placed row by row in equal cells.
//!
//! The area inside the padding is divided into `rows x cols` cells of equal
//! size, separated by `spacing`. Child `i` goes to row `i / cols`, column
//! `i % cols`; children beyond `rows * cols` continue on further rows with
//! the same cell size. Children keep their own size and sit at the top-left
//! corner of their cell.

use twig_render::{Point, Size};

use super::traits::Layout;

/// A row/column grid layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    spacing: f32,
    padding: f32,
}

impl GridLayout {
    /// Create a grid. Zero rows or columns are treated as one.
    pub fn new(rows: usize, cols: usize, spacing: f32, padding: f32) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            spacing: spacing.max(0.0),
            padding: padding.max(0.0),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The size of one cell inside a container of the given size.
    ///
    /// Cells never go negative; a container too small for its padding and
    /// gaps gets empty cells.
    pub fn cell_size(&self, container: Size) -> Size {
        let cell = |extent: f32, count: usize| {
            let gaps = self.spacing * (count - 1) as f32;
            ((extent - 2.0 * self.padding - gaps) / count as f32).max(0.0)
        };
        Size::new(
            cell(container.width, self.cols),
            cell(container.height, self.rows),
        )
    }
}

impl Layout for GridLayout {
    fn arrange(&self, container: Size, items: &[Size]) -> Vec<Point> {
        let cell = self.cell_size(container);
        (0..items.len())
            .map(|i| {
                let row = (i / self.cols) as f32;
                let col = (i % self.cols) as f32;
                Point::new(
                    self.padding + col * (cell.width + self.spacing),
                    self.padding + row * (cell.height + self.spacing),
                )
            })
            .collect()
    }

    fn spacing(&self) -> f32 {
        self.spacing
    }

    fn padding(&self) -> f32 {
        self.padding
    }
}
