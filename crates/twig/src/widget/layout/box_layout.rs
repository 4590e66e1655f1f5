//! Box layouts: children stacked in a column or a row.
//!
//! The first child sits at `(padding, padding)`; each following child is
//! placed right after the previous one along the main axis, separated by
//! `spacing`. On the cross axis every child sits at `padding`; there is no
//! alignment or stretching.
//!
//! # Example
//!
//! ```
//! use twig::widget::layout::{Layout, VerticalLayout};
//! use twig_render::Size;
//!
//! let layout = VerticalLayout::new(5.0, 10.0);
//! let items = [
//!     Size::new(80.0, 20.0),
//!     Size::new(80.0, 30.0),
//!     Size::new(80.0, 10.0),
//! ];
//! let ys: Vec<f32> = layout
//!     .arrange(Size::new(200.0, 200.0), &items)
//!     .iter()
//!     .map(|p| p.y)
//!     .collect();
//! assert_eq!(ys, vec![10.0, 35.0, 70.0]);
//! ```

use twig_core::config::LayoutDefaults;
use twig_render::{Point, Size};

use super::traits::Layout;

/// Layout orientation for box layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Items are arranged left to right.
    Horizontal,
    /// Items are arranged top to bottom.
    #[default]
    Vertical,
}

impl Orientation {
    fn main_extent(self, size: Size) -> f32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Orientation::Horizontal => Point::new(main, cross),
            Orientation::Vertical => Point::new(cross, main),
        }
    }
}

/// A linear layout along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLayout {
    orientation: Orientation,
    spacing: f32,
    padding: f32,
}

impl BoxLayout {
    /// Create a box layout. Negative spacing or padding is clamped to zero.
    pub fn new(orientation: Orientation, spacing: f32, padding: f32) -> Self {
        Self {
            orientation,
            spacing: spacing.max(0.0),
            padding: padding.max(0.0),
        }
    }

    /// The layout orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Layout for BoxLayout {
    fn arrange(&self, _container: Size, items: &[Size]) -> Vec<Point> {
        let mut cursor = self.padding;
        items
            .iter()
            .map(|item| {
                let pos = self.orientation.point(cursor, self.padding);
                cursor += self.orientation.main_extent(*item) + self.spacing;
                pos
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

/// Children stacked top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalLayout(BoxLayout);

impl VerticalLayout {
    /// Create a vertical layout with the given spacing and padding.
    pub fn new(spacing: f32, padding: f32) -> Self {
        Self(BoxLayout::new(Orientation::Vertical, spacing, padding))
    }

    /// Create a vertical layout from configured defaults.
    pub fn from_defaults(defaults: &LayoutDefaults) -> Self {
        Self::new(defaults.spacing, defaults.padding)
    }
}

impl Layout for VerticalLayout {
    fn arrange(&self, container: Size, items: &[Size]) -> Vec<Point> {
        self.0.arrange(container, items)
    }

    fn spacing(&self) -> f32 {
        self.0.spacing
    }

    fn padding(&self) -> f32 {
        self.0.padding
    }
}

/// Children placed left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalLayout(BoxLayout);

impl HorizontalLayout {
    /// Create a horizontal layout with the given spacing and padding.
    pub fn new(spacing: f32, padding: f32) -> Self {
        Self(BoxLayout::new(Orientation::Horizontal, spacing, padding))
    }

    /// Create a horizontal layout from configured defaults.
    pub fn from_defaults(defaults: &LayoutDefaults) -> Self {
        Self::new(defaults.spacing, defaults.padding)
    }
}

impl Layout for HorizontalLayout {
    fn arrange(&self, container: Size, items: &[Size]) -> Vec<Point> {
        self.0.arrange(container, items)
    }

    fn spacing(&self) -> f32 {
        self.0.spacing
    }

    fn padding(&self) -> f32 {
        self.0.padding
    }
}
