//! Core Layout trait definition.

use std::fmt;

use twig_render::{Point, Size};

/// A positioning strategy for the children of a container.
///
/// Layouts are pure: given the container's size and the sizes of its
/// children, in insertion order, they return one position per child relative
/// to the container. They never resize children and never own them.
pub trait Layout: fmt::Debug {
    /// Compute child positions. The result has exactly `items.len()` entries.
    fn arrange(&self, container: Size, items: &[Size]) -> Vec<Point>;

    /// Gap between consecutive children.
    fn spacing(&self) -> f32;

    /// Inset from the container's edges.
    fn padding(&self) -> f32;
}
