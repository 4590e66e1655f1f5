//! Layout system for positioning the children of container widgets.
//!
//! - [`Layout`] trait: a pure strategy mapping child sizes to positions
//! - [`VerticalLayout`] / [`HorizontalLayout`]: box layouts
//! - [`GridLayout`]: equal-cell grid
//! - [`ContainerLayout`]: the layout state a container widget carries
//!
//! A layout runs once when installed with
//! [`WidgetTree::set_layout`](super::WidgetTree::set_layout). Children added
//! later are not positioned until
//! [`WidgetTree::apply_layout`](super::WidgetTree::apply_layout) is called.

mod box_layout;
mod grid_layout;
mod traits;

pub use box_layout::{BoxLayout, HorizontalLayout, Orientation, VerticalLayout};
pub use grid_layout::GridLayout;
pub use traits::Layout;

use twig_render::{Point, Size};

/// Layout state owned by a container widget.
#[derive(Debug, Default)]
pub struct ContainerLayout {
    layout: Option<Box<dyn Layout>>,
    auto_resize: bool,
    content_offset: Point,
}

impl ContainerLayout {
    /// Create empty layout state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The installed strategy, if any.
    pub fn layout(&self) -> Option<&dyn Layout> {
        self.layout.as_deref()
    }

    /// Install a strategy, replacing the previous one.
    pub fn set_layout(&mut self, layout: Box<dyn Layout>) {
        self.layout = Some(layout);
    }

    /// Remove the strategy. Children keep their positions.
    pub fn clear_layout(&mut self) -> Option<Box<dyn Layout>> {
        self.layout.take()
    }

    /// Whether the container grows to fit its children after layout.
    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    pub fn set_auto_resize(&mut self, auto_resize: bool) {
        self.auto_resize = auto_resize;
    }

    /// Offset added to every position the layout computes, e.g. to leave
    /// room for a title.
    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    pub fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    /// Run the strategy. Returns child positions relative to the container
    /// and, when auto-resize is on, the size the container should take.
    pub fn compute(&self, container: Size, items: &[Size]) -> Option<(Vec<Point>, Option<Size>)> {
        let layout = self.layout.as_deref()?;
        let positions: Vec<Point> = layout
            .arrange(container, items)
            .into_iter()
            .map(|p| p.offset_by(self.content_offset))
            .collect();

        let fitted = self.auto_resize.then(|| {
            let padding = layout.padding();
            let (right, bottom) = positions.iter().zip(items).fold(
                (self.content_offset.x + padding, self.content_offset.y + padding),
                |(right, bottom), (pos, size)| {
                    (
                        right.max(pos.x + size.width),
                        bottom.max(pos.y + size.height),
                    )
                },
            );
            Size::new(right + padding, bottom + padding)
        });

        Some((positions, fitted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_layout_computes_nothing() {
        let state = ContainerLayout::new();
        assert!(state.compute(Size::new(10.0, 10.0), &[Size::ZERO]).is_none());
    }

    #[test]
    fn test_auto_resize_fits_children_plus_padding() {
        let mut state = ContainerLayout::new();
        state.set_layout(Box::new(VerticalLayout::new(5.0, 10.0)));
        state.set_auto_resize(true);

        let items = [Size::new(80.0, 20.0), Size::new(120.0, 30.0)];
        let (positions, fitted) = state.compute(Size::new(10.0, 10.0), &items).unwrap();

        assert_eq!(positions[1], Point::new(10.0, 35.0));
        // Widest child ends at 130, last child ends at 65.
        assert_eq!(fitted, Some(Size::new(140.0, 75.0)));
    }

    #[test]
    fn test_auto_resize_empty_container() {
        let mut state = ContainerLayout::new();
        state.set_layout(Box::new(HorizontalLayout::new(5.0, 8.0)));
        state.set_auto_resize(true);
        let (_, fitted) = state.compute(Size::ZERO, &[]).unwrap();
        assert_eq!(fitted, Some(Size::new(16.0, 16.0)));
    }

    #[test]
    fn test_content_offset_shifts_positions() {
        let mut state = ContainerLayout::new();
        state.set_layout(Box::new(VerticalLayout::new(0.0, 0.0)));
        state.set_content_offset(Point::new(0.0, 24.0));
        let (positions, fitted) = state.compute(Size::ZERO, &[Size::new(5.0, 5.0)]).unwrap();
        assert_eq!(positions, vec![Point::new(0.0, 24.0)]);
        assert_eq!(fitted, None);
    }
}
