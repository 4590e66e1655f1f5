//! Container widget: a plain box that arranges its children.
//!
//! A container paints nothing itself. Its children are positioned by the
//! layout installed with
//! [`WidgetTree::set_layout`](crate::widget::WidgetTree::set_layout).
//!
//! # Example
//!
//! ```
//! use twig::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let column = tree.add_root(Container::new());
//! let a = tree.add(column, Label::new("a").with_size(50.0, 20.0)).unwrap();
//! let b = tree.add(column, Label::new("b").with_size(50.0, 30.0)).unwrap();
//! tree.set_layout(column, VerticalLayout::new(5.0, 10.0)).unwrap();
//!
//! assert_eq!(tree.base(a).unwrap().pos().y, 10.0);
//! assert_eq!(tree.base(b).unwrap().pos().y, 35.0);
//! ```

use crate::widget::layout::ContainerLayout;
use crate::widget::{PaintContext, Widget, WidgetBase};

/// A widget whose only job is to hold and arrange children.
#[derive(Debug, Default)]
pub struct Container {
    base: WidgetBase,
    layout: ContainerLayout,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow to fit the children after every layout pass (builder pattern).
    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.layout.set_auto_resize(auto_resize);
        self
    }

    /// The layout state.
    pub fn layout(&self) -> &ContainerLayout {
        &self.layout
    }
}

impl Widget for Container {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn container(&self) -> Option<&ContainerLayout> {
        Some(&self.layout)
    }

    fn container_mut(&mut self) -> Option<&mut ContainerLayout> {
        Some(&mut self.layout)
    }

    fn paint(&self, _ctx: &mut PaintContext<'_>) {}
}
