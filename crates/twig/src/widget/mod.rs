//! Widget system for Twig.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: state every widget shares (geometry, flags, style,
//!   raised events)
//! - [`WidgetTree`]: owns widgets, delivers their events and paints them
//! - [`layout`]: positioning strategies for container children
//! - [`widgets`]: the standard widget set
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Implement `paint()` for rendering
//!
//! ```
//! use twig::prelude::*;
//!
//! struct Swatch {
//!     base: WidgetBase,
//!     color: Color,
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase {
//!         &self.base
//!     }
//!
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase {
//!         &mut self.base
//!     }
//!
//!     fn paint(&self, ctx: &mut PaintContext<'_>) {
//!         let rect = ctx.rect();
//!         ctx.renderer().fill_rect(rect, self.color);
//!     }
//! }
//!
//! let mut tree = WidgetTree::new();
//! let swatch = tree.add_root(Swatch { base: WidgetBase::new(), color: Color::RED });
//! assert!(tree.is::<Swatch>(swatch));
//! ```

mod base;
mod input;
pub mod layout;
mod style;
mod traits;
mod tree;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use base::{DEFAULT_SIZE, WidgetBase};
pub use input::InputEvent;
pub use layout::{ContainerLayout, GridLayout, HorizontalLayout, Layout, VerticalLayout};
pub use style::Style;
pub use traits::{PaintContext, PointerState, Widget};
pub use tree::{Handler, WidgetTree};
