//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait, the foundation for every UI
//! element, and the [`PaintContext`] handed to [`Widget::paint`].
//!
//! # Related Types
//!
//! - [`super::WidgetBase`] - State shared by every widget
//! - [`super::WidgetTree`] - Owns widgets and delivers their events
//! - [`super::layout::ContainerLayout`] - Layout state of container widgets

use std::any::Any;

use twig_core::config::TextPadding;
use twig_render::{Point, Rect, Renderer, Size, Stroke, TextMetrics};

use super::base::WidgetBase;
use super::input::InputEvent;
use super::layout::ContainerLayout;
use super::style::Style;

/// Pointer state at paint time, used for hover and pressed visuals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in window coordinates, if known.
    pub position: Option<Point>,
    /// Whether the left button is held.
    pub pressed: bool,
}

/// Context provided during widget painting.
///
/// Wraps the renderer together with the widget's absolute rectangle, the
/// effective style and the pointer state.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    rect: Rect,
    style: &'a Style,
    metrics: Option<&'a dyn TextMetrics>,
    pointer: PointerState,
    focused: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, rect: Rect, style: &'a Style) -> Self {
        Self {
            renderer,
            rect,
            style,
            metrics: None,
            pointer: PointerState::default(),
            focused: false,
        }
    }

    /// Provide text metrics (builder pattern).
    #[inline]
    pub fn with_metrics(mut self, metrics: Option<&'a dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Provide the pointer state (builder pattern).
    #[inline]
    pub fn with_pointer(mut self, pointer: PointerState) -> Self {
        self.pointer = pointer;
        self
    }

    /// Set whether the widget has focus (builder pattern).
    #[inline]
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut (dyn Renderer + 'a) {
        &mut *self.renderer
    }

    /// The widget's rectangle in window coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The style to paint with.
    #[inline]
    pub fn style(&self) -> &Style {
        self.style
    }

    /// Measure single-line text. Zero when no metrics are available.
    pub fn measure_text(&self, text: &str) -> Size {
        self.metrics
            .map(|m| m.measure_text(text))
            .unwrap_or(Size::ZERO)
    }

    /// Whether the pointer is over the widget.
    pub fn is_hovered(&self) -> bool {
        self.pointer.position.is_some_and(|p| self.rect.contains(p))
    }

    /// Whether the widget is hovered with the left button held.
    pub fn is_pressed(&self) -> bool {
        self.pointer.pressed && self.is_hovered()
    }

    /// Whether the widget has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Outline `rect` with the style's border color and width.
    pub fn draw_border(&mut self, rect: Rect) {
        let stroke = Stroke::new(self.style.border, self.style.border_width);
        self.renderer.stroke_rect(rect, &stroke);
    }

    /// Draw a 2-pixel focus outline, `inset` pixels inside the widget.
    pub fn draw_focus_indicator(&mut self, inset: f32) {
        let rect = if inset > 0.0 {
            self.rect.deflate(inset)
        } else {
            self.rect
        };
        let stroke = Stroke::new(self.style.focus, 2.0);
        self.renderer.stroke_rect(rect, &stroke);
    }
}

/// The core trait for all widgets.
///
/// # Required Methods
///
/// - [`widget_base`](Self::widget_base) / [`widget_base_mut`](Self::widget_base_mut)
/// - [`paint`](Self::paint)
///
/// Everything else has a default. Widgets raise events by posting them on
/// their [`WidgetBase`]; the tree delivers them (with bubbling) once the
/// call that raised them returns.
///
/// Widgets are owned by a [`WidgetTree`](super::WidgetTree) and addressed by
/// id; typed access goes through `Any` downcasting.
pub trait Widget: Any {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Paint the widget.
    ///
    /// Called only for visible widgets, parents before children. Painting
    /// must not change state: painting twice yields the same output.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Resize the widget from its text.
    ///
    /// Called by the tree after the widget requested a measure (see
    /// [`WidgetBase::request_measure`]) when text metrics are available.
    fn measure(&mut self, _metrics: &dyn TextMetrics, _padding: &TextPadding) {}

    /// Handle input routed to this widget. Returns `true` if consumed.
    fn handle_input(&mut self, _input: &InputEvent) -> bool {
        false
    }

    /// Perform the widget's primary action (click a button, toggle a check
    /// box). Returns `false` if the widget has none.
    fn activate(&mut self) -> bool {
        false
    }

    /// Whether the widget takes keyboard focus and text input.
    fn accepts_text_input(&self) -> bool {
        false
    }

    /// Layout state, for widgets that arrange their children.
    fn container(&self) -> Option<&ContainerLayout> {
        None
    }

    /// Mutable layout state, for widgets that arrange their children.
    fn container_mut(&mut self) -> Option<&mut ContainerLayout> {
        None
    }

    // =========================================================================
    // Geometry & State (default implementations delegate to WidgetBase)
    // =========================================================================

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the string id used for lookup (builder pattern).
    fn with_id(mut self, id: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.widget_base_mut().set_name(id);
        self
    }

    /// Set the position relative to the parent (builder pattern).
    fn with_position(mut self, x: f32, y: f32) -> Self
    where
        Self: Sized,
    {
        self.widget_base_mut().set_position(x, y);
        self
    }

    /// Set the size (builder pattern).
    fn with_size(mut self, width: f32, height: f32) -> Self
    where
        Self: Sized,
    {
        self.widget_base_mut().set_size(width, height);
        self
    }

    /// Set visibility (builder pattern).
    fn with_visible(mut self, visible: bool) -> Self
    where
        Self: Sized,
    {
        self.widget_base_mut().set_visible(visible);
        self
    }

    /// Set the enabled state (builder pattern).
    fn with_enabled(mut self, enabled: bool) -> Self
    where
        Self: Sized,
    {
        self.widget_base_mut().set_enabled(enabled);
        self
    }

    /// Override the style (builder pattern).
    fn with_style(mut self, style: Style) -> Self
    where
        Self: Sized,
    {
        self.widget_base_mut().set_style(style);
        self
    }
}
