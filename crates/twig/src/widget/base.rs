//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the state every widget shares:
//! geometry, visibility and enabled flags, an optional style override, and
//! the queue of events the widget raised but the tree has not yet delivered.

use std::collections::HashMap;

use twig_core::EventKind;
use twig_render::{Point, Rect, Size};

use super::style::Style;

/// Default size of a freshly created widget.
pub const DEFAULT_SIZE: Size = Size {
    width: 100.0,
    height: 30.0,
};

/// An event raised by a widget, waiting for the tree to deliver it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingEvent {
    pub(crate) kind: EventKind,
    pub(crate) data: HashMap<String, String>,
}

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and hand it out through
/// [`Widget::widget_base`](super::Widget::widget_base).
///
/// Setters return `&mut Self` so calls can be chained:
///
/// ```
/// use twig::widget::WidgetBase;
///
/// let mut base = WidgetBase::new();
/// base.set_position(10.0, 20.0).set_size(50.0, 25.0).set_enabled(false);
/// assert_eq!(base.pos().x, 10.0);
/// assert!(!base.is_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct WidgetBase {
    /// String id given before the widget joins a tree.
    name: String,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget currently has keyboard focus.
    focused: bool,

    /// Per-widget style override.
    style: Option<Style>,

    /// Set when the widget's text changed and it should be re-measured.
    needs_measure: bool,

    /// Events raised by the widget, in order.
    pending: Vec<PendingEvent>,
}

impl WidgetBase {
    /// Create a new widget base at (0, 0) with the default size.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            geometry: Rect::from_origin_size(Point::ZERO, DEFAULT_SIZE),
            visible: true,
            enabled: true,
            focused: false,
            style: None,
            needs_measure: false,
            pending: Vec::new(),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// The string id assigned before insertion. Once the widget is in a
    /// tree, the tree holds the id and this is empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the string id used when the widget is inserted into a tree.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub(crate) fn take_name(&mut self) -> String {
        std::mem::take(&mut self.name)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's position relative to its parent.
    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.geometry.origin = Point::new(x, y);
        self
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size. Negative dimensions are clamped to zero.
    ///
    /// An explicit size wins over auto-sizing until the widget's text
    /// changes again.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.geometry.size = Size::new(width, height);
        self.needs_measure = false;
        self
    }

    /// Resize without cancelling a pending re-measure.
    pub(crate) fn resize_to(&mut self, size: Size) {
        self.geometry.size = size;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    // =========================================================================
    // Visibility & Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    ///
    /// A visible widget is still not drawn when an ancestor is hidden.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = enabled;
        self
    }

    /// Check if the widget has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// The widget's own style, if it overrides the tree's.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Override the style for this widget.
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = Some(style);
        self
    }

    /// Go back to the tree's style.
    pub fn clear_style(&mut self) -> &mut Self {
        self.style = None;
        self
    }

    // =========================================================================
    // Measurement & Event Queue
    // =========================================================================

    /// Ask the tree to re-measure the widget against its text metrics.
    pub fn request_measure(&mut self) {
        self.needs_measure = true;
    }

    pub(crate) fn take_needs_measure(&mut self) -> bool {
        std::mem::take(&mut self.needs_measure)
    }

    /// Queue an event with an empty payload for delivery by the tree.
    pub fn post(&mut self, kind: EventKind) {
        self.post_with(kind, std::iter::empty::<(String, String)>());
    }

    /// Queue an event with a payload for delivery by the tree.
    pub fn post_with<K, V>(&mut self, kind: EventKind, data: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let data = data
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.pending.push(PendingEvent { kind, data });
    }

    /// Number of raised events not yet delivered.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn take_pending(&mut self) -> Vec<PendingEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(WidgetBase: Clone, Send, Sync);
