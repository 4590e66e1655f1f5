//! The widget tree: ownership, lookup, event delivery, painting and
//! hit-testing.
//!
//! [`WidgetTree`] owns every widget. Structure (parent, ordered children,
//! string ids) lives in a [`twig_core::ObjectTree`]; widget values and their
//! handlers live beside it, keyed by the same [`WidgetId`].
//!
//! # Event Delivery
//!
//! [`WidgetTree::emit`] runs the handlers registered for the event's kind on
//! the target widget in registration order, then repeats on the parent,
//! grandparent and so on up to the root. `WindowClose` never leaves the
//! widget it was emitted on. There is no way to stop propagation.
//!
//! Widgets raise events by posting them on their [`WidgetBase`]; the tree
//! delivers them as soon as the call that mutated the widget
//! ([`update`](WidgetTree::update), [`click`](WidgetTree::click),
//! [`deliver_input`](WidgetTree::deliver_input), ...) returns.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use twig::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let form = tree.add_root(Container::new().with_id("form"));
//! let submit = tree.add(form, Button::new("Submit").with_id("submit")).unwrap();
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = log.clone();
//! tree.on(form, EventKind::Click, move |event, tree| {
//!     let name = tree.name(event.source()).unwrap_or_default().to_string();
//!     sink.borrow_mut().push(name);
//! })
//! .unwrap();
//!
//! tree.click(submit).unwrap();
//! assert_eq!(*log.borrow(), vec!["submit".to_string()]);
//! ```

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::rc::Rc;

use slotmap::SecondaryMap;
use twig_core::config::TextPadding;
use twig_core::logging::{span_names, targets};
use twig_core::{
    Event, EventKind, ObjectError, ObjectTree, ObjectTreeDebug, TreeFormatOptions, WidgetId,
};
use twig_render::{Point, Rect, Renderer, TextMetrics};

use super::base::WidgetBase;
use super::input::InputEvent;
use super::layout::Layout;
use super::style::Style;
use super::traits::{PaintContext, PointerState, Widget};
use super::widgets::TextInput;
use crate::error::{Error, Result};

/// An event handler.
///
/// Handlers get the event and the tree itself, so they can change widgets,
/// register or remove handlers, emit further events, or destroy widgets.
/// A handler may run again from inside itself when it emits an event that
/// bubbles back to its widget, so handler state lives in `Cell`/`RefCell`.
pub type Handler = Rc<dyn Fn(&Event, &mut WidgetTree)>;

/// Identifies one registration made with [`WidgetTree::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HandlerId(u64);

struct WidgetSlot {
    widget: Box<dyn Widget>,
    handlers: HashMap<EventKind, Vec<(HandlerId, Handler)>>,
}

/// Owner of all widgets of an application.
pub struct WidgetTree {
    objects: ObjectTree,
    slots: SecondaryMap<WidgetId, WidgetSlot>,
    style: Style,
    metrics: Option<Rc<dyn TextMetrics>>,
    text_padding: TextPadding,
    next_handler: u64,
}

impl WidgetTree {
    /// Create an empty tree without text metrics (no auto-sizing).
    pub fn new() -> Self {
        Self {
            objects: ObjectTree::new(),
            slots: SecondaryMap::new(),
            style: Style::default(),
            metrics: None,
            text_padding: TextPadding::default(),
            next_handler: 0,
        }
    }

    /// Create an empty tree that auto-sizes widgets with `metrics`.
    pub fn with_metrics(metrics: Rc<dyn TextMetrics>) -> Self {
        let mut tree = Self::new();
        tree.metrics = Some(metrics);
        tree
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The text metrics used for auto-sizing, if any.
    pub fn metrics(&self) -> Option<&dyn TextMetrics> {
        self.metrics.as_deref()
    }

    /// Install text metrics and measure every widget still waiting for it.
    pub fn set_metrics(&mut self, metrics: Option<Rc<dyn TextMetrics>>) {
        self.metrics = metrics;
        let waiting: Vec<WidgetId> = self.slots.keys().collect();
        for id in waiting {
            self.refresh(id);
        }
    }

    /// Padding added around text by auto-sizing widgets.
    pub fn text_padding(&self) -> &TextPadding {
        &self.text_padding
    }

    pub fn set_text_padding(&mut self, padding: TextPadding) {
        self.text_padding = padding;
    }

    /// The style widgets paint with unless they override it.
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Insert a parentless widget (typically a window) and return its id.
    ///
    /// Events the widget raised before insertion are discarded.
    pub fn add_root<W: Widget>(&mut self, widget: W) -> WidgetId {
        self.insert(widget)
    }

    /// Insert `widget` as the last child of `parent`.
    pub fn add<W: Widget>(&mut self, parent: WidgetId, widget: W) -> Result<WidgetId> {
        if !self.objects.contains(parent) {
            return Err(ObjectError::InvalidObjectId.into());
        }
        let id = self.insert(widget);
        self.objects.add_child(parent, id)?;
        Ok(id)
    }

    /// Attach an existing parentless widget as the last child of `parent`.
    ///
    /// A widget's parent is set once: attaching a widget that already has a
    /// parent fails with [`ObjectError::AlreadyParented`], and attaching an
    /// ancestor fails with [`ObjectError::CircularParentage`].
    pub fn attach(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        self.objects.add_child(parent, child)?;
        Ok(())
    }

    fn insert<W: Widget>(&mut self, mut widget: W) -> WidgetId {
        let name = widget.widget_base_mut().take_name();
        widget.widget_base_mut().take_pending();
        let id = self.objects.register(type_name::<W>(), name);
        self.slots.insert(
            id,
            WidgetSlot {
                widget: Box::new(widget),
                handlers: HashMap::new(),
            },
        );
        self.refresh(id);
        id
    }

    /// Destroy a widget and its subtree, children first.
    ///
    /// Returns the destroyed ids in destruction order, `id` last.
    pub fn destroy(&mut self, id: WidgetId) -> Result<Vec<WidgetId>> {
        let removed = self.objects.destroy(id)?;
        for &gone in &removed {
            self.slots.remove(gone);
        }
        tracing::trace!(target: targets::OBJECT, ?id, count = removed.len(), "destroyed widgets");
        Ok(removed)
    }

    /// Destroy the first direct child of `parent` whose string id is `name`.
    ///
    /// Returns `false` if there is no such child.
    pub fn remove(&mut self, parent: WidgetId, name: &str) -> Result<bool> {
        match self.objects.find_child_by_name(parent, name)? {
            Some(child) => {
                self.destroy(child)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Destroy every child of `parent`. Returns how many subtrees went away.
    pub fn remove_all(&mut self, parent: WidgetId) -> Result<usize> {
        let children = self.objects.children(parent)?.to_vec();
        for &child in &children {
            self.destroy(child)?;
        }
        Ok(children.len())
    }

    /// Check if a widget exists.
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of live widgets.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The parent of a widget, `None` for roots and unknown ids.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.objects.parent(id).ok().flatten()
    }

    /// The children of a widget in insertion order (empty for unknown ids).
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.objects.children(id).unwrap_or_default()
    }

    /// The string id of a widget.
    pub fn name(&self, id: WidgetId) -> Option<&str> {
        self.objects.name(id).ok()
    }

    /// Change the string id of a widget.
    pub fn set_name(&mut self, id: WidgetId, name: impl Into<String>) -> Result<()> {
        self.objects.set_name(id, name)?;
        Ok(())
    }

    /// Find the first widget named `name` in a depth-first pre-order walk
    /// from `root`, `root` included.
    pub fn find(&self, root: WidgetId, name: &str) -> Option<WidgetId> {
        self.objects.find(root, name).ok().flatten()
    }

    /// Like [`find`](Self::find), returning the widget as type `W`.
    pub fn find_as<W: Widget>(&self, root: WidgetId, name: &str) -> Option<&W> {
        self.find(root, name).and_then(|id| self.get::<W>(id))
    }

    /// The underlying object tree.
    pub fn object_tree(&self) -> &ObjectTree {
        &self.objects
    }

    /// A text dump of the subtree at `root`, for diagnostics.
    pub fn dump(&self, root: WidgetId) -> Result<String> {
        let output = ObjectTreeDebug::with_options(TreeFormatOptions {
            show_ids: false,
            ..TreeFormatOptions::default()
        })
        .format_subtree(&self.objects, root)?;
        Ok(output)
    }

    // =========================================================================
    // Widget Access
    // =========================================================================

    fn slot(&self, id: WidgetId) -> Result<&WidgetSlot> {
        self.slots
            .get(id)
            .ok_or(Error::Object(ObjectError::InvalidObjectId))
    }

    fn slot_mut(&mut self, id: WidgetId) -> Result<&mut WidgetSlot> {
        self.slots
            .get_mut(id)
            .ok_or(Error::Object(ObjectError::InvalidObjectId))
    }

    /// A widget as a trait object.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.slots.get(id).map(|slot| &*slot.widget)
    }

    /// A widget as its concrete type.
    pub fn get<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        let slot = self.slots.get(id)?;
        let any: &dyn Any = &*slot.widget;
        any.downcast_ref::<W>()
    }

    /// Check whether a widget is of type `W`.
    pub fn is<W: Widget>(&self, id: WidgetId) -> bool {
        self.get::<W>(id).is_some()
    }

    /// The base state of any widget.
    pub fn base(&self, id: WidgetId) -> Result<&WidgetBase> {
        Ok(self.slot(id)?.widget.widget_base())
    }

    /// Mutable base state of any widget, for geometry and flag changes.
    ///
    /// ```
    /// use twig::prelude::*;
    ///
    /// let mut tree = WidgetTree::new();
    /// let label = tree.add_root(Label::new("hi"));
    /// tree.base_mut(label).unwrap().set_position(5.0, 5.0).set_visible(false);
    /// assert!(!tree.base(label).unwrap().is_visible());
    /// ```
    pub fn base_mut(&mut self, id: WidgetId) -> Result<&mut WidgetBase> {
        Ok(self.slot_mut(id)?.widget.widget_base_mut())
    }

    /// Mutate a widget as its concrete type, then deliver the events it
    /// raised and re-measure it if its text changed.
    pub fn update<W: Widget, R>(&mut self, id: WidgetId, f: impl FnOnce(&mut W) -> R) -> Result<R> {
        let slot = self.slot_mut(id)?;
        let any: &mut dyn Any = &mut *slot.widget;
        let widget = any.downcast_mut::<W>().ok_or(Error::WidgetType {
            id,
            expected: type_name::<W>(),
        })?;
        let result = f(widget);
        self.refresh(id);
        Ok(result)
    }

    /// Mutate a widget through the trait object, then deliver its events.
    pub fn with_widget<R>(&mut self, id: WidgetId, f: impl FnOnce(&mut dyn Widget) -> R) -> Result<R> {
        let slot = self.slot_mut(id)?;
        let result = f(&mut *slot.widget);
        self.refresh(id);
        Ok(result)
    }

    /// Re-measure a widget if requested and flush its queued events.
    fn refresh(&mut self, id: WidgetId) {
        let Some(slot) = self.slots.get_mut(id) else {
            return;
        };
        if slot.widget.widget_base_mut().take_needs_measure() {
            match self.metrics.as_deref() {
                Some(metrics) => slot.widget.measure(metrics, &self.text_padding),
                None => slot.widget.widget_base_mut().request_measure(),
            }
        }
        let pending = slot.widget.widget_base_mut().take_pending();
        for raised in pending {
            let event = Event::with_payload(raised.kind, id, raised.data);
            self.emit(id, &event);
        }
    }

    // =========================================================================
    // Convenience Operations
    // =========================================================================

    /// Perform a widget's primary action: click a button, toggle a check box.
    ///
    /// Disabled widgets do nothing. Returns `false` if the widget has no
    /// primary action.
    pub fn click(&mut self, id: WidgetId) -> Result<bool> {
        self.with_widget(id, |widget| widget.activate())
    }

    /// Set the text of a [`TextInput`], emitting `TextChanged`.
    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.update::<TextInput, _>(id, |input| input.set_text(text))
    }

    /// Route input to a widget. Returns whether the widget consumed it.
    pub fn deliver_input(&mut self, id: WidgetId, input: &InputEvent) -> Result<bool> {
        self.with_widget(id, |widget| widget.handle_input(input))
    }

    pub(crate) fn set_focused(&mut self, id: WidgetId, focused: bool) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.widget.widget_base_mut().set_focused(focused);
        }
    }

    // =========================================================================
    // Handlers & Emission
    // =========================================================================

    /// Register a handler for events of `kind` reaching `id`.
    ///
    /// Every handler of a kind runs, in registration order.
    pub fn on<F>(&mut self, id: WidgetId, kind: EventKind, handler: F) -> Result<()>
    where
        F: Fn(&Event, &mut WidgetTree) + 'static,
    {
        let handler_id = HandlerId(self.next_handler);
        let handler: Handler = Rc::new(handler);
        self.slot_mut(id)?
            .handlers
            .entry(kind)
            .or_default()
            .push((handler_id, handler));
        self.next_handler += 1;
        Ok(())
    }

    /// Remove every handler for `kind` on `id`.
    ///
    /// Removed handlers that have not run yet for an event being delivered
    /// are skipped.
    pub fn off(&mut self, id: WidgetId, kind: EventKind) -> Result<()> {
        self.slot_mut(id)?.handlers.remove(&kind);
        Ok(())
    }

    /// Number of handlers registered for `kind` on `id`.
    pub fn handler_count(&self, id: WidgetId, kind: EventKind) -> usize {
        self.slots
            .get(id)
            .and_then(|slot| slot.handlers.get(&kind))
            .map_or(0, Vec::len)
    }

    /// Deliver `event` to `target`, then bubble it up to the root.
    ///
    /// Handlers run synchronously. If a handler destroys the widget it is
    /// running on, bubbling stops there.
    pub fn emit(&mut self, target: WidgetId, event: &Event) {
        let _span = tracing::trace_span!(
            target: targets::EVENT,
            span_names::EMIT,
            kind = %event.kind(),
            source = event.source().as_raw()
        )
        .entered();

        let mut current = Some(target);
        while let Some(id) = current {
            self.run_handlers(id, event);
            if !event.kind().bubbles() {
                break;
            }
            current = self.objects.parent(id).ok().flatten();
        }
    }

    fn run_handlers(&mut self, id: WidgetId, event: &Event) {
        let kind = event.kind();
        // Handlers registered while these run wait for the next event.
        let snapshot: Vec<(HandlerId, Handler)> = match self
            .slots
            .get(id)
            .and_then(|slot| slot.handlers.get(&kind))
        {
            Some(handlers) => handlers.clone(),
            None => return,
        };
        tracing::trace!(target: targets::EVENT, ?id, %kind, count = snapshot.len(), "running handlers");

        for (handler_id, handler) in snapshot {
            if self.is_registered(id, kind, handler_id) {
                handler(event, self);
            }
        }
    }

    fn is_registered(&self, id: WidgetId, kind: EventKind, handler_id: HandlerId) -> bool {
        self.slots
            .get(id)
            .and_then(|slot| slot.handlers.get(&kind))
            .is_some_and(|handlers| handlers.iter().any(|(h, _)| *h == handler_id))
    }

    // =========================================================================
    // Geometry & Hit-Testing
    // =========================================================================

    /// The widget's position in window coordinates: the sum of relative
    /// positions along its parent chain, recomputed on every call.
    pub fn absolute_position(&self, id: WidgetId) -> Result<Point> {
        let mut pos = self.slot(id)?.widget.pos();
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            pos = pos.offset_by(self.slot(ancestor)?.widget.pos());
            current = self.parent(ancestor);
        }
        Ok(pos)
    }

    /// The widget's rectangle in window coordinates.
    pub fn absolute_rect(&self, id: WidgetId) -> Result<Rect> {
        let size = self.slot(id)?.widget.size();
        Ok(Rect::from_origin_size(self.absolute_position(id)?, size))
    }

    /// Convert a window-coordinate point to `id`'s local coordinates.
    pub fn to_local(&self, id: WidgetId, point: Point) -> Result<Point> {
        let origin = self.absolute_position(id)?;
        Ok(Point::new(point.x - origin.x, point.y - origin.y))
    }

    /// The deepest, frontmost visible widget under `point` in the subtree
    /// at `root`.
    ///
    /// Children are searched in reverse insertion order before their parent,
    /// so later siblings win where they overlap. Invisible widgets and their
    /// descendants are never returned.
    pub fn find_widget_at(&self, root: WidgetId, point: Point) -> Option<WidgetId> {
        let origin = match self.parent(root) {
            Some(parent) => self.absolute_position(parent).ok()?,
            None => Point::ZERO,
        };
        self.hit_test(root, origin, point)
    }

    fn hit_test(&self, id: WidgetId, parent_origin: Point, point: Point) -> Option<WidgetId> {
        let slot = self.slots.get(id)?;
        if !slot.widget.is_visible() {
            return None;
        }
        let rect = slot
            .widget
            .geometry()
            .offset(parent_origin.x, parent_origin.y);
        self.children(id)
            .iter()
            .rev()
            .find_map(|&child| self.hit_test(child, rect.origin, point))
            .or_else(|| rect.contains(point).then_some(id))
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Install a layout on a container and apply it once.
    pub fn set_layout(&mut self, id: WidgetId, layout: impl Layout + 'static) -> Result<()> {
        let slot = self.slot_mut(id)?;
        slot.widget
            .container_mut()
            .ok_or(Error::NotAContainer(id))?
            .set_layout(Box::new(layout));
        self.apply_layout(id)
    }

    /// Turn auto-resize on or off for a container.
    pub fn set_auto_resize(&mut self, id: WidgetId, auto_resize: bool) -> Result<()> {
        self.slot_mut(id)?
            .widget
            .container_mut()
            .ok_or(Error::NotAContainer(id))?
            .set_auto_resize(auto_resize);
        Ok(())
    }

    /// Re-run a container's layout over its current children.
    ///
    /// Does nothing when no layout is installed.
    pub fn apply_layout(&mut self, id: WidgetId) -> Result<()> {
        let children = self.objects.children(id)?.to_vec();
        let sizes = children
            .iter()
            .map(|&child| self.slot(child).map(|slot| slot.widget.size()))
            .collect::<Result<Vec<_>>>()?;

        let slot = self.slot(id)?;
        let container = slot.widget.container().ok_or(Error::NotAContainer(id))?;
        let Some((positions, fitted)) = container.compute(slot.widget.size(), &sizes) else {
            return Ok(());
        };

        for (&child, pos) in children.iter().zip(positions) {
            self.base_mut(child)?.set_position(pos.x, pos.y);
        }
        if let Some(size) = fitted {
            self.base_mut(id)?.resize_to(size);
        }
        tracing::debug!(target: targets::LAYOUT, ?id, children = children.len(), "applied layout");
        Ok(())
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the subtree at `root`, parents before children.
    ///
    /// Invisible widgets are skipped together with their descendants.
    /// Painting does not change the tree, so painting twice draws the same
    /// commands.
    pub fn paint(&self, root: WidgetId, renderer: &mut dyn Renderer, pointer: PointerState) -> Result<()> {
        let origin = match self.parent(root) {
            Some(parent) => self.absolute_position(parent)?,
            None => Point::ZERO,
        };
        self.slot(root)?;
        self.paint_recursive(root, origin, renderer, pointer, &self.style);
        Ok(())
    }

    fn paint_recursive(
        &self,
        id: WidgetId,
        parent_origin: Point,
        renderer: &mut dyn Renderer,
        pointer: PointerState,
        inherited: &Style,
    ) {
        let Some(slot) = self.slots.get(id) else {
            return;
        };
        let widget = &*slot.widget;
        if !widget.is_visible() {
            return;
        }
        let base = widget.widget_base();
        let rect = widget.geometry().offset(parent_origin.x, parent_origin.y);
        let style = base.style().unwrap_or(inherited);

        {
            let mut ctx = PaintContext::new(&mut *renderer, rect, style)
                .with_metrics(self.metrics.as_deref())
                .with_pointer(pointer)
                .with_focus(base.has_focus());
            widget.paint(&mut ctx);
        }

        for &child in self.children(id) {
            self.paint_recursive(child, rect.origin, renderer, pointer, style);
        }
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}
