//! The application context and event loop.
//!
//! An [`Application`] owns a backend, the widget tree and the registry of
//! live windows. It shows windows on backend surfaces, renders them, and
//! runs the blocking loop that translates backend input into widget events.
//!
//! # Example
//!
//! ```
//! use twig::prelude::*;
//!
//! # fn main() -> twig::Result<()> {
//! let mut backend = RecordingBackend::new();
//! backend.push_event(BackendEvent::Quit);
//!
//! let mut app = Application::new(backend);
//! let window = app.create_window(Window::new("Hello", 320.0, 200.0));
//! app.tree_mut().add(window, Label::new("Hello, world").with_position(10.0, 10.0))?;
//! app.show(window)?;
//!
//! // Returns once the queued Quit is processed.
//! app.run_event_loop()?;
//! assert!(!app.is_running());
//! # Ok(())
//! # }
//! ```

use std::cell::Cell;
use std::rc::Rc;

use twig_core::config::ToolkitConfig;
use twig_core::event::{DATA_HEIGHT, DATA_WIDTH, DATA_X, DATA_Y};
use twig_core::logging::{span_names, targets};
use twig_core::{Event, EventKind, ObjectError, WidgetId};
use twig_render::{Backend, BackendEvent, MouseButton, Point, SurfaceId};

use crate::error::{Error, Result};
use crate::widget::widgets::Window;
use crate::widget::{InputEvent, PointerState, Widget, WidgetTree};
use crate::window::WindowRegistry;

/// A cloneable handle that can stop a running event loop.
///
/// Handlers capture a handle to end the loop from inside an event:
///
/// ```
/// use twig::prelude::*;
///
/// let mut app = Application::new(RecordingBackend::new());
/// let window = app.create_window(Window::new("Main", 200.0, 100.0));
/// let handle = app.loop_handle();
/// app.tree_mut()
///     .on(window, EventKind::WindowClose, move |_, _| handle.stop())
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Ask the loop to stop after the current iteration.
    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Pointer and keyboard state tracked across backend events.
#[derive(Debug, Default)]
struct InputState {
    focused: Option<WidgetId>,
    hovered: Option<WidgetId>,
    pointer: Option<Point>,
    pointer_window: Option<WidgetId>,
    pressed: bool,
    press_target: Option<WidgetId>,
}

impl InputState {
    /// Drop every reference to destroyed widgets.
    fn forget(&mut self, removed: &[WidgetId]) {
        let gone = |id: &mut Option<WidgetId>| {
            if id.is_some_and(|w| removed.contains(&w)) {
                *id = None;
            }
        };
        gone(&mut self.focused);
        gone(&mut self.hovered);
        gone(&mut self.press_target);
        if self.pointer_window.is_some_and(|w| removed.contains(&w)) {
            self.pointer_window = None;
            self.pointer = None;
            self.pressed = false;
        }
    }
}

/// The application context: backend, widget tree, windows and loop state.
pub struct Application<B: Backend> {
    backend: B,
    tree: WidgetTree,
    windows: WindowRegistry,
    config: ToolkitConfig,
    running: Rc<Cell<bool>>,
    input: InputState,
}

impl<B: Backend> Application<B> {
    /// Create an application with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::build(backend, ToolkitConfig::default())
    }

    /// Create an application with a validated configuration.
    pub fn with_config(backend: B, config: ToolkitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(backend, config))
    }

    fn build(backend: B, config: ToolkitConfig) -> Self {
        let mut tree = WidgetTree::with_metrics(backend.text_metrics());
        tree.set_text_padding(config.text_padding.clone());
        Self {
            backend,
            tree,
            windows: WindowRegistry::new(),
            config,
            running: Rc::new(Cell::new(false)),
            input: InputState::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// A handle for stopping the loop from handlers.
    pub fn loop_handle(&self) -> LoopHandle {
        LoopHandle {
            running: self.running.clone(),
        }
    }

    /// Live windows in creation order.
    pub fn windows(&self) -> &[WidgetId] {
        self.windows.ids()
    }

    /// The widget with keyboard focus.
    pub fn focused(&self) -> Option<WidgetId> {
        self.input.focused
    }

    /// The widget under the pointer.
    pub fn hovered(&self) -> Option<WidgetId> {
        self.input.hovered
    }

    /// Whether the event loop is running.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Whether a window is shown and not closed.
    pub fn is_window_running(&self, window: WidgetId) -> bool {
        self.tree
            .get::<Window>(window)
            .is_some_and(Window::is_running)
    }

    fn window(&self, id: WidgetId) -> Result<&Window> {
        if !self.tree.contains(id) {
            return Err(ObjectError::InvalidObjectId.into());
        }
        self.tree.get::<Window>(id).ok_or(Error::NotAWindow(id))
    }

    // =========================================================================
    // Window Lifecycle
    // =========================================================================

    /// Add a window to the tree and register it. The window starts stopped
    /// and without a surface.
    pub fn create_window(&mut self, window: Window) -> WidgetId {
        let id = self.tree.add_root(window);
        self.windows.register(id);
        tracing::debug!(target: targets::WINDOW, ?id, "window created");
        id
    }

    /// Show a window: create its surface on first call, mark it running and
    /// visible, and render it once.
    pub fn show(&mut self, id: WidgetId) -> Result<()> {
        let window = self.window(id)?;
        if window.surface().is_none() {
            let title = window.title().to_string();
            let size = window.size();
            let surface = self.backend.create_surface(&title, size).inspect_err(|err| {
                tracing::warn!(target: targets::WINDOW, ?id, %err, "surface creation failed");
            })?;
            self.windows.bind_surface(surface, id);
            self.tree
                .update::<Window, _>(id, |w| w.set_surface(Some(surface)))?;
        }
        self.tree.update::<Window, _>(id, |w| w.set_running(true))?;
        self.tree.base_mut(id)?.set_visible(true);
        tracing::debug!(target: targets::WINDOW, ?id, "window shown");
        self.render(id)
    }

    /// Stop a window and emit `WindowClose` on it. The event does not
    /// bubble. The surface stays alive until the window is destroyed.
    pub fn close(&mut self, id: WidgetId) -> Result<()> {
        self.window(id)?;
        self.tree.update::<Window, _>(id, |w| w.set_running(false))?;
        tracing::debug!(target: targets::WINDOW, ?id, "window closed");
        self.tree.emit(id, &Event::new(EventKind::WindowClose, id));
        Ok(())
    }

    /// Stop a window and make it invisible, keeping its surface.
    pub fn hide(&mut self, id: WidgetId) -> Result<()> {
        self.window(id)?;
        self.tree.update::<Window, _>(id, |w| w.set_running(false))?;
        self.tree.base_mut(id)?.set_visible(false);
        tracing::debug!(target: targets::WINDOW, ?id, "window hidden");
        Ok(())
    }

    /// Change a window's title, forwarding it to the surface if one exists.
    pub fn set_title(&mut self, id: WidgetId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        let surface = self.window(id)?.surface();
        if let Some(surface) = surface {
            self.backend.set_surface_title(surface, &title)?;
        }
        self.tree.update::<Window, _>(id, |w| w.set_title(title))?;
        Ok(())
    }

    /// Render a window: clear with the style background, paint the tree,
    /// present. Does nothing for hidden windows or windows never shown.
    pub fn render(&mut self, id: WidgetId) -> Result<()> {
        let window = self.window(id)?;
        let Some(surface) = window.surface() else {
            return Ok(());
        };
        if !window.is_visible() {
            return Ok(());
        }
        let size = window.size();
        let _span = tracing::trace_span!(target: targets::WINDOW, span_names::RENDER, ?id).entered();

        let pointer = PointerState {
            position: self
                .input
                .pointer
                .filter(|_| self.input.pointer_window == Some(id)),
            pressed: self.input.pressed,
        };
        self.backend
            .begin_frame(surface, self.tree.style().background, size);
        let painted = self.tree.paint(id, &mut self.backend, pointer);
        let stats = self.backend.end_frame()?;
        painted?;
        tracing::trace!(target: targets::WINDOW, ?id, draw_calls = stats.draw_calls, "frame presented");
        Ok(())
    }

    /// Destroy a window with its widgets and surface.
    ///
    /// Destroying the last window shuts the backend down.
    pub fn destroy_window(&mut self, id: WidgetId) -> Result<()> {
        if let Some(surface) = self.window(id)?.surface() {
            self.backend.destroy_surface(surface);
        }
        self.windows.unregister(id);
        let removed = self.tree.destroy(id)?;
        self.input.forget(&removed);
        tracing::debug!(target: targets::WINDOW, ?id, widgets = removed.len(), "window destroyed");

        if self.windows.is_empty() {
            tracing::info!(target: targets::WINDOW, "last window destroyed, shutting down backend");
            self.backend.shutdown();
        }
        Ok(())
    }

    /// The deepest, frontmost visible widget under `point` in the subtree at
    /// `root`. See [`WidgetTree::find_widget_at`].
    pub fn find_widget_at(&self, root: WidgetId, point: Point) -> Option<WidgetId> {
        self.tree.find_widget_at(root, point)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Move keyboard focus, emitting `FocusLost` and `FocusGained`.
    ///
    /// `None` clears focus. Focusing a widget that does not accept text
    /// input clears focus as well.
    pub fn set_focus(&mut self, target: Option<WidgetId>) -> Result<()> {
        let target = match target {
            Some(id) => {
                let widget = self.tree.widget(id).ok_or(ObjectError::InvalidObjectId)?;
                widget.accepts_text_input().then_some(id)
            }
            None => None,
        };
        if target == self.input.focused {
            return Ok(());
        }

        if let Some(old) = self.input.focused.take() {
            if self.tree.contains(old) {
                self.tree.set_focused(old, false);
                self.tree.emit(old, &Event::new(EventKind::FocusLost, old));
                self.toggle_text_input(old, false);
            }
        }
        if let Some(new) = target {
            self.input.focused = Some(new);
            self.tree.set_focused(new, true);
            self.tree.emit(new, &Event::new(EventKind::FocusGained, new));
            self.toggle_text_input(new, true);
        }
        tracing::trace!(target: targets::EVENT, focused = ?self.input.focused, "focus changed");
        Ok(())
    }

    fn toggle_text_input(&mut self, widget: WidgetId, enabled: bool) {
        let surface = self
            .tree
            .object_tree()
            .root_of(widget)
            .ok()
            .and_then(|root| self.tree.get::<Window>(root))
            .and_then(Window::surface);
        if let Some(surface) = surface {
            self.backend.set_text_input(surface, enabled);
        }
    }

    // =========================================================================
    // Event Loop
    // =========================================================================

    /// Run the blocking event loop until a `Quit` event arrives or the loop
    /// is stopped through [`stop_event_loop`](Self::stop_event_loop) or a
    /// [`LoopHandle`].
    ///
    /// Each iteration processes every pending backend event, then sleeps
    /// for the configured frame interval.
    pub fn run_event_loop(&mut self) -> Result<()> {
        let _span = tracing::debug_span!(target: targets::EVENT_LOOP, span_names::EVENT_LOOP).entered();
        tracing::info!(target: targets::EVENT_LOOP, windows = self.windows.len(), "starting event loop");
        self.running.set(true);
        let interval = self.config.frame_interval();

        let result = loop {
            if !self.running.get() {
                break Ok(());
            }
            if let Err(err) = self.process_events() {
                tracing::warn!(target: targets::EVENT_LOOP, %err, "event processing failed");
                break Err(err);
            }
            if self.running.get() && !interval.is_zero() {
                std::thread::sleep(interval);
            }
        };

        self.stop_event_loop();
        tracing::info!(target: targets::EVENT_LOOP, "event loop stopped");
        result
    }

    /// Stop the loop and every window. Takes effect after the current
    /// iteration.
    pub fn stop_event_loop(&mut self) {
        self.running.set(false);
        for &id in self.windows.ids() {
            if let Err(err) = self.tree.update::<Window, _>(id, |w| w.set_running(false)) {
                tracing::warn!(target: targets::WINDOW, ?id, %err, "failed to stop window");
            }
        }
    }

    /// Poll the backend once and process every pending event in order.
    ///
    /// A `Quit` event stops the loop and discards the events after it.
    /// Returns the number of events processed.
    pub fn process_events(&mut self) -> Result<usize> {
        let events = self.backend.poll_events();
        let mut processed = 0;
        for event in events {
            processed += 1;
            if matches!(event, BackendEvent::Quit) {
                tracing::info!(target: targets::EVENT_LOOP, "quit requested");
                self.running.set(false);
                break;
            }
            self.dispatch(event)?;
        }
        Ok(processed)
    }

    fn dispatch(&mut self, event: BackendEvent) -> Result<()> {
        let Some(surface) = event.surface() else {
            return Ok(());
        };
        let Some(window) = self.window_for(surface) else {
            tracing::trace!(target: targets::EVENT_LOOP, %surface, "event for unknown surface");
            return Ok(());
        };

        match event {
            BackendEvent::Quit => Ok(()),
            BackendEvent::CloseRequested { .. } => self.close(window),
            BackendEvent::Resized { width, height, .. } => {
                self.tree.base_mut(window)?.set_size(width, height);
                let resized = Event::new(EventKind::WindowResize, window)
                    .with_data(DATA_WIDTH, (width as i32).to_string())
                    .with_data(DATA_HEIGHT, (height as i32).to_string());
                self.tree.emit(window, &resized);
                self.render(window)
            }
            BackendEvent::PointerMoved { x, y, .. } => self.pointer_moved(window, Point::new(x, y)),
            BackendEvent::PointerDown {
                button: MouseButton::Left,
                x,
                y,
                ..
            } => self.pointer_down(window, Point::new(x, y)),
            BackendEvent::PointerUp {
                button: MouseButton::Left,
                x,
                y,
                ..
            } => self.pointer_up(window, Point::new(x, y)),
            BackendEvent::PointerDown { .. } | BackendEvent::PointerUp { .. } => Ok(()),
            BackendEvent::Text { text, .. } => self.keyboard_input(window, InputEvent::Text(text)),
            BackendEvent::Key { key, .. } => self.keyboard_input(window, InputEvent::Key(key)),
        }
    }

    fn window_for(&self, surface: SurfaceId) -> Option<WidgetId> {
        self.windows
            .window_for_surface(surface)
            .filter(|&id| self.tree.contains(id))
    }

    fn pointer_moved(&mut self, window: WidgetId, point: Point) -> Result<()> {
        self.input.pointer = Some(point);
        self.input.pointer_window = Some(window);
        let hit = self.tree.find_widget_at(window, point);

        if hit != self.input.hovered {
            if let Some(old) = self.input.hovered.filter(|&w| self.tree.contains(w)) {
                self.tree.emit(old, &pointer_event(EventKind::MouseLeave, old, point));
            }
            if let Some(new) = hit {
                self.tree.emit(new, &pointer_event(EventKind::MouseEnter, new, point));
            }
            self.input.hovered = hit;
        }
        if let Some(target) = hit {
            self.tree.emit(target, &pointer_event(EventKind::MouseMove, target, point));
        }

        if self.input.pressed {
            if let Some(target) = self.input.press_target.filter(|&w| self.tree.contains(w)) {
                let local = self.tree.to_local(target, point)?;
                self.tree
                    .deliver_input(target, &InputEvent::PointerDrag { local })?;
            }
        }
        self.render(window)
    }

    fn pointer_down(&mut self, window: WidgetId, point: Point) -> Result<()> {
        self.input.pressed = true;
        self.input.pointer = Some(point);
        self.input.pointer_window = Some(window);
        let hit = self.tree.find_widget_at(window, point);
        self.input.press_target = hit;

        self.set_focus(hit)?;
        if let Some(target) = hit {
            let local = self.tree.to_local(target, point)?;
            self.tree
                .deliver_input(target, &InputEvent::PointerPress { local })?;
        }
        self.render(window)
    }

    fn pointer_up(&mut self, window: WidgetId, point: Point) -> Result<()> {
        self.input.pointer = Some(point);
        self.input.pointer_window = Some(window);
        if !std::mem::take(&mut self.input.pressed) {
            return Ok(());
        }
        self.input.press_target = None;

        if let Some(target) = self.tree.find_widget_at(window, point) {
            let local = self.tree.to_local(target, point)?;
            self.tree
                .deliver_input(target, &InputEvent::PointerRelease { local })?;
        }
        self.render(window)
    }

    fn keyboard_input(&mut self, window: WidgetId, input: InputEvent) -> Result<()> {
        let Some(focused) = self.input.focused.filter(|&w| self.tree.contains(w)) else {
            return Ok(());
        };
        self.tree.deliver_input(focused, &input)?;
        self.render(window)
    }
}

fn pointer_event(kind: EventKind, target: WidgetId, point: Point) -> Event {
    Event::new(kind, target)
        .with_data(DATA_X, (point.x as i32).to_string())
        .with_data(DATA_Y, (point.y as i32).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use twig_render::RecordingBackend;

    #[test]
    fn test_loop_handle_shares_flag() {
        let app = Application::new(RecordingBackend::new());
        let handle = app.loop_handle();
        assert!(!handle.is_running());
        app.running.set(true);
        assert!(handle.is_running());
        handle.stop();
        assert!(!app.is_running());
    }

    #[test]
    fn test_show_requires_a_window() {
        let mut app = Application::new(RecordingBackend::new());
        let window = app.create_window(Window::new("w", 100.0, 100.0));
        let label = app
            .tree_mut()
            .add(window, crate::widget::widgets::Label::new("x"))
            .unwrap();
        assert!(matches!(app.show(label), Err(Error::NotAWindow(id)) if id == label));
    }

    #[test]
    fn test_input_state_forgets_destroyed_widgets() {
        let mut objects = twig_core::ObjectTree::new();
        let a = objects.register("W", "");
        let mut state = InputState {
            focused: Some(a),
            hovered: Some(a),
            pointer: Some(Point::ZERO),
            pointer_window: Some(a),
            pressed: true,
            press_target: Some(a),
        };
        state.forget(&[a]);
        assert!(state.focused.is_none() && state.hovered.is_none());
        assert!(state.pointer.is_none() && !state.pressed);
    }
}
