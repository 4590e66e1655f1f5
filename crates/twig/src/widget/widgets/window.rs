//! Window widget: the root of a widget tree shown on a backend surface.
//!
//! A window is a plain widget as far as the tree is concerned; the
//! [`Application`](crate::Application) gives it a backend surface when it
//! is first shown and tracks its running state.
//!
//! # Example
//!
//! ```
//! use twig::prelude::*;
//!
//! let mut app = Application::new(RecordingBackend::new());
//! let window = app.create_window(Window::new("Login", 400.0, 300.0));
//! app.show(window).unwrap();
//! assert!(app.is_window_running(window));
//! ```

use twig_core::config::WindowDefaults;
use twig_render::SurfaceId;

use crate::widget::layout::ContainerLayout;
use crate::widget::{PaintContext, Widget, WidgetBase};

/// A top-level window.
#[derive(Debug)]
pub struct Window {
    base: WidgetBase,
    layout: ContainerLayout,
    title: String,
    surface: Option<SurfaceId>,
    running: bool,
}

impl Window {
    /// Create a window with the given title and size.
    pub fn new(title: impl Into<String>, width: f32, height: f32) -> Self {
        let mut base = WidgetBase::new();
        base.set_size(width, height);
        Self {
            base,
            layout: ContainerLayout::new(),
            title: title.into(),
            surface: None,
            running: false,
        }
    }

    /// Create a window from configured defaults.
    pub fn from_defaults(defaults: &WindowDefaults) -> Self {
        Self::new(defaults.title.clone(), defaults.width, defaults.height)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// The backend surface, once the window has been shown.
    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    pub(crate) fn set_surface(&mut self, surface: Option<SurfaceId>) {
        self.surface = surface;
    }

    /// Whether the window is shown and not closed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

impl Widget for Window {
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

    /// The frame is cleared with the style background before the tree is
    /// painted; the window adds nothing on top.
    fn paint(&self, _ctx: &mut PaintContext<'_>) {}
}
