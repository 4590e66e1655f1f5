//! Registry of live windows.
//!
//! The registry records which windows exist, in creation order, and which
//! backend surface belongs to which window so backend input can be routed.

use std::collections::HashMap;

use twig_core::WidgetId;
use twig_render::SurfaceId;

/// Live windows of one application.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<WidgetId>,
    surfaces: HashMap<SurfaceId, WidgetId>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new window. Registering twice has no effect.
    pub fn register(&mut self, window: WidgetId) {
        if !self.windows.contains(&window) {
            self.windows.push(window);
        }
    }

    /// Forget a window and its surface.
    ///
    /// Returns `false` if the window was not registered.
    pub fn unregister(&mut self, window: WidgetId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|&id| id != window);
        self.surfaces.retain(|_, &mut id| id != window);
        self.windows.len() != before
    }

    /// Associate a backend surface with a window.
    pub fn bind_surface(&mut self, surface: SurfaceId, window: WidgetId) {
        self.surfaces.insert(surface, window);
    }

    /// The window a surface belongs to.
    pub fn window_for_surface(&self, surface: SurfaceId) -> Option<WidgetId> {
        self.surfaces.get(&surface).copied()
    }

    /// Check if a window is registered.
    pub fn contains(&self, window: WidgetId) -> bool {
        self.windows.contains(&window)
    }

    /// Registered windows in creation order.
    pub fn ids(&self) -> &[WidgetId] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
