//! Raw input reported by a backend.
//!
//! Backends translate whatever their platform delivers into [`BackendEvent`]s.
//! Window-scoped events carry the [`SurfaceId`] of the surface they happened
//! on, so the application can route them to the right window.

use std::fmt;

/// Identifier of a backend surface (one per shown window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Non-character keys the toolkit reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Delete,
}

impl Key {
    /// Lower-case key name as delivered in `KeyPress` payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Backspace => "backspace",
            Self::Enter => "enter",
            Self::Escape => "escape",
            Self::Tab => "tab",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
            Self::Home => "home",
            Self::End => "end",
            Self::Delete => "delete",
        }
    }
}

/// An input or lifecycle event reported by a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// Process-wide quit request.
    Quit,
    /// The user asked to close a surface.
    CloseRequested { surface: SurfaceId },
    /// A surface was resized.
    Resized {
        surface: SurfaceId,
        width: f32,
        height: f32,
    },
    /// The pointer moved.
    PointerMoved { surface: SurfaceId, x: f32, y: f32 },
    /// A pointer button was pressed.
    PointerDown {
        surface: SurfaceId,
        button: MouseButton,
        x: f32,
        y: f32,
    },
    /// A pointer button was released.
    PointerUp {
        surface: SurfaceId,
        button: MouseButton,
        x: f32,
        y: f32,
    },
    /// Committed character input.
    Text { surface: SurfaceId, text: String },
    /// A non-character key was pressed.
    Key { surface: SurfaceId, key: Key },
}

impl BackendEvent {
    /// The surface the event belongs to, if it is window-scoped.
    pub fn surface(&self) -> Option<SurfaceId> {
        match self {
            Self::Quit => None,
            Self::CloseRequested { surface }
            | Self::Resized { surface, .. }
            | Self::PointerMoved { surface, .. }
            | Self::PointerDown { surface, .. }
            | Self::PointerUp { surface, .. }
            | Self::Text { surface, .. }
            | Self::Key { surface, .. } => Some(*surface),
        }
    }
}

static_assertions::assert_impl_all!(BackendEvent: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_routing() {
        assert_eq!(BackendEvent::Quit.surface(), None);
        let event = BackendEvent::Key {
            surface: SurfaceId(3),
            key: Key::Enter,
        };
        assert_eq!(event.surface(), Some(SurfaceId(3)));
        assert_eq!(Key::Enter.name(), "enter");
    }
}
