//! Event values delivered to widget handlers.
//!
//! An [`Event`] describes one occurrence: what happened ([`EventKind`]), which
//! widget it originated from, and a string-keyed payload. Events are built
//! once, then handed by reference to every handler along the bubbling path;
//! nothing can modify them after construction.

use std::collections::HashMap;
use std::fmt;

use crate::object::WidgetId;

/// Payload key carrying text (`TextChanged`).
pub const DATA_TEXT: &str = "text";
/// Payload key carrying a key name (`KeyPress`).
pub const DATA_KEY: &str = "key";
/// Payload key carrying an x coordinate.
pub const DATA_X: &str = "x";
/// Payload key carrying a y coordinate.
pub const DATA_Y: &str = "y";
/// Payload key carrying a numeric value (`ValueChanged`).
pub const DATA_VALUE: &str = "value";
/// Payload key carrying a checked state (`Click` on check boxes).
pub const DATA_CHECKED: &str = "checked";
/// Payload key carrying a width (`WindowResize`).
pub const DATA_WIDTH: &str = "width";
/// Payload key carrying a height (`WindowResize`).
pub const DATA_HEIGHT: &str = "height";

/// The kind of an event. Handlers are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A button or check box was activated.
    Click,
    /// Text of an input changed (programmatically or by typing).
    TextChanged,
    /// A key was pressed while a widget had focus.
    KeyPress,
    /// The pointer moved over a widget.
    MouseMove,
    /// The pointer entered a widget.
    MouseEnter,
    /// The pointer left a widget.
    MouseLeave,
    /// A widget gained keyboard focus.
    FocusGained,
    /// A widget lost keyboard focus.
    FocusLost,
    /// A window was closed. Never bubbles.
    WindowClose,
    /// A window was resized.
    WindowResize,
    /// A ranged value (slider) changed.
    ValueChanged,
}

impl EventKind {
    /// Whether events of this kind propagate to the parent after the
    /// originating widget's handlers ran.
    #[inline]
    pub fn bubbles(self) -> bool {
        !matches!(self, Self::WindowClose)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One occurrence, delivered to handlers by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: EventKind,
    source: WidgetId,
    data: HashMap<String, String>,
}

impl Event {
    /// Create an event with an empty payload.
    pub fn new(kind: EventKind, source: WidgetId) -> Self {
        Self {
            kind,
            source,
            data: HashMap::new(),
        }
    }

    /// Add a payload entry (builder pattern, before the event is emitted).
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Create an event from a prepared payload.
    pub fn with_payload(kind: EventKind, source: WidgetId, data: HashMap<String, String>) -> Self {
        Self { kind, source, data }
    }

    /// The event kind.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The widget the event originated from.
    #[inline]
    pub fn source(&self) -> WidgetId {
        self.source
    }

    /// The full payload.
    #[inline]
    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    /// Look up one payload entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// The `"text"` payload entry, or an empty string.
    pub fn text(&self) -> &str {
        self.get(DATA_TEXT).unwrap_or_default()
    }

    /// The `"key"` payload entry, or an empty string.
    pub fn key(&self) -> &str {
        self.get(DATA_KEY).unwrap_or_default()
    }

    /// The `"x"` payload entry as an integer, or 0.
    pub fn x(&self) -> i32 {
        self.int(DATA_X)
    }

    /// The `"y"` payload entry as an integer, or 0.
    pub fn y(&self) -> i32 {
        self.int(DATA_Y)
    }

    fn int(&self, key: &str) -> i32 {
        self.get(key).and_then(|v| v.parse().ok()).unwrap_or(0)
    }
}

static_assertions::assert_impl_all!(Event: Clone, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectTree;

    fn source() -> WidgetId {
        ObjectTree::new().register("Button", "")
    }

    #[test]
    fn test_empty_payload_accessors() {
        let event = Event::new(EventKind::Click, source());
        assert!(event.data().is_empty());
        assert_eq!(event.text(), "");
        assert_eq!(event.key(), "");
        assert_eq!(event.x(), 0);
    }

    #[test]
    fn test_payload_accessors() {
        let event = Event::new(EventKind::MouseMove, source())
            .with_data(DATA_X, "12")
            .with_data(DATA_Y, "not a number")
            .with_data(DATA_TEXT, "hi");
        assert_eq!(event.x(), 12);
        assert_eq!(event.y(), 0);
        assert_eq!(event.text(), "hi");
        assert_eq!(event.get("missing"), None);
    }

    #[test]
    fn test_only_window_close_stops_bubbling() {
        assert!(!EventKind::WindowClose.bubbles());
        assert!(EventKind::Click.bubbles());
        assert!(EventKind::WindowResize.bubbles());
    }
}
