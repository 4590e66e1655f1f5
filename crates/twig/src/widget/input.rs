//! Input delivered to individual widgets.
//!
//! The application translates backend events into [`InputEvent`]s and hands
//! them to the widget they target through
//! [`Widget::handle_input`](super::Widget::handle_input). Pointer positions
//! are already converted to the widget's local coordinates.

use twig_render::{Key, Point};

/// Input routed to a single widget.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The left button was pressed over the widget.
    PointerPress { local: Point },
    /// The pointer moved while the left button was held on the widget.
    PointerDrag { local: Point },
    /// The left button was released over the widget.
    PointerRelease { local: Point },
    /// Committed character input for the focused widget.
    Text(String),
    /// A non-character key for the focused widget.
    Key(Key),
}
