//! Twig - a small retained-mode widget toolkit.
//!
//! Applications build a tree of widgets (buttons, labels, text inputs,
//! containers) rooted in windows, attach event handlers, and run a blocking
//! event loop. Events bubble from the widget they originate on up to the
//! window; layouts position the children of containers; rendering goes
//! through a pluggable [`Backend`](render::Backend).
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use twig::prelude::*;
//!
//! # fn main() -> twig::Result<()> {
//! let mut app = Application::new(RecordingBackend::new());
//! let window = app.create_window(Window::new("Login", 300.0, 200.0));
//!
//! let tree = app.tree_mut();
//! let form = tree.add(window, Container::new().with_size(300.0, 200.0))?;
//! let user = tree.add(form, TextInput::new().with_id("user"))?;
//! let submit = tree.add(form, Button::new("Sign in").with_id("submit"))?;
//! tree.set_layout(form, VerticalLayout::new(5.0, 10.0))?;
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! tree.on(window, EventKind::Click, move |_, _| counter.set(counter.get() + 1))?;
//!
//! tree.set_text(user, "ada")?;
//! tree.click(submit)?;
//! assert_eq!(clicks.get(), 1);
//!
//! app.show(window)?;
//! # Ok(())
//! # }
//! ```

mod application;
mod error;
pub mod prelude;
pub mod widget;
pub mod window;

pub use application::{Application, LoopHandle};
pub use error::{Error, Result};

pub use twig_core::*;

/// Rendering backends and geometry types.
pub mod render {
    pub use twig_render::*;
}
