//! Core systems for Twig.
//!
//! This crate provides the foundational pieces of the Twig widget toolkit:
//!
//! - **Object Tree**: Arena-backed parent/child structure with stable ids,
//!   string-id lookup and cascade destruction
//! - **Events**: Immutable event values with a string-keyed payload
//! - **Configuration**: Toolkit tunables loaded from TOML
//! - **Logging**: Tracing targets and tree debug formatting
//!
//! Everything here is independent of rendering; the `twig` crate builds the
//! widget layer on top.
//!
//! # Example
//!
//! ```
//! use twig_core::{Event, EventKind, ObjectTree};
//!
//! let mut tree = ObjectTree::new();
//! let window = tree.register("Window", "main");
//! let button = tree.register("Button", "submit");
//! tree.add_child(window, button).unwrap();
//!
//! assert_eq!(tree.find(window, "submit").unwrap(), Some(button));
//!
//! let event = Event::new(EventKind::Click, button);
//! assert!(event.kind().bubbles());
//! ```

pub mod config;
mod error;
pub mod event;
pub mod logging;
pub mod object;

pub use config::ToolkitConfig;
pub use error::ConfigError;
pub use event::{Event, EventKind};
pub use logging::{ObjectTreeDebug, TreeFormatOptions, TreeStyle};
pub use object::{ObjectError, ObjectResult, ObjectTree, WidgetId};
