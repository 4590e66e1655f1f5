//! Rendering backends for Twig.
//!
//! This crate defines what the widget toolkit needs from a windowing and
//! graphics system, and ships two backends that need no native libraries.
//!
//! - [`Renderer`]: rectangle and text drawing inside a frame
//! - [`TextMetrics`]: text measurement for auto-sizing widgets
//! - [`Backend`]: surfaces, input polling and process-wide teardown
//! - [`ConsoleBackend`]: prints a textual description of every render call
//! - [`RecordingBackend`]: records frames as data and replays scripted input
//!
//! # Using a Backend
//!
//! ```
//! use twig_render::{Backend, Color, Point, RecordingBackend, Rect, Renderer, Size};
//!
//! let mut backend = RecordingBackend::new();
//! let surface = backend.create_surface("Demo", Size::new(320.0, 200.0)).unwrap();
//!
//! backend.begin_frame(surface, Color::WHITE, Size::new(320.0, 200.0));
//! backend.fill_rect(Rect::new(10.0, 10.0, 100.0, 30.0), Color::LIGHT_GRAY);
//! backend.draw_text("OK", Point::new(20.0, 17.0), Color::BLACK);
//! backend.end_frame().unwrap();
//!
//! assert_eq!(backend.last_frame(surface).unwrap().texts(), vec!["OK"]);
//! ```

mod console;
mod error;
mod input;
mod metrics;
mod recording;
mod renderer;
mod types;

pub use console::ConsoleBackend;
pub use error::{RenderError, RenderResult};
pub use input::{BackendEvent, Key, MouseButton, SurfaceId};
pub use metrics::{MonospaceMetrics, TextMetrics};
pub use recording::{DrawCommand, Frame, RecordingBackend, SurfaceRecord};
pub use renderer::{Backend, FrameStats, Renderer};
pub use types::{Color, Point, Rect, Size, Stroke};
