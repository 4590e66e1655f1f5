//! Drawing and backend capability traits.
//!
//! [`Renderer`] is the drawing interface widgets paint through. [`Backend`]
//! extends it with everything else the toolkit needs from a windowing system:
//! surfaces, text metrics, input polling and process-wide teardown.

use std::rc::Rc;

use crate::error::RenderResult;
use crate::input::{BackendEvent, SurfaceId};
use crate::metrics::TextMetrics;
use crate::types::{Color, Point, Rect, Size, Stroke};

/// Statistics from a frame render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    /// Number of draw calls submitted.
    pub draw_calls: u32,
}

/// The 2D drawing interface.
///
/// # Frame Lifecycle
///
/// ```ignore
/// renderer.begin_frame(surface, Color::WHITE, Size::new(800.0, 600.0));
/// renderer.fill_rect(Rect::new(10.0, 10.0, 100.0, 30.0), Color::LIGHT_GRAY);
/// renderer.draw_text("OK", Point::new(20.0, 15.0), Color::BLACK);
/// let stats = renderer.end_frame()?;
/// ```
///
/// Coordinates are absolute device pixels on the current surface.
pub trait Renderer {
    /// Begin a new frame on `surface`, cleared to `clear_color`.
    fn begin_frame(&mut self, surface: SurfaceId, clear_color: Color, viewport_size: Size);

    /// End the current frame and present it.
    fn end_frame(&mut self) -> RenderResult<FrameStats>;

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a single line of text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color);
}

/// A complete windowing/graphics backend.
///
/// The toolkit core behaves identically against any implementation.
pub trait Backend: Renderer {
    /// Create a surface for a window.
    fn create_surface(&mut self, title: &str, size: Size) -> RenderResult<SurfaceId>;

    /// Release a surface. Unknown ids are ignored.
    fn destroy_surface(&mut self, surface: SurfaceId);

    /// Change the title of a surface.
    fn set_surface_title(&mut self, surface: SurfaceId, title: &str) -> RenderResult<()>;

    /// Drain every pending event, in arrival order.
    fn poll_events(&mut self) -> Vec<BackendEvent>;

    /// Enable or disable platform text input (IME) for a surface.
    fn set_text_input(&mut self, _surface: SurfaceId, _enabled: bool) {}

    /// The text measurement capability of this backend.
    fn text_metrics(&self) -> Rc<dyn TextMetrics>;

    /// Tear down process-wide state. Called once the last window is gone.
    fn shutdown(&mut self);
}
