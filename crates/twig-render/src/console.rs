//! A headless backend that describes every render call as text.
//!
//! Each frame is written as a block of lines:
//!
//! ```text
//! frame surface=#1 size=800x600 clear=#F0F0F0
//!   fill 10,10 100x30 #E1E1E1
//!   stroke 10,10 100x30 #ADADAD w=1
//!   text 38,17 "Submit" #000000
//! present surface=#1 draw_calls=3
//! ```
//!
//! Input is scripted: events pushed with [`ConsoleBackend::push_event`] are
//! returned by the next poll.

use std::collections::{BTreeMap, VecDeque};
use std::io::Write;
use std::rc::Rc;

use crate::error::{RenderError, RenderResult};
use crate::input::{BackendEvent, SurfaceId};
use crate::metrics::{MonospaceMetrics, TextMetrics};
use crate::renderer::{Backend, FrameStats, Renderer};
use crate::types::{Color, Point, Rect, Size, Stroke};

const TARGET: &str = "twig_render::console";

/// Text-printing backend.
pub struct ConsoleBackend {
    out: Box<dyn Write>,
    metrics: Rc<MonospaceMetrics>,
    surfaces: BTreeMap<SurfaceId, String>,
    next_surface: u32,
    current: Option<SurfaceId>,
    stats: FrameStats,
    pending: VecDeque<BackendEvent>,
    write_error: Option<std::io::Error>,
}

impl ConsoleBackend {
    /// Create a backend writing to `out`.
    pub fn new(out: impl Write + 'static, metrics: MonospaceMetrics) -> Self {
        Self {
            out: Box::new(out),
            metrics: Rc::new(metrics),
            surfaces: BTreeMap::new(),
            next_surface: 1,
            current: None,
            stats: FrameStats::default(),
            pending: VecDeque::new(),
            write_error: None,
        }
    }

    /// Create a backend writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), MonospaceMetrics::default())
    }

    /// Queue an input event for the next poll.
    pub fn push_event(&mut self, event: BackendEvent) {
        self.pending.push_back(event);
    }

    /// Number of live surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args).and_then(|_| self.out.write_all(b"\n")) {
            tracing::warn!(target: TARGET, error = %err, "console output failed");
            self.write_error = Some(err);
        }
    }

    fn draw_line(&mut self, args: std::fmt::Arguments<'_>) {
        self.stats.draw_calls += 1;
        self.line(format_args!("  {args}"));
    }
}

impl Renderer for ConsoleBackend {
    fn begin_frame(&mut self, surface: SurfaceId, clear_color: Color, viewport_size: Size) {
        self.current = Some(surface);
        self.stats = FrameStats::default();
        self.line(format_args!(
            "frame surface={} size={}x{} clear={}",
            surface, viewport_size.width, viewport_size.height, clear_color
        ));
    }

    fn end_frame(&mut self) -> RenderResult<FrameStats> {
        let stats = std::mem::take(&mut self.stats);
        if let Some(surface) = self.current.take() {
            self.line(format_args!(
                "present surface={} draw_calls={}",
                surface, stats.draw_calls
            ));
        }
        if let Some(err) = self.write_error.take() {
            return Err(RenderError::Io(err));
        }
        if let Err(err) = self.out.flush() {
            return Err(RenderError::Io(err));
        }
        Ok(stats)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_line(format_args!(
            "fill {},{} {}x{} {}",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            color
        ));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.draw_line(format_args!(
            "stroke {},{} {}x{} {} w={}",
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            stroke.color,
            stroke.width
        ));
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.draw_line(format_args!(
            "text {},{} {:?} {}",
            position.x, position.y, text, color
        ));
    }
}

impl Backend for ConsoleBackend {
    fn create_surface(&mut self, title: &str, size: Size) -> RenderResult<SurfaceId> {
        if size.is_empty() {
            return Err(RenderError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(id, title.to_string());
        tracing::debug!(target: TARGET, surface = %id, title, "created surface");
        self.line(format_args!(
            "create surface={} title={:?} size={}x{}",
            id, title, size.width, size.height
        ));
        Ok(id)
    }

    fn destroy_surface(&mut self, surface: SurfaceId) {
        if self.surfaces.remove(&surface).is_some() {
            tracing::debug!(target: TARGET, surface = %surface, "destroyed surface");
            self.line(format_args!("destroy surface={}", surface));
        }
    }

    fn set_surface_title(&mut self, surface: SurfaceId, title: &str) -> RenderResult<()> {
        let entry = self
            .surfaces
            .get_mut(&surface)
            .ok_or(RenderError::UnknownSurface(surface))?;
        *entry = title.to_string();
        self.line(format_args!("title surface={} {:?}", surface, title));
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        self.pending.drain(..).collect()
    }

    fn text_metrics(&self) -> Rc<dyn TextMetrics> {
        self.metrics.clone()
    }

    fn shutdown(&mut self) {
        self.line(format_args!("shutdown"));
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    #[test]
    fn test_frame_output() {
        let buf = SharedBuf::default();
        let mut backend = ConsoleBackend::new(buf.clone(), MonospaceMetrics::default());
        let surface = backend
            .create_surface("Demo", Size::new(320.0, 200.0))
            .unwrap();

        backend.begin_frame(surface, Color::WHITE, Size::new(320.0, 200.0));
        backend.fill_rect(Rect::new(10.0, 10.0, 100.0, 30.0), Color::LIGHT_GRAY);
        backend.draw_text("OK", Point::new(12.0, 14.0), Color::BLACK);
        let stats = backend.end_frame().unwrap();

        assert_eq!(stats.draw_calls, 2);
        let out = buf.contents();
        assert!(out.contains("create surface=#1 title=\"Demo\" size=320x200"));
        assert!(out.contains("frame surface=#1 size=320x200 clear=#FFFFFF"));
        assert!(out.contains("  fill 10,10 100x30 #C0C0C0"));
        assert!(out.contains("  text 12,14 \"OK\" #000000"));
        assert!(out.contains("present surface=#1 draw_calls=2"));
    }

    #[test]
    fn test_zero_sized_surface_rejected() {
        let mut backend = ConsoleBackend::new(std::io::sink(), MonospaceMetrics::default());
        let result = backend.create_surface("Empty", Size::new(0.0, 10.0));
        assert!(matches!(result, Err(RenderError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_unknown_surface_title() {
        let mut backend = ConsoleBackend::new(std::io::sink(), MonospaceMetrics::default());
        let result = backend.set_surface_title(SurfaceId(9), "x");
        assert!(matches!(result, Err(RenderError::UnknownSurface(SurfaceId(9)))));
    }

    #[test]
    fn test_scripted_events_drain_in_order() {
        let mut backend = ConsoleBackend::new(std::io::sink(), MonospaceMetrics::default());
        backend.push_event(BackendEvent::Quit);
        backend.push_event(BackendEvent::CloseRequested {
            surface: SurfaceId(1),
        });
        let events = backend.poll_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], BackendEvent::Quit);
        assert!(backend.poll_events().is_empty());
    }
}
