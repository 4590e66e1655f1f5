//! A backend that records draw commands as data.
//!
//! [`RecordingBackend`] keeps every presented frame as a list of
//! [`DrawCommand`]s and replays a scripted queue of input events. It lets the
//! whole toolkit, event loop included, run without a display, and makes
//! frames comparable with `==`.

use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use crate::error::{RenderError, RenderResult};
use crate::input::{BackendEvent, SurfaceId};
use crate::metrics::{MonospaceMetrics, TextMetrics};
use crate::renderer::{Backend, FrameStats, Renderer};
use crate::types::{Color, Point, Rect, Size, Stroke};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    Text {
        text: String,
        position: Point,
        color: Color,
    },
}

/// A presented frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub surface: SurfaceId,
    pub clear_color: Color,
    pub viewport: Size,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Texts drawn in this frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// State the backend keeps per live surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRecord {
    pub title: String,
    pub size: Size,
    pub text_input: bool,
}

/// Headless backend for tests and frame comparisons.
#[derive(Debug)]
pub struct RecordingBackend {
    metrics: Rc<MonospaceMetrics>,
    surfaces: BTreeMap<SurfaceId, SurfaceRecord>,
    destroyed: Vec<SurfaceId>,
    next_surface: u32,
    in_progress: Option<Frame>,
    frames: Vec<Frame>,
    pending: VecDeque<BackendEvent>,
    fail_surface_creation: Option<String>,
    shutdown_count: usize,
}

impl RecordingBackend {
    /// Create a backend with default monospace metrics (8x16 cells).
    pub fn new() -> Self {
        Self::with_metrics(MonospaceMetrics::default())
    }

    /// Create a backend with the given metrics.
    pub fn with_metrics(metrics: MonospaceMetrics) -> Self {
        Self {
            metrics: Rc::new(metrics),
            surfaces: BTreeMap::new(),
            destroyed: Vec::new(),
            next_surface: 1,
            in_progress: None,
            frames: Vec::new(),
            pending: VecDeque::new(),
            fail_surface_creation: None,
            shutdown_count: 0,
        }
    }

    /// Queue an input event for the next poll.
    pub fn push_event(&mut self, event: BackendEvent) {
        self.pending.push_back(event);
    }

    /// Queue several input events.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = BackendEvent>) {
        self.pending.extend(events);
    }

    /// Make the next `create_surface` call fail with `reason`.
    pub fn fail_next_surface(&mut self, reason: impl Into<String>) {
        self.fail_surface_creation = Some(reason.into());
    }

    /// Every presented frame, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recent frame presented on `surface`.
    pub fn last_frame(&self, surface: SurfaceId) -> Option<&Frame> {
        self.frames.iter().rev().find(|f| f.surface == surface)
    }

    /// Forget recorded frames.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// A live surface.
    pub fn surface(&self, surface: SurfaceId) -> Option<&SurfaceRecord> {
        self.surfaces.get(&surface)
    }

    /// Ids of live surfaces.
    pub fn live_surfaces(&self) -> Vec<SurfaceId> {
        self.surfaces.keys().copied().collect()
    }

    /// Surfaces destroyed so far, in destruction order.
    pub fn destroyed_surfaces(&self) -> &[SurfaceId] {
        &self.destroyed
    }

    /// How many times `shutdown` was called.
    pub fn shutdown_count(&self) -> usize {
        self.shutdown_count
    }

    fn record(&mut self, command: DrawCommand) {
        if let Some(frame) = self.in_progress.as_mut() {
            frame.commands.push(command);
        }
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingBackend {
    fn begin_frame(&mut self, surface: SurfaceId, clear_color: Color, viewport_size: Size) {
        self.in_progress = Some(Frame {
            surface,
            clear_color,
            viewport: viewport_size,
            commands: Vec::new(),
        });
    }

    fn end_frame(&mut self) -> RenderResult<FrameStats> {
        let frame = self.in_progress.take().ok_or_else(|| {
            RenderError::Initialization("end_frame called without begin_frame".to_string())
        })?;
        let stats = FrameStats {
            draw_calls: frame.commands.len() as u32,
        };
        self.frames.push(frame);
        Ok(stats)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.record(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.record(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
        });
    }
}

impl Backend for RecordingBackend {
    fn create_surface(&mut self, title: &str, size: Size) -> RenderResult<SurfaceId> {
        if let Some(reason) = self.fail_surface_creation.take() {
            return Err(RenderError::SurfaceCreation(reason));
        }
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id,
            SurfaceRecord {
                title: title.to_string(),
                size,
                text_input: false,
            },
        );
        Ok(id)
    }

    fn destroy_surface(&mut self, surface: SurfaceId) {
        if self.surfaces.remove(&surface).is_some() {
            self.destroyed.push(surface);
        }
    }

    fn set_surface_title(&mut self, surface: SurfaceId, title: &str) -> RenderResult<()> {
        let record = self
            .surfaces
            .get_mut(&surface)
            .ok_or(RenderError::UnknownSurface(surface))?;
        record.title = title.to_string();
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<BackendEvent> {
        self.pending.drain(..).collect()
    }

    fn set_text_input(&mut self, surface: SurfaceId, enabled: bool) {
        if let Some(record) = self.surfaces.get_mut(&surface) {
            record.text_input = enabled;
        }
    }

    fn text_metrics(&self) -> Rc<dyn TextMetrics> {
        self.metrics.clone()
    }

    fn shutdown(&mut self) {
        self.shutdown_count += 1;
    }
}
