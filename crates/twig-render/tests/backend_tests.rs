//! Integration tests exercising both headless backends through the
//! [`Backend`] trait.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use twig_render::{
    Backend, BackendEvent, Color, ConsoleBackend, DrawCommand, MonospaceMetrics, Point,
    RecordingBackend, Rect, Size, Stroke, SurfaceId,
};

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

/// Draw the same small scene through any backend.
fn draw_scene(backend: &mut dyn Backend) -> SurfaceId {
    let surface = backend
        .create_surface("Scene", Size::new(200.0, 100.0))
        .unwrap();
    backend.begin_frame(surface, Color::WHITE, Size::new(200.0, 100.0));
    backend.fill_rect(Rect::new(10.0, 10.0, 60.0, 26.0), Color::LIGHT_GRAY);
    backend.stroke_rect(
        Rect::new(10.0, 10.0, 60.0, 26.0),
        &Stroke::new(Color::GRAY, 1.0),
    );
    let metrics = backend.text_metrics();
    let extent = metrics.measure_text("Go");
    backend.draw_text("Go", Point::new(40.0 - extent.width / 2.0, 15.0), Color::BLACK);
    let stats = backend.end_frame().unwrap();
    assert_eq!(stats.draw_calls, 3);
    surface
}

#[test]
fn recording_backend_captures_scene() {
    let mut backend = RecordingBackend::new();
    let surface = draw_scene(&mut backend);

    let frame = backend.last_frame(surface).unwrap();
    assert_eq!(frame.viewport, Size::new(200.0, 100.0));
    assert_eq!(
        frame.commands[2],
        DrawCommand::Text {
            text: "Go".to_string(),
            position: Point::new(32.0, 15.0),
            color: Color::BLACK,
        }
    );
}

#[test]
fn console_backend_describes_scene() {
    let buf = SharedBuf::default();
    let mut backend = ConsoleBackend::new(buf.clone(), MonospaceMetrics::new(10.0, 20.0));
    draw_scene(&mut backend);
    backend.shutdown();

    let text = String::from_utf8(buf.0.borrow().clone()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "create surface=#1 title=\"Scene\" size=200x100");
    assert_eq!(lines[1], "frame surface=#1 size=200x100 clear=#FFFFFF");
    assert_eq!(lines[2], "  fill 10,10 60x26 #C0C0C0");
    assert_eq!(lines[3], "  stroke 10,10 60x26 #808080 w=1");
    assert_eq!(lines[4], "  text 30,15 \"Go\" #000000");
    assert_eq!(lines[5], "present surface=#1 draw_calls=3");
    assert_eq!(lines.last(), Some(&"shutdown"));
}

#[test]
fn identical_scenes_produce_identical_frames() {
    let mut first = RecordingBackend::new();
    let mut second = RecordingBackend::new();
    let a = draw_scene(&mut first);
    let b = draw_scene(&mut second);
    assert_eq!(first.last_frame(a), second.last_frame(b));
}

#[test]
fn events_are_polled_once() {
    let mut backend = RecordingBackend::new();
    backend.push_events([
        BackendEvent::PointerMoved {
            surface: SurfaceId(1),
            x: 1.0,
            y: 2.0,
        },
        BackendEvent::Quit,
    ]);
    assert_eq!(backend.poll_events().len(), 2);
    assert!(backend.poll_events().is_empty());
}
