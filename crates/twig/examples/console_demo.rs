//! Console demo.
//!
//! Builds a small settings form, feeds it a scripted sequence of pointer and
//! keyboard input, and prints every frame as text.
//!
//! Run with: cargo run -p twig --example console_demo
//! Set `RUST_LOG=twig=debug` to see event dispatch.

use twig::config::ToolkitConfig;
use twig::prelude::*;
use twig::render::MonospaceMetrics;

const SURFACE: SurfaceId = SurfaceId(1);

fn main() -> twig::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ToolkitConfig::default();
    let metrics = MonospaceMetrics::new(config.console.cell_width, config.console.cell_height);
    let backend = ConsoleBackend::new(std::io::stdout(), metrics);
    let mut app = Application::with_config(backend, config)?;

    let window = app.create_window(Window::new("Settings", 320.0, 240.0));
    let layout = VerticalLayout::from_defaults(&app.config().layout);
    let tree = app.tree_mut();

    let name = tree.add(window, TextInput::new().with_id("name").with_placeholder("Your name"))?;
    let volume = tree.add(window, Slider::new(0, 100).with_step(5).with_id("volume"))?;
    let sound = tree.add(window, CheckBox::new("Sound effects").with_id("sound"))?;
    let save = tree.add(window, Button::new("Save").with_id("save"))?;
    let status = tree.add(window, Label::new("Ready").with_id("status"))?;
    tree.set_layout(window, layout)?;

    tree.on(window, EventKind::ValueChanged, move |event, tree| {
        let text = format!("Volume {}", event.get("value").unwrap_or("?"));
        if let Err(err) = tree.update::<Label, _>(status, |label| label.set_text(text)) {
            tracing::warn!(error = %err, "status update failed");
        }
    })?;
    tree.on(save, EventKind::Click, move |_, tree| {
        let who = tree
            .get::<TextInput>(name)
            .map(|input| input.text().to_string())
            .unwrap_or_default();
        let text = format!("Saved for {who}");
        if let Err(err) = tree.update::<Label, _>(status, |label| label.set_text(text)) {
            tracing::warn!(error = %err, "status update failed");
        }
    })?;

    let handle = app.loop_handle();
    app.tree_mut()
        .on(window, EventKind::WindowClose, move |_, _| handle.stop())?;

    app.show(window)?;

    let centre = |id: WidgetId| app.tree().absolute_rect(id).unwrap_or_default().center();
    let [name_at, volume_at, sound_at, save_at] = [name, volume, sound, save].map(centre);

    let mut script = Vec::new();
    script.extend(click(name_at));
    script.push(BackendEvent::Text {
        surface: SURFACE,
        text: "Ada".into(),
    });
    script.extend(click(volume_at));
    script.extend(click(sound_at));
    script.push(BackendEvent::PointerMoved {
        surface: SURFACE,
        x: save_at.x,
        y: save_at.y,
    });
    script.extend(click(save_at));
    script.push(BackendEvent::CloseRequested { surface: SURFACE });

    let backend = app.backend_mut();
    for event in script {
        backend.push_event(event);
    }

    app.run_event_loop()?;

    if let Some(label) = app.tree().get::<Label>(status) {
        println!("final status: {}", label.text());
    }
    app.destroy_window(window)
}

fn click(at: Point) -> [BackendEvent; 2] {
    let Point { x, y } = at;
    [
        BackendEvent::PointerDown {
            surface: SURFACE,
            button: MouseButton::Left,
            x,
            y,
        },
        BackendEvent::PointerUp {
            surface: SURFACE,
            button: MouseButton::Left,
            x,
            y,
        },
    ]
}
