//! Tests for the widget system.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use twig_core::{Event, EventKind, ObjectError, WidgetId};
    use twig_render::{
        Color, DrawCommand, MonospaceMetrics, Point, RecordingBackend, Renderer, Size, SurfaceId,
    };

    use crate::error::Error;
    use crate::widget::layout::{HorizontalLayout, VerticalLayout};
    use crate::widget::widgets::{Button, Container, Label, Panel, TextInput};
    use crate::widget::{InputEvent, PaintContext, PointerState, Style, Widget, WidgetBase, WidgetTree};

    /// A widget that fills its rectangle with one color.
    struct TestWidget {
        base: WidgetBase,
        color: Color,
    }

    impl TestWidget {
        fn new(color: Color) -> Self {
            Self {
                base: WidgetBase::new(),
                color,
            }
        }
    }

    impl Widget for TestWidget {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn paint(&self, ctx: &mut PaintContext<'_>) {
            let rect = ctx.rect();
            ctx.renderer().fill_rect(rect, self.color);
        }
    }

    type Log = Rc<RefCell<Vec<String>>>;

    fn record(tree: &mut WidgetTree, id: WidgetId, kind: EventKind, log: &Log, tag: &str) {
        let log = log.clone();
        let tag = tag.to_string();
        tree.on(id, kind, move |_, _| log.borrow_mut().push(tag.clone()))
            .unwrap();
    }

    fn metrics() -> Rc<MonospaceMetrics> {
        Rc::new(MonospaceMetrics::new(8.0, 16.0))
    }

    fn paint_commands(tree: &WidgetTree, root: WidgetId) -> Vec<DrawCommand> {
        let mut backend = RecordingBackend::new();
        backend.begin_frame(SurfaceId(1), Color::WHITE, Size::new(500.0, 500.0));
        tree.paint(root, &mut backend, PointerState::default()).unwrap();
        backend.end_frame().unwrap();
        backend.frames()[0].commands.clone()
    }

    // =========================================================================
    // Structure
    // =========================================================================

    #[test]
    fn test_add_and_find() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new().with_id("root"));
        let a = tree.add(root, Container::new().with_id("a")).unwrap();
        let dup1 = tree.add(a, Label::new("first").with_id("dup")).unwrap();
        let _dup2 = tree.add(root, Label::new("second").with_id("dup")).unwrap();

        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.children(root).len(), 2);
        assert_eq!(tree.find(root, "root"), Some(root));
        // Pre-order: the nested duplicate comes first.
        assert_eq!(tree.find(root, "dup"), Some(dup1));
        assert_eq!(tree.find_as::<Label>(root, "dup").map(Label::text), Some("first"));
        assert_eq!(tree.find(root, "missing"), None);
        assert_eq!(tree.find(a, "root"), None);
    }

    #[test]
    fn test_add_to_unknown_parent() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        tree.destroy(root).unwrap();
        let result = tree.add(root, Label::new("orphan"));
        assert!(matches!(result, Err(Error::Object(ObjectError::InvalidObjectId))));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_attach_rejects_reparenting() {
        let mut tree = WidgetTree::new();
        let a = tree.add_root(Container::new());
        let b = tree.add_root(Container::new());
        let child = tree.add(a, Label::new("x")).unwrap();

        assert!(matches!(
            tree.attach(b, child),
            Err(Error::Object(ObjectError::AlreadyParented))
        ));
        tree.attach(a, b).unwrap();
        assert!(matches!(
            tree.attach(b, a),
            Err(Error::Object(ObjectError::CircularParentage))
        ));
    }

    #[test]
    fn test_destroy_children_first() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        let mid = tree.add(root, Container::new()).unwrap();
        let leaf = tree.add(mid, Label::new("leaf")).unwrap();

        let removed = tree.destroy(root).unwrap();
        assert_eq!(removed, vec![leaf, mid, root]);
        assert!(!tree.contains(leaf));
        assert!(tree.base(leaf).is_err());
    }

    #[test]
    fn test_remove_by_name_and_remove_all() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        tree.add(root, Label::new("a").with_id("a")).unwrap();
        let b = tree.add(root, Container::new().with_id("b")).unwrap();
        tree.add(b, Label::new("nested").with_id("nested")).unwrap();

        assert!(!tree.remove(root, "nested").unwrap());
        assert!(tree.remove(root, "a").unwrap());
        assert_eq!(tree.children(root), &[b]);

        assert_eq!(tree.remove_all(root).unwrap(), 1);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_typed_access() {
        let mut tree = WidgetTree::new();
        let label = tree.add_root(Label::new("x"));
        assert!(tree.is::<Label>(label));
        assert!(tree.get::<Button>(label).is_none());

        let err = tree.update::<Button, _>(label, |b| b.click()).unwrap_err();
        assert!(matches!(err, Error::WidgetType { id, .. } if id == label));
        assert!(matches!(tree.set_text(label, "y"), Err(Error::WidgetType { .. })));

        tree.update::<Label, _>(label, |l| l.set_text("changed")).unwrap();
        assert_eq!(tree.get::<Label>(label).unwrap().text(), "changed");
    }

    // =========================================================================
    // Events
    // =========================================================================

    #[test]
    fn test_bubbling_order() {
        let mut tree = WidgetTree::new();
        let grandparent = tree.add_root(Container::new());
        let parent = tree.add(grandparent, Container::new()).unwrap();
        let button = tree.add(parent, Button::new("Go")).unwrap();

        let log: Log = Rc::default();
        record(&mut tree, grandparent, EventKind::Click, &log, "grandparent");
        record(&mut tree, parent, EventKind::Click, &log, "parent");
        record(&mut tree, button, EventKind::Click, &log, "button-1");
        record(&mut tree, button, EventKind::Click, &log, "button-2");

        tree.click(button).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["button-1", "button-2", "parent", "grandparent"]
        );
    }

    #[test]
    fn test_event_source_survives_bubbling() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        let input = tree.add(root, TextInput::new()).unwrap();

        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        tree.on(root, EventKind::TextChanged, move |event, _| {
            *sink.borrow_mut() = Some((event.source(), event.text().to_string()));
        })
        .unwrap();

        tree.set_text(input, "x").unwrap();
        assert_eq!(*seen.borrow(), Some((input, "x".to_string())));
    }

    #[test]
    fn test_nested_emit_reaches_running_ancestor() {
        let mut tree = WidgetTree::new();
        let form = tree.add_root(Container::new());
        let first = tree.add(form, TextInput::new()).unwrap();
        let second = tree.add(form, TextInput::new()).unwrap();

        let log: Rc<RefCell<Vec<WidgetId>>> = Rc::default();
        let sink = log.clone();
        tree.on(form, EventKind::TextChanged, move |event, tree| {
            sink.borrow_mut().push(event.source());
            if event.source() == first {
                let mirrored = event.text().to_uppercase();
                tree.set_text(second, mirrored).unwrap();
            }
        })
        .unwrap();

        tree.set_text(first, "x").unwrap();
        assert_eq!(*log.borrow(), vec![first, second]);
        assert_eq!(tree.get::<TextInput>(second).unwrap().text(), "X");
        assert_eq!(tree.handler_count(form, EventKind::TextChanged), 1);
    }

    #[test]
    fn test_off_skips_remaining_handlers() {
        let mut tree = WidgetTree::new();
        let button = tree.add_root(Button::new("x"));
        let log: Log = Rc::default();

        let sink = log.clone();
        tree.on(button, EventKind::Click, move |_, tree| {
            sink.borrow_mut().push("first".into());
            tree.off(button, EventKind::Click).unwrap();
        })
        .unwrap();
        record(&mut tree, button, EventKind::Click, &log, "second");

        tree.click(button).unwrap();
        assert_eq!(*log.borrow(), vec!["first"]);
    }

    #[test]
    fn test_window_close_does_not_bubble() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        let child = tree.add(root, Container::new()).unwrap();

        let log: Log = Rc::default();
        record(&mut tree, root, EventKind::WindowClose, &log, "root");
        record(&mut tree, child, EventKind::WindowClose, &log, "child");

        tree.emit(child, &Event::new(EventKind::WindowClose, child));
        assert_eq!(*log.borrow(), vec!["child"]);
    }

    #[test]
    fn test_disabled_click_is_silent() {
        let mut tree = WidgetTree::new();
        let button = tree.add_root(Button::new("No").with_enabled(false));
        let log: Log = Rc::default();
        record(&mut tree, button, EventKind::Click, &log, "click");

        assert!(tree.click(button).unwrap());
        assert!(log.borrow().is_empty());

        tree.base_mut(button).unwrap().set_enabled(true);
        tree.click(button).unwrap();
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_events_raised_before_insertion_are_dropped() {
        let mut input = TextInput::new();
        input.set_text("early");
        let mut tree = WidgetTree::new();
        let id = tree.add_root(input);
        assert_eq!(tree.base(id).unwrap().pending_events(), 0);
        assert_eq!(tree.get::<TextInput>(id).unwrap().text(), "early");
    }

    #[test]
    fn test_handler_mutates_tree() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        let button = tree.add(root, Button::new("Add")).unwrap();
        let status = tree.add(root, Label::new("idle")).unwrap();

        tree.on(button, EventKind::Click, move |_, tree| {
            tree.update::<Label, _>(status, |l| l.set_text("clicked")).unwrap();
        })
        .unwrap();

        tree.click(button).unwrap();
        assert_eq!(tree.get::<Label>(status).unwrap().text(), "clicked");
    }

    #[test]
    fn test_handlers_added_during_emit_run_next_time() {
        let mut tree = WidgetTree::new();
        let button = tree.add_root(Button::new("x"));
        let log: Log = Rc::default();

        let sink = log.clone();
        tree.on(button, EventKind::Click, move |_, tree| {
            sink.borrow_mut().push("outer".into());
            let inner = sink.clone();
            tree.on(button, EventKind::Click, move |_, _| inner.borrow_mut().push("inner".into()))
                .unwrap();
        })
        .unwrap();

        tree.click(button).unwrap();
        assert_eq!(*log.borrow(), vec!["outer"]);
        assert_eq!(tree.handler_count(button, EventKind::Click), 2);

        log.borrow_mut().clear();
        tree.click(button).unwrap();
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_off_during_emit() {
        let mut tree = WidgetTree::new();
        let button = tree.add_root(Button::new("once"));
        let log: Log = Rc::default();

        let sink = log.clone();
        tree.on(button, EventKind::Click, move |_, tree| {
            sink.borrow_mut().push("fired".into());
            tree.off(button, EventKind::Click).unwrap();
        })
        .unwrap();

        tree.click(button).unwrap();
        tree.click(button).unwrap();
        assert_eq!(*log.borrow(), vec!["fired"]);
        assert_eq!(tree.handler_count(button, EventKind::Click), 0);
    }

    #[test]
    fn test_destroying_target_stops_bubbling() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new());
        let button = tree.add(root, Button::new("Delete me")).unwrap();
        let log: Log = Rc::default();
        record(&mut tree, root, EventKind::Click, &log, "root");

        tree.on(button, EventKind::Click, move |_, tree| {
            tree.destroy(button).unwrap();
        })
        .unwrap();

        tree.click(button).unwrap();
        assert!(!tree.contains(button));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_deliver_input_to_text_input() {
        let mut tree = WidgetTree::new();
        let input = tree.add_root(TextInput::new());
        let log: Log = Rc::default();
        let sink = log.clone();
        tree.on(input, EventKind::KeyPress, move |event, _| {
            sink.borrow_mut().push(event.key().to_string());
        })
        .unwrap();

        assert!(tree.deliver_input(input, &InputEvent::Text("hi".into())).unwrap());
        assert!(tree
            .deliver_input(input, &InputEvent::Key(twig_render::Key::Enter))
            .unwrap());
        assert_eq!(tree.get::<TextInput>(input).unwrap().text(), "hi");
        assert_eq!(*log.borrow(), vec!["enter"]);
    }

    // =========================================================================
    // Measuring
    // =========================================================================

    #[test]
    fn test_button_auto_size() {
        let mut tree = WidgetTree::with_metrics(metrics());
        let button = tree.add_root(Button::new("Submit"));
        // 6 cells of 8px + 20, one 16px line + 10.
        assert_eq!(tree.base(button).unwrap().size(), Size::new(68.0, 26.0));

        tree.update::<Button, _>(button, |b| b.set_text("OK")).unwrap();
        assert_eq!(tree.base(button).unwrap().size(), Size::new(36.0, 26.0));
    }

    #[test]
    fn test_explicit_size_wins_until_text_changes() {
        let mut tree = WidgetTree::with_metrics(metrics());
        let button = tree.add_root(Button::new("Submit").with_size(150.0, 40.0));
        assert_eq!(tree.base(button).unwrap().size(), Size::new(150.0, 40.0));

        tree.update::<Button, _>(button, |b| b.set_text("Go")).unwrap();
        assert_eq!(tree.base(button).unwrap().size(), Size::new(36.0, 26.0));
    }

    #[test]
    fn test_measure_deferred_until_metrics() {
        let mut tree = WidgetTree::new();
        let label = tree.add_root(Label::new("abcd"));
        assert_eq!(tree.base(label).unwrap().size(), Size::new(100.0, 30.0));

        tree.set_metrics(Some(metrics()));
        assert_eq!(tree.base(label).unwrap().size(), Size::new(32.0, 16.0));
    }

    // =========================================================================
    // Geometry & Hit-Testing
    // =========================================================================

    #[test]
    fn test_absolute_position() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new().with_position(10.0, 10.0));
        let mid = tree.add(root, Container::new().with_position(5.0, 20.0)).unwrap();
        let leaf = tree.add(mid, Label::new("x").with_position(1.0, 2.0)).unwrap();

        assert_eq!(tree.absolute_position(leaf).unwrap(), Point::new(16.0, 32.0));
        tree.base_mut(mid).unwrap().set_position(0.0, 0.0);
        assert_eq!(tree.absolute_position(leaf).unwrap(), Point::new(11.0, 12.0));
        assert_eq!(tree.to_local(leaf, Point::new(21.0, 22.0)).unwrap(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_overlapping_siblings_later_wins() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new().with_size(200.0, 200.0));
        let first = tree
            .add(root, TestWidget::new(Color::RED).with_position(0.0, 0.0).with_size(50.0, 50.0))
            .unwrap();
        let second = tree
            .add(root, TestWidget::new(Color::BLUE).with_position(25.0, 25.0).with_size(50.0, 50.0))
            .unwrap();

        assert_eq!(tree.find_widget_at(root, Point::new(30.0, 30.0)), Some(second));
        assert_eq!(tree.find_widget_at(root, Point::new(10.0, 10.0)), Some(first));
        assert_eq!(tree.find_widget_at(root, Point::new(150.0, 150.0)), Some(root));
        assert_eq!(tree.find_widget_at(root, Point::new(200.0, 10.0)), None);
    }

    #[test]
    fn test_invisible_subtree_is_not_hit() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new().with_size(200.0, 200.0));
        let hidden = tree
            .add(root, Container::new().with_size(100.0, 100.0).with_visible(false))
            .unwrap();
        let inner = tree.add(hidden, TestWidget::new(Color::RED)).unwrap();

        assert_eq!(tree.find_widget_at(root, Point::new(5.0, 5.0)), Some(root));
        tree.base_mut(hidden).unwrap().set_visible(true);
        assert_eq!(tree.find_widget_at(root, Point::new(5.0, 5.0)), Some(inner));
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn test_set_layout_applies_once() {
        let mut tree = WidgetTree::new();
        let column = tree.add_root(Container::new());
        let a = tree.add(column, Label::new("a").with_size(50.0, 20.0)).unwrap();
        let b = tree.add(column, Label::new("b").with_size(50.0, 30.0)).unwrap();
        let c = tree.add(column, Label::new("c").with_size(50.0, 10.0)).unwrap();
        tree.set_layout(column, VerticalLayout::new(5.0, 10.0)).unwrap();

        let ys: Vec<f32> = [a, b, c]
            .iter()
            .map(|&id| tree.base(id).unwrap().pos().y)
            .collect();
        assert_eq!(ys, vec![10.0, 35.0, 70.0]);

        let late = tree.add(column, Label::new("late").with_size(50.0, 10.0)).unwrap();
        assert_eq!(tree.base(late).unwrap().pos(), Point::ZERO);
        tree.apply_layout(column).unwrap();
        assert_eq!(tree.base(late).unwrap().pos().y, 85.0);
    }

    #[test]
    fn test_auto_resize_and_panel_title_offset() {
        let mut tree = WidgetTree::with_metrics(metrics());
        let panel = tree.add_root(Panel::new().with_title("Options").with_auto_resize(true));
        let a = tree.add(panel, Label::new("x").with_auto_size(false).with_size(40.0, 20.0)).unwrap();
        tree.add(panel, Label::new("y").with_auto_size(false).with_size(60.0, 20.0)).unwrap();
        tree.set_layout(panel, HorizontalLayout::new(5.0, 5.0)).unwrap();

        // One 16px title line plus a 4px margin.
        assert_eq!(tree.base(a).unwrap().pos(), Point::new(5.0, 25.0));
        assert_eq!(tree.base(panel).unwrap().size(), Size::new(115.0, 50.0));
    }

    #[test]
    fn test_layout_on_non_container() {
        let mut tree = WidgetTree::new();
        let label = tree.add_root(Label::new("x"));
        assert!(matches!(
            tree.set_layout(label, VerticalLayout::new(0.0, 0.0)),
            Err(Error::NotAContainer(id)) if id == label
        ));
    }

    // =========================================================================
    // Painting
    // =========================================================================

    #[test]
    fn test_paint_is_idempotent_and_skips_invisible() {
        let mut tree = WidgetTree::with_metrics(metrics());
        let root = tree.add_root(Container::new().with_position(10.0, 10.0));
        tree.add(root, TestWidget::new(Color::RED).with_position(5.0, 5.0)).unwrap();
        let hidden = tree
            .add(root, TestWidget::new(Color::BLUE).with_visible(false))
            .unwrap();
        tree.add(hidden, TestWidget::new(Color::GREEN)).unwrap();

        let first = paint_commands(&tree, root);
        let second = paint_commands(&tree, root);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![DrawCommand::FillRect {
                rect: twig_render::Rect::new(15.0, 15.0, 100.0, 30.0),
                color: Color::RED,
            }]
        );
    }

    #[test]
    fn test_style_override_is_inherited() {
        let mut tree = WidgetTree::with_metrics(metrics());
        let root = tree.add_root(Container::new());
        let dark = tree.add(root, Container::new().with_style(Style::dark())).unwrap();
        tree.add(dark, Label::new("dark text")).unwrap();
        tree.add(root, Label::new("light text")).unwrap();

        let colors: Vec<Color> = paint_commands(&tree, root)
            .into_iter()
            .filter_map(|command| match command {
                DrawCommand::Text { color, .. } => Some(color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![Style::dark().text, Style::light().text]);
    }

    #[test]
    fn test_dump_lists_widget_types() {
        let mut tree = WidgetTree::new();
        let root = tree.add_root(Container::new().with_id("form"));
        tree.add(root, Button::new("OK").with_id("ok")).unwrap();

        let dump = tree.dump(root).unwrap();
        assert!(dump.starts_with("form (Container)\n"));
        assert!(dump.contains("ok (Button)"));
    }
}
