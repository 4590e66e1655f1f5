//! Integration tests for the object tree and its debug formatting.

use twig_core::{
    Event, EventKind, ObjectError, ObjectTree, ObjectTreeDebug, TreeFormatOptions, TreeStyle,
    WidgetId,
};

struct Form {
    tree: ObjectTree,
    window: WidgetId,
    body: WidgetId,
    name_input: WidgetId,
    submit: WidgetId,
}

fn setup() -> Form {
    let mut tree = ObjectTree::new();
    let window = tree.register("Window", "main");
    let body = tree.register("Container", "body");
    let name_input = tree.register("TextInput", "name");
    let submit = tree.register("Button", "submit");
    tree.add_child(window, body).unwrap();
    tree.add_child(body, name_input).unwrap();
    tree.add_child(body, submit).unwrap();
    Form {
        tree,
        window,
        body,
        name_input,
        submit,
    }
}

#[test]
fn preorder_walk_visits_parents_before_children() {
    let form = setup();
    let order = form.tree.depth_first_preorder(form.window).unwrap();
    assert_eq!(
        order,
        vec![form.window, form.body, form.name_input, form.submit]
    );
}

#[test]
fn destroying_a_window_removes_everything() {
    let mut form = setup();
    let removed = form.tree.destroy(form.window).unwrap();

    assert_eq!(removed.len(), 4);
    assert_eq!(removed.last(), Some(&form.window));
    assert!(form.tree.is_empty());
    assert_eq!(
        form.tree.children(form.body),
        Err(ObjectError::InvalidObjectId)
    );
}

#[test]
fn independent_trees_do_not_share_state() {
    let first = setup();
    let second = ObjectTree::new();

    assert_eq!(first.tree.len(), 4);
    assert!(second.is_empty());
    assert!(!second.contains(first.window));
}

#[test]
fn renaming_changes_lookup() {
    let mut form = setup();
    form.tree.set_name(form.submit, "send").unwrap();

    assert_eq!(form.tree.find(form.window, "submit").unwrap(), None);
    assert_eq!(form.tree.find(form.window, "send").unwrap(), Some(form.submit));
}

#[test]
fn unicode_tree_output_uses_box_drawing() {
    let form = setup();
    let options = TreeFormatOptions {
        style: TreeStyle::Unicode,
        ..TreeFormatOptions::minimal()
    };
    let output = ObjectTreeDebug::with_options(options)
        .format_all(&form.tree)
        .unwrap();

    assert!(output.starts_with("Widget Tree (4 total widgets):"));
    assert!(output.contains("\u{2514}\u{2500}\u{2500} body"));
    assert!(output.contains("\u{251c}\u{2500}\u{2500} name"));
}

#[test]
fn events_carry_their_source() {
    let form = setup();
    let event = Event::new(EventKind::TextChanged, form.name_input).with_data("text", "Ada");

    assert_eq!(event.source(), form.name_input);
    assert_eq!(event.text(), "Ada");
    assert_eq!(
        form.tree.name(event.source()).unwrap(),
        "name"
    );
}
