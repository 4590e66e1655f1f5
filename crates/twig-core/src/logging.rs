//! Logging and debugging facilities for Twig.
//!
//! This module provides:
//! - Target and span names for filtering the `tracing` output of each subsystem
//! - Debug visualization for widget trees
//!
//! # Tracing Integration
//!
//! Twig only emits `tracing` events; it never installs a subscriber. To see
//! logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("twig=debug,twig_core=trace")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use twig_core::logging::ObjectTreeDebug;
//! use twig_core::ObjectTree;
//!
//! let mut tree = ObjectTree::new();
//! let root = tree.register("Window", "main");
//! let button = tree.register("Button", "ok");
//! tree.add_child(root, button).unwrap();
//!
//! let output = ObjectTreeDebug::new().format_subtree(&tree, root).unwrap();
//! assert!(output.contains("ok"));
//! ```

use std::fmt::Write as FmtWrite;

use crate::object::{ObjectResult, ObjectTree, WidgetId};

/// Span names used throughout Twig for tracing.
pub mod span_names {
    /// Event loop iteration span.
    pub const EVENT_LOOP: &str = "twig::event_loop";
    /// Event emission span.
    pub const EMIT: &str = "twig::emit";
    /// Window render span.
    pub const RENDER: &str = "twig::render";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Object tree target.
    pub const OBJECT: &str = "twig_core::object";
    /// Configuration loading target.
    pub const CONFIG: &str = "twig_core::config";
    /// Event emission and bubbling target.
    pub const EVENT: &str = "twig::event";
    /// Event loop target.
    pub const EVENT_LOOP: &str = "twig::event_loop";
    /// Window lifecycle target.
    pub const WINDOW: &str = "twig::window";
    /// Layout target.
    pub const LAYOUT: &str = "twig::layout";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show widget ids.
    pub show_ids: bool,
    /// Whether to show type names.
    pub show_types: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output (names only).
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing widget trees.
#[derive(Debug, Clone, Default)]
pub struct ObjectTreeDebug {
    options: TreeFormatOptions,
}

impl ObjectTreeDebug {
    /// Create a new visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root and its subtree.
    pub fn format_all(&self, tree: &ObjectTree) -> ObjectResult<String> {
        let roots: Vec<WidgetId> = tree.root_objects().collect();

        let mut output = String::new();
        let _ = writeln!(output, "Widget Tree ({} total widgets):", tree.len());
        if roots.is_empty() {
            output.push_str("  (empty)\n");
        }
        for root in roots {
            self.format_subtree_into(tree, root, 0, true, &mut output)?;
        }
        Ok(output)
    }

    /// Format the subtree rooted at `root`.
    pub fn format_subtree(&self, tree: &ObjectTree, root: WidgetId) -> ObjectResult<String> {
        let mut output = String::new();
        self.format_subtree_into(tree, root, 0, true, &mut output)?;
        Ok(output)
    }

    fn format_subtree_into(
        &self,
        tree: &ObjectTree,
        id: WidgetId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) -> ObjectResult<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let name = tree.name(id)?;
        let type_name = tree.type_name(id)?;
        let children = tree.children(id)?;

        output.push_str(&self.build_prefix(depth, is_last));
        output.push_str(if name.is_empty() { "(unnamed)" } else { name });

        if self.options.show_ids {
            let _ = write!(output, " [{:?}]", id);
        }
        if self.options.show_types {
            let short_type = type_name.rsplit("::").next().unwrap_or(type_name);
            let _ = write!(output, " ({})", short_type);
        }
        output.push('\n');

        let child_count = children.len();
        for (i, &child) in children.iter().enumerate() {
            self.format_subtree_into(tree, child, depth + 1, i + 1 == child_count, output)?;
        }
        Ok(())
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.push_str(&" ".repeat(self.options.indent_size));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ObjectTree, WidgetId) {
        let mut tree = ObjectTree::new();
        let root = tree.register("twig::widget::Window", "window");
        let first = tree.register("twig::widget::Button", "button1");
        let second = tree.register("twig::widget::Label", "");
        tree.add_child(root, first).unwrap();
        tree.add_child(root, second).unwrap();
        (tree, root)
    }

    #[test]
    fn test_tree_format_hierarchy() {
        let (tree, root) = sample();
        let output = ObjectTreeDebug::new().format_subtree(&tree, root).unwrap();

        assert!(output.contains("window"));
        assert!(output.contains("button1"));
        assert!(output.contains("(unnamed)"));
        assert!(output.contains("(Button)"));
        assert!(!output.contains("twig::widget::Button"));
    }

    #[test]
    fn test_tree_format_minimal_ascii() {
        let (tree, root) = sample();
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..TreeFormatOptions::minimal()
        };
        let output = ObjectTreeDebug::with_options(options)
            .format_subtree(&tree, root)
            .unwrap();

        assert_eq!(output, "window\n+-- button1\n`-- (unnamed)\n");
    }

    #[test]
    fn test_format_all_empty() {
        let tree = ObjectTree::new();
        let output = ObjectTreeDebug::new().format_all(&tree).unwrap();
        assert!(output.contains("0 total widgets"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_max_depth() {
        let (tree, root) = sample();
        let options = TreeFormatOptions {
            max_depth: Some(0),
            ..TreeFormatOptions::minimal()
        };
        let output = ObjectTreeDebug::with_options(options)
            .format_subtree(&tree, root)
            .unwrap();
        assert_eq!(output, "window\n");
    }
}
