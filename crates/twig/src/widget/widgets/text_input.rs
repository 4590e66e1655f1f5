//! Single-line text input widget.
//!
//! A text input takes keyboard focus when pressed. While focused it appends
//! committed character input, removes the last grapheme on Backspace and
//! raises `KeyPress {"key": "enter"}` on Enter. Every text change, typed or
//! programmatic, raises `TextChanged {"text": ...}`.
//!
//! # Example
//!
//! ```
//! use twig::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let name = tree.add_root(TextInput::new().with_placeholder("Your name"));
//! tree.on(name, EventKind::TextChanged, |event, _| {
//!     println!("name is now {:?}", event.text());
//! })
//! .unwrap();
//! tree.set_text(name, "Ada").unwrap();
//! ```

use unicode_segmentation::UnicodeSegmentation;

use twig_core::EventKind;
use twig_core::event::{DATA_KEY, DATA_TEXT};
use twig_render::{Key, Point};

use crate::widget::{InputEvent, PaintContext, Widget, WidgetBase};

/// Default width of a text input.
pub const DEFAULT_WIDTH: f32 = 200.0;
/// Default height of a text input.
pub const DEFAULT_HEIGHT: f32 = 30.0;

/// An editable single line of text.
#[derive(Debug, Clone)]
pub struct TextInput {
    base: WidgetBase,
    text: String,
    placeholder: String,
    password: bool,
    max_length: Option<usize>,
}

impl TextInput {
    /// Create an empty text input.
    pub fn new() -> Self {
        let mut base = WidgetBase::new();
        base.set_size(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        Self {
            base,
            text: String::new(),
            placeholder: String::new(),
            password: false,
            max_length: None,
        }
    }

    /// Set the placeholder shown while the text is empty (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mask the text with `*` when painting (builder pattern).
    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Limit the text to `max_length` graphemes (builder pattern).
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.set_max_length(Some(max_length));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Store `text`, truncated to the maximum length, and raise
    /// `TextChanged`. The event is raised even if the text did not change.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if let Some(max) = self.max_length {
            truncate_graphemes(&mut text, max);
        }
        self.text = text;
        self.base
            .post_with(EventKind::TextChanged, [(DATA_TEXT, self.text.clone())]);
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    pub fn set_password(&mut self, password: bool) {
        self.password = password;
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Set or clear the length limit. Text longer than a new limit is cut
    /// silently.
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
        if let Some(max) = max_length {
            truncate_graphemes(&mut self.text, max);
        }
    }

    /// The text as painted: masked in password mode.
    pub fn display_text(&self) -> String {
        if self.password {
            "*".repeat(self.text.graphemes(true).count())
        } else {
            self.text.clone()
        }
    }

    fn backspace(&mut self) -> bool {
        let Some((last, _)) = self.text.grapheme_indices(true).next_back() else {
            return false;
        };
        let mut text = self.text.clone();
        text.truncate(last);
        self.set_text(text);
        true
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_graphemes(text: &mut String, max: usize) {
    if let Some((cut, _)) = text.grapheme_indices(true).nth(max) {
        text.truncate(cut);
    }
}

impl Widget for TextInput {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn accepts_text_input(&self) -> bool {
        self.base.is_enabled()
    }

    fn handle_input(&mut self, input: &InputEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match input {
            InputEvent::Text(committed) => {
                let text = format!("{}{committed}", self.text);
                self.set_text(text);
                true
            }
            InputEvent::Key(Key::Backspace) => self.backspace(),
            InputEvent::Key(Key::Enter) => {
                self.base
                    .post_with(EventKind::KeyPress, [(DATA_KEY, Key::Enter.name())]);
                true
            }
            InputEvent::PointerPress { .. } => true,
            _ => false,
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let style = ctx.style();
        let enabled = self.base.is_enabled();
        let background = if enabled { style.field } else { style.field_disabled };
        let inset = style.padding;

        let (content, color) = if self.text.is_empty() {
            (self.placeholder.clone(), style.disabled_text)
        } else if enabled {
            (self.display_text(), style.text)
        } else {
            (self.display_text(), style.disabled_text)
        };

        ctx.renderer().fill_rect(rect, background);
        if ctx.has_focus() {
            ctx.draw_focus_indicator(0.0);
        } else {
            ctx.draw_border(rect);
        }

        if !content.is_empty() {
            let extent = ctx.measure_text(&content);
            let pos = Point::new(
                rect.left() + inset,
                rect.top() + (rect.height() - extent.height) / 2.0,
            );
            ctx.renderer().draw_text(&content, pos, color);
        }
    }
}
