//! Checkbox widget.
//!
//! A checkbox is a small box with a text label to its right. Toggling it,
//! by pointer release or programmatically, flips the checked state and
//! raises `Click {"checked": "true" | "false"}`.

use twig_core::EventKind;
use twig_core::config::TextPadding;
use twig_core::event::DATA_CHECKED;
use twig_render::{Point, Rect, Size, TextMetrics};

use crate::widget::{InputEvent, PaintContext, Widget, WidgetBase};

/// Side length of the check indicator.
const INDICATOR_SIZE: f32 = 14.0;
/// Gap between the indicator and the label.
const INDICATOR_SPACING: f32 = 6.0;

/// A two-state checkbox with a label.
#[derive(Debug, Clone)]
pub struct CheckBox {
    base: WidgetBase,
    text: String,
    checked: bool,
}

impl CheckBox {
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.request_measure();
        Self {
            base,
            text: text.into(),
            checked: false,
        }
    }

    /// Set the initial checked state (builder pattern).
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.request_measure();
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state without raising an event.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the checked state and raise `Click`. Does nothing when disabled.
    pub fn toggle(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.checked = !self.checked;
        self.base
            .post_with(EventKind::Click, [(DATA_CHECKED, self.checked.to_string())]);
    }
}

impl Widget for CheckBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn measure(&mut self, metrics: &dyn TextMetrics, _padding: &TextPadding) {
        let text = metrics.measure_text(&self.text);
        self.base.resize_to(Size::new(
            INDICATOR_SIZE + INDICATOR_SPACING + text.width,
            text.height.max(INDICATOR_SIZE),
        ));
    }

    fn handle_input(&mut self, input: &InputEvent) -> bool {
        match input {
            InputEvent::PointerRelease { .. } if self.base.is_enabled() => {
                self.toggle();
                true
            }
            _ => false,
        }
    }

    fn activate(&mut self) -> bool {
        self.toggle();
        true
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let style = ctx.style();
        let enabled = self.base.is_enabled();
        let field = if enabled { style.field } else { style.field_disabled };
        let mark = style.accent;
        let text_color = if enabled { style.text } else { style.disabled_text };

        let indicator = Rect::new(
            rect.left(),
            rect.top() + (rect.height() - INDICATOR_SIZE) / 2.0,
            INDICATOR_SIZE,
            INDICATOR_SIZE,
        );
        ctx.renderer().fill_rect(indicator, field);
        ctx.draw_border(indicator);
        if self.checked {
            ctx.renderer().fill_rect(indicator.deflate(3.0), mark);
        }

        if !self.text.is_empty() {
            let extent = ctx.measure_text(&self.text);
            let pos = Point::new(
                indicator.right() + INDICATOR_SPACING,
                rect.top() + (rect.height() - extent.height) / 2.0,
            );
            ctx.renderer().draw_text(&self.text, pos, text_color);
        }
    }
}
