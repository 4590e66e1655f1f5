//! Push button widget.
//!
//! A button shows a line of text and raises a `Click` event when activated,
//! either programmatically through [`Button::click`] or by releasing the
//! left pointer button over it. Disabled buttons ignore both.
//!
//! # Example
//!
//! ```
//! use twig::prelude::*;
//!
//! let mut tree = WidgetTree::new();
//! let ok = tree.add_root(Button::new("OK").with_id("ok"));
//! tree.on(ok, EventKind::Click, |_, _| println!("clicked")).unwrap();
//! tree.click(ok).unwrap();
//! ```

use twig_core::EventKind;
use twig_core::config::TextPadding;
use twig_render::{Point, Size, TextMetrics};

use crate::widget::{InputEvent, PaintContext, Widget, WidgetBase};

/// A clickable button with a text label.
#[derive(Debug, Clone)]
pub struct Button {
    base: WidgetBase,
    text: String,
}

impl Button {
    /// Create a button with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.request_measure();
        Self {
            base,
            text: text.into(),
        }
    }

    /// The button text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. The button re-sizes to fit it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.request_measure();
    }

    /// Raise a `Click` event with an empty payload. Does nothing when the
    /// button is disabled.
    pub fn click(&mut self) {
        if self.base.is_enabled() {
            self.base.post(EventKind::Click);
        }
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn measure(&mut self, metrics: &dyn TextMetrics, padding: &TextPadding) {
        if self.text.is_empty() {
            return;
        }
        let extent = metrics.measure_text(&self.text);
        self.base.resize_to(Size::new(
            extent.width + padding.button_x,
            extent.height + padding.button_y,
        ));
    }

    fn handle_input(&mut self, input: &InputEvent) -> bool {
        match input {
            InputEvent::PointerRelease { .. } if self.base.is_enabled() => {
                self.click();
                true
            }
            _ => false,
        }
    }

    fn activate(&mut self) -> bool {
        self.click();
        true
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let style = ctx.style();
        let (face, text_color) = if !self.base.is_enabled() {
            (style.button_disabled, style.disabled_text)
        } else if ctx.is_pressed() {
            (style.button_pressed, style.text)
        } else if ctx.is_hovered() {
            (style.button_hover, style.text)
        } else {
            (style.button, style.text)
        };

        ctx.renderer().fill_rect(rect, face);
        ctx.draw_border(rect);

        if !self.text.is_empty() {
            let extent = ctx.measure_text(&self.text);
            let center = rect.center();
            let pos = Point::new(
                center.x - extent.width / 2.0,
                center.y - extent.height / 2.0,
            );
            ctx.renderer().draw_text(&self.text, pos, text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twig_render::MonospaceMetrics;

    #[test]
    fn test_click_posts_only_when_enabled() {
        let mut button = Button::new("Go");
        button.click();
        assert_eq!(button.widget_base().pending_events(), 1);

        let mut disabled = Button::new("Go").with_enabled(false);
        disabled.click();
        assert!(!disabled.handle_input(&InputEvent::PointerRelease { local: Point::ZERO }));
        assert_eq!(disabled.widget_base().pending_events(), 0);
    }

    #[test]
    fn test_measure_adds_padding() {
        let mut button = Button::new("Save");
        button.measure(&MonospaceMetrics::new(8.0, 16.0), &TextPadding::default());
        assert_eq!(button.size(), Size::new(52.0, 26.0));
    }

    #[test]
    fn test_empty_text_keeps_size() {
        let mut button = Button::new("");
        button.measure(&MonospaceMetrics::new(8.0, 16.0), &TextPadding::default());
        assert_eq!(button.size(), Size::new(100.0, 30.0));
    }
}
