//! Label widget for text display.
//!
//! A label paints a single line of text at its origin. With auto-size on
//! (the default) it takes the measured extent of its text whenever the text
//! changes to something non-empty and text metrics are available.

use twig_core::config::TextPadding;
use twig_render::TextMetrics;

use crate::widget::{PaintContext, Widget, WidgetBase};

/// A widget that displays text.
#[derive(Debug, Clone)]
pub struct Label {
    base: WidgetBase,
    text: String,
    auto_size: bool,
}

impl Label {
    /// Create a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.request_measure();
        Self {
            base,
            text: text.into(),
            auto_size: true,
        }
    }

    /// Turn auto-sizing on or off (builder pattern).
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.set_auto_size(auto_size);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, re-sizing the label when auto-size is on.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.auto_size {
            self.base.request_measure();
        }
    }

    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    pub fn set_auto_size(&mut self, auto_size: bool) {
        self.auto_size = auto_size;
        if auto_size {
            self.base.request_measure();
        }
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn measure(&mut self, metrics: &dyn TextMetrics, _padding: &TextPadding) {
        if self.auto_size && !self.text.is_empty() {
            self.base.resize_to(metrics.measure_text(&self.text));
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.text.is_empty() {
            return;
        }
        let origin = ctx.rect().origin;
        let color = if self.base.is_enabled() {
            ctx.style().text
        } else {
            ctx.style().disabled_text
        };
        ctx.renderer().draw_text(&self.text, origin, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twig_render::{MonospaceMetrics, Size};

    #[test]
    fn test_auto_size_follows_text() {
        let metrics = MonospaceMetrics::new(8.0, 16.0);
        let mut label = Label::new("Name:");
        label.measure(&metrics, &TextPadding::default());
        assert_eq!(label.size(), Size::new(40.0, 16.0));
    }

    #[test]
    fn test_fixed_size_label() {
        let metrics = MonospaceMetrics::new(8.0, 16.0);
        let mut label = Label::new("Name:").with_auto_size(false);
        label.measure(&metrics, &TextPadding::default());
        assert_eq!(label.size(), Size::new(100.0, 30.0));
    }
}
