//! Progress bar widget.
//!
//! A progress bar fills a horizontal track in proportion to its value within
//! `[minimum, maximum]` and can show a caption built from a format string.
//!
//! # Format Placeholders
//!
//! - `{value}`: the current value
//! - `{min}`: the minimum
//! - `{max}`: the maximum
//! - `{percent}`: completion from 0 to 100
//!
//! Anything else, including unknown names and unbalanced braces, is shown
//! as written. The default format is `"{percent}%"`.
//!
//! # Example
//!
//! ```
//! use twig::widget::widgets::ProgressBar;
//!
//! let mut bar = ProgressBar::new(0, 200).with_format("{value}/{max} files");
//! bar.set_value(50);
//! assert_eq!(bar.percentage(), 25);
//! assert_eq!(bar.text(), "50/200 files");
//! ```

use twig_render::{Point, Rect, Size};

use super::ordered;
use crate::widget::{PaintContext, Widget, WidgetBase};

/// The default caption format.
pub const DEFAULT_FORMAT: &str = "{percent}%";

/// A horizontal progress indicator.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    base: WidgetBase,
    minimum: i32,
    maximum: i32,
    value: i32,
    format: String,
    text_visible: bool,
}

impl ProgressBar {
    /// Create a bar over `[minimum, maximum]` at the minimum.
    ///
    /// A reversed range is swapped.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        let mut base = WidgetBase::new();
        base.set_size(200.0, 20.0);
        let (minimum, maximum) = ordered(minimum, maximum);
        Self {
            base,
            minimum,
            maximum,
            value: minimum,
            format: DEFAULT_FORMAT.to_string(),
            text_visible: true,
        }
    }

    /// Set the caption format (builder pattern).
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Show or hide the caption (builder pattern).
    pub fn with_text_visible(mut self, visible: bool) -> Self {
        self.text_visible = visible;
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value, clamped into the range.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.minimum, self.maximum);
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Change the range (swapped if reversed) and re-clamp the value.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        let (minimum, maximum) = ordered(minimum, maximum);
        self.minimum = minimum;
        self.maximum = maximum;
        self.set_value(self.value);
    }

    /// Return to the minimum.
    pub fn reset(&mut self) {
        self.value = self.minimum;
    }

    /// Completion from 0 to 100. An empty range counts as complete.
    pub fn percentage(&self) -> i32 {
        let span = i64::from(self.maximum) - i64::from(self.minimum);
        if span == 0 {
            return 100;
        }
        ((i64::from(self.value) - i64::from(self.minimum)) * 100 / span) as i32
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    pub fn is_text_visible(&self) -> bool {
        self.text_visible
    }

    pub fn set_text_visible(&mut self, visible: bool) {
        self.text_visible = visible;
    }

    /// The caption: the format with its placeholders filled in.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.format.len());
        let mut rest = self.format.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            rest = &rest[open..];
            let Some(close) = rest.find('}') else {
                break;
            };
            match self.placeholder(&rest[1..close]) {
                Some(value) => {
                    out.push_str(&value.to_string());
                    rest = &rest[close + 1..];
                }
                None => {
                    // Not a placeholder: keep the brace and rescan after it.
                    out.push('{');
                    rest = &rest[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn placeholder(&self, name: &str) -> Option<i32> {
        match name {
            "value" => Some(self.value),
            "min" => Some(self.minimum),
            "max" => Some(self.maximum),
            "percent" => Some(self.percentage()),
            _ => None,
        }
    }
}

impl Widget for ProgressBar {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let style = ctx.style();
        let (field, chunk, text_color) = (style.field, style.accent, style.text);

        ctx.renderer().fill_rect(rect, field);
        let filled = rect.width() * self.percentage() as f32 / 100.0;
        if filled > 0.0 {
            let chunk_rect = Rect::from_origin_size(rect.origin, Size::new(filled, rect.height()));
            ctx.renderer().fill_rect(chunk_rect, chunk);
        }
        ctx.draw_border(rect);

        if self.text_visible {
            let caption = self.text();
            if !caption.is_empty() {
                let extent = ctx.measure_text(&caption);
                let center = rect.center();
                let pos = Point::new(
                    center.x - extent.width / 2.0,
                    center.y - extent.height / 2.0,
                );
                ctx.renderer().draw_text(&caption, pos, text_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_clamped() {
        let mut bar = ProgressBar::new(0, 10);
        bar.set_value(42);
        assert_eq!(bar.value(), 10);
        bar.set_value(-1);
        assert_eq!(bar.value(), 0);
        bar.set_range(20, 5);
        assert_eq!((bar.minimum(), bar.maximum(), bar.value()), (5, 20, 5));
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let mut bar = ProgressBar::new(10, 0);
        assert_eq!((bar.minimum(), bar.maximum()), (0, 10));
        assert_eq!(bar.value(), 0);

        bar.set_value(8);
        bar.set_range(5, -5);
        assert_eq!((bar.minimum(), bar.maximum()), (-5, 5));
        assert_eq!(bar.value(), 5);
    }

    #[test]
    fn test_percentage() {
        let mut bar = ProgressBar::new(-50, 50);
        bar.set_value(0);
        assert_eq!(bar.percentage(), 50);
        assert_eq!(bar.text(), "50%");
        assert_eq!(ProgressBar::new(3, 3).percentage(), 100);
    }

    #[test]
    fn test_format_placeholders() {
        let mut bar = ProgressBar::new(0, 4).with_format("{value} of {max} ({percent}%) from {min}");
        bar.set_value(1);
        assert_eq!(bar.text(), "1 of 4 (25%) from 0");
    }

    #[test]
    fn test_unknown_and_unbalanced_placeholders() {
        let bar = ProgressBar::new(0, 10).with_format("{eta} {value");
        assert_eq!(bar.text(), "{eta} {value");
        let bar = ProgressBar::new(0, 10).with_format("{{value}}");
        assert_eq!(bar.text(), "{0}");
        let bar = ProgressBar::new(0, 10).with_format("done}");
        assert_eq!(bar.text(), "done}");
    }
}
