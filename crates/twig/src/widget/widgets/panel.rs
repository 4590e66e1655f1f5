//! Panel widget: a container with a background, a border and an optional
//! title.
//!
//! When the panel has a title, laid-out children are pushed down by one line
//! of text so the title stays visible.

use twig_core::config::TextPadding;
use twig_render::{Color, Point, TextMetrics};

use crate::widget::layout::ContainerLayout;
use crate::widget::{PaintContext, Widget, WidgetBase};

/// Gap between the title and the panel's top edge.
const TITLE_MARGIN: f32 = 4.0;

/// A titled, framed container.
#[derive(Debug)]
pub struct Panel {
    base: WidgetBase,
    layout: ContainerLayout,
    title: String,
    background: Option<Color>,
    border: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            layout: ContainerLayout::new(),
            title: String::new(),
            background: None,
            border: true,
        }
    }

    /// Set the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// Override the background color (builder pattern).
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Show or hide the border (builder pattern).
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Grow to fit the children after every layout pass (builder pattern).
    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.layout.set_auto_resize(auto_resize);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. Takes effect on children at the next layout pass.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if self.title.is_empty() {
            self.layout.set_content_offset(Point::ZERO);
        } else {
            self.base.request_measure();
        }
    }

    /// The background color, if overridden.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// The layout state.
    pub fn layout(&self) -> &ContainerLayout {
        &self.layout
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn measure(&mut self, metrics: &dyn TextMetrics, _padding: &TextPadding) {
        let offset = if self.title.is_empty() {
            0.0
        } else {
            metrics.line_height() + TITLE_MARGIN
        };
        self.layout.set_content_offset(Point::new(0.0, offset));
    }

    fn container(&self) -> Option<&ContainerLayout> {
        Some(&self.layout)
    }

    fn container_mut(&mut self) -> Option<&mut ContainerLayout> {
        Some(&mut self.layout)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let style = ctx.style();
        let background = self.background.unwrap_or(style.panel);
        let (text_color, inset) = (style.text, style.padding);

        ctx.renderer().fill_rect(rect, background);
        if self.border {
            ctx.draw_border(rect);
        }
        if !self.title.is_empty() {
            let pos = Point::new(rect.left() + inset, rect.top() + TITLE_MARGIN / 2.0);
            ctx.renderer().draw_text(&self.title, pos, text_color);
        }
    }
}
