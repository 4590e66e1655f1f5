//! Visual style: the colors and metrics widgets paint with.

use twig_render::Color;

/// Colors and metrics used when painting widgets.
///
/// The tree carries one style for every widget; a widget can override it
/// through [`WidgetBase::set_style`](super::WidgetBase::set_style).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Window clear color.
    pub background: Color,
    /// Regular text.
    pub text: Color,
    /// Text of disabled widgets and placeholders.
    pub disabled_text: Color,
    /// Widget outlines.
    pub border: Color,
    /// Outline of the focused widget.
    pub focus: Color,
    /// Button face.
    pub button: Color,
    /// Button face under the pointer.
    pub button_hover: Color,
    /// Button face while pressed.
    pub button_pressed: Color,
    /// Face of disabled buttons.
    pub button_disabled: Color,
    /// Background of text inputs, check boxes and tracks.
    pub field: Color,
    /// Field background when disabled.
    pub field_disabled: Color,
    /// Filled portion of progress bars, slider handles and check marks.
    pub accent: Color,
    /// Panel background.
    pub panel: Color,
    /// Outline width.
    pub border_width: f32,
    /// Inset of text inside fields.
    pub padding: f32,
}

impl Style {
    /// The default light style.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(240, 240, 240),
            text: Color::rgb(0, 0, 0),
            disabled_text: Color::rgb(150, 150, 150),
            border: Color::rgb(180, 180, 180),
            focus: Color::rgb(0, 120, 215),
            button: Color::rgb(225, 225, 225),
            button_hover: Color::rgb(210, 210, 210),
            button_pressed: Color::rgb(195, 195, 195),
            button_disabled: Color::rgb(200, 200, 200),
            field: Color::rgb(255, 255, 255),
            field_disabled: Color::rgb(240, 240, 240),
            accent: Color::rgb(0, 120, 215),
            panel: Color::rgb(250, 250, 250),
            border_width: 1.0,
            padding: 5.0,
        }
    }

    /// A dark style.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(32, 32, 32),
            text: Color::rgb(230, 230, 230),
            disabled_text: Color::rgb(120, 120, 120),
            border: Color::rgb(80, 80, 80),
            focus: Color::rgb(76, 160, 255),
            button: Color::rgb(60, 60, 60),
            button_hover: Color::rgb(75, 75, 75),
            button_pressed: Color::rgb(90, 90, 90),
            button_disabled: Color::rgb(45, 45, 45),
            field: Color::rgb(24, 24, 24),
            field_disabled: Color::rgb(40, 40, 40),
            accent: Color::rgb(76, 160, 255),
            panel: Color::rgb(40, 40, 40),
            border_width: 1.0,
            padding: 5.0,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::light()
    }
}

static_assertions::assert_impl_all!(Style: Clone, Send, Sync);
