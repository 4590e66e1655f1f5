//! Horizontal slider widget.
//!
//! A slider picks an integer from `[minimum, maximum]` in multiples of
//! `step` counted from the minimum. Pressing or dragging on the track moves
//! the value to the pointer. Every change raises `ValueChanged {"value": v}`;
//! setting the current value again raises nothing.
//!
//! # Example
//!
//! ```
//! use twig::widget::widgets::Slider;
//!
//! let mut volume = Slider::new(0, 100).with_step(10);
//! volume.set_value(47);
//! assert_eq!(volume.value(), 50);
//! volume.set_value(250);
//! assert_eq!(volume.value(), 100);
//! ```

use twig_core::EventKind;
use twig_core::event::DATA_VALUE;
use twig_render::{Point, Rect, Size};

use super::ordered;
use crate::widget::{InputEvent, PaintContext, Widget, WidgetBase};

/// Width of the slider handle.
const HANDLE_WIDTH: f32 = 10.0;
/// Height of the slider track.
const TRACK_HEIGHT: f32 = 4.0;

/// A horizontal integer slider.
#[derive(Debug, Clone)]
pub struct Slider {
    base: WidgetBase,
    minimum: i32,
    maximum: i32,
    value: i32,
    step: i32,
}

impl Slider {
    /// Create a slider over `[minimum, maximum]` at the minimum, step 1.
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
            step: 1,
        }
    }

    /// Set the step (builder pattern). Steps below 1 are treated as 1.
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self.value = self.normalize(self.value);
        self
    }

    /// Set the initial value without raising an event (builder pattern).
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = self.normalize(value);
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Clamp and snap `value`, then store it. Raises `ValueChanged` only if
    /// the stored value changed.
    pub fn set_value(&mut self, value: i32) {
        let value = self.normalize(value);
        if value != self.value {
            self.value = value;
            self.base
                .post_with(EventKind::ValueChanged, [(DATA_VALUE, value.to_string())]);
        }
    }

    /// Change the range (swapped if reversed) and re-fit the value.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        let (minimum, maximum) = ordered(minimum, maximum);
        self.minimum = minimum;
        self.maximum = maximum;
        self.set_value(self.value);
    }

    /// Change the step and re-fit the value.
    pub fn set_step(&mut self, step: i32) {
        self.step = step.max(1);
        self.set_value(self.value);
    }

    /// The position of the value along the range, from 0.0 to 1.0.
    pub fn fraction(&self) -> f32 {
        let span = i64::from(self.maximum) - i64::from(self.minimum);
        if span == 0 {
            return 0.0;
        }
        (i64::from(self.value) - i64::from(self.minimum)) as f32 / span as f32
    }

    /// Clamp into the range, then round to the nearest step from the minimum.
    fn normalize(&self, value: i32) -> i32 {
        let min = i64::from(self.minimum);
        let max = i64::from(self.maximum);
        let step = i64::from(self.step);
        let offset = i64::from(value).clamp(min, max) - min;
        let snapped = min + (offset + step / 2) / step * step;
        // Rounding up may overshoot a maximum that is not on the step grid.
        let snapped = if snapped > max { snapped - step } else { snapped };
        snapped.clamp(min, max) as i32
    }

    /// The value under a local x coordinate.
    fn value_at(&self, x: f32) -> i32 {
        let travel = (self.base.width() - HANDLE_WIDTH).max(1.0);
        let fraction = ((x - HANDLE_WIDTH / 2.0) / travel).clamp(0.0, 1.0);
        let span = (i64::from(self.maximum) - i64::from(self.minimum)) as f32;
        (i64::from(self.minimum) + (fraction * span).round() as i64) as i32
    }
}

impl Widget for Slider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn handle_input(&mut self, input: &InputEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match input {
            InputEvent::PointerPress { local } | InputEvent::PointerDrag { local } => {
                self.set_value(self.value_at(local.x));
                true
            }
            InputEvent::PointerRelease { .. } => true,
            _ => false,
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let style = ctx.style();
        let enabled = self.base.is_enabled();
        let track_color = if enabled { style.field } else { style.field_disabled };
        let handle_color = if enabled { style.accent } else { style.button_disabled };

        let track = Rect::new(
            rect.left(),
            rect.center().y - TRACK_HEIGHT / 2.0,
            rect.width(),
            TRACK_HEIGHT,
        );
        ctx.renderer().fill_rect(track, track_color);
        ctx.draw_border(track);

        let travel = (rect.width() - HANDLE_WIDTH).max(0.0);
        let handle = Rect::from_origin_size(
            Point::new(rect.left() + travel * self.fraction(), rect.top()),
            Size::new(HANDLE_WIDTH, rect.height()),
        );
        ctx.renderer().fill_rect(handle, handle_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_and_snap() {
        let mut slider = Slider::new(0, 100).with_step(10);
        slider.set_value(44);
        assert_eq!(slider.value(), 40);
        slider.set_value(45);
        assert_eq!(slider.value(), 50);
        slider.set_value(-5);
        assert_eq!(slider.value(), 0);

        // 95 is off the grid: 100 would round up past it.
        let mut odd = Slider::new(0, 95).with_step(10);
        odd.set_value(95);
        assert_eq!(odd.value(), 90);
    }

    #[test]
    fn test_value_changed_only_on_change() {
        let mut slider = Slider::new(0, 10);
        slider.set_value(3);
        slider.set_value(3);
        let pending = slider.widget_base_mut().take_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].data.get("value").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let mut slider = Slider::new(10, -10);
        assert_eq!((slider.minimum(), slider.maximum()), (-10, 10));
        slider.set_range(5, 0);
        assert_eq!((slider.minimum(), slider.maximum()), (0, 5));
    }

    #[test]
    fn test_pointer_maps_to_value() {
        // 200 wide, handle 10: travel is 190 starting at x = 5.
        let mut slider = Slider::new(0, 100);
        slider.handle_input(&InputEvent::PointerPress {
            local: Point::new(100.0, 10.0),
        });
        assert_eq!(slider.value(), 50);
        slider.handle_input(&InputEvent::PointerDrag {
            local: Point::new(500.0, 10.0),
        });
        assert_eq!(slider.value(), 100);
        slider.handle_input(&InputEvent::PointerDrag {
            local: Point::new(-20.0, 10.0),
        });
        assert_eq!(slider.value(), 0);
    }
}
