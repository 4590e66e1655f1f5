//! Standard widgets for Twig.
//!
//! - [`Button`]: clickable button with text
//! - [`Label`]: text display
//! - [`TextInput`]: single-line text entry
//! - [`CheckBox`]: two-state toggle with a label
//! - [`Slider`]: horizontal integer slider
//! - [`ProgressBar`]: progress indicator with a formatted caption
//! - [`Container`]: invisible box that arranges its children
//! - [`Panel`]: titled, framed container
//! - [`Window`]: top-level window

mod button;
mod checkbox;
mod container;
mod label;
mod panel;
mod progress_bar;
mod slider;
mod text_input;
mod window;

pub use button::Button;
pub use checkbox::CheckBox;
pub use container::Container;
pub use label::Label;
pub use panel::Panel;
pub use progress_bar::ProgressBar;
pub use slider::Slider;
pub use text_input::TextInput;
pub use window::Window;

/// `(a, b)` sorted, for ranges given in either order.
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}
