//! Window management.
//!
//! Windows themselves are widgets ([`Window`](crate::widget::widgets::Window));
//! this module holds the bookkeeping the [`Application`](crate::Application)
//! needs to route backend input to them.

mod window_manager;

pub use window_manager::WindowRegistry;
