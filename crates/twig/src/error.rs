//! Error types for the widget toolkit.

use thiserror::Error;
use twig_core::{ConfigError, ObjectError, WidgetId};
use twig_render::RenderError;

/// Errors returned by widget tree and application operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A structural error in the widget tree (stale id, re-parenting, cycle).
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// The rendering backend failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A typed operation was applied to a widget of another type.
    #[error("widget {id:?} is not a {expected}")]
    WidgetType {
        /// The widget that was addressed.
        id: WidgetId,
        /// The type name the operation required.
        expected: &'static str,
    },

    /// The widget is not a window registered with the application.
    #[error("widget {0:?} is not a registered window")]
    NotAWindow(WidgetId),

    /// The widget cannot hold a layout.
    #[error("widget {0:?} is not a container")]
    NotAContainer(WidgetId),
}

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;
