//! Error types for the render crate.

use thiserror::Error;

use crate::input::SurfaceId;

/// Errors that can occur in a rendering backend.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend could not be initialized.
    #[error("backend initialization failed: {0}")]
    Initialization(String),

    /// The font used for text could not be loaded.
    #[error("failed to load font: {0}")]
    FontLoad(String),

    /// Failed to create a surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreation(String),

    /// The surface does not exist or was already destroyed.
    #[error("unknown surface {0}")]
    UnknownSurface(SurfaceId),

    /// Invalid surface dimensions (zero width or height).
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    /// Writing backend output failed.
    #[error("backend output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
