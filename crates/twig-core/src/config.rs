//! Toolkit configuration.
//!
//! [`ToolkitConfig`] gathers the tunable constants of the toolkit: event loop
//! pacing, window defaults, auto-size padding, layout defaults, and the cell
//! metrics used by text-console backends. Every field has a default, so a
//! config file only needs to mention what it changes.
//!
//! # Example
//!
//! ```
//! use twig_core::config::ToolkitConfig;
//!
//! let config = ToolkitConfig::from_toml_str(r#"
//!     [event_loop]
//!     frame_interval_ms = 33
//!
//!     [window]
//!     title = "Inventory"
//! "#).unwrap();
//!
//! assert_eq!(config.event_loop.frame_interval_ms, 33);
//! assert_eq!(config.window.width, 800.0);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Event loop pacing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventLoopConfig {
    /// Sleep between two polling iterations, in milliseconds. Zero disables
    /// the sleep.
    pub frame_interval_ms: u64,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
        }
    }
}

/// Defaults applied to newly created windows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowDefaults {
    /// Window title.
    pub title: String,
    /// Window width in device pixels.
    pub width: f32,
    /// Window height in device pixels.
    pub height: f32,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Padding added around measured text by auto-sizing widgets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextPadding {
    /// Horizontal padding added to a button's text width.
    pub button_x: f32,
    /// Vertical padding added to a button's text height.
    pub button_y: f32,
}

impl Default for TextPadding {
    fn default() -> Self {
        Self {
            button_x: 20.0,
            button_y: 10.0,
        }
    }
}

/// Defaults for layouts built without explicit parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutDefaults {
    /// Gap between consecutive children.
    pub spacing: f32,
    /// Inset from the container edge.
    pub padding: f32,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            padding: 10.0,
        }
    }
}

/// Character-cell metrics for text-console backends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleMetrics {
    /// Width of one character cell in device pixels.
    pub cell_width: f32,
    /// Height of one character cell (one line) in device pixels.
    pub cell_height: f32,
}

impl Default for ConsoleMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

/// Complete toolkit configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Event loop pacing.
    pub event_loop: EventLoopConfig,
    /// Window defaults.
    pub window: WindowDefaults,
    /// Auto-size padding.
    pub text_padding: TextPadding,
    /// Layout defaults.
    pub layout: LayoutDefaults,
    /// Console backend cell metrics.
    pub console: ConsoleMetrics,
}

impl ToolkitConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: crate::logging::targets::CONFIG, path = %path.display(), "loading toolkit config");
        Self::from_toml_str(&text)
    }

    /// The event loop sleep as a [`Duration`].
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.event_loop.frame_interval_ms)
    }

    /// Check value ranges that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                })
            }
        }

        non_negative("window.width", self.window.width)?;
        non_negative("window.height", self.window.height)?;
        non_negative("text_padding.button_x", self.text_padding.button_x)?;
        non_negative("text_padding.button_y", self.text_padding.button_y)?;
        non_negative("layout.spacing", self.layout.spacing)?;
        non_negative("layout.padding", self.layout.padding)?;

        for (field, value) in [
            ("console.cell_width", self.console.cell_width),
            ("console.cell_height", self.console.cell_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
