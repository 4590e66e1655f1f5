//! Prelude module for Twig.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use twig::prelude::*;
//! ```
//!
//! This provides access to:
//! - Application lifecycle (`Application`, `LoopHandle`)
//! - Events (`Event`, `EventKind`)
//! - Widget foundation (`Widget`, `WidgetBase`, `WidgetTree`, `PaintContext`)
//! - The standard widgets (`Button`, `Label`, `TextInput`, ...)
//! - Layouts (`VerticalLayout`, `HorizontalLayout`, `GridLayout`)
//! - Geometry and backend types (`Point`, `Size`, `Rect`, `Color`, `Backend`)

// ============================================================================
// Core Application
// ============================================================================

pub use crate::{Application, Error, LoopHandle};

// ============================================================================
// Events and Identity
// ============================================================================

pub use twig_core::{Event, EventKind, WidgetId};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    InputEvent, PaintContext, PointerState, Style, Widget, WidgetBase, WidgetTree,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    Button, CheckBox, Container, Label, Panel, ProgressBar, Slider, TextInput, Window,
};

// ============================================================================
// Layout System
// ============================================================================

pub use crate::widget::layout::{GridLayout, HorizontalLayout, Layout, VerticalLayout};

// ============================================================================
// Geometry, Graphics and Backends
// ============================================================================

pub use twig_render::{
    Backend, BackendEvent, Color, ConsoleBackend, Key, MouseButton, Point, RecordingBackend,
    Rect, Renderer, Size, SurfaceId,
};
