//! Core types and traits for the Quarry launcher UI toolkit.
//!
//! This crate provides the foundational types used throughout Quarry:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Render primitives: [`DrawCommand`] and the [`RecordingCanvas`] backend
//! - The [`Widget`] trait and its [`Canvas`] paint seam

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod theme;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{BoxStyle, DrawCommand, StrokeStyle};
pub use event::{Event, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use theme::ColorPalette;
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
    WidgetId,
};
