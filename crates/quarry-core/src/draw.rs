//! Draw commands for rendering backends.
//!
//! All painting reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for lines and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// A single draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A (possibly rounded) rectangle.
    Rect {
        /// Bounds of the rectangle
        bounds: Rect,
        /// Corner radii
        radius: CornerRadius,
        /// Fill/stroke style
        style: BoxStyle,
    },
    /// A circle.
    Circle {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f32,
        /// Fill/stroke style
        style: BoxStyle,
    },
    /// A line segment.
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },
    /// A text run.
    Text {
        /// Baseline-left position
        position: Point,
        /// Text content
        content: String,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// A filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// A filled rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            style: BoxStyle::fill(color),
        }
    }

    /// A line segment.
    #[must_use]
    pub const fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }
}
