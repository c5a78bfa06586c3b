//! Theme system for consistent styling.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A color palette for theming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Primary brand color
    pub primary: Color,
    /// Surface color (cards, tiles, controls)
    pub surface: Color,
    /// Raised surface color (tracks, wells)
    pub surface_variant: Color,
    /// Window background color
    pub background: Color,
    /// Error/danger color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Text on primary
    pub on_primary: Color,
    /// Text on surface
    pub on_surface: Color,
    /// Secondary text on surface
    pub on_surface_dim: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// The dark palette. This is the default: launcher frontends ship dark.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::new(0.16, 0.55, 0.91, 1.0),
            surface: Color::new(0.11, 0.12, 0.15, 1.0),
            surface_variant: Color::new(0.20, 0.22, 0.27, 1.0),
            background: Color::new(0.07, 0.08, 0.10, 1.0),
            error: Color::new(0.86, 0.27, 0.27, 1.0),
            success: Color::new(0.25, 0.65, 0.40, 1.0),
            on_primary: Color::WHITE,
            on_surface: Color::new(0.92, 0.93, 0.95, 1.0),
            on_surface_dim: Color::new(0.62, 0.65, 0.70, 1.0),
        }
    }

    /// The light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::new(0.13, 0.45, 0.78, 1.0),
            surface: Color::WHITE,
            surface_variant: Color::new(0.88, 0.89, 0.91, 1.0),
            background: Color::new(0.97, 0.97, 0.98, 1.0),
            error: Color::new(0.72, 0.15, 0.15, 1.0),
            success: Color::new(0.16, 0.52, 0.31, 1.0),
            on_primary: Color::WHITE,
            on_surface: Color::new(0.12, 0.13, 0.15, 1.0),
            on_surface_dim: Color::new(0.40, 0.42, 0.46, 1.0),
        }
    }
}
