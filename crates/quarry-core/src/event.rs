//! Input events for widgets.
//!
//! The host runtime translates platform input into these events and dispatches
//! them to the widget tree. Move and release events are delivered to every
//! interactive widget regardless of hit bounds, so a widget mid-drag keeps
//! receiving them after the pointer leaves its surface; widgets not involved
//! in the interaction must treat them as no-ops.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Pointer interaction aborted by the platform (e.g., window lost the
    /// pointer mid-drag). Always ends any in-progress drag.
    PointerCancel,
    /// Mouse wheel scrolled
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
    /// Mouse entered widget bounds
    MouseEnter,
    /// Mouse left widget bounds
    MouseLeave,
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
    /// Window resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

impl Event {
    /// Check if this is a mouse event.
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseMove { .. }
                | Self::MouseDown { .. }
                | Self::MouseUp { .. }
                | Self::MouseEnter
                | Self::MouseLeave
        )
    }

    /// Check if this is a focus event.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusIn | Self::FocusOut)
    }

    /// Get the position if this is a positional event.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_is_mouse() {
        assert!(Event::MouseMove {
            position: Point::ORIGIN
        }
        .is_mouse());
        assert!(Event::MouseEnter.is_mouse());
        assert!(!Event::FocusIn.is_mouse());
        assert!(!Event::PointerCancel.is_mouse());
    }

    #[test]
    fn test_event_is_focus() {
        assert!(Event::FocusIn.is_focus());
        assert!(Event::FocusOut.is_focus());
        assert!(!Event::MouseLeave.is_focus());
    }

    #[test]
    fn test_event_position() {
        let pos = Point::new(100.0, 200.0);
        assert_eq!(Event::MouseMove { position: pos }.position(), Some(pos));
        assert_eq!(
            Event::MouseDown {
                position: pos,
                button: MouseButton::Left
            }
            .position(),
            Some(pos)
        );
        assert_eq!(
            Event::MouseUp {
                position: pos,
                button: MouseButton::Right
            }
            .position(),
            Some(pos)
        );
        assert_eq!(Event::PointerCancel.position(), None);
        assert_eq!(
            Event::Scroll {
                delta_x: 1.0,
                delta_y: -1.0
            }
            .position(),
            None
        );
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let events = vec![
            Event::MouseMove {
                position: Point::new(1.0, 2.0),
            },
            Event::MouseDown {
                position: Point::new(1.0, 2.0),
                button: MouseButton::Left,
            },
            Event::MouseUp {
                position: Point::new(1.0, 2.0),
                button: MouseButton::Middle,
            },
            Event::PointerCancel,
            Event::Scroll {
                delta_x: 0.0,
                delta_y: 3.0,
            },
            Event::MouseEnter,
            Event::MouseLeave,
            Event::FocusIn,
            Event::FocusOut,
            Event::Resize {
                width: 800.0,
                height: 600.0,
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).expect("serialize");
            let back: Event = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_mouse_button_equality() {
        assert_eq!(MouseButton::Left, MouseButton::Left);
        assert_ne!(MouseButton::Left, MouseButton::Right);
    }
}
