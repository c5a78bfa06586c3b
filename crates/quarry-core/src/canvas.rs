//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A [`Canvas`] implementation that records draw operations as
/// [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship commands to a real backend)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Add a raw draw command.
    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::line(from, to, StrokeStyle { color, width }));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            position,
            content: text.to_string(),
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_starts_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_recording_canvas_records_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => assert_eq!(style.fill, Some(Color::BLACK)),
            _ => panic!("expected Rect command"),
        }
    }

    #[test]
    fn test_recording_canvas_records_stroke_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, 2.0);

        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => {
                assert!(style.fill.is_none());
                assert_eq!(style.stroke.as_ref().map(|s| s.width), Some(2.0));
            }
            _ => panic!("expected Rect command"),
        }
    }

    #[test]
    fn test_recording_canvas_records_circle_and_line() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(5.0, 5.0), 3.0, Color::WHITE);
        canvas.draw_line(Point::ORIGIN, Point::new(10.0, 0.0), Color::BLACK, 1.0);

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::Circle { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Line { .. }));
    }

    #[test]
    fn test_recording_canvas_records_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("50%", Point::new(10.0, 20.0), &TextStyle::default());

        match &canvas.commands()[0] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "50%"),
            _ => panic!("expected Text command"),
        }
    }

    #[test]
    fn test_recording_canvas_take_and_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());

        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
