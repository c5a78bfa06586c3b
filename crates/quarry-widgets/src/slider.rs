//! Slider widget for value selection.
//!
//! Maps horizontal pointer drags to a value in `[min, max]`, snapping to the
//! nearest of the configured marks and/or step grid. The host dispatches
//! mouse-move and mouse-up events process-wide; the widget only reacts to
//! them while its own drag is active, so co-mounted sliders never interfere.

use quarry_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, ColorPalette, Constraints, Event, MouseButton, Point, Rect, Size, TextStyle,
    TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

const MARK_DOT_RADIUS: f32 = 3.0;
const MARK_LABEL_BAND: f32 = 16.0;
const MARK_LABEL_SIZE: f32 = 12.0;

/// Message emitted when the slider commits a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new value
    pub value: f32,
}

/// A labeled snap target on the track.
///
/// Marks are always valid snap points, regardless of `step`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Value the mark sits at (expected within `[min, max]`)
    pub value: f32,
    /// Label rendered under the track
    pub label: String,
}

impl Mark {
    /// Create a new mark.
    #[must_use]
    pub fn new(value: f32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Slider widget for selecting a value from a range.
#[derive(Debug, Serialize, Deserialize)]
pub struct Slider {
    /// Current committed value
    value: f32,
    /// Minimum value
    min: f32,
    /// Maximum value
    max: f32,
    /// Step increment (0.0 = continuous)
    step: f32,
    /// Labeled snap targets
    marks: Vec<Mark>,
    /// Whether the slider is disabled
    disabled: bool,
    /// Track color
    track_color: Color,
    /// Active track color
    active_color: Color,
    /// Thumb color
    thumb_color: Color,
    /// Mark label color
    label_color: Color,
    /// Thumb radius
    thumb_radius: f32,
    /// Track height
    track_height: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether currently dragging
    #[serde(skip)]
    dragging: bool,
    /// Horizontal pixel where the current drag began
    #[serde(skip)]
    drag_origin_x: f32,
    /// Committed value when the current drag began
    #[serde(skip)]
    drag_origin_value: f32,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    /// Create a new slider with default values.
    #[must_use]
    pub fn new() -> Self {
        let palette = ColorPalette::dark();
        Self {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            step: 0.0,
            marks: Vec::new(),
            disabled: false,
            track_color: palette.surface_variant,
            active_color: palette.primary,
            thumb_color: Color::WHITE,
            label_color: palette.on_surface_dim,
            thumb_radius: 10.0,
            track_height: 4.0,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            dragging: false,
            drag_origin_x: 0.0,
            drag_origin_value: 0.0,
        }
    }

    /// Set the current value.
    #[must_use]
    pub fn value(mut self, value: f32) -> Self {
        self.value = if self.min <= self.max {
            value.clamp(self.min, self.max)
        } else {
            value
        };
        self
    }

    /// Set the minimum value.
    #[must_use]
    pub fn min(mut self, min: f32) -> Self {
        self.min = min;
        // min > max can occur temporarily during a builder chain
        if self.min <= self.max {
            self.value = self.value.clamp(self.min, self.max);
        }
        self
    }

    /// Set the maximum value.
    #[must_use]
    pub fn max(mut self, max: f32) -> Self {
        self.max = max;
        if self.min <= self.max {
            self.value = self.value.clamp(self.min, self.max);
        }
        self
    }

    /// Set the step increment (0.0 disables the step grid).
    #[must_use]
    pub fn step(mut self, step: f32) -> Self {
        self.step = step.abs();
        self
    }

    /// Replace all marks.
    #[must_use]
    pub fn marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = marks;
        self
    }

    /// Add a single mark.
    #[must_use]
    pub fn mark(mut self, value: f32, label: impl Into<String>) -> Self {
        self.marks.push(Mark::new(value, label));
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set track color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set active track color.
    #[must_use]
    pub const fn active_color(mut self, color: Color) -> Self {
        self.active_color = color;
        self
    }

    /// Set thumb color.
    #[must_use]
    pub const fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Set mark label color.
    #[must_use]
    pub const fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Set thumb radius.
    #[must_use]
    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius.max(0.0);
        self
    }

    /// Set track height.
    #[must_use]
    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get the current committed value.
    #[must_use]
    pub const fn get_value(&self) -> f32 {
        self.value
    }

    /// Get the minimum value.
    #[must_use]
    pub const fn get_min(&self) -> f32 {
        self.min
    }

    /// Get the maximum value.
    #[must_use]
    pub const fn get_max(&self) -> f32 {
        self.max
    }

    /// Get the step increment (0.0 = continuous).
    #[must_use]
    pub const fn get_step(&self) -> f32 {
        self.step
    }

    /// Get the configured marks.
    #[must_use]
    pub fn get_marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set the value programmatically.
    ///
    /// The value is snapped and clamped like a committed interaction, but no
    /// change message is produced: messages are reserved for user input.
    pub fn set_value(&mut self, value: f32) {
        self.value = self.snap(value);
    }

    /// Update the value range, keeping the committed value where possible.
    ///
    /// The committed value is clamped into the new range but not re-snapped;
    /// the next committed input snaps against the new configuration.
    pub fn set_range(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max;
        if self.min <= self.max {
            self.value = self.value.clamp(self.min, self.max);
        } else {
            self.value = self.min;
        }
    }

    /// Update the step increment (0.0 disables the step grid).
    pub fn set_step(&mut self, step: f32) {
        self.step = step.abs();
    }

    /// Replace the marks.
    pub fn set_marks(&mut self, marks: Vec<Mark>) {
        self.marks = marks;
    }

    /// Get the normalized value (0.0 - 1.0).
    #[must_use]
    pub fn normalized_value(&self) -> f32 {
        self.fraction_of(self.value)
    }

    fn span(&self) -> f32 {
        self.max - self.min
    }

    fn fraction_of(&self, value: f32) -> f32 {
        if self.span() <= 0.0 {
            0.0
        } else {
            ((value - self.min) / self.span()).clamp(0.0, 1.0)
        }
    }

    /// Left edge of the track in absolute pixels.
    fn track_start(&self) -> f32 {
        self.bounds.x + self.thumb_radius
    }

    /// Usable track width; zero or negative before layout.
    fn track_width(&self) -> f32 {
        2.0f32.mul_add(-self.thumb_radius, self.bounds.width)
    }

    /// Vertical center of the track band (labels hang below it).
    fn center_y(&self) -> f32 {
        let band = if self.marks.is_empty() {
            0.0
        } else {
            MARK_LABEL_BAND
        };
        self.bounds.y + (self.bounds.height - band) / 2.0
    }

    /// Raw value under an absolute x position.
    ///
    /// Returns the current value until the track has a positive width, and
    /// the minimum for a degenerate (single-point) range.
    fn value_at(&self, x: f32) -> f32 {
        if self.span() <= 0.0 {
            return self.min;
        }
        let width = self.track_width();
        if width <= 0.0 {
            return self.value;
        }
        let fraction = ((x - self.track_start()) / width).clamp(0.0, 1.0);
        fraction.mul_add(self.span(), self.min)
    }

    /// Snap a candidate value to the nearest valid stop.
    ///
    /// Candidates are every mark, then the nearest step-grid point. Marks are
    /// enumerated first, so an exact mark/grid tie resolves to the mark. When
    /// a step is configured the chosen point is rounded to the step's decimal
    /// precision to keep repeated drags off floating-point drift.
    fn snap(&self, candidate: f32) -> f32 {
        if self.span() <= 0.0 {
            return self.min;
        }
        let clamped = candidate.clamp(self.min, self.max);

        let mut best: Option<f32> = None;
        let mut best_distance = f32::INFINITY;
        for mark in &self.marks {
            let distance = (mark.value - clamped).abs();
            if distance < best_distance {
                best = Some(mark.value);
                best_distance = distance;
            }
        }
        if self.step > 0.0 {
            let grid = (((clamped - self.min) / self.step).round() * self.step + self.min)
                .clamp(self.min, self.max);
            if (grid - clamped).abs() < best_distance {
                best = Some(grid);
            }
        }

        let chosen = best.unwrap_or(clamped);
        if self.step > 0.0 {
            round_to_decimals(chosen, step_decimals(self.step))
        } else {
            chosen
        }
    }

    /// Commit a snapped value; emits a change message only on actual change.
    fn commit(&mut self, next: f32) -> Option<Box<dyn Any + Send>> {
        if (next - self.value).abs() > f32::EPSILON {
            self.value = next;
            Some(Box::new(SliderChanged { value: next }))
        } else {
            None
        }
    }

    /// Thumb center x in absolute pixels.
    fn thumb_x(&self) -> f32 {
        self.track_width()
            .mul_add(self.normalized_value(), self.track_start())
    }
}

/// Digits after the decimal point in the step's shortest display form.
fn step_decimals(step: f32) -> u32 {
    let text = format!("{step}");
    text.split('.').nth(1).map_or(0, |fraction| fraction.len() as u32)
}

fn round_to_decimals(value: f32, decimals: u32) -> f32 {
    let factor = 10.0f32.powi(decimals as i32);
    (value * factor).round() / factor
}

impl Widget for Slider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let band = if self.marks.is_empty() {
            0.0
        } else {
            MARK_LABEL_BAND
        };
        let preferred = Size::new(200.0, self.thumb_radius.mul_add(2.0, band));
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let center_y = self.center_y();
        let track_rect = Rect::new(
            self.track_start(),
            center_y - self.track_height / 2.0,
            self.track_width().max(0.0),
            self.track_height,
        );
        canvas.fill_rect(track_rect, self.track_color);

        let active_rect = Rect::new(
            track_rect.x,
            track_rect.y,
            track_rect.width * self.normalized_value(),
            self.track_height,
        );
        canvas.fill_rect(active_rect, self.active_color);

        let handle_fraction = self.normalized_value();
        for mark in &self.marks {
            let fraction = self.fraction_of(mark.value);
            let dot_x = track_rect.width.mul_add(fraction, track_rect.x);
            // dots on the filled side invert against the fill for contrast
            let dot_color = if fraction <= handle_fraction {
                self.track_color
            } else {
                self.active_color
            };
            canvas.fill_circle(Point::new(dot_x, center_y), MARK_DOT_RADIUS, dot_color);
        }
        for mark in &self.marks {
            let fraction = self.fraction_of(mark.value);
            let dot_x = track_rect.width.mul_add(fraction, track_rect.x);
            canvas.draw_text(
                &mark.label,
                Point::new(dot_x, self.bounds.bottom()),
                &TextStyle {
                    size: MARK_LABEL_SIZE,
                    color: self.label_color,
                    ..TextStyle::default()
                },
            );
        }

        let thumb_color = if self.disabled {
            Color::new(0.6, 0.6, 0.6, 1.0)
        } else {
            self.thumb_color
        };
        canvas.fill_circle(
            Point::new(self.thumb_x(), center_y),
            self.thumb_radius,
            thumb_color,
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.bounds.contains_point(position) {
                    self.dragging = true;
                    // anchor before the press commit; move deltas are
                    // computed against it rather than absolute positions
                    self.drag_origin_x = position.x;
                    self.drag_origin_value = self.value;
                    let next = self.snap(self.value_at(position.x));
                    return self.commit(next);
                }
            }
            Event::MouseMove { position } => {
                // Delivered process-wide; a strict no-op unless our own drag
                // is active.
                if self.dragging {
                    let width = self.track_width();
                    if width > 0.0 && self.span() > 0.0 {
                        let delta =
                            (position.x - self.drag_origin_x) / width * self.span();
                        let next = self.snap(self.drag_origin_value + delta);
                        return self.commit(next);
                    }
                }
            }
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            }
            | Event::PointerCancel => {
                self.dragging = false;
            }
            _ => {}
        }

        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
