//! Geometric primitives: Point, Size, Rect, `CornerRadius`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Calculate area.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if this size can contain another size.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge
    pub x: f32,
    /// Y coordinate of the top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin and size.
    #[must_use]
    pub const fn from_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Size of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point lies within the rectangle (edges inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Check if two rectangles overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink the rectangle by the same amount on all four sides.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - amount * 2.0).max(0.0),
            (self.height - amount * 2.0).max(0.0),
        )
    }
}

/// Per-corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Top-left radius
    pub top_left: f32,
    /// Top-right radius
    pub top_right: f32,
    /// Bottom-right radius
    pub bottom_right: f32,
    /// Bottom-left radius
    pub bottom_left: f32,
}

impl CornerRadius {
    /// All corners square.
    pub const ZERO: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Same radius on every corner.
    #[must_use]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Check if all corners are square.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_origin() {
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 20.0);
        assert_eq!(a.lerp(&b, 0.5), Point::new(5.0, 10.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_point_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(b - a, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_size_area() {
        assert_eq!(Size::new(4.0, 5.0).area(), 20.0);
        assert_eq!(Size::ZERO.area(), 0.0);
    }

    #[test]
    fn test_size_contains() {
        let outer = Size::new(100.0, 50.0);
        assert!(outer.contains(&Size::new(100.0, 50.0)));
        assert!(outer.contains(&Size::new(10.0, 10.0)));
        assert!(!outer.contains(&Size::new(101.0, 10.0)));
    }

    #[test]
    fn test_rect_from_size() {
        let rect = Rect::from_size(Point::new(5.0, 6.0), Size::new(7.0, 8.0));
        assert_eq!(rect, Rect::new(5.0, 6.0, 7.0, 8.0));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains_point(&Point::new(50.0, 25.0)));
        assert!(rect.contains_point(&Point::new(0.0, 0.0)));
        assert!(rect.contains_point(&Point::new(100.0, 50.0)));
        assert!(!rect.contains_point(&Point::new(100.1, 25.0)));
        assert!(!rect.contains_point(&Point::new(50.0, -0.1)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = rect.inset(10.0);
        assert_eq!(inner, Rect::new(10.0, 10.0, 80.0, 30.0));

        // Over-inset collapses to zero size, never negative
        let collapsed = rect.inset(60.0);
        assert_eq!(collapsed.width, 0.0);
        assert_eq!(collapsed.height, 0.0);
    }

    #[test]
    fn test_corner_radius() {
        assert!(CornerRadius::ZERO.is_zero());
        let uniform = CornerRadius::uniform(4.0);
        assert_eq!(uniform.top_left, 4.0);
        assert_eq!(uniform.bottom_right, 4.0);
        assert!(!uniform.is_zero());
    }

    proptest! {
        #[test]
        fn prop_rect_center_is_contained(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.0f32..1000.0,
            h in 0.0f32..1000.0,
        ) {
            let rect = Rect::new(x, y, w, h);
            prop_assert!(rect.contains_point(&rect.center()));
        }

        #[test]
        fn prop_lerp_endpoints(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a.lerp(&b, 0.0), a);
            // t=1 is only approximate: a + (b - a) re-rounds
            let end = a.lerp(&b, 1.0);
            prop_assert!(end.distance(&b) < 1e-3);
        }
    }
}
