#![forbid(unsafe_code)]

//! Geometric primitives in CSS-pixel space.
//!
//! Coordinates are `f64` with the origin at the top-left of the viewport,
//! matching what pointer collaborators report.

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference (`self - other`).
    #[inline]
    #[must_use]
    pub fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle for panel bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from origin and size.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.right()
            && point.y >= self.origin.y
            && point.y < self.bottom()
    }
}

/// Current viewport dimensions.
///
/// The viewport collaborator pushes new values into consumers on resize;
/// this type itself fires no notifications.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from dimensions.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if a rectangle of `size` at `origin` lies fully inside.
    #[must_use]
    pub fn fully_contains(&self, origin: Point, size: Size) -> bool {
        origin.x >= 0.0
            && origin.y >= 0.0
            && origin.x + size.width <= self.width
            && origin.y + size.height <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_inclusive_at_origin_exclusive_at_edges() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(109.9, 69.9)));
        assert!(!rect.contains(Point::new(110.0, 20.0)));
        assert!(!rect.contains(Point::new(10.0, 70.0)));
    }

    #[test]
    fn point_offset_from_subtracts_componentwise() {
        let offset = Point::new(130.0, 90.0).offset_from(Point::new(100.0, 50.0));
        assert_eq!(offset, Point::new(30.0, 40.0));
    }

    #[test]
    fn viewport_containment_matches_edges_exactly() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(viewport.fully_contains(Point::new(400.0, 420.0), Size::new(400.0, 180.0)));
        assert!(!viewport.fully_contains(Point::new(400.1, 420.0), Size::new(400.0, 180.0)));
        assert!(!viewport.fully_contains(Point::new(-0.1, 0.0), Size::new(10.0, 10.0)));
    }

    #[test]
    fn degenerate_sizes_are_flagged() {
        assert!(Size::new(0.0, 10.0).is_degenerate());
        assert!(Size::new(10.0, -1.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }
}
