//! Pixel-space points and line segments

/// A position on the drawing surface, in pixels from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset, growing to the right
    pub x: f32,
    /// Vertical offset, growing downwards
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets
    #[must_use]
    pub const fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A straight stroke between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Where the stroke begins
    pub start: Point,
    /// Where the stroke ends
    pub end: Point,
}

impl Segment {
    /// Create a segment from its endpoints
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}
