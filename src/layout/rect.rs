//! Rect: A rectangle primitive for compositing calculations.

use super::point::{Point, Translate};

/// A rectangle defined by a signed top-left corner and an unsigned size.
///
/// The right and bottom edges are exclusive and computed in `i64`, so a
/// rectangle anchored near `i32::MAX` still has exact edges.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: i32,
    /// Y coordinate (row) of the top-left corner.
    pub y: i32,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Create a rectangle at `position` with the given size.
    #[inline]
    pub const fn at(position: Point, width: u16, height: u16) -> Self {
        Self::new(position.x, position.y, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Top-left corner.
    #[inline]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if the rectangle covers at least one cell.
    #[inline]
    pub const fn has_area(&self) -> bool {
        !self.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && (point.x as i64) < self.right()
            && point.y >= self.top()
            && (point.y as i64) < self.bottom()
    }

    /// Check if this rectangle intersects with another.
    ///
    /// Empty rectangles never intersect anything.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.has_area()
            && other.has_area()
            && (self.left() as i64) < other.right()
            && self.right() > other.left() as i64
            && (self.top() as i64) < other.bottom()
            && self.bottom() > other.top() as i64
    }

    /// The overlapping region of two rectangles.
    ///
    /// Returns a zero-size rectangle anchored at the clamped corner when the
    /// two do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        // Both extents are bounded by the narrower input, so they fit in u16.
        let width = u16::try_from((right - i64::from(left)).max(0)).unwrap_or(0);
        let height = u16::try_from((bottom - i64::from(top)).max(0)).unwrap_or(0);
        if width == 0 || height == 0 {
            return Self::new(left, top, 0, 0);
        }
        Self::new(left, top, width, height)
    }

    /// Move the rectangle by an offset, keeping its size.
    ///
    /// The corner wraps at the `i32` boundary, like [`Point`] translation.
    #[inline]
    #[must_use]
    pub const fn translate(&self, by: Point) -> Self {
        Self::new(
            self.x.wrapping_add(by.x),
            self.y.wrapping_add(by.y),
            self.width,
            self.height,
        )
    }
}

impl Translate for Rect {
    #[inline]
    fn offset(self, by: Point) -> Self {
        self.translate(by)
    }

    #[inline]
    fn offset_neg(self, by: Point) -> Self {
        Self::new(
            self.x.wrapping_sub(by.x),
            self.y.wrapping_sub(by.y),
            self.width,
            self.height,
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
