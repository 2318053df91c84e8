//! Point: A signed screen-space or buffer-local coordinate.

/// A coordinate pair.
///
/// Coordinates are signed: a buffer may sit partly off-screen, and converting
/// a screen point into a buffer's local space can produce negative values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Geometry that can be shifted by an offset.
///
/// Used for converting between screen space and a buffer's local space:
/// local-to-screen adds the buffer position, screen-to-local subtracts it.
/// Both wrap at the `i32` boundary, so the two always undo each other.
pub trait Translate: Sized {
    /// Shift by `by`.
    #[must_use]
    fn offset(self, by: Point) -> Self;

    /// Shift by the negation of `by`.
    #[must_use]
    fn offset_neg(self, by: Point) -> Self;
}

impl Translate for Point {
    #[inline]
    fn offset(self, by: Point) -> Self {
        Self::new(self.x.wrapping_add(by.x), self.y.wrapping_add(by.y))
    }

    #[inline]
    fn offset_neg(self, by: Point) -> Self {
        Self::new(self.x.wrapping_sub(by.x), self.y.wrapping_sub(by.y))
    }
}
