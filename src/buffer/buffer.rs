//! Buffer: A positioned grid of cells.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order.

use super::cell::{Cell, Rgb};
use crate::error::{CellLocation, Error, Result};
use crate::layout::{Point, Rect, Translate};

/// A rectangular grid of cells anchored at a screen-space position.
///
/// The buffer stores cells in a contiguous `Vec`.
/// Access is in row-major order: `index = y * width + x`.
///
/// `cells.len() == width * height` holds after every operation. A zero-size
/// buffer owns an empty allocation and is a no-op in every compositing call.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
    /// Screen-space position of the top-left cell.
    position: Point,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl Buffer {
    /// Create a buffer with the given dimensions at the origin.
    ///
    /// All cells start out as [`Cell::INVISIBLE`].
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::INVISIBLE; size],
            width,
            height,
            position: Point::ORIGIN,
        }
    }

    /// Create the zero-size buffer.
    pub const fn empty() -> Self {
        Self {
            cells: Vec::new(),
            width: 0,
            height: 0,
            position: Point::ORIGIN,
        }
    }

    /// Create a buffer from row-major cells, deriving the height.
    ///
    /// Fails with [`Error::Shape`] when `cells.len()` is not a multiple of
    /// `width`. A zero width is only accepted together with no cells.
    pub fn from_cells(width: u16, cells: Vec<Cell>) -> Result<Self> {
        let shape_error = |height| Error::Shape {
            width,
            height,
            actual: cells.len(),
        };

        if width == 0 {
            if cells.is_empty() {
                return Ok(Self::empty());
            }
            return Err(shape_error(0));
        }

        if cells.len() % (width as usize) != 0 {
            return Err(shape_error(0));
        }
        let height =
            u16::try_from(cells.len() / (width as usize)).map_err(|_| shape_error(u16::MAX))?;

        Ok(Self {
            cells,
            width,
            height,
            position: Point::ORIGIN,
        })
    }

    /// Create a buffer from exactly `width * height` row-major cells.
    pub fn from_cells_sized(width: u16, height: u16, cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != (width as usize) * (height as usize) {
            return Err(Error::Shape {
                width,
                height,
                actual: cells.len(),
            });
        }

        Ok(Self {
            cells,
            width,
            height,
            position: Point::ORIGIN,
        })
    }

    /// Create an invisible buffer covering a screen-space rectangle.
    pub fn with_area(area: Rect) -> Self {
        let mut buffer = Self::new(area.width, area.height);
        buffer.position = area.position();
        buffer
    }

    /// Create a buffer covering a screen-space rectangle from existing cells.
    ///
    /// `cells.len()` must equal the rectangle's area.
    pub fn from_area_cells(area: Rect, cells: Vec<Cell>) -> Result<Self> {
        let mut buffer = Self::from_cells_sized(area.width, area.height, cells)?;
        buffer.position = area.position();
        Ok(buffer)
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the screen-space position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has zero size.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the backing store.
    ///
    /// The view is the raw storage, never a derived rendering, so it is safe
    /// to feed straight back into an overlay.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the backing store for the compositor.
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub const fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Convert a linear index to (x, y) coordinates.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coords_of(&self, index: usize) -> Option<(u16, u16)> {
        if index < self.cells.len() {
            // Both quotient and remainder are bounded by the u16 dimensions.
            let x = (index % (self.width as usize)) as u16;
            let y = (index / (self.width as usize)) as u16;
            Some((x, y))
        } else {
            None
        }
    }

    const fn coords_error(&self, x: u16, y: u16) -> Error {
        Error::Index {
            location: CellLocation::Coords { x, y },
            width: self.width,
            height: self.height,
        }
    }

    const fn flat_error(&self, index: usize) -> Error {
        Error::Index {
            location: CellLocation::Flat(index),
            width: self.width,
            height: self.height,
        }
    }

    /// Get the cell at (x, y).
    pub fn get(&self, x: u16, y: u16) -> Result<&Cell> {
        self.index_of(x, y)
            .map(|i| &self.cells[i])
            .ok_or_else(|| self.coords_error(x, y))
    }

    /// Get the cell at a flat index.
    pub fn get_index(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or_else(|| self.flat_error(index))
    }

    /// Set the cell at (x, y).
    pub fn write(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        let idx = self.index_of(x, y).ok_or_else(|| self.coords_error(x, y))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Set the cell at a flat index.
    pub fn write_index(&mut self, index: usize, cell: Cell) -> Result<()> {
        let error = self.flat_error(index);
        let slot = self.cells.get_mut(index).ok_or(error)?;
        *slot = cell;
        Ok(())
    }

    /// Reallocate to a new extent, discarding all content.
    ///
    /// Every cell becomes [`Cell::INVISIBLE`]. The position is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!(
            "resize {}x{} -> {}x{} (content discarded)",
            self.width,
            self.height,
            width,
            height
        );
        self.cells = vec![Cell::INVISIBLE; (width as usize) * (height as usize)];
        self.width = width;
        self.height = height;
    }

    /// Grow the buffer so it covers at least `width` x `height`.
    ///
    /// Does nothing if the buffer is already large enough on both axes.
    /// Otherwise each axis grows to the larger of its current and requested
    /// extent. With `preserve`, existing cells keep their coordinates and the
    /// new area is invisible; without it, the whole buffer is cleared.
    pub fn ensure_size(&mut self, width: u16, height: u16, preserve: bool) {
        if self.width >= width && self.height >= height {
            return;
        }

        let new_width = self.width.max(width);
        let new_height = self.height.max(height);
        log::debug!(
            "ensure_size {}x{} -> {}x{} (preserve: {})",
            self.width,
            self.height,
            new_width,
            new_height,
            preserve
        );

        let mut new_cells = vec![Cell::INVISIBLE; (new_width as usize) * (new_height as usize)];

        if preserve {
            // Copy row by row; the stride changes with the width.
            let copy_width = self.width as usize;
            for (y, row) in self.rows().enumerate() {
                let new_start = y * (new_width as usize);
                new_cells[new_start..new_start + copy_width].copy_from_slice(row);
            }
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
    }

    /// Move the buffer's screen-space anchor. Cell data is untouched.
    #[inline]
    pub const fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Move the buffer's screen-space anchor to (x, y).
    #[inline]
    pub const fn move_to(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }

    /// The rectangle this buffer covers on screen.
    #[inline]
    pub const fn screen_area(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }

    /// The rectangle this buffer covers in its own local space.
    #[inline]
    pub const fn source_area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert local geometry (a [`Point`] or [`Rect`]) to screen space.
    #[inline]
    pub fn local_to_screen<T: Translate>(&self, local: T) -> T {
        local.offset(self.position)
    }

    /// Convert screen geometry (a [`Point`] or [`Rect`]) to local space.
    #[inline]
    pub fn screen_to_local<T: Translate>(&self, screen: T) -> T {
        screen.offset_neg(self.position)
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Make every cell an opaque blank with the given background.
    pub fn fill_color(&mut self, bg: Rgb) {
        self.fill(Cell::blank(bg));
    }

    /// Fill a local-space rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, area: Rect, cell: Cell) {
        let clipped = area.intersection(&self.source_area());
        if clipped.is_empty() {
            return;
        }

        // The clip keeps every coordinate inside 0..width / 0..height.
        let width = self.width as usize;
        let (left, top) = (clipped.x.unsigned_abs() as usize, clipped.y.unsigned_abs() as usize);
        for row in top..top + clipped.height as usize {
            let start = row * width + left;
            self.cells[start..start + clipped.width as usize].fill(cell);
        }
    }

    /// Reset every cell to [`Cell::INVISIBLE`].
    pub fn clear(&mut self) {
        self.fill(Cell::INVISIBLE);
    }

    /// Get an iterator over rows.
    ///
    /// Yields nothing for a zero-size buffer.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Get a mutable iterator over rows.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
        self.cells.chunks_mut(self.width.max(1) as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("area", &self.screen_area())
            .field("cells", &self.cells.len())
            .finish()
    }
}
