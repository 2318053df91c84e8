//! Overlay: Merge one layer of cells into a destination buffer.
//!
//! Three entry points share one algorithm:
//!
//! 1. [`overlay`]: a source buffer, placed by its own screen area
//! 2. [`overlay_span`]: a raw row-major cell slice plus an explicit screen rectangle
//! 3. [`overlay_cell`]: a single cell laid over every destination cell
//!
//! For the first two, only the screen-space intersection of the destination
//! and source is visited. Each visited destination cell becomes
//! `Cell::merge(top = source, bottom = destination)`. Sources are read from
//! their backing store directly, never through a derived view, and are never
//! modified.

use crate::buffer::{Buffer, Cell};
use crate::error::{Error, Result};
use crate::layout::Rect;

/// Overlay `src` onto `dest` where their screen areas intersect.
///
/// Returns the screen-space region that was visited. A zero-size source or
/// destination is a no-op and returns [`Rect::ZERO`]. A non-empty source
/// that does not intersect `dest` fails with [`Error::DisjointRegion`] and
/// leaves `dest` untouched.
pub fn overlay(dest: &mut Buffer, src: &Buffer) -> Result<Rect> {
    overlay_span(dest, src.cells(), src.screen_area())
}

/// Overlay a row-major cell span occupying `area` onto `dest`.
///
/// `cells.len()` must equal `area.width * area.height`, otherwise
/// [`Error::Shape`] is returned before anything is written.
pub fn overlay_span(dest: &mut Buffer, cells: &[Cell], area: Rect) -> Result<Rect> {
    if area.is_empty() {
        return Ok(Rect::ZERO);
    }

    if cells.len() != area.area() {
        return Err(Error::Shape {
            width: area.width,
            height: area.height,
            actual: cells.len(),
        });
    }

    let dest_area = dest.screen_area();
    if dest_area.is_empty() {
        return Ok(Rect::ZERO);
    }
    if !dest_area.intersects(&area) {
        log::debug!("rejecting disjoint overlay: {dest_area:?} <- {area:?}");
        return Err(Error::DisjointRegion {
            dest: dest_area,
            src: area,
        });
    }

    let overlap = dest_area.intersection(&area);
    log::trace!("overlay {area:?} onto {dest_area:?}, overlap {overlap:?}");

    // Offsets of the overlap inside each layer. The overlap lies within both
    // rectangles, so every offset is non-negative and in bounds.
    let dest_x = (overlap.x - dest_area.x).unsigned_abs() as usize;
    let dest_y = (overlap.y - dest_area.y).unsigned_abs() as usize;
    let src_x = (overlap.x - area.x).unsigned_abs() as usize;
    let src_y = (overlap.y - area.y).unsigned_abs() as usize;
    let span = overlap.width as usize;

    let dest_width = dest_area.width as usize;
    let src_width = area.width as usize;
    let dest_cells = dest.cells_mut();

    for row in 0..overlap.height as usize {
        let dest_start = (dest_y + row) * dest_width + dest_x;
        let src_start = (src_y + row) * src_width + src_x;

        let dest_row = &mut dest_cells[dest_start..dest_start + span];
        let src_row = &cells[src_start..src_start + span];

        for (bottom, &top) in dest_row.iter_mut().zip(src_row) {
            *bottom = Cell::merge(top, *bottom);
        }
    }

    Ok(overlap)
}

/// Lay `cell` over every cell of `dest`.
///
/// A transparent `cell` leaves `dest` unchanged; an opaque one floods it.
/// Returns the destination's screen area.
pub fn overlay_cell(dest: &mut Buffer, cell: Cell) -> Rect {
    for bottom in dest.cells_mut() {
        *bottom = Cell::merge(cell, *bottom);
    }
    dest.screen_area()
}

impl Buffer {
    /// Overlay another buffer onto this one. See [`overlay`].
    pub fn overlay(&mut self, src: &Self) -> Result<Rect> {
        overlay(self, src)
    }

    /// Overlay a raw cell span onto this buffer. See [`overlay_span`].
    pub fn overlay_span(&mut self, cells: &[Cell], area: Rect) -> Result<Rect> {
        overlay_span(self, cells, area)
    }

    /// Lay a single cell over every cell of this buffer. See [`overlay_cell`].
    pub fn overlay_cell(&mut self, cell: Cell) -> Rect {
        overlay_cell(self, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::layout::Point;

    fn positioned(width: u16, height: u16, x: i32, y: i32) -> Buffer {
        let mut buffer = Buffer::new(width, height);
        buffer.move_to(x, y);
        buffer
    }

    #[test_log::test]
    fn test_overlay_partial_red() {
        let mut dest = Buffer::new(3, 2);
        let mut src = positioned(2, 2, 1, 0);
        src.fill_color(Rgb::RED);

        let touched = overlay(&mut dest, &src).unwrap();
        assert_eq!(touched, Rect::new(1, 0, 2, 2));

        let red = Cell::blank(Rgb::RED);
        for (x, y) in [(1, 0), (2, 0), (1, 1), (2, 1)] {
            assert_eq!(*dest.get(x, y).unwrap(), red, "({x}, {y})");
        }
        assert_eq!(*dest.get(0, 0).unwrap(), Cell::INVISIBLE);
        assert_eq!(*dest.get(0, 1).unwrap(), Cell::INVISIBLE);
    }

    #[test_log::test]
    fn test_overlay_transparent_source_is_identity() {
        let mut dest = Buffer::new(4, 4);
        dest.write(2, 2, Cell::new(Rgb::WHITE, Rgb::BLUE, '@')).unwrap();
        let before = dest.clone();

        let src = positioned(4, 4, -1, -1);
        overlay(&mut dest, &src).unwrap();
        assert_eq!(dest, before);
    }

    #[test]
    fn test_overlay_uses_source_coordinates() {
        let mut dest = positioned(4, 4, 10, 10);
        let mut src = positioned(2, 2, 12, 9);
        src.write(0, 1, Cell::new(Rgb::WHITE, Rgb::BLACK, 'a')).unwrap();
        src.write(1, 1, Cell::new(Rgb::WHITE, Rgb::BLACK, 'b')).unwrap();

        let touched = dest.overlay(&src).unwrap();
        assert_eq!(touched, Rect::new(12, 10, 2, 1));

        // Screen (12, 10) is local (2, 0) in dest and local (0, 1) in src.
        assert_eq!(dest.get(2, 0).unwrap().glyph(), Some('a'));
        assert_eq!(dest.get(3, 0).unwrap().glyph(), Some('b'));
        assert_eq!(
            dest.cells().iter().filter(|c| !c.is_transparent()).count(),
            2
        );
    }

    #[test]
    fn test_overlay_near_i32_max() {
        let mut dest = positioned(4, 1, i32::MAX - 2, 0);
        let mut src = positioned(2, 1, i32::MAX - 1, 0);
        src.fill_color(Rgb::RED);

        let touched = overlay(&mut dest, &src).unwrap();
        assert_eq!(touched, Rect::new(i32::MAX - 1, 0, 2, 1));
        let opaque: Vec<bool> = dest.cells().iter().map(|c| !c.is_transparent()).collect();
        assert_eq!(opaque, [false, true, true, false]);

        // Just past the far edge of the destination.
        let beyond = positioned(2, 1, i32::MAX, 1);
        assert!(matches!(
            overlay(&mut dest, &beyond),
            Err(Error::DisjointRegion { .. })
        ));
    }

    #[test]
    fn test_overlay_disjoint_is_rejected() {
        let mut dest = Buffer::new(3, 3);
        dest.fill_color(Rgb::GREEN);
        let before = dest.clone();

        let mut src = positioned(2, 2, 3, 0);
        src.fill_color(Rgb::RED);

        let err = overlay(&mut dest, &src).unwrap_err();
        assert!(matches!(err, Error::DisjointRegion { .. }));
        assert_eq!(dest, before);
    }

    #[test]
    fn test_overlay_empty_source_is_noop() {
        let mut dest = Buffer::new(3, 3);
        let before = dest.clone();

        // Far away, but empty: not an error.
        let mut src = Buffer::empty();
        src.set_position(Point::new(100, 100));
        assert_eq!(overlay(&mut dest, &src).unwrap(), Rect::ZERO);
        assert_eq!(dest, before);
    }

    #[test]
    fn test_overlay_onto_empty_dest_is_noop() {
        let mut dest = Buffer::empty();
        let mut src = Buffer::new(2, 2);
        src.move_to(50, 50);
        assert_eq!(overlay(&mut dest, &src).unwrap(), Rect::ZERO);
        assert!(dest.is_empty());
    }

    #[test]
    fn test_overlay_span() {
        let mut dest = Buffer::new(3, 3);
        let cells = [Cell::blank(Rgb::BLUE), Cell::INVISIBLE];
        let touched = overlay_span(&mut dest, &cells, Rect::new(2, 1, 2, 1)).unwrap();

        assert_eq!(touched, Rect::new(2, 1, 1, 1));
        assert_eq!(*dest.get(2, 1).unwrap(), Cell::blank(Rgb::BLUE));
    }

    #[test]
    fn test_overlay_span_shape_mismatch() {
        let mut dest = Buffer::new(3, 3);
        let cells = [Cell::blank(Rgb::BLUE); 3];
        let err = dest
            .overlay_span(&cells, Rect::new(0, 0, 2, 2))
            .unwrap_err();
        assert!(matches!(err, Error::Shape { actual: 3, .. }));
        assert!(dest.cells().iter().all(Cell::is_transparent));
    }

    #[test]
    fn test_overlay_cell_flood() {
        let mut dest = Buffer::new(2, 2);
        dest.write(0, 0, Cell::new(Rgb::WHITE, Rgb::BLACK, 'k')).unwrap();

        let before = dest.clone();
        dest.overlay_cell(Cell::INVISIBLE);
        assert_eq!(dest, before);

        let area = dest.overlay_cell(Cell::blank(Rgb::RED));
        assert_eq!(area, dest.screen_area());
        assert!(dest.cells().iter().all(|c| *c == Cell::blank(Rgb::RED)));
    }

    #[test]
    fn test_later_overlays_occlude_earlier() {
        let mut frame = Buffer::new(2, 1);
        let mut back = Buffer::new(2, 1);
        back.fill_color(Rgb::BLUE);
        let mut front = Buffer::new(1, 1);
        front.fill_color(Rgb::RED);

        frame.overlay(&back).unwrap();
        frame.overlay(&front).unwrap();

        assert_eq!(*frame.get(0, 0).unwrap(), Cell::blank(Rgb::RED));
        assert_eq!(*frame.get(1, 0).unwrap(), Cell::blank(Rgb::BLUE));
    }
}
