//! Display: The hand-off point between a finished frame and a device.
//!
//! The compositor never talks to a terminal itself. Anything that can put
//! cells on a screen implements [`Display`]; [`AnsiDisplay`] is a reference
//! implementation that encodes frames as true-color ANSI escape sequences.

use super::output::OutputBuffer;
use crate::buffer::{Buffer, Cell, Rgb};
use crate::error::{Error, Result};
use crate::layout::Rect;
use std::io::{self, Stdout, Write};

/// A sink that renders finished cells to a physical device.
pub trait Display {
    /// Render a row-major cell span occupying `area` in screen space.
    fn present_span(&mut self, cells: &[Cell], area: Rect) -> Result<()>;

    /// Render a whole buffer at its screen position.
    fn present(&mut self, frame: &Buffer) -> Result<()> {
        self.present_span(frame.cells(), frame.screen_area())
    }
}

/// Configuration for [`AnsiDisplay`].
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Hide the cursor while drawing.
    pub hide_cursor: bool,
    /// Clear the whole screen before each frame.
    pub clear_before_frame: bool,
    /// Reset colors after each frame.
    pub reset_after_frame: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hide_cursor: true,
            clear_before_frame: false,
            reset_after_frame: true,
        }
    }
}

/// Encodes frames as ANSI sequences and writes each one in a single flush.
///
/// Transparent cells are skipped, leaving whatever the device already shows.
/// Cells at negative screen coordinates are clipped. A cursor hidden while
/// drawing is shown again by [`AnsiDisplay::restore`], [`AnsiDisplay::into_inner`],
/// or on drop.
#[derive(Debug)]
pub struct AnsiDisplay<W: Write> {
    /// `None` only once `into_inner` has taken it.
    writer: Option<W>,
    output: OutputBuffer,
    config: DisplayConfig,
    frames: u64,
    cursor_hidden: bool,
}

impl AnsiDisplay<Stdout> {
    /// Create a display writing to standard output with default settings.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiDisplay<W> {
    /// Create a display with default configuration.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, DisplayConfig::default())
    }

    /// Create a display with custom configuration.
    pub fn with_config(writer: W, config: DisplayConfig) -> Self {
        Self {
            writer: Some(writer),
            output: OutputBuffer::with_capacity(65536),
            config,
            frames: 0,
            cursor_hidden: false,
        }
    }

    /// Get the configuration.
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Number of frames written so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Borrow the underlying writer.
    pub const fn get_ref(&self) -> Option<&W> {
        self.writer.as_ref()
    }

    /// Show the cursor again if a frame hid it.
    pub fn restore(&mut self) -> Result<()> {
        if !self.cursor_hidden {
            return Ok(());
        }
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        let mut out = OutputBuffer::with_capacity(8);
        out.cursor_show();
        out.flush_to(writer)?;
        self.cursor_hidden = false;
        log::trace!("cursor restored after {} frames", self.frames);
        Ok(())
    }

    /// Restore the cursor and return the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.restore()?;
        self.writer
            .take()
            .ok_or_else(|| Error::Io(io::Error::other("display writer already taken")))
    }

    /// Encode a cell span without writing it.
    ///
    /// Returns the bytes that [`Display::present_span`] would flush.
    pub fn encode(&mut self, cells: &[Cell], area: Rect) -> Result<&[u8]> {
        if cells.len() != area.area() {
            return Err(Error::Shape {
                width: area.width,
                height: area.height,
                actual: cells.len(),
            });
        }

        let out = &mut self.output;
        out.clear();
        if self.config.clear_before_frame {
            out.clear_screen();
        }
        if self.config.hide_cursor {
            out.cursor_hide();
        }

        let mut cursor: Option<(u16, u16)> = None;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for (row, line) in cells.chunks(area.width.max(1) as usize).enumerate() {
            let Some(y) = screen_coord(area.y, row) else {
                continue;
            };

            // Columns still covered by the last wide glyph on this row.
            let mut covered_until = 0;
            for (col, cell) in line.iter().enumerate() {
                if col < covered_until || cell.is_transparent() {
                    continue;
                }
                let Some(x) = screen_coord(area.x, col) else {
                    continue;
                };

                if cursor != Some((x, y)) {
                    out.cursor_move(x, y);
                }
                if fg != Some(cell.fg()) {
                    out.set_fg(cell.fg());
                    fg = Some(cell.fg());
                }
                if bg != Some(cell.bg()) {
                    out.set_bg(cell.bg());
                    bg = Some(cell.bg());
                }
                out.write_char(cell.glyph().unwrap_or(' '));

                let advance = cell.display_width().max(1);
                covered_until = col + usize::from(advance);
                cursor = x.checked_add(u16::from(advance)).map(|next| (next, y));
            }
        }

        if self.config.reset_after_frame {
            out.reset_attrs();
        }

        Ok(out.as_bytes())
    }
}

impl<W: Write> Drop for AnsiDisplay<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("failed to restore cursor: {e}");
        }
    }
}

/// Map a span offset to an on-screen coordinate, if it is visible.
fn screen_coord(origin: i32, offset: usize) -> Option<u16> {
    let offset = i64::try_from(offset).ok()?;
    u16::try_from(i64::from(origin) + offset).ok()
}

impl<W: Write> Display for AnsiDisplay<W> {
    fn present_span(&mut self, cells: &[Cell], area: Rect) -> Result<()> {
        self.encode(cells, area)?;
        let Some(writer) = self.writer.as_mut() else {
            return Err(Error::Io(io::Error::other("display writer already taken")));
        };
        self.output.flush_to(writer)?;
        self.cursor_hidden |= self.config.hide_cursor;
        self.frames += 1;
        log::trace!(
            "frame {} presented: {:?}, {} bytes",
            self.frames,
            area,
            self.output.len()
        );
        Ok(())
    }
}
