//! Cell: The atomic unit of terminal display.
//!
//! A cell carries a foreground color, a background color, an optional glyph,
//! and a transparency marker. Occlusion is binary: an opaque cell replaces
//! whatever is beneath it, a transparent one lets it show through. There is
//! no partial alpha blending.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Cell Layout (12 bytes)                              │
//! ├──────────────┬───────────┬───────────┬───────┬───────┤
//! │  glyph       │    fg     │    bg     │ flags │ pad   │
//! │  Option<char>│  [u8; 3]  │  [u8; 3]  │  u8   │ 1b    │
//! └──────────────┴───────────┴───────────┴───────┴───────┘
//! ```

use bitflags::bitflags;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red (255, 0, 0)
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green (0, 255, 0)
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue (0, 0, 255)
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Cell-level state flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// The cell shows whatever lies beneath it.
        const TRANSPARENT = 0b0000_0001;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell.
///
/// Cells are plain values: every operation returns a new cell rather than
/// mutating one in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Displayed character. `None` renders as a blank.
    glyph: Option<char>,
    /// Foreground color.
    fg: Rgb,
    /// Background color.
    bg: Rgb,
    /// Transparency and other state.
    flags: CellFlags,
}

const _: () = assert!(
    std::mem::size_of::<Cell>() == 12,
    "Cell must stay 12 bytes"
);

impl Default for Cell {
    fn default() -> Self {
        Self::INVISIBLE
    }
}

impl Cell {
    /// The fully transparent cell. Buffers start out filled with it.
    pub const INVISIBLE: Self = Self {
        glyph: None,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        flags: CellFlags::TRANSPARENT,
    };

    /// Create an opaque cell.
    #[inline]
    pub const fn new(fg: Rgb, bg: Rgb, glyph: char) -> Self {
        Self {
            glyph: Some(glyph),
            fg,
            bg,
            flags: CellFlags::empty(),
        }
    }

    /// Create an opaque cell with the given background and no glyph.
    #[inline]
    pub const fn blank(bg: Rgb) -> Self {
        Self::INVISIBLE.with_bg(bg)
    }

    /// Get the glyph, if any.
    #[inline]
    pub const fn glyph(&self) -> Option<char> {
        self.glyph
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the flags.
    #[inline]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Check whether the cell lets the layer beneath show through.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.flags.contains(CellFlags::TRANSPARENT)
    }

    /// Columns the glyph occupies on screen (0, 1, or 2).
    ///
    /// A blank cell occupies one column.
    #[inline]
    pub fn display_width(&self) -> u8 {
        self.glyph.map_or(1, |c| {
            u8::try_from(unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)).unwrap_or(1)
        })
    }

    /// Replace the background (builder pattern). The result is opaque.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self.flags = self.flags.difference(CellFlags::TRANSPARENT);
        self
    }

    /// Replace the foreground (builder pattern). The result is opaque.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self.flags = self.flags.difference(CellFlags::TRANSPARENT);
        self
    }

    /// Replace the glyph (builder pattern). The result is opaque.
    #[inline]
    #[must_use]
    pub const fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self.flags = self.flags.difference(CellFlags::TRANSPARENT);
        self
    }

    /// Layer `top` over `bottom`.
    ///
    /// A transparent `top` yields `bottom` unchanged; an opaque `top`
    /// fully occludes it.
    #[inline]
    pub const fn merge(top: Self, bottom: Self) -> Self {
        if top.is_transparent() {
            bottom
        } else {
            top
        }
    }

    /// Method form of [`Cell::merge`] with `self` on top.
    #[inline]
    #[must_use]
    pub const fn over(self, bottom: Self) -> Self {
        Self::merge(self, bottom)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_transparent() {
            return f.write_str("Cell(invisible)");
        }
        f.debug_struct("Cell")
            .field("glyph", &self.glyph)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("flags", &self.flags)
            .finish()
    }
}
