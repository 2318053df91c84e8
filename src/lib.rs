//! # Cellstack
//!
//! A layered cell-buffer compositor for character-grid terminals.
//!
//! Cellstack builds frames out of rectangular cell buffers. Buffers are
//! filled and written independently, then overlaid onto one another back to
//! front; the finished frame is handed to a [`Display`] for output.
//!
//! ## Core Concepts
//!
//! - **Cells**: color pair, optional glyph, and a transparency marker
//! - **Binary occlusion**: an opaque cell replaces what lies beneath it, a
//!   transparent one lets it through
//! - **Positioned buffers**: each buffer carries its own screen-space anchor
//! - **Overlay**: merges only the screen-space intersection of two buffers
//!
//! ## Example
//!
//! ```rust
//! use cellstack::{Buffer, Cell, Rgb};
//!
//! let mut frame = Buffer::new(3, 2);
//!
//! let mut panel = Buffer::new(2, 2);
//! panel.move_to(1, 0);
//! panel.fill_color(Rgb::RED);
//!
//! frame.overlay(&panel).unwrap();
//! assert_eq!(*frame.get(1, 0).unwrap(), Cell::blank(Rgb::RED));
//! assert_eq!(*frame.get(0, 0).unwrap(), Cell::INVISIBLE);
//! ```
//!
//! ## Threading
//!
//! Buffers are plain owned data with no interior synchronization. Mutating
//! calls take `&mut self`, so concurrent mutation of one buffer is ruled out
//! by the borrow checker; callers sharing buffers across threads wrap them in
//! their own lock.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod compositor;
pub mod error;
pub mod layout;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, CellFlags, Rgb};
pub use compositor::{compose, overlay, overlay_cell, overlay_span, Layer};
pub use error::{CellLocation, Error, Result};
pub use layout::{Point, Rect, Translate};
pub use terminal::{AnsiDisplay, Display, DisplayConfig};
