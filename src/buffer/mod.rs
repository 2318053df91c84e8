//! Buffer module: Core data structures for layered cell compositing.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of display, with its merge rule
//! - [`Buffer`]: A positioned grid of cells
//! - [`Rgb`]: True-color representation
//! - [`CellFlags`]: Cell state bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, CellFlags, Rgb};
pub use buffer::Buffer;
