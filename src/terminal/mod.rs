//! Terminal module: Handing finished frames to a device.
//!
//! This module contains:
//! - [`Display`]: the sink contract a device driver implements
//! - [`AnsiDisplay`]: a reference sink writing true-color ANSI sequences
//! - [`OutputBuffer`]: single-syscall byte accumulator used by [`AnsiDisplay`]

mod display;
mod output;

pub use display::{AnsiDisplay, Display, DisplayConfig};
pub use output::OutputBuffer;

use crate::buffer::Buffer;
use crate::error::Result;

/// Create an invisible frame buffer matching the current terminal size.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the terminal size cannot be queried.
pub fn frame_for_terminal() -> Result<Buffer> {
    let (width, height) = crossterm::terminal::size()?;
    log::debug!("terminal frame {width}x{height}");
    Ok(Buffer::new(width, height))
}
