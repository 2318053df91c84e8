//! Error types for buffer construction, access, and compositing.

use crate::layout::Rect;
use thiserror::Error;

/// Errors raised by buffer and compositor operations.
///
/// Every variant is detected before any cell is mutated.
#[derive(Error, Debug)]
pub enum Error {
    /// A flat cell sequence does not fit the requested dimensions.
    #[error("cell sequence of length {actual} does not fit a {width}x{height} buffer")]
    Shape {
        /// Requested width.
        width: u16,
        /// Requested (or derived) height. Zero when no height could be derived.
        height: u16,
        /// Length of the supplied sequence.
        actual: usize,
    },

    /// A coordinate or flat index lies outside the buffer.
    #[error("{location} is outside a {width}x{height} buffer")]
    Index {
        /// The offending address.
        location: CellLocation,
        /// Buffer width at the time of access.
        width: u16,
        /// Buffer height at the time of access.
        height: u16,
    },

    /// An overlay was requested between regions that do not overlap.
    #[error("overlay regions do not intersect: destination {dest:?}, source {src:?}")]
    DisjointRegion {
        /// Destination screen area.
        dest: Rect,
        /// Source screen area.
        src: Rect,
    },

    /// Writing a frame to the display failed.
    #[error("display I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// How an out-of-bounds access addressed the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellLocation {
    /// Column/row access.
    Coords {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },
    /// Flat row-major index.
    Flat(usize),
}

impl std::fmt::Display for CellLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coords { x, y } => write!(f, "cell ({x}, {y})"),
            Self::Flat(index) => write!(f, "index {index}"),
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
