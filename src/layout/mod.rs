//! Layout module: Screen-space geometry shared by buffers and the compositor.
//!
//! All arithmetic is exact integer arithmetic; intersection is the only
//! operation that clamps.

mod point;
mod rect;

pub use point::{Point, Translate};
pub use rect::Rect;
