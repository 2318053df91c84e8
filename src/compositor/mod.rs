//! Compositor module: Layering buffers onto one another.
//!
//! This module contains:
//! - [`overlay()`], [`overlay_span`], [`overlay_cell`]: the merge algorithm
//! - [`Layer`] and [`compose`]: back-to-front frame assembly over a layer tree

mod layer;
mod overlay;

pub use layer::{compose, Layer};
pub use overlay::{overlay, overlay_cell, overlay_span};
