//! Layer tree: Build a frame from nested visual elements.
//!
//! A frame is assembled by overlaying every top-level layer in back-to-front
//! order. After each layer is drawn, its children are drawn the same way, so
//! a child always sits above its parent and above every earlier sibling.
//!
//! Positions are absolute: a child's buffer carries its own screen position.

use super::overlay::overlay;
use crate::buffer::Buffer;
use crate::error::Result;

/// A buffer plus the layers stacked on top of it.
#[derive(Clone, Debug)]
pub struct Layer {
    /// The layer's own content.
    pub buffer: Buffer,
    /// Layers drawn above this one, back to front.
    pub children: Vec<Layer>,
    /// Hidden layers are skipped together with their children.
    pub visible: bool,
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(Buffer::empty())
    }
}

impl Layer {
    /// Create a visible layer with no children.
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            children: Vec::new(),
            visible: true,
        }
    }

    /// Append a child (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Set visibility (builder pattern).
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Count this layer and all of its descendants.
    pub fn layer_count(&self) -> usize {
        1 + self.children.iter().map(Self::layer_count).sum::<usize>()
    }
}

/// Overlay `layers` onto `frame` back to front, recursing into children.
///
/// Layers that are empty or lie entirely outside the frame are culled rather
/// than reported as disjoint; their children are still considered, since a
/// child may be positioned inside the frame even when its parent is not.
/// Returns the number of layers that were drawn.
pub fn compose(frame: &mut Buffer, layers: &[Layer]) -> Result<usize> {
    let frame_area = frame.screen_area();
    let mut drawn = 0;

    for layer in layers.iter().filter(|l| l.visible) {
        let area = layer.buffer.screen_area();
        if frame_area.intersects(&area) {
            overlay(frame, &layer.buffer)?;
            drawn += 1;
        } else {
            log::trace!("culled layer {area:?} outside frame {frame_area:?}");
        }
        drawn += compose(frame, &layer.children)?;
    }

    Ok(drawn)
}

impl Buffer {
    /// Compose a layer tree onto this buffer. See [`compose`].
    pub fn compose(&mut self, layers: &[Layer]) -> Result<usize> {
        compose(self, layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Cell, Rgb};

    fn solid(width: u16, height: u16, x: i32, y: i32, bg: Rgb) -> Buffer {
        let mut buffer = Buffer::new(width, height);
        buffer.move_to(x, y);
        buffer.fill_color(bg);
        buffer
    }

    #[test_log::test]
    fn test_compose_back_to_front() {
        let mut frame = Buffer::new(4, 1);
        let layers = [
            Layer::new(solid(4, 1, 0, 0, Rgb::BLUE)),
            Layer::new(solid(2, 1, 1, 0, Rgb::RED)),
        ];

        assert_eq!(compose(&mut frame, &layers).unwrap(), 2);
        let bgs: Vec<Rgb> = frame.cells().iter().map(Cell::bg).collect();
        assert_eq!(bgs, [Rgb::BLUE, Rgb::RED, Rgb::RED, Rgb::BLUE]);
    }

    #[test]
    fn test_children_draw_above_parent_and_below_later_siblings() {
        let mut frame = Buffer::new(3, 1);
        let parent = Layer::new(solid(3, 1, 0, 0, Rgb::BLUE))
            .with_child(Layer::new(solid(2, 1, 0, 0, Rgb::GREEN)));
        let sibling = Layer::new(solid(1, 1, 0, 0, Rgb::RED));

        frame.compose(&[parent, sibling]).unwrap();
        let bgs: Vec<Rgb> = frame.cells().iter().map(Cell::bg).collect();
        assert_eq!(bgs, [Rgb::RED, Rgb::GREEN, Rgb::BLUE]);
    }

    #[test]
    fn test_hidden_layers_skip_children() {
        let mut frame = Buffer::new(2, 2);
        let hidden = Layer::new(solid(2, 2, 0, 0, Rgb::BLUE))
            .with_child(Layer::new(solid(1, 1, 0, 0, Rgb::RED)))
            .with_visible(false);

        assert_eq!(frame.compose(&[hidden]).unwrap(), 0);
        assert!(frame.cells().iter().all(Cell::is_transparent));
    }

    #[test]
    fn test_offscreen_layers_are_culled() {
        let mut frame = Buffer::new(2, 2);
        let mut parent = Layer::new(solid(2, 2, 50, 50, Rgb::BLUE));
        parent.push(Layer::new(solid(1, 1, 1, 1, Rgb::RED)));
        parent.push(Layer::new(Buffer::empty()));

        assert_eq!(parent.layer_count(), 3);
        assert_eq!(frame.compose(&[parent]).unwrap(), 1);
        assert_eq!(*frame.get(1, 1).unwrap(), Cell::blank(Rgb::RED));
        assert_eq!(*frame.get(0, 0).unwrap(), Cell::INVISIBLE);
    }
}
