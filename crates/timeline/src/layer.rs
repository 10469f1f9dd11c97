//! A layer: one independent visual timeline, identified by stacking order.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// An ordered, append-only sequence of frames on one stacking level.
///
/// Frame numbers inside a layer are always the dense sequence `1..=len()`:
/// every push renumbers the appended frame to the new length, overriding
/// whatever number it carried before. A pushed frame is moved into the
/// layer, so a frame never belongs to two layers at once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    number: i32,
    frames: Vec<Frame>,
}

impl Layer {
    /// Create an empty layer. `number` is the stacking order (higher draws
    /// in front) and is immutable for the layer's lifetime.
    pub fn new(number: i32) -> Self {
        Self {
            number,
            frames: Vec::new(),
        }
    }

    /// Stacking order of this layer.
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Append `frame`, renumbering it to the new frame count.
    pub fn push(&mut self, mut frame: Frame) {
        frame.set_number(self.frames.len() as u32 + 1);
        self.frames.push(frame);
    }

    /// The layer's frames in order. Mutation happens only through [`push`].
    ///
    /// [`push`]: Layer::push
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
