//! Timeline composition: merging layer timelines into one frame sequence.

use tracing::{debug, trace};

use crate::error::{TimelineError, TimelineResult};
use crate::frame::Frame;
use crate::layer::Layer;

/// Merge layer timelines into a single frame-indexed timeline.
///
/// The merged timeline is a backbone of empty frames numbered `1..=N`,
/// where `N` is the maximum frame number across all layers; every slot in
/// range exists even if no layer contributed to it. Each layer frame is
/// then written into its slot: `definitions`, `commands`, and
/// `instructions` are replaced wholesale by copies of the frame's lists,
/// and the label is overwritten only when the frame actually carries one,
/// so a later layer without a label cannot erase an earlier layer's label.
///
/// When two layers populate the same slot, the layer later in `layers`
/// wins that slot outright. Callers wanting additive composition must
/// resolve collisions before merging.
///
/// A frame numbered 0 (never assigned) or beyond the backbone is a
/// structural impossibility and fails fast with
/// [`TimelineError::FrameOutOfRange`] before any further slot is touched.
pub fn merge(layers: &[Layer]) -> TimelineResult<Vec<Frame>> {
    let last = layers
        .iter()
        .flat_map(|layer| layer.frames())
        .map(Frame::number)
        .max()
        .unwrap_or(0);

    debug!(layers = layers.len(), last_frame = last, "Merging layers");

    let mut merged: Vec<Frame> = (1..=last).map(Frame::numbered).collect();

    for layer in layers {
        for frame in layer.frames() {
            let number = frame.number();
            if number == 0 || number > last {
                return Err(TimelineError::FrameOutOfRange {
                    layer: layer.number(),
                    number,
                    last,
                });
            }

            let slot = &mut merged[(number - 1) as usize];
            slot.set_definitions(frame.definitions().to_vec());
            slot.set_commands(frame.commands().to_vec());
            slot.set_instructions(frame.instructions().to_vec());
            if let Some(label) = frame.label() {
                slot.set_label(label);
            }
            trace!(layer = layer.number(), frame = number, "Wrote frame slot");
        }
    }

    Ok(merged)
}
