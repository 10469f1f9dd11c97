//! Timeline decomposition: grouping a flat tag sequence into frames.

use tracing::debug;

use sr_common::{Tag, TagRole};

use crate::frame::Frame;

/// Split a flat tag sequence into boundary-terminated frames.
///
/// One pass over the input. Tags accumulate into a current frame according
/// to their role; each `ShowFrame` boundary assigns the current frame the
/// next sequential number (starting at 1), commits it, and starts a fresh
/// one. A trailing frame with no terminating boundary is discarded: a frame
/// only exists once the player has been told to render it.
///
/// Total over any input. An empty sequence or one with no boundaries yields
/// no frames; boundaries in unexpected positions yield empty frames. If a
/// frame carries several labels or instruction bundles, the last one before
/// the boundary wins.
pub fn split(tags: &[Tag]) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut current = Frame::new();

    for tag in tags {
        match tag.role() {
            TagRole::Instruction => {
                if let Tag::DoAction { actions } = tag {
                    current.set_instructions(actions.clone());
                }
            }
            TagRole::Label => {
                if let Tag::FrameLabel { name } = tag {
                    current.set_label(name.clone());
                }
            }
            TagRole::Definition => current.push_definition(tag.clone()),
            TagRole::FrameBoundary => {
                current.set_number(frames.len() as u32 + 1);
                frames.push(std::mem::take(&mut current));
            }
            TagRole::Other => current.push_command(tag.clone()),
        }
    }

    debug!(
        tags = tags.len(),
        frames = frames.len(),
        "Split tag stream into frames"
    );
    frames
}
