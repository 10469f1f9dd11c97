//! A single timeline frame: everything committed between two frame
//! boundaries, plus the frame's number and optional label.

use serde::{Deserialize, Serialize};

use sr_common::{Action, Tag};

/// One frame of a timeline.
///
/// The four content holders are always valid, possibly-empty sequences;
/// there is no way to null one out. Insertion order is significant in all
/// of them: definitions must precede their use, display mutations apply in
/// sequence, and instructions execute in sequence.
///
/// A frame with no content and no label is legal (an empty tick).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    number: u32,
    label: Option<String>,
    definitions: Vec<Tag>,
    commands: Vec<Tag>,
    instructions: Vec<Action>,
}

impl Frame {
    /// An empty, unnumbered frame. Numbering is the business of whatever
    /// structure ends up owning the frame (`Layer::push`, the splitter, or
    /// the merger).
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty frame carrying an explicit number.
    pub fn numbered(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// 1-based sequence number; 0 until one is assigned.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn set_number(&mut self, number: u32) {
        self.number = number;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn clear_label(&mut self) {
        self.label = None;
    }

    /// Asset-definition tags, in insertion order.
    pub fn definitions(&self) -> &[Tag] {
        &self.definitions
    }

    /// Display-mutation tags (and any otherwise-unclassified tags), in
    /// insertion order.
    pub fn commands(&self) -> &[Tag] {
        &self.commands
    }

    /// The instruction bundle executed when this frame is shown.
    pub fn instructions(&self) -> &[Action] {
        &self.instructions
    }

    pub fn push_definition(&mut self, tag: Tag) {
        self.definitions.push(tag);
    }

    pub fn push_command(&mut self, tag: Tag) {
        self.commands.push(tag);
    }

    pub fn push_action(&mut self, action: Action) {
        self.instructions.push(action);
    }

    pub fn set_definitions(&mut self, definitions: Vec<Tag>) {
        self.definitions = definitions;
    }

    pub fn set_commands(&mut self, commands: Vec<Tag>) {
        self.commands = commands;
    }

    pub fn set_instructions(&mut self, instructions: Vec<Action>) {
        self.instructions = instructions;
    }

    /// `true` if the frame has no content and no label.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.definitions.is_empty()
            && self.commands.is_empty()
            && self.instructions.is_empty()
    }

    /// Emit this frame's tags onto `sink`, inverse of the splitter for one
    /// frame.
    ///
    /// The order is load-bearing: definitions first so commands in the same
    /// frame can reference them, the boundary marker last so the player
    /// renders only after every mutation for the frame has applied.
    pub fn emit_tags(&self, sink: &mut Vec<Tag>) {
        sink.extend(self.definitions.iter().cloned());
        if let Some(label) = &self.label {
            if !label.is_empty() {
                sink.push(Tag::FrameLabel {
                    name: label.clone(),
                });
            }
        }
        if !self.instructions.is_empty() {
            sink.push(Tag::DoAction {
                actions: self.instructions.clone(),
            });
        }
        sink.extend(self.commands.iter().cloned());
        sink.push(Tag::ShowFrame);
    }
}
