//! Tag role classification.
//!
//! The timeline core never inspects tag payloads beyond a handful of fields;
//! it routes each tag by its role. [`Tag::role`] is a total capability
//! query: every tag value, including [`Tag::Unknown`], maps to exactly one
//! role and the query cannot fail.

use serde::{Deserialize, Serialize};

use crate::tags::Tag;

/// The role a tag plays in a movie stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagRole {
    /// Carries the instruction bundle for the current frame.
    Instruction,
    /// Names the current frame.
    Label,
    /// Registers a reusable character.
    Definition,
    /// Commits the current frame.
    FrameBoundary,
    /// Everything else, display mutations and unrecognized records included.
    Other,
}

impl Tag {
    /// Classify this tag. Total: unrecognized records are [`TagRole::Other`].
    pub fn role(&self) -> TagRole {
        match self {
            Tag::DoAction { .. } => TagRole::Instruction,
            Tag::FrameLabel { .. } => TagRole::Label,
            Tag::DefineShape { .. } | Tag::DefineFont { .. } | Tag::DefineText { .. } => {
                TagRole::Definition
            }
            Tag::ShowFrame => TagRole::FrameBoundary,
            Tag::PlaceObject { .. }
            | Tag::RemoveObject { .. }
            | Tag::SetBackground { .. }
            | Tag::Unknown { .. } => TagRole::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CharacterId, Color, Depth, Rect};

    #[test]
    fn definitions_classify_as_definition() {
        let shape = Tag::DefineShape {
            id: CharacterId(1),
            bounds: Rect::default(),
        };
        let font = Tag::DefineFont {
            id: CharacterId(2),
            name: "Serif".into(),
        };
        let text = Tag::DefineText {
            id: CharacterId(3),
            font: CharacterId(2),
            bounds: Rect::default(),
            glyphs: vec![0, 1],
        };
        assert_eq!(shape.role(), TagRole::Definition);
        assert_eq!(font.role(), TagRole::Definition);
        assert_eq!(text.role(), TagRole::Definition);
    }

    #[test]
    fn markers_classify_by_kind() {
        assert_eq!(
            Tag::DoAction { actions: vec![] }.role(),
            TagRole::Instruction
        );
        assert_eq!(
            Tag::FrameLabel { name: "x".into() }.role(),
            TagRole::Label
        );
        assert_eq!(Tag::ShowFrame.role(), TagRole::FrameBoundary);
    }

    #[test]
    fn display_mutations_and_unknown_are_other() {
        assert_eq!(
            Tag::PlaceObject {
                id: CharacterId(1),
                depth: Depth(1),
                x: 0,
                y: 0,
            }
            .role(),
            TagRole::Other
        );
        assert_eq!(Tag::RemoveObject { depth: Depth(1) }.role(), TagRole::Other);
        assert_eq!(
            Tag::SetBackground {
                color: Color::WHITE
            }
            .role(),
            TagRole::Other
        );
        // Forward compatibility: an unrecognized record is never an error.
        assert_eq!(
            Tag::Unknown {
                code: u16::MAX,
                body: vec![0xff; 64],
            }
            .role(),
            TagRole::Other
        );
    }
}
