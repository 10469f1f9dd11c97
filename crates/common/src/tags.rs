//! The tag object model: the typed records a movie stream is made of.
//!
//! A movie is an ordered sequence of [`Tag`] values that a player consumes
//! front to back. Asset definitions register reusable characters, display
//! mutations edit the player's persistent display list, `DoAction` carries
//! the instruction bundle for the current frame, `FrameLabel` names it, and
//! `ShowFrame` commits everything accumulated since the previous boundary.
//!
//! The enum is closed: authoring code matches on it exhaustively, and
//! records from a newer format version arrive as [`Tag::Unknown`] rather
//! than breaking the stream.

use serde::{Deserialize, Serialize};

use crate::types::{CharacterId, Color, Depth, Rect};

/// One typed record in a movie stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Tag {
    /// Registers a vector shape character under `id`.
    DefineShape { id: CharacterId, bounds: Rect },

    /// Registers a font character under `id`.
    DefineFont { id: CharacterId, name: String },

    /// Registers a static text character: glyph indices into a previously
    /// defined font, with the text's bounding box.
    DefineText {
        id: CharacterId,
        font: CharacterId,
        bounds: Rect,
        glyphs: Vec<u16>,
    },

    /// Places (or replaces) character `id` at `depth` in the display list.
    PlaceObject {
        id: CharacterId,
        depth: Depth,
        x: i32,
        y: i32,
    },

    /// Removes whatever occupies `depth` in the display list.
    RemoveObject { depth: Depth },

    /// Sets the stage background color.
    SetBackground { color: Color },

    /// The instruction bundle executed when the current frame is shown.
    DoAction { actions: Vec<Action> },

    /// Names the current frame so it can be targeted by `GotoLabel`.
    FrameLabel { name: String },

    /// Frame boundary: tells the player to render everything accumulated
    /// since the previous boundary.
    ShowFrame,

    /// A record this version does not understand. Carried through verbatim.
    Unknown { code: u16, body: Vec<u8> },
}

/// One executable instruction inside a [`Tag::DoAction`] bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Resume playback from the current frame.
    Play,
    /// Halt playback on the current frame.
    Stop,
    /// Jump to a 1-based frame number.
    GotoFrame(u32),
    /// Jump to a labeled frame.
    GotoLabel(String),
    /// Emit a diagnostic message.
    Trace(String),
}
