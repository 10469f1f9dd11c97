//! Error types for text layout (thiserror-based).

use thiserror::Error;

/// Errors that can occur during text layout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextLayoutError {
    /// The font has no glyph for this character. No fallback glyph is
    /// substituted; the caller decides what happens to the text.
    #[error("font has no glyph for {ch:?}")]
    MissingGlyph { ch: char },
}
