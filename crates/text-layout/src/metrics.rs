//! Font metrics: the per-character glyph table and vertical extents.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::TextLayoutError;

/// One glyph: its index in the font's glyph table and its horizontal
/// advance, both in em-square units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub index: u16,
    pub advance: f32,
}

/// Metrics of one font face.
///
/// All values are stored in em-square units; layout scales them by
/// `point_size / em_square` (see [`scale`](FontMetrics::scale)). Ascent
/// extends above the baseline, descent below; both are positive numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub em_square: f32,
    pub ascent: f32,
    pub descent: f32,
    glyphs: HashMap<char, Glyph>,
}

impl FontMetrics {
    pub fn new(em_square: f32, ascent: f32, descent: f32) -> Self {
        Self {
            em_square,
            ascent,
            descent,
            glyphs: HashMap::new(),
        }
    }

    /// Register a glyph for `ch`, replacing any previous entry.
    pub fn insert_glyph(&mut self, ch: char, index: u16, advance: f32) {
        self.glyphs.insert(ch, Glyph { index, advance });
    }

    /// Look up the glyph for `ch`. A missing entry is a hard error.
    pub fn glyph(&self, ch: char) -> Result<Glyph, TextLayoutError> {
        self.glyphs
            .get(&ch)
            .copied()
            .ok_or(TextLayoutError::MissingGlyph { ch })
    }

    /// Scale factor from em-square units to `point_size` units.
    pub fn scale(&self, point_size: f32) -> f32 {
        point_size / self.em_square
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_lookup_hits_and_misses() {
        let mut font = FontMetrics::new(1000.0, 800.0, 200.0);
        font.insert_glyph('A', 0, 600.0);

        assert_eq!(
            font.glyph('A').expect("present"),
            Glyph {
                index: 0,
                advance: 600.0
            }
        );
        assert_eq!(
            font.glyph('B'),
            Err(TextLayoutError::MissingGlyph { ch: 'B' })
        );
    }

    #[test]
    fn scale_is_point_size_over_em_square() {
        let font = FontMetrics::new(1000.0, 800.0, 200.0);
        assert!((font.scale(12.0) - 0.012).abs() < 1e-9);
        assert!((font.scale(1000.0) - 1.0).abs() < 1e-9);
    }
}
