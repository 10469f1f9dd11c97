//! Bounds computation and glyph-run layout.
//!
//! Given metrics and a string, computes the string's bounding box (sum of
//! scaled advances wide, ascent-to-descent tall) and the positioned
//! glyph-index runs a static text character stores. Multi-line blocks step
//! each successive baseline down by a fixed line-spacing increment while
//! tracking the running extents of the whole block.

use serde::{Deserialize, Serialize};

use crate::error::TextLayoutError;
use crate::metrics::FontMetrics;

/// Bounding box of laid-out text, relative to the first baseline's origin.
/// `top` is negative (above the baseline), `bottom` positive (below).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBounds {
    pub width: f32,
    pub top: f32,
    pub bottom: f32,
}

impl TextBounds {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A glyph index placed at an offset from the text origin.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionedGlyph {
    pub index: u16,
    pub x: f32,
    pub y: f32,
}

/// One laid-out line: positioned glyphs and the line's total advance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    pub glyphs: Vec<PositionedGlyph>,
    pub width: f32,
}

/// A laid-out multi-line block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub lines: Vec<GlyphRun>,
    pub bounds: TextBounds,
}

/// Bounding box of `text` at `point_size`: the scaled advances summed for
/// the width, ascent above to descent below the baseline for the height.
///
/// Fails with [`TextLayoutError::MissingGlyph`] if any character has no
/// entry in the font's table.
pub fn text_bounds(
    font: &FontMetrics,
    text: &str,
    point_size: f32,
) -> Result<TextBounds, TextLayoutError> {
    let scale = font.scale(point_size);
    let mut width = 0.0;
    for ch in text.chars() {
        width += font.glyph(ch)?.advance * scale;
    }
    Ok(TextBounds {
        width,
        top: -font.ascent * scale,
        bottom: font.descent * scale,
    })
}

/// Lay out one line of text starting at the origin, advancing x per glyph.
pub fn layout_line(
    font: &FontMetrics,
    text: &str,
    point_size: f32,
) -> Result<GlyphRun, TextLayoutError> {
    layout_line_at(font, text, point_size, 0.0)
}

fn layout_line_at(
    font: &FontMetrics,
    text: &str,
    point_size: f32,
    y: f32,
) -> Result<GlyphRun, TextLayoutError> {
    let scale = font.scale(point_size);
    let mut glyphs = Vec::with_capacity(text.chars().count());
    let mut x = 0.0;
    for ch in text.chars() {
        let glyph = font.glyph(ch)?;
        glyphs.push(PositionedGlyph {
            index: glyph.index,
            x,
            y,
        });
        x += glyph.advance * scale;
    }
    Ok(GlyphRun { glyphs, width: x })
}

/// Lay out a multi-line block. Each successive line's baseline sits
/// `line_spacing` below the previous one; the block bounds track the widest
/// line and the vertical span from the first line's ascent to the last
/// line's descent.
///
/// An empty `lines` slice yields an empty block with zero bounds.
pub fn layout_block(
    font: &FontMetrics,
    lines: &[&str],
    point_size: f32,
    line_spacing: f32,
) -> Result<TextBlock, TextLayoutError> {
    let scale = font.scale(point_size);
    let mut runs = Vec::with_capacity(lines.len());
    let mut max_width: f32 = 0.0;
    let mut y = 0.0;

    for line in lines {
        let run = layout_line_at(font, line, point_size, y)?;
        max_width = max_width.max(run.width);
        runs.push(run);
        y += line_spacing;
    }

    let bounds = if runs.is_empty() {
        TextBounds {
            width: 0.0,
            top: 0.0,
            bottom: 0.0,
        }
    } else {
        TextBounds {
            width: max_width,
            top: -font.ascent * scale,
            bottom: (runs.len() as f32 - 1.0) * line_spacing + font.descent * scale,
        }
    };

    Ok(TextBlock {
        lines: runs,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a font where the scale works out to exactly 1.0 at size
    /// 1000, so advances read as laid-out units.
    fn unit_font() -> FontMetrics {
        let mut font = FontMetrics::new(1000.0, 5.0, 2.0);
        font.insert_glyph('A', 0, 10.0);
        font.insert_glyph('B', 1, 14.0);
        font.insert_glyph(' ', 2, 6.0);
        font
    }

    #[test]
    fn bounds_sums_advances_and_spans_ascent_to_descent() {
        let font = unit_font();
        let bounds = text_bounds(&font, "AA", 1000.0).expect("bounds");
        assert!((bounds.width - 20.0).abs() < 1e-6);
        assert!((bounds.top - -5.0).abs() < 1e-6);
        assert!((bounds.bottom - 2.0).abs() < 1e-6);
        assert!((bounds.height() - 7.0).abs() < 1e-6);
    }

    #[test]
    fn bounds_scales_with_point_size() {
        let font = unit_font();
        let bounds = text_bounds(&font, "A", 500.0).expect("bounds");
        assert!((bounds.width - 5.0).abs() < 1e-6);
        assert!((bounds.top - -2.5).abs() < 1e-6);
        assert!((bounds.bottom - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_text_has_zero_width() {
        let font = unit_font();
        let bounds = text_bounds(&font, "", 1000.0).expect("bounds");
        assert_eq!(bounds.width, 0.0);
    }

    #[test]
    fn missing_glyph_is_an_error_not_a_substitute() {
        let font = unit_font();
        assert_eq!(
            text_bounds(&font, "AZ", 1000.0),
            Err(TextLayoutError::MissingGlyph { ch: 'Z' })
        );
        assert_eq!(
            layout_line(&font, "Z", 1000.0),
            Err(TextLayoutError::MissingGlyph { ch: 'Z' })
        );
    }

    #[test]
    fn line_positions_advance_per_glyph() {
        let font = unit_font();
        let run = layout_line(&font, "AB A", 1000.0).expect("layout");
        assert_eq!(run.glyphs.len(), 4);
        let xs: Vec<f32> = run.glyphs.iter().map(|g| g.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 24.0, 30.0]);
        let indices: Vec<u16> = run.glyphs.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 0]);
        assert!((run.width - 40.0).abs() < 1e-6);
    }

    #[test]
    fn block_steps_baselines_and_tracks_extents() {
        let font = unit_font();
        let block = layout_block(&font, &["AB", "A"], 1000.0, 20.0).expect("layout");

        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[0].glyphs[0].y, 0.0);
        assert_eq!(block.lines[1].glyphs[0].y, 20.0);

        // Widest line wins the width; vertical span covers first ascent to
        // last descent.
        assert!((block.bounds.width - 24.0).abs() < 1e-6);
        assert!((block.bounds.top - -5.0).abs() < 1e-6);
        assert!((block.bounds.bottom - 22.0).abs() < 1e-6);
    }

    #[test]
    fn empty_block_is_zero() {
        let font = unit_font();
        let block = layout_block(&font, &[], 1000.0, 20.0).expect("layout");
        assert!(block.lines.is_empty());
        assert_eq!(block.bounds.width, 0.0);
        assert_eq!(block.bounds.height(), 0.0);
    }
}
