//! `sr-text-layout` — Glyph-advance text layout for the Showreel authoring
//! engine.
//!
//! Static text characters store positioned glyph indices, not strings. This
//! crate maps a font's metrics and a string to those positions:
//!
//! - **Metrics**: `FontMetrics` (per-character advance table, ascent/descent)
//! - **Bounds**: `text_bounds` (bounding box of a string at a point size)
//! - **Runs**: `layout_line` / `layout_block` (positioned glyph-index lists)
//!
//! Everything is deterministic arithmetic over the advance table. A
//! character with no table entry is a hard error; substituting a fallback
//! glyph would silently change the authored text.

pub mod error;
pub mod layout;
pub mod metrics;

// Re-export primary API
pub use error::TextLayoutError;
pub use layout::{layout_block, layout_line, text_bounds, GlyphRun, PositionedGlyph, TextBlock, TextBounds};
pub use metrics::{FontMetrics, Glyph};
