//! Movie header configuration.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Rect};

/// Format version this build authors by default.
pub const CURRENT_VERSION: u8 = 6;

/// Header settings for an authored movie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieConfig {
    /// Frames per second the player should run at.
    pub frame_rate: f32,
    /// Stage bounds in twips.
    pub stage: Rect,
    /// Stage background color.
    pub background: Color,
    /// Format version to write.
    pub version: u8,
}

impl Default for MovieConfig {
    fn default() -> Self {
        Self {
            frame_rate: 12.0,
            stage: Rect::from_points(550, 400),
            background: Color::WHITE,
            version: CURRENT_VERSION,
        }
    }
}
