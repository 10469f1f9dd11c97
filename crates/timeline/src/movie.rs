//! The movie container: header config plus the flat tag sequence, with the
//! flatten step and the JSON authoring-session representation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sr_common::{MovieConfig, Tag};

use crate::error::TimelineResult;
use crate::frame::Frame;
use crate::split::split;

/// A complete movie: header settings and the ordered tag sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub config: MovieConfig,
    pub tags: Vec<Tag>,
}

impl Movie {
    pub fn new(config: MovieConfig) -> Self {
        Self {
            config,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(config: MovieConfig, tags: Vec<Tag>) -> Self {
        Self { config, tags }
    }

    /// Decompose the movie's tag sequence into frames.
    pub fn frames(&self) -> Vec<Frame> {
        split(&self.tags)
    }

    /// Build a movie by flattening `frames` back into a tag sequence.
    pub fn from_frames(config: MovieConfig, frames: &[Frame]) -> Self {
        Self {
            config,
            tags: flatten_frames(frames),
        }
    }
}

/// Flatten a frame sequence into the flat tag sequence a player consumes.
///
/// Inverse of [`split`] for boundary-terminated input: each frame emits its
/// tags in order, ending with its boundary marker.
pub fn flatten_frames(frames: &[Frame]) -> Vec<Tag> {
    let mut tags = Vec::new();
    for frame in frames {
        frame.emit_tags(&mut tags);
    }
    debug!(
        frames = frames.len(),
        tags = tags.len(),
        "Flattened frames into tag stream"
    );
    tags
}

/// Serialize a movie to a pretty-printed JSON string.
pub fn to_json_string(movie: &Movie) -> TimelineResult<String> {
    let json = serde_json::to_string_pretty(movie)?;
    debug!(
        tags = movie.tags.len(),
        json_len = json.len(),
        "Serialized movie to JSON"
    );
    Ok(json)
}

/// Deserialize a movie from its JSON string form.
pub fn from_json_string(json: &str) -> TimelineResult<Movie> {
    let movie: Movie = serde_json::from_str(json)?;
    info!(
        tags = movie.tags.len(),
        version = movie.config.version,
        "Loaded movie from JSON"
    );
    Ok(movie)
}
