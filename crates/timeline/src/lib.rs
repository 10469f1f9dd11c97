//! `sr-timeline` — Timeline composition for the Showreel authoring engine.
//!
//! A movie is a flat sequence of [`Tag`](sr_common::Tag) records. This
//! crate turns that flat stream into something an authoring tool can edit,
//! and back:
//!
//! - **Split**: group a tag stream into boundary-terminated [`Frame`]s
//! - **Layer**: one independent frame timeline per stacking level
//! - **Merge**: compose layer timelines into a single frame-indexed timeline
//! - **Flatten**: emit frames back into a player-consumable tag stream
//!
//! Splitting then flattening a well-formed stream is lossless; merging is
//! per-slot overwrite with the later layer winning (see [`merge`]).
//!
//! # Usage
//!
//! ```rust
//! use sr_common::{CharacterId, Depth, Tag};
//! use sr_timeline::{flatten_frames, merge, split, Layer};
//!
//! let tags = vec![
//!     Tag::PlaceObject { id: CharacterId(1), depth: Depth(1), x: 0, y: 0 },
//!     Tag::ShowFrame,
//! ];
//!
//! let mut layer = Layer::new(1);
//! for frame in split(&tags) {
//!     layer.push(frame);
//! }
//!
//! let merged = merge(&[layer]).unwrap();
//! assert_eq!(flatten_frames(&merged), tags);
//! ```

pub mod error;
pub mod frame;
pub mod layer;
pub mod merge;
pub mod movie;
pub mod split;

// Re-export primary API
pub use error::{TimelineError, TimelineResult};
pub use frame::Frame;
pub use layer::Layer;
pub use merge::merge;
pub use movie::{flatten_frames, from_json_string, to_json_string, Movie};
pub use split::split;
