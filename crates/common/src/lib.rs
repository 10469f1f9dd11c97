//! `sr-common` — Shared types for the Showreel authoring engine.
//!
//! This crate is the foundation that the other engine crates depend on.
//! It defines the core abstractions:
//!
//! - **Tags**: `Tag`, `Action` (the record types a movie stream is made of)
//! - **Roles**: `TagRole` and the `Tag::role()` classifier
//! - **Types**: `CharacterId`, `Depth`, `Rect`, `Color` (newtypes for safety)
//! - **Config**: `MovieConfig` (movie header settings)

pub mod classify;
pub mod config;
pub mod tags;
pub mod types;

// Re-export commonly used items at crate root
pub use classify::TagRole;
pub use config::MovieConfig;
pub use tags::{Action, Tag};
pub use types::{CharacterId, Color, Depth, Rect, TWIPS_PER_POINT};
