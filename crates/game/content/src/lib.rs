//! Data-driven piece content and loaders.
//!
//! This crate turns the data files shipped under `content/` into `game-core`
//! values:
//! - the piece catalog (tabular, comma-separated)
//! - the sprite library (data-driven via RON)
//!
//! Loading happens once at startup; a malformed catalog or a template without
//! a sprite is fatal and the interactive loop never starts on partial content.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, SpriteEntry, SpriteLoader, SpriteTable};
