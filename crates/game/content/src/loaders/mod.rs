//! Content loaders for reading piece data from files.
//!
//! The catalog table is parsed by hand (it predates any serde-friendly
//! format); the sprite table is RON deserialized straight into core types.

pub mod catalog;
pub mod sprites;

pub use catalog::CatalogLoader;
pub use sprites::{SpriteEntry, SpriteLoader, SpriteTable};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
