//! Client configuration sourced from the environment.

use std::env;
use std::path::PathBuf;

use game_core::BoardConfig;

/// Runtime settings for the terminal client.
///
/// Every field has a default so the binary runs from a fresh checkout; a
/// `.env` file is honored before the environment is read.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `pieces.csv` and `sprites.ron`.
    pub content_dir: PathBuf,
    /// Template carried when the session starts.
    pub initial_piece: String,
    /// Grid cell edge in logical pixels.
    pub grid_cell: i32,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            content_dir: path_var("SANDTABLE_CONTENT_DIR", "content"),
            initial_piece: env::var("SANDTABLE_INITIAL_PIECE")
                .unwrap_or_else(|_| "infantry".to_string()),
            grid_cell: int_var("SANDTABLE_GRID_CELL", BoardConfig::DEFAULT_GRID_CELL),
        }
    }

    pub fn board(&self) -> BoardConfig {
        BoardConfig::with_grid_cell(self.grid_cell)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.content_dir.join("pieces.csv")
    }

    pub fn sprites_path(&self) -> PathBuf {
        self.content_dir.join("sprites.ron")
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key).map_or_else(|_| PathBuf::from(default), PathBuf::from)
}

fn int_var(key: &str, default: i32) -> i32 {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(%key, %value, "not an integer, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_fresh_checkout() {
        let config = ClientConfig::from_env();

        assert_eq!(config.initial_piece, "infantry");
        assert_eq!(config.catalog_path(), PathBuf::from("content/pieces.csv"));
        assert_eq!(config.sprites_path(), PathBuf::from("content/sprites.ron"));
        assert_eq!(config.board().grid_cell, BoardConfig::DEFAULT_GRID_CELL);
    }
}
