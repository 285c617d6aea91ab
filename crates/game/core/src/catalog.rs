//! Immutable piece catalog types.
//!
//! Templates and sprites are loaded once at startup (see `game-content`) and
//! never mutated afterward. The registry owns the templates for the process
//! lifetime; every live piece on the board is a copy derived from one of them.

use std::collections::HashMap;
use std::fmt;

/// Free-form unit category tag from the catalog.
///
/// The taxonomy is open-ended; the only tag the engine interprets is the
/// single-character structure tag, which excludes a piece from shot
/// attribution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryTag(pub String);

impl CategoryTag {
    /// Tag marking immobile structures (buildings).
    pub const STRUCTURE: &'static str = "b";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for immobile structures, which cannot be shot at.
    pub fn is_structure(&self) -> bool {
        self.as_str() == Self::STRUCTURE
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable stat block for one catalog entry.
///
/// Field meanings follow the catalog file column order; all stats are plain
/// integers and none of them are interpreted by the interaction engine beyond
/// what the inspect overlay displays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceTemplate {
    /// Unique key within the catalog.
    pub name: String,
    pub category: CategoryTag,
    pub health: i32,
    pub cost: i32,
    pub ammunition: i32,
    pub rate_of_fire: i32,
    pub speed: i32,
    pub armor: i32,
    pub attack_power: i32,
    pub fuel: i32,
    pub fuel_consumption: i32,
    pub power_consumption: i32,
    pub power_production: i32,
    /// Immobile emplacement flag from the catalog.
    pub fixed: bool,
    /// Footprint edge length in grid cells (footprints are square).
    pub footprint_cells: i32,
}

impl PieceTemplate {
    /// Pixel footprint at the given grid cell size, per axis.
    pub fn footprint_px(&self, grid_cell: i32) -> (i32, i32) {
        let edge = self.footprint_cells * grid_cell;
        (edge, edge)
    }

    pub fn sprite_key(&self) -> SpriteKey {
        SpriteKey::new(self.category.clone(), self.name.clone())
    }
}

/// Lookup key for a template's sprite: category plus name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteKey {
    pub category: CategoryTag,
    pub name: String,
}

impl SpriteKey {
    pub fn new(category: CategoryTag, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

impl fmt::Display for SpriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category, self.name)
    }
}

/// Frontend-neutral drawable description.
///
/// The frontend decides what a glyph and a color name look like on its own
/// render target; the engine only passes them through.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sprite {
    pub glyph: char,
    pub color: String,
}

impl Sprite {
    pub fn new(glyph: char, color: impl Into<String>) -> Self {
        Self {
            glyph,
            color: color.into(),
        }
    }
}

/// Every sprite declared by the sprite table, keyed by `(category, name)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteLibrary {
    entries: HashMap<SpriteKey, Sprite>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a sprite, returning the previous entry for the key if any.
    pub fn insert(&mut self, key: SpriteKey, sprite: Sprite) -> Option<Sprite> {
        self.entries.insert(key, sprite)
    }

    pub fn get(&self, key: &SpriteKey) -> Option<&Sprite> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &SpriteKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
