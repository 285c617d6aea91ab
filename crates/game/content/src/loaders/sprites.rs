//! Sprite table loader.

use std::path::Path;

use game_core::{PieceTemplate, Sprite, SpriteKey, SpriteLibrary};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Sprite table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteTable {
    pub sprites: Vec<SpriteEntry>,
}

/// One sprite row: the template key it belongs to plus its drawable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteEntry {
    pub key: SpriteKey,
    pub sprite: Sprite,
}

/// Loader for the sprite library from RON files.
pub struct SpriteLoader;

impl SpriteLoader {
    /// Load a sprite library from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpriteLibrary> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load sprite table {}: {}", path.display(), e))
    }

    /// Parse a sprite library from RON contents. Duplicate keys are errors.
    pub fn parse(content: &str) -> LoadResult<SpriteLibrary> {
        let table: SpriteTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sprite table RON: {}", e))?;

        let mut library = SpriteLibrary::new();
        for entry in table.sprites {
            let key = entry.key.clone();
            if library.insert(entry.key, entry.sprite).is_some() {
                anyhow::bail!("duplicate sprite key {}", key);
            }
        }
        Ok(library)
    }

    /// Checks that every catalog template has a sprite for its
    /// `(category, name)` key. A missing sprite is fatal at startup; the
    /// board never renders placeholders.
    pub fn validate_coverage(
        library: &SpriteLibrary,
        templates: &[PieceTemplate],
    ) -> LoadResult<()> {
        for template in templates {
            let key = template.sprite_key();
            if !library.contains(&key) {
                anyhow::bail!("template {:?} has no sprite for key {}", template.name, key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CategoryTag;
    use std::io::Write;

    const TABLE: &str = r#"(
    sprites: [
        (key: (category: "i", name: "infantry"), sprite: (glyph: 'i', color: "yellow")),
        (key: (category: "v", name: "tank"), sprite: (glyph: 'T', color: "green")),
    ],
)"#;

    fn template(name: &str, category: &str) -> PieceTemplate {
        PieceTemplate {
            name: name.to_owned(),
            category: CategoryTag::new(category),
            health: 100,
            cost: 5,
            ammunition: 30,
            rate_of_fire: 2,
            speed: 4,
            armor: 8,
            attack_power: 6,
            fuel: 50,
            fuel_consumption: 1,
            power_consumption: 0,
            power_production: 0,
            fixed: false,
            footprint_cells: 1,
        }
    }

    #[test]
    fn parses_entries_into_the_library() {
        let library = SpriteLoader::parse(TABLE).unwrap();
        assert_eq!(library.len(), 2);

        let key = SpriteKey::new(CategoryTag::new("v"), "tank");
        let sprite = library.get(&key).unwrap();
        assert_eq!(sprite.glyph, 'T');
        assert_eq!(sprite.color, "green");
    }

    #[test]
    fn category_tags_read_as_bare_strings() {
        let entry: SpriteEntry = ron::from_str(
            r#"(key: (category: "a", name: "gunship"), sprite: (glyph: '^', color: "cyan"))"#,
        )
        .unwrap();

        assert_eq!(entry.key, SpriteKey::new(CategoryTag::new("a"), "gunship"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let content = r#"(
    sprites: [
        (key: (category: "v", name: "tank"), sprite: (glyph: 'T', color: "green")),
        (key: (category: "v", name: "tank"), sprite: (glyph: 't', color: "red")),
    ],
)"#;

        let err = SpriteLoader::parse(content).unwrap_err().to_string();
        assert!(err.contains("duplicate sprite key v_tank"), "unexpected message: {err}");
    }

    #[test]
    fn coverage_accepts_a_fully_sprited_catalog() {
        let library = SpriteLoader::parse(TABLE).unwrap();
        let templates = vec![template("infantry", "i"), template("tank", "v")];

        assert!(SpriteLoader::validate_coverage(&library, &templates).is_ok());
    }

    #[test]
    fn coverage_names_the_unsprited_template() {
        let library = SpriteLoader::parse(TABLE).unwrap();
        let templates = vec![template("tank", "v"), template("depot", "b")];

        let err = SpriteLoader::validate_coverage(&library, &templates)
            .unwrap_err()
            .to_string();
        assert!(err.contains("\"depot\""), "unexpected message: {err}");
        assert!(err.contains("b_depot"), "unexpected message: {err}");
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{TABLE}").unwrap();

        let library = SpriteLoader::load(file.path()).unwrap();
        assert_eq!(library.len(), 2);
    }
}
