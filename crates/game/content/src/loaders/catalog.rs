//! Piece catalog loader.
//!
//! The catalog is a plain comma-separated table, one template per record with
//! a fixed column order and a header record that is skipped. Any malformed
//! field aborts the load; the engine never starts on a partial catalog.

use std::path::Path;

use game_core::{CategoryTag, PieceTemplate};

use crate::loaders::{LoadResult, read_file};

/// Column names of the catalog table, in file order.
const COLUMNS: [&str; 15] = [
    "name",
    "category",
    "health",
    "cost",
    "ammunition",
    "rate_of_fire",
    "speed",
    "armor",
    "attack_power",
    "fuel",
    "fuel_consumption",
    "power_consumption",
    "power_production",
    "fixed",
    "footprint",
];

/// Loader for piece templates from catalog table files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load piece templates from a catalog file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the comma-separated catalog table
    ///
    /// # Returns
    ///
    /// Returns templates in file order, which is also the palette order.
    pub fn load(path: &Path) -> LoadResult<Vec<PieceTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load piece catalog {}: {}", path.display(), e))
    }

    /// Parse catalog records from table contents.
    ///
    /// The first line is the header. Blank lines are ignored. Every record
    /// must carry exactly one field per column; integer columns must parse,
    /// and names must be unique. An empty catalog is an error.
    pub fn parse(content: &str) -> LoadResult<Vec<PieceTemplate>> {
        let mut templates: Vec<PieceTemplate> = Vec::new();

        for (index, line) in content.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let template =
                parse_record(line).map_err(|e| anyhow::anyhow!("line {}: {}", index + 1, e))?;
            if templates.iter().any(|known| known.name == template.name) {
                anyhow::bail!(
                    "line {}: duplicate template name {:?}",
                    index + 1,
                    template.name
                );
            }
            templates.push(template);
        }

        if templates.is_empty() {
            anyhow::bail!("catalog has no template records");
        }
        Ok(templates)
    }
}

fn parse_record(line: &str) -> LoadResult<PieceTemplate> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != COLUMNS.len() {
        anyhow::bail!(
            "expected {} fields, found {}",
            COLUMNS.len(),
            fields.len()
        );
    }

    let int = |column: usize| -> LoadResult<i32> {
        fields[column].parse::<i32>().map_err(|_| {
            anyhow::anyhow!(
                "column {:?} has non-numeric value {:?}",
                COLUMNS[column],
                fields[column]
            )
        })
    };

    if fields[0].is_empty() {
        anyhow::bail!("column \"name\" is empty");
    }

    Ok(PieceTemplate {
        name: fields[0].to_owned(),
        category: CategoryTag::new(fields[1]),
        health: int(2)?,
        cost: int(3)?,
        ammunition: int(4)?,
        rate_of_fire: int(5)?,
        speed: int(6)?,
        armor: int(7)?,
        attack_power: int(8)?,
        fuel: int(9)?,
        fuel_consumption: int(10)?,
        power_consumption: int(11)?,
        power_production: int(12)?,
        // "0" is mobile; any other value marks a fixed emplacement.
        fixed: fields[13] != "0",
        footprint_cells: int(14)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "name,category,health,cost,ammo,rof,speed,armor,attack,fuel,fuelcons,powercons,powerprod,fixed,footprint";

    fn catalog(records: &[&str]) -> String {
        let mut content = String::from(HEADER);
        for record in records {
            content.push('\n');
            content.push_str(record);
        }
        content
    }

    #[test]
    fn parses_records_in_file_order() {
        let content = catalog(&[
            "infantry,i,50,1,10,1,2,1,2,0,0,0,0,0,1",
            "tank,v,100,5,30,2,4,8,6,50,2,0,0,0,2",
            "depot,b,200,10,0,0,0,10,0,0,0,1,0,1,4",
        ]);

        let templates = CatalogLoader::parse(&content).unwrap();
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[0].name, "infantry");
        assert_eq!(templates[1].category, CategoryTag::new("v"));
        assert_eq!(templates[1].health, 100);
        assert_eq!(templates[2].footprint_cells, 4);
    }

    #[test]
    fn fixed_flag_is_zero_or_anything_else() {
        let content = catalog(&[
            "infantry,i,50,1,10,1,2,1,2,0,0,0,0,0,1",
            "depot,b,200,10,0,0,0,10,0,0,0,1,0,1,4",
            "wall,b,300,2,0,0,0,20,0,0,0,0,0,yes,1",
        ]);

        let templates = CatalogLoader::parse(&content).unwrap();
        assert!(!templates[0].fixed);
        assert!(templates[1].fixed);
        assert!(templates[2].fixed);
    }

    #[test]
    fn field_errors_name_line_and_column() {
        let content = catalog(&["tank,v,abc,5,30,2,4,8,6,50,2,0,0,0,2"]);

        let err = CatalogLoader::parse(&content).unwrap_err().to_string();
        assert!(err.contains("line 2"), "unexpected message: {err}");
        assert!(err.contains("\"health\""), "unexpected message: {err}");
        assert!(err.contains("\"abc\""), "unexpected message: {err}");
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        let content = catalog(&["tank,v,100"]);

        let err = CatalogLoader::parse(&content).unwrap_err().to_string();
        assert!(err.contains("expected 15 fields"), "unexpected message: {err}");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let content = catalog(&[
            "tank,v,100,5,30,2,4,8,6,50,2,0,0,0,2",
            "tank,v,120,6,30,2,4,8,6,50,2,0,0,0,2",
        ]);

        let err = CatalogLoader::parse(&content).unwrap_err().to_string();
        assert!(err.contains("duplicate template name"), "unexpected message: {err}");
    }

    #[test]
    fn header_only_catalog_is_an_error() {
        let err = CatalogLoader::parse(HEADER).unwrap_err().to_string();
        assert!(err.contains("no template records"), "unexpected message: {err}");
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            catalog(&["infantry,i,50,1,10,1,2,1,2,0,0,0,0,0,1"])
        )
        .unwrap();

        let templates = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "infantry");
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = CatalogLoader::load(Path::new("/nonexistent/pieces.csv"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("/nonexistent/pieces.csv"), "unexpected message: {err}");
    }
}
