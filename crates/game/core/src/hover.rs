//! Stateless hit-testing over placed pieces and the palette column.
//!
//! Both queries run every tick at tens-of-instances scale, so a linear scan
//! is the whole algorithm. Registration order doubles as the tie-break when
//! footprints overlap, which keeps hover, drag, and shot attribution
//! deterministic.

use crate::config::BoardConfig;
use crate::geometry::Point;
use crate::registry::PieceInstance;

/// First placed piece whose interior strictly contains `point`, in
/// registration order.
pub fn hit_test(placed: &[PieceInstance], point: Point) -> Option<&PieceInstance> {
    placed
        .iter()
        .find(|piece| piece.bounds().contains_interior(point))
}

/// Palette row under `point`, if the point lies inside the palette column.
///
/// The column spans `width - menu_cell < x <= width`: the inner edge is
/// exclusive so it still counts as the board, the outer edge inclusive so the
/// last pixel column still selects. Rows may index past the catalog; callers
/// resolve that against the template list.
pub fn palette_row(config: &BoardConfig, point: Point) -> Option<usize> {
    let menu_cell = config.menu_cell();
    if point.x <= config.width - menu_cell || config.width < point.x {
        return None;
    }
    if point.y < 0 {
        return None;
    }
    Some((point.y / menu_cell) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryTag, PieceTemplate};
    use crate::registry::PieceRegistry;

    fn template(name: &str, footprint_cells: i32) -> PieceTemplate {
        PieceTemplate {
            name: name.to_owned(),
            category: CategoryTag::new("v"),
            health: 50,
            cost: 3,
            ammunition: 10,
            rate_of_fire: 1,
            speed: 6,
            armor: 4,
            attack_power: 5,
            fuel: 40,
            fuel_consumption: 2,
            power_consumption: 0,
            power_production: 0,
            fixed: false,
            footprint_cells,
        }
    }

    fn registry_with_placed(spots: &[Point]) -> PieceRegistry {
        let mut registry =
            PieceRegistry::new(vec![template("tank", 2)], BoardConfig::new());
        registry.carry_named("tank").unwrap();
        for &spot in spots {
            registry.center_carried_on(spot);
            registry.place().unwrap();
        }
        registry.drop_carried();
        registry
    }

    #[test]
    fn boundary_points_miss() {
        // Footprint 24 px centered on (100, 100): bounds [88, 112] per axis.
        let registry = registry_with_placed(&[Point::new(100, 100)]);

        assert!(hit_test(registry.placed(), Point::new(100, 100)).is_some());
        assert!(hit_test(registry.placed(), Point::new(112, 100)).is_none());
        assert!(hit_test(registry.placed(), Point::new(100, 112)).is_none());
        assert!(hit_test(registry.placed(), Point::new(88, 100)).is_none());
        assert!(hit_test(registry.placed(), Point::new(100, 88)).is_none());
    }

    #[test]
    fn overlap_resolves_to_first_registered() {
        let registry = registry_with_placed(&[Point::new(100, 100), Point::new(110, 100)]);

        let hit = hit_test(registry.placed(), Point::new(105, 100)).unwrap();
        assert_eq!(hit.id().0, 1);
    }

    #[test]
    fn palette_column_edges() {
        let config = BoardConfig::new();
        // menu_cell = 48, column spans (752, 800].

        assert_eq!(palette_row(&config, Point::new(752, 0)), None);
        assert_eq!(palette_row(&config, Point::new(753, 0)), Some(0));
        assert_eq!(palette_row(&config, Point::new(800, 0)), Some(0));
        assert_eq!(palette_row(&config, Point::new(801, 0)), None);
    }

    #[test]
    fn palette_rows_divide_by_menu_cell() {
        let config = BoardConfig::new();

        assert_eq!(palette_row(&config, Point::new(780, 47)), Some(0));
        assert_eq!(palette_row(&config, Point::new(780, 48)), Some(1));
        assert_eq!(palette_row(&config, Point::new(780, 100)), Some(2));
    }
}
