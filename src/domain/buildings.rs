// src/domain/buildings.rs

use crate::domain::listing::Listing;
use crate::geos::{Coord, CURATED_BUILDINGS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBuilding {
    pub name: &'static str,
    pub coord: Coord,
    /// How many filtered rows mention this building.
    pub matches: usize,
}

/// Curated buildings that appear in `rows`, in curated-list order.
///
/// A row mentions a building when its building name contains the curated
/// name (case-sensitive). Rows without a building name never match.
pub fn active_buildings(rows: &[&Listing]) -> Vec<ActiveBuilding> {
    CURATED_BUILDINGS
        .iter()
        .filter_map(|&(name, coord)| {
            let matches = rows
                .iter()
                .filter(|row| {
                    row.building_name
                        .as_deref()
                        .is_some_and(|building| building.contains(name))
                })
                .count();

            (matches > 0).then_some(ActiveBuilding {
                name,
                coord,
                matches,
            })
        })
        .collect()
}
