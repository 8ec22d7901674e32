// src/map.rs
//
// Marker model for the results map. The browser side draws it with Leaflet;
// everything it needs is serialized from `MapView`.

use crate::domain::{active_buildings, DistrictSelection, Listing};
use crate::geos::{
    district_coord, Coord, CITY_CENTER, CITY_ZOOM, DISTRICT_ZOOM, SEOUL_DISTRICTS,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    District,
    Building,
}

impl MarkerKind {
    pub fn color(self) -> &'static str {
        match self {
            MarkerKind::District => "blue",
            MarkerKind::Building => "red",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MarkerKind::District => "info-sign",
            MarkerKind::Building => "home",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub coord: Coord,
    pub popup: String,
    pub tooltip: String,
    pub color: &'static str,
    pub icon: &'static str,
}

impl Marker {
    fn new(kind: MarkerKind, coord: Coord, popup: String, tooltip: &str) -> Self {
        Self {
            kind,
            coord,
            popup,
            tooltip: tooltip.to_string(),
            color: kind.color(),
            icon: kind.icon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coord,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

#[cfg(test)]
impl MapView {
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.kind == kind)
    }
}

/// Builds the map for the selected district and the filtered rows.
///
/// A named district that has no reference coordinate is centered on the city
/// like "all", but still gets its single labelled marker.
pub fn render(district: &DistrictSelection, filtered: &[&Listing]) -> MapView {
    let mut markers = Vec::new();

    let (center, zoom) = match district {
        DistrictSelection::All => {
            for (name, coord) in SEOUL_DISTRICTS {
                markers.push(Marker::new(
                    MarkerKind::District,
                    *coord,
                    name.to_string(),
                    name,
                ));
            }
            (CITY_CENTER, CITY_ZOOM)
        }
        DistrictSelection::Named(name) => {
            let center = district_coord(name).unwrap_or_else(|| {
                tracing::warn!(district = %name, "no coordinate for district, using city center");
                CITY_CENTER
            });
            markers.push(Marker::new(
                MarkerKind::District,
                center,
                name.clone(),
                name,
            ));
            (center, DISTRICT_ZOOM)
        }
    };

    for building in active_buildings(filtered) {
        tracing::debug!(
            building = building.name,
            matches = building.matches,
            "curated building in results"
        );
        markers.push(Marker::new(
            MarkerKind::Building,
            building.coord,
            format!("{} (필터 매칭됨)", building.name),
            building.name,
        ));
    }

    MapView {
        center,
        zoom,
        markers,
    }
}
