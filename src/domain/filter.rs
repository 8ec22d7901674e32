// src/domain/filter.rs

use crate::domain::listing::Listing;
use crate::geos::{ALL_DISTRICTS, DEFAULT_FLOOR_CEILING, FLOOR_CEILINGS};

/// Allowed slack, in 억 원, around the target price.
pub const PRICE_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DistrictSelection {
    All,
    Named(String),
}

impl DistrictSelection {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_DISTRICTS {
            DistrictSelection::All
        } else {
            DistrictSelection::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DistrictSelection::All => ALL_DISTRICTS,
            DistrictSelection::Named(name) => name,
        }
    }
}

/// The tolerance band shown next to the price slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    pub fn around(target: f64) -> Self {
        Self {
            min: (target - PRICE_TOLERANCE).max(0.0),
            max: target + PRICE_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub district: DistrictSelection,
    pub year_bracket: String,
    pub building_type: String,
    pub area_bracket: String,
    pub floor_label: String,
    pub floor_ceiling: u32,
    pub target_price: f64,
}

impl FilterCriteria {
    pub fn new(
        district: DistrictSelection,
        year_bracket: impl Into<String>,
        building_type: impl Into<String>,
        area_bracket: impl Into<String>,
        floor_label: impl Into<String>,
        target_price: f64,
    ) -> Self {
        let floor_label = floor_label.into();
        Self {
            district,
            year_bracket: year_bracket.into(),
            building_type: building_type.into(),
            area_bracket: area_bracket.into(),
            floor_ceiling: floor_ceiling(&floor_label),
            floor_label,
            target_price,
        }
    }

    pub fn price_band(&self) -> PriceBand {
        PriceBand::around(self.target_price)
    }

    /// Whether a single row passes every active predicate.
    ///
    /// Only the upper edge of the price band is enforced here; the lower
    /// edge is informational.
    pub fn matches(&self, listing: &Listing) -> bool {
        if listing.year_bracket != self.year_bracket
            || listing.building_type != self.building_type
            || listing.area_bracket != self.area_bracket
        {
            return false;
        }

        // Unknown floor counts as ground level.
        if i64::from(listing.floor.unwrap_or(0)) > i64::from(self.floor_ceiling) {
            return false;
        }

        let max_budget = self.target_price + PRICE_TOLERANCE;
        match listing.price {
            Some(price) if price <= max_budget => {}
            _ => return false,
        }

        match &self.district {
            DistrictSelection::All => true,
            DistrictSelection::Named(name) => listing.district == *name,
        }
    }
}

/// Maps a floor-bracket label to its maximum floor, 50 when unrecognized.
pub fn floor_ceiling(label: &str) -> u32 {
    FLOOR_CEILINGS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, ceiling)| *ceiling)
        .unwrap_or(DEFAULT_FLOOR_CEILING)
}

/// Returns the rows satisfying `criteria`, in input order.
pub fn apply<'a, I>(rows: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    rows.into_iter()
        .filter(|listing| criteria.matches(listing))
        .collect()
}
