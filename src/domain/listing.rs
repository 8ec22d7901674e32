// src/domain/listing.rs

/// One transaction row of the dataset.
///
/// The typed fields are the ones the filters and the map read. `cells` keeps
/// the full CSV record (aligned with `Dataset::headers`) so the results table
/// and the export can show every column.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub district: String,
    pub building_name: Option<String>,
    pub building_type: String,
    pub year_bracket: String,
    pub area_bracket: String,
    pub floor: Option<i32>,
    /// In 억 원.
    pub price: Option<f64>,

    pub cells: Vec<String>,
}

/// The loaded listings file. Read-only after startup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Listing>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
