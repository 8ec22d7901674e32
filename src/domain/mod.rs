pub mod buildings;
pub mod filter;
pub mod listing;

pub use buildings::active_buildings;
pub use filter::{apply, DistrictSelection, FilterCriteria};
pub use listing::{Dataset, Listing};
