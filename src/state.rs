use crate::dataset::price_range;
use crate::domain::Dataset;

/// Everything a request needs, built once at startup and shared read-only
/// by the server's worker threads.
pub struct AppState {
    pub dataset: Dataset,
    /// Bounds for the price slider; `None` disables it.
    pub price_range: Option<(f64, f64)>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let price_range = match price_range(&dataset) {
            Ok(range) => Some(range),
            Err(e) => {
                tracing::warn!("price slider disabled: {e}");
                None
            }
        };

        Self {
            dataset,
            price_range,
        }
    }
}
