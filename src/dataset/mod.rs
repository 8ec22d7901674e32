pub mod loader;

pub use loader::{load, price_range};
