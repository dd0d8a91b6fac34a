use crate::domain::model::{Coordinate, StoreRecord};
use crate::utils::error::Result;

/// Resolves a free-text address or zip code to a coordinate. Failures are
/// tagged errors, never a message standing in for a coordinate.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Coordinate>;
}

/// Enumerates the store table. Iteration order is storage order and carries
/// no meaning for the scan.
pub trait StoreRepository {
    fn all_stores(&self) -> Result<Vec<StoreRecord>>;
}
