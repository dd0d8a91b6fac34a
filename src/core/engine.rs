use crate::core::format::render;
use crate::core::nearest::nearest;
use crate::core::{Geocoder, StoreRepository};
use crate::domain::model::{OutputMode, Units};
use crate::utils::error::{LocatorError, Result};

/// Wires the geocoder and the store repository into one run: a single
/// geocode call, one full scan of the table, one formatting call.
pub struct LocatorEngine<G: Geocoder, R: StoreRepository> {
    geocoder: G,
    repository: R,
}

impl<G: Geocoder, R: StoreRepository> LocatorEngine<G, R> {
    pub fn new(geocoder: G, repository: R) -> Self {
        Self {
            geocoder,
            repository,
        }
    }

    pub fn run(&self, query: &str, units: Units, output: OutputMode) -> Result<String> {
        tracing::info!("Geocoding starting point: {}", query);
        let origin = self.geocoder.geocode(query)?;
        tracing::debug!(
            "Resolved to ({}, {})",
            origin.latitude,
            origin.longitude
        );

        let stores = self.repository.all_stores()?;
        tracing::info!("Scanning {} stores", stores.len());

        let ranked = nearest(origin, units, stores).ok_or(LocatorError::EmptyStoreTable)?;
        tracing::debug!(
            "Nearest store: {} at {:.1} {}",
            ranked.store.name,
            ranked.distance,
            ranked.units
        );

        render(&ranked, output)
    }
}
