use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::model::Coordinate;
use crate::domain::ports::Geocoder;
use crate::utils::error::{LocatorError, Result};

/// Blocking client for the Google Maps geocoding JSON API. The endpoint is
/// injectable so tests can stand up a local responder.
pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode(&self, query: &str) -> Result<Coordinate> {
        tracing::debug!("Geocoding request to: {}", self.endpoint);
        let response: GeocodeResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("address", query), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        tracing::debug!("Geocoder status: {}", response.status);
        if response.status != "OK" {
            return Err(LocatorError::InvalidAddress {
                status: response.status,
            });
        }

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LocatorError::InvalidAddress {
                status: "ZERO_RESULTS".to_string(),
            })?;

        Ok(Coordinate::new(
            first.geometry.location.lat,
            first.geometry.location.lng,
        ))
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}
