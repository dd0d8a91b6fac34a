use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the sphere in decimal degrees. Out-of-range values are
/// accepted; the distance math stays defined either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Unit system for reported distances. Selects the earth-radius constant
/// used by the distance calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Mi,
    Km,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mi => write!(f, "mi"),
            Self::Km => write!(f, "km"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

/// One row of the store table. Numeric fields are coerced to floats at the
/// repository boundary; everything else stays as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub name: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
    pub county: String,
}

impl StoreRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// The winning store plus its computed distance. Serializes flat: store
/// fields, distance and units all at the same level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStore {
    #[serde(flatten)]
    pub store: StoreRecord,
    pub distance: f64,
    pub units: Units,
}
