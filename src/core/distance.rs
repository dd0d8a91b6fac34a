use crate::domain::model::{Coordinate, Units};

const EARTH_RADIUS_MI: f64 = 3956.0;
const EARTH_RADIUS_KM: f64 = 6371.0;

impl Units {
    pub(crate) fn earth_radius(self) -> f64 {
        match self {
            Self::Mi => EARTH_RADIUS_MI,
            Self::Km => EARTH_RADIUS_KM,
        }
    }
}

/// Great-circle distance between two points via the haversine formula.
///
/// Symmetric in its arguments and zero for identical points. This is
/// spherical separation, not road distance.
pub fn distance(a: Coordinate, b: Coordinate, units: Units) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    c * units.earth_radius()
}
