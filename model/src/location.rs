use std::fmt;

use crate::base_types::KiloMeter;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in degrees. Positions are immutable once assigned to
/// a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    lon: f64,
    lat: f64,
}

// static functions
impl Location {
    pub fn new(lon: f64, lat: f64) -> Location {
        Location { lon, lat }
    }
}

// methods
impl Location {
    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// great-circle distance via the haversine formula.
    pub fn distance_to(&self, other: &Location) -> KiloMeter {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lon, self.lat)
    }
}
