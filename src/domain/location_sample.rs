use chrono::{DateTime, Utc};

/// Mean earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A single reading pushed by a location provider.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters, smaller is better. Negative values mark an invalid reading.
    pub horizontal_accuracy: f64,
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    pub fn new(latitude: f64, longitude: f64, horizontal_accuracy: f64, timestamp: DateTime<Utc>) -> Self {
        LocationSample {
            latitude,
            longitude,
            horizontal_accuracy,
            timestamp,
        }
    }

    /// Non-negative accuracy and a finite position.
    pub fn is_valid(&self) -> bool {
        self.horizontal_accuracy >= 0.0 && self.latitude.is_finite() && self.longitude.is_finite()
    }

    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.timestamp)
    }

    /// Great-circle distance in meters (haversine).
    pub fn distance_to(&self, other: &LocationSample) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().asin()
    }
}
