use crate::domain::GeoLocation;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::ops::RangeInclusive;

const LATITUDES: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDES: RangeInclusive<f64> = -180.0..=180.0;

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Coordinate {
            latitude: f64,
            longitude: f64,
        }

        let Coordinate { latitude, longitude } = Coordinate::deserialize(deserializer)?;
        let latitude = within("latitude", latitude, LATITUDES).map_err(D::Error::custom)?;
        let longitude = within("longitude", longitude, LONGITUDES).map_err(D::Error::custom)?;

        Ok(GeoLocation { latitude, longitude })
    }
}

fn within(axis: &str, value: f64, range: RangeInclusive<f64>) -> Result<f64, String> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!("invalid location {}: {}, must be between {} and {}", axis, value, range.start(), range.end()))
    }
}
