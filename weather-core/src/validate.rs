//! Boundary checks run before any lookup is dispatched.

use std::ops::RangeInclusive;

use crate::{error::WeatherError, model::Coordinates};

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Rejects missing or blank input; a usable name is returned exactly as given.
pub fn city(name: Option<&str>) -> Result<String, WeatherError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(WeatherError::invalid("city name must not be empty")),
    }
}

/// Both values must be present and within range. NaN is rejected by the range check.
pub fn coordinates(lat: Option<f64>, lon: Option<f64>) -> Result<Coordinates, WeatherError> {
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Err(WeatherError::invalid("both lat and lon are required"));
    };

    if !LATITUDE_RANGE.contains(&lat) {
        return Err(WeatherError::invalid(format!("latitude {lat} is outside [-90, 90]")));
    }
    if !LONGITUDE_RANGE.contains(&lon) {
        return Err(WeatherError::invalid(format!("longitude {lon} is outside [-180, 180]")));
    }

    Ok(Coordinates { lat, lon })
}
