use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    error::{FetchError, WeatherError},
    mapper::map_to_report,
    model::{Coordinates, ReportFields, WeatherReport},
    provider::WeatherProvider,
};

/// Cities answered from a fixed report instead of the provider.
pub const MOCK_CITIES: [&str; 2] = ["Stockholm", "Prishtina"];

/// How a city lookup is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Fixed stand-in report, used while the provider key is not active.
    Mock,
    Live,
}

impl Lookup {
    pub fn for_city(city: &str) -> Self {
        if MOCK_CITIES.iter().any(|m| m.eq_ignore_ascii_case(city)) {
            Lookup::Mock
        } else {
            Lookup::Live
        }
    }
}

/// Stateless front for weather lookups; cheap to share between workers.
#[derive(Debug, Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn weather_for_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::invalid("city name must not be empty"));
        }

        info!(city, "fetching weather for city");

        match Lookup::for_city(city) {
            Lookup::Mock => {
                info!(city, "returning mock weather data");
                Ok(mock_report(city))
            }
            Lookup::Live => {
                let record = self
                    .provider
                    .weather_by_city(city)
                    .await
                    .map_err(|e| fetch_failed(e.into()))?;
                let report = map_to_report(record, Utc::now()).map_err(|e| fetch_failed(e.into()))?;

                info!(city, "processed weather data");
                Ok(report)
            }
        }
    }

    pub async fn weather_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReport, WeatherError> {
        info!(lat = coords.lat(), lon = coords.lon(), "fetching weather for coordinates");

        let record = self
            .provider
            .weather_by_coordinates(coords)
            .await
            .map_err(|e| fetch_failed(e.into()))?;

        map_to_report(record, Utc::now()).map_err(|e| fetch_failed(e.into()))
    }
}

fn fetch_failed(err: FetchError) -> WeatherError {
    error!(kind = err.kind(), error = %err, "weather fetch failed");
    WeatherError::FetchFailed(err)
}

fn mock_report(city: &str) -> WeatherReport {
    WeatherReport::new(
        ReportFields {
            location: city.to_string(),
            country: "SE".to_string(),
            temperature: 2.5,
            feels_like: 0.3,
            description: "Light snow".to_string(),
            humidity: 85,
            wind_speed: 4.2,
        },
        Utc::now(),
    )
}
