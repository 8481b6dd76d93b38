use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt, time::Duration};
use tracing::debug;

use crate::{
    config::ProviderConfig,
    error::ProviderError,
    model::{Coordinates, ProviderWeatherRecord},
};

use super::WeatherProvider;

/// Client for the OpenWeather "current weather" endpoint. Always requests metric units.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_url: String,
    api_key: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("weather-core/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    async fn fetch(
        &self,
        query: &[(&str, String)],
    ) -> Result<ProviderWeatherRecord, ProviderError> {
        let res = self.http.get(&self.api_url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        parse_body(status.as_u16(), &body)
    }

    fn city_query(&self, city: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", city.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]
    }

    fn coordinates_query(&self, coords: Coordinates) -> Vec<(&'static str, String)> {
        vec![
            ("lat", coords.lat().to_string()),
            ("lon", coords.lon().to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn weather_by_city(&self, city: &str) -> Result<ProviderWeatherRecord, ProviderError> {
        debug!(url = %self.api_url, city, "calling OpenWeather");
        self.fetch(&self.city_query(city)).await
    }

    async fn weather_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<ProviderWeatherRecord, ProviderError> {
        debug!(url = %self.api_url, lat = coords.lat(), lon = coords.lon(), "calling OpenWeather");
        self.fetch(&self.coordinates_query(coords)).await
    }
}

fn parse_body(status: u16, body: &str) -> Result<ProviderWeatherRecord, ProviderError> {
    if !(200..300).contains(&status) {
        return Err(ProviderError::Status { status, body: truncate_body(body) });
    }

    Ok(serde_json::from_str(body)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
