use crate::{
    config::ProviderConfig,
    error::ProviderError,
    model::{Coordinates, ProviderWeatherRecord},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// A source of current-weather records.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn weather_by_city(&self, city: &str) -> Result<ProviderWeatherRecord, ProviderError>;

    async fn weather_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<ProviderWeatherRecord, ProviderError>;
}

/// Construct the OpenWeather provider from explicit configuration.
pub fn provider_from_config(config: &ProviderConfig) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::new(config)?;
    Ok(Arc::new(provider))
}
