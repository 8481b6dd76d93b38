//! Core library for the weather integration service.
//!
//! This crate defines:
//! - Configuration (TOML file plus environment overrides)
//! - The OpenWeather provider client behind the `WeatherProvider` trait
//! - Provider and report models, the mapper and the text formatter
//! - Boundary validation and the `WeatherService` that ties them together
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod service;
pub mod validate;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::{FetchError, MappingError, ProviderError, WeatherError};
pub use format::format_report;
pub use mapper::{capitalize_first, map_to_report};
pub use model::{Coordinates, ProviderWeatherRecord, ReportFields, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
pub use service::{Lookup, WeatherService};
