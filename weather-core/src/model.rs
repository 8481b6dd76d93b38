use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::format_report;

/// Raw payload of the OpenWeather "current weather" endpoint.
///
/// Every level is optional so that a partial payload still decodes; the mapper
/// decides which pieces are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderWeatherRecord {
    pub name: Option<String>,
    pub sys: Option<OwSys>,
    pub main: Option<OwMain>,
    pub weather: Option<Vec<OwCondition>>,
    pub wind: Option<OwWind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwSys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwCondition {
    /// Short condition code, e.g. "Snow".
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwWind {
    pub speed: Option<f64>,
}

/// A validated latitude/longitude pair. Obtain one through [`crate::validate::coordinates`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl Coordinates {
    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Field values a [`WeatherReport`] is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFields {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
}

/// Client-facing weather report.
///
/// `formatted_message` is rendered once in [`WeatherReport::new`]; fields are
/// read-only afterwards so the message can never go stale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    location: String,
    country: String,
    temperature: f64,
    feels_like: f64,
    description: String,
    humidity: u8,
    wind_speed: f64,
    formatted_message: String,
    timestamp: DateTime<Utc>,
}

impl WeatherReport {
    pub fn new(fields: ReportFields, timestamp: DateTime<Utc>) -> Self {
        let mut report = Self {
            location: fields.location,
            country: fields.country,
            temperature: fields.temperature,
            feels_like: fields.feels_like,
            description: fields.description,
            humidity: fields.humidity,
            wind_speed: fields.wind_speed,
            formatted_message: String::new(),
            timestamp,
        };
        report.formatted_message = format_report(&report);
        report
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn feels_like(&self) -> f64 {
        self.feels_like
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn humidity(&self) -> u8 {
        self.humidity
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn formatted_message(&self) -> &str {
        &self.formatted_message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Everything except the formatted message and timestamp.
    #[cfg(test)]
    pub(crate) fn fields(&self) -> ReportFields {
        ReportFields {
            location: self.location.clone(),
            country: self.country.clone(),
            temperature: self.temperature,
            feels_like: self.feels_like,
            description: self.description.clone(),
            humidity: self.humidity,
            wind_speed: self.wind_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_record_ignores_unknown_fields_and_tolerates_missing_objects() {
        let body = r#"{
            "coord": {"lon": 18.07, "lat": 59.33},
            "name": "Oslo",
            "main": {"temp": -3.2, "feels_like": -7.9, "humidity": 74, "pressure": 1012},
            "visibility": 10000
        }"#;

        let record: ProviderWeatherRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.name.as_deref(), Some("Oslo"));
        assert!(record.sys.is_none());
        assert!(record.weather.is_none());
        assert_eq!(record.main.unwrap().humidity, Some(74));
    }

    #[test]
    fn report_serializes_camel_case_with_message() {
        let report = WeatherReport::new(
            ReportFields {
                location: "Oslo".into(),
                country: "NO".into(),
                temperature: -3.2,
                feels_like: -7.9,
                description: "Overcast clouds".into(),
                humidity: 74,
                wind_speed: 5.1,
            },
            Utc::now(),
        );

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["feelsLike"], -7.9);
        assert_eq!(json["windSpeed"], 5.1);
        assert_eq!(json["humidity"], 74);
        assert_eq!(json["formattedMessage"], report.formatted_message());
        assert!(json["timestamp"].is_string());
    }
}
