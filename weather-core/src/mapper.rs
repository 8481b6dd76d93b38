use chrono::{DateTime, Utc};

use crate::{
    error::MappingError,
    model::{ProviderWeatherRecord, ReportFields, WeatherReport},
};

/// Used when the provider sends no condition descriptor.
pub const NO_DESCRIPTION: &str = "N/A";

/// Convert a provider payload into a [`WeatherReport`] stamped with `now`.
///
/// Text fields pass through (absent becomes empty). Absent `sys`, `main` or `wind`
/// objects, and absent numeric readings, are reported as [`MappingError::MissingField`].
pub fn map_to_report(
    record: ProviderWeatherRecord,
    now: DateTime<Utc>,
) -> Result<WeatherReport, MappingError> {
    let location = record.name.unwrap_or_default();

    let country = record
        .sys
        .ok_or(MappingError::MissingField("sys"))?
        .country
        .unwrap_or_default();

    let main = record.main.ok_or(MappingError::MissingField("main"))?;
    let temperature = main.temp.ok_or(MappingError::MissingField("main.temp"))?;
    let feels_like = main.feels_like.ok_or(MappingError::MissingField("main.feels_like"))?;
    let humidity = main.humidity.ok_or(MappingError::MissingField("main.humidity"))?;

    let wind_speed = record
        .wind
        .ok_or(MappingError::MissingField("wind"))?
        .speed
        .ok_or(MappingError::MissingField("wind.speed"))?;

    let description = record
        .weather
        .and_then(|conditions| conditions.into_iter().next())
        .and_then(|c| c.description)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Ok(WeatherReport::new(
        ReportFields {
            location,
            country,
            temperature,
            feels_like,
            description: capitalize_first(&description),
            humidity,
            wind_speed,
        },
        now,
    ))
}

/// Upper-case the first character if it is ASCII; everything else is kept as is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
