//! HTTP surface under `/api/weather`.

use actix_web::{
    HttpResponse, ResponseError,
    error::InternalError,
    http::{StatusCode, header::ContentType},
    web,
};
use serde::Deserialize;
use std::fmt;
use tracing::{info, warn};
use weather_core::{WeatherError, WeatherReport, WeatherService, validate};

pub const HEALTH_MESSAGE: &str = "Weather Integration Service is running ✅";

const FETCH_FAILED_BODY: &str = "Failed to fetch weather data";

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Maps service errors onto responses: empty 400 for bad input, sanitized 500 otherwise.
#[derive(Debug)]
pub struct ApiError(WeatherError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        ApiError(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            WeatherError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            WeatherError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.0 {
            WeatherError::InvalidInput(_) => HttpResponse::BadRequest().finish(),
            WeatherError::FetchFailed(_) => HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": FETCH_FAILED_BODY })),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "rejecting malformed query string");
        InternalError::from_response(err, HttpResponse::BadRequest().finish()).into()
    });

    cfg.service(
        web::scope("/api/weather")
            .app_data(query_config)
            .route("/city", web::get().to(weather_by_city))
            .route("/coordinates", web::get().to(weather_by_coordinates))
            .route("/health", web::get().to(health)),
    );
}

async fn weather_by_city(
    service: web::Data<WeatherService>,
    query: web::Query<CityQuery>,
) -> Result<web::Json<WeatherReport>, ApiError> {
    info!(name = ?query.name, "received weather request for city");

    let city = validate::city(query.name.as_deref())
        .inspect_err(|e| warn!(error = %e, "invalid city name"))?;
    let report = service.weather_for_city(&city).await?;

    Ok(web::Json(report))
}

async fn weather_by_coordinates(
    service: web::Data<WeatherService>,
    query: web::Query<CoordinatesQuery>,
) -> Result<web::Json<WeatherReport>, ApiError> {
    info!(lat = ?query.lat, lon = ?query.lon, "received weather request for coordinates");

    let coords = validate::coordinates(query.lat, query.lon)
        .inspect_err(|e| warn!(error = %e, "invalid coordinates"))?;
    let report = service.weather_by_coordinates(coords).await?;

    Ok(web::Json(report))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(HEALTH_MESSAGE)
}
