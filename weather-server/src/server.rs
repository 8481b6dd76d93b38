use actix_web::{App, HttpServer, middleware, web};
use anyhow::{Context, Result};
use tracing::{info, warn};
use weather_core::{Config, WeatherService, provider_from_config};

use crate::routes;

/// Run the HTTP server until it is shut down.
pub async fn run(config: Config) -> Result<()> {
    if config.uses_placeholder_key() {
        warn!("using the placeholder API key; live lookups will be rejected by the provider");
    }

    let provider = provider_from_config(&config.provider)?;
    let service = web::Data::new(WeatherService::new(provider));
    let bind = config.server.bind;

    info!(%bind, provider_url = %config.provider.api_url, "starting weather server");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(routes::configure)
    })
    .bind(bind.as_str())
    .with_context(|| format!("Failed to bind {bind}"))?
    .run()
    .await
    .context("HTTP server stopped with an error")
}
