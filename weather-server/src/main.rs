//! Binary crate for the `weather-server` service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Logging setup
//! - The actix-web HTTP surface over `weather-core`

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod routes;
mod server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG and WEATHER_* from it take effect.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=info,weather_core=info,actix_web=info".into()),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
