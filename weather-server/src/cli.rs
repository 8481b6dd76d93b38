use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use std::path::{Path, PathBuf};
use weather_core::{Config, WeatherService, provider_from_config, validate};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather integration service")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    Serve {
        /// Address to listen on, e.g. "0.0.0.0:8080". Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Look up the weather once and print the report.
    Show {
        /// City name.
        #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present = "lat")]
        city: Option<String>,

        /// Latitude, -90 to 90.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude, -180 to 180.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Store provider credentials in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command {
            Command::Serve { bind } => {
                let mut config = Config::load_from(&path)?;
                if let Some(bind) = bind {
                    config.server.bind = bind;
                }
                server::run(config).await
            }
            Command::Show { city, lat, lon } => {
                let config = Config::load_from(&path)?;
                let service = WeatherService::new(provider_from_config(&config.provider)?);

                let report = match city {
                    Some(city) => {
                        let city = validate::city(Some(&city))?;
                        service.weather_for_city(&city).await?
                    }
                    None => {
                        let coords = validate::coordinates(lat, lon)?;
                        service.weather_by_coordinates(coords).await?
                    }
                };

                println!("{}", report.formatted_message());
                Ok(())
            }
            Command::Configure => configure(&path),
        }
    }
}

fn configure(path: &Path) -> anyhow::Result<()> {
    // Read the file alone so environment overrides are not written back.
    let mut config = Config::read_file(path)?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_url = Text::new("Provider URL:")
        .with_default(&config.provider.api_url)
        .prompt()
        .context("Failed to read provider URL")?;

    config.set_api_key(api_key.trim().to_string());
    config.provider.api_url = api_url.trim().to_string();
    config.save_to(path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "weather-server", "show", "--lat", "-33.87", "--lon", "151.21",
        ])
        .expect("coordinates must parse");

        match cli.command {
            Command::Show { city, lat, lon } => {
                assert!(city.is_none());
                assert_eq!(lat, Some(-33.87));
                assert_eq!(lon, Some(151.21));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_rejects_city_with_coordinates() {
        let res = Cli::try_parse_from([
            "weather-server", "show", "--city", "Oslo", "--lat", "1", "--lon", "2",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn show_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["weather-server", "show", "--lat", "10"]).is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["weather-server", "serve", "--config", "/tmp/w.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.toml")));
    }
}
