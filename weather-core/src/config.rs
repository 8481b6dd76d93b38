use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Settings for the remote weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND.to_string() }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [provider]
/// api_url = "https://api.openweathermap.org/data/2.5/weather"
/// api_key = "..."
/// timeout_secs = 10
///
/// [server]
/// bind = "0.0.0.0:8080"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load config from `path`, or defaults if the file doesn't exist yet, then apply
    /// environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut cfg = Self::read_file(path)?;
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    /// Read only the file at `path` (defaults if absent), without environment overrides.
    pub fn read_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, fall back to defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Override fields from `WEATHER_API_URL`, `WEATHER_API_KEY`,
    /// `WEATHER_API_TIMEOUT_SECS` and `WEATHER_BIND` as seen through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("WEATHER_API_URL") {
            self.provider.api_url = url;
        }
        if let Some(key) = lookup("WEATHER_API_KEY") {
            self.provider.api_key = key;
        }
        if let Some(secs) = lookup("WEATHER_API_TIMEOUT_SECS") {
            self.provider.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("WEATHER_API_TIMEOUT_SECS is not a number: {secs:?}"))?;
        }
        if let Some(bind) = lookup("WEATHER_BIND") {
            self.server.bind = bind;
        }
        Ok(())
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.provider.api_key = api_key;
    }

    /// True while the placeholder key is still in use.
    pub fn uses_placeholder_key(&self) -> bool {
        self.provider.api_key == DEFAULT_API_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("weather-core-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn defaults_point_at_public_provider_with_placeholder_key() {
        let cfg = Config::default();

        assert_eq!(cfg.provider.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.provider.timeout_secs, 10);
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert!(cfg.uses_placeholder_key());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let cfg: Config = toml::from_str("[provider]\napi_key = \"SECRET\"\n").unwrap();

        assert_eq!(cfg.provider.api_key, "SECRET");
        assert_eq!(cfg.provider.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.server, ServerConfig::default());
    }

    #[test]
    fn save_then_read_back() {
        let path = scratch_path("roundtrip");
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());
        cfg.server.bind = "0.0.0.0:9000".into();

        cfg.save_to(&path).expect("save must succeed");
        let loaded = Config::read_file(&path).expect("load must succeed");

        assert_eq!(loaded, cfg);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = scratch_path("absent");
        assert_eq!(Config::read_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = [
            ("WEATHER_API_URL", "http://localhost:9999/weather"),
            ("WEATHER_API_KEY", "ENV_KEY"),
            ("WEATHER_API_TIMEOUT_SECS", " 3 "),
            ("WEATHER_BIND", "0.0.0.0:80"),
        ]
        .into_iter()
        .collect();

        let mut cfg = Config::default();
        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(cfg.provider.api_url, "http://localhost:9999/weather");
        assert_eq!(cfg.provider.api_key, "ENV_KEY");
        assert_eq!(cfg.provider.timeout_secs, 3);
        assert_eq!(cfg.server.bind, "0.0.0.0:80");
    }

    #[test]
    fn bad_timeout_override_is_an_error() {
        let mut cfg = Config::default();
        let err = cfg
            .apply_overrides(|k| (k == "WEATHER_API_TIMEOUT_SECS").then(|| "soon".to_string()))
            .unwrap_err();

        assert!(err.to_string().contains("WEATHER_API_TIMEOUT_SECS"));
    }
}
