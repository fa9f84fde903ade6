use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    catalog::WeatherCatalog,
    model::TempUnit,
    provider::{CatalogProvider, catalog::DEFAULT_LATENCY},
};

pub const DEFAULT_CITY: &str = "London";

pub const DEFAULT_PRESETS: &[&str] =
    &["London", "New York", "Tokyo", "Paris", "Sydney", "Moscow", "Mumbai"];

/// Top-level configuration stored on disk.
///
/// Every field is optional; missing ones fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// City searched on startup.
    pub default_city: Option<String>,

    /// Unit the view starts in.
    pub default_unit: Option<TempUnit>,

    /// Simulated lookup latency in milliseconds.
    pub latency_ms: Option<u64>,

    /// Cities offered as one-click presets.
    pub presets: Vec<String>,

    /// Optional TOML file extending the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn default_unit(&self) -> TempUnit {
        self.default_unit.unwrap_or_default()
    }

    pub fn latency(&self) -> Duration {
        self.latency_ms.map(Duration::from_millis).unwrap_or(DEFAULT_LATENCY)
    }

    pub fn presets(&self) -> Vec<String> {
        if self.presets.is_empty() {
            DEFAULT_PRESETS.iter().map(|s| s.to_string()).collect()
        } else {
            self.presets.clone()
        }
    }

    /// Build the catalog: built-ins, extended by `catalog_path` when set.
    pub fn catalog(&self) -> Result<WeatherCatalog> {
        match &self.catalog_path {
            Some(path) => WeatherCatalog::builtin_with_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => Ok(WeatherCatalog::builtin()),
        }
    }

    pub fn provider(&self) -> Result<CatalogProvider> {
        Ok(CatalogProvider::with_latency(self.catalog()?, self.latency()))
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
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
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
