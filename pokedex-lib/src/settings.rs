//! User settings (database path, catalogue location, API root).
//!
//! The settings file is `~/.config/pokedex/settings.toml`. Every value is
//! optional; each `resolve_*` function applies the same priority chain:
//!
//! 1. CLI override (if `Some`)
//! 2. Value saved in `settings.toml`
//! 3. Built-in default

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Public PokeAPI root, used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Unknown setting '{0}' (expected db_path, catalogue or api_base_url)")]
    UnknownKey(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// SQLite database written by the builder and importers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
    /// JSON catalogue path or URL read by lookups and written by export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Set one value by key name. An empty value clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let value = Some(value.trim()).filter(|v| !v.is_empty());
        match key {
            "db_path" => self.db_path = value.map(PathBuf::from),
            "catalogue" => self.catalogue = value.map(str::to_string),
            "api_base_url" => self.api_base_url = value.map(str::to_string),
            other => return Err(SettingsError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn resolve_db_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| data_dir().join("pokemon.db"))
    }

    pub fn resolve_catalogue(&self, cli_override: Option<String>) -> String {
        cli_override
            .or_else(|| self.catalogue.clone())
            .unwrap_or_else(|| data_dir().join("pokemon.json").display().to_string())
    }

    pub fn resolve_api_base_url(&self, cli_override: Option<String>) -> String {
        cli_override
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }
}

/// Canonical path to the settings file: `~/.config/pokedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pokedex").join("settings.toml")
}

/// Default directory for the database and exported catalogue.
pub fn data_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("pokedex")
}

/// Load settings from the canonical path. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => {
            return Err(SettingsError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };
    Settings::from_toml_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Save settings to the canonical path.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to(&settings_path(), settings)
}

/// Write settings atomically (temp file, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let io_err = |e: io::Error| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
