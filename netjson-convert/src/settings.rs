use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Defaults the converters fall back to when a document leaves a field unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub openwrt: OpenWrtSettings,
    pub wireless: WirelessSettings,
    pub extensions: ExtensionSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpenWrtSettings {
    pub default_radio_driver: String,
    pub default_hostname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WirelessSettings {
    pub radius_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtensionSettings {
    /// Field carrying the block type of an extension entry.
    pub type_field: String,
    /// Optional field carrying the block name.
    pub name_field: String,
}

impl Default for OpenWrtSettings {
    fn default() -> Self {
        Self {
            default_radio_driver: "mac80211".to_string(),
            default_hostname: "OpenWRT".to_string(),
        }
    }
}

impl Default for WirelessSettings {
    fn default() -> Self {
        Self { radius_port: 1812 }
    }
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            type_field: "config_name".to_string(),
            name_field: "config_value".to_string(),
        }
    }
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Built-in settings shipped with the crate.
pub fn embedded_settings() -> Settings {
    let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/settings/default.toml"));
    parse_settings(raw, "embedded settings".to_string()).unwrap_or_default()
}

/// Load settings from a TOML file. Missing fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings(&raw, path.display().to_string())
}

/// Settings from `path` when given, otherwise the embedded defaults, along
/// with a label describing where they came from.
pub fn resolve_settings(path: Option<&Path>) -> Result<(Settings, String), SettingsError> {
    match path {
        Some(path) => Ok((load_settings(path)?, format!("file:{}", path.display()))),
        None => Ok((embedded_settings(), "embedded".to_string())),
    }
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse { path, source })
}
