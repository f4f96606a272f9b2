// Config module - file layout and loading mirror the on-disk config dir
#![allow(dead_code)]

mod theme;
mod watcher;

pub use theme::Theme;
pub use watcher::{ConfigEvent, ConfigWatcherMode};

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::{AlcoveError, Result};

const CONFIG_DIR: &str = "alcove";
const MAIN_CONFIG_FILE: &str = "config.toml";
const THEME_FILE: &str = "theme.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub tick_interval_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub watch_config: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            log_level: "info".to_string(),
            log_file: None,
            watch_config: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory with the content JSON files; embedded data when absent.
    pub dir: Option<PathBuf>,
    /// Shelf tag to open on startup.
    pub start_shelf: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: None,
            start_shelf: "book".to_string(),
        }
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    app_config: AppConfig,
    theme: Theme,
    /// Preset used when no theme.toml exists (set from the CLI).
    theme_preset: String,
}

impl ConfigManager {
    pub fn new(theme_preset: Option<&str>) -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        let preset = theme_preset.unwrap_or("default").to_string();

        let app_config = Self::load_app_config(&config_dir);
        let theme = Self::load_theme(&config_dir, &preset);

        Ok(Self {
            config_dir,
            app_config,
            theme,
            theme_preset: preset,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn reload_all(&mut self) {
        self.app_config = Self::load_app_config(&self.config_dir);
        self.theme = Self::load_theme(&self.config_dir, &self.theme_preset);
    }

    pub fn reload_file(&mut self, path: &Path) {
        let file_name = path.file_name().and_then(|n| n.to_str());

        match file_name {
            Some(MAIN_CONFIG_FILE) => {
                self.app_config = Self::load_app_config(&self.config_dir);
            }
            Some(THEME_FILE) => {
                self.theme = Self::load_theme(&self.config_dir, &self.theme_preset);
            }
            _ => {
                self.reload_all();
            }
        }
    }

    pub fn reload_theme(&mut self) {
        self.theme = Self::load_theme(&self.config_dir, &self.theme_preset);
    }

    fn get_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR))
            .ok_or_else(|| AlcoveError::Config("Could not determine config directory".to_string()))
    }

    fn load_app_config(config_dir: &Path) -> AppConfig {
        let path = config_dir.join(MAIN_CONFIG_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_theme(config_dir: &Path, preset: &str) -> Theme {
        let path = config_dir.join(THEME_FILE);
        Self::load_toml_file(&path).unwrap_or_else(|| Theme::preset(preset))
    }

    fn load_toml_file<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)
                .map_err(|e| AlcoveError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        Ok(())
    }

    pub fn write_default_configs(&self) -> Result<()> {
        self.ensure_config_dir()?;

        let main_path = self.config_dir.join(MAIN_CONFIG_FILE);
        if !main_path.exists() {
            let content = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| AlcoveError::Config(format!("Failed to serialize config: {}", e)))?;
            std::fs::write(&main_path, content)
                .map_err(|e| AlcoveError::Config(format!("Failed to write config: {}", e)))?;
        }

        let theme_path = self.config_dir.join(THEME_FILE);
        if !theme_path.exists() {
            let content = toml::to_string_pretty(&Theme::preset(&self.theme_preset))
                .map_err(|e| AlcoveError::Config(format!("Failed to serialize theme: {}", e)))?;
            std::fs::write(&theme_path, content)
                .map_err(|e| AlcoveError::Config(format!("Failed to write theme: {}", e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.tick_interval_ms, 500);
        assert!(config.general.watch_config);
        assert_eq!(config.content.start_shelf, "book");
        assert!(config.content.dir.is_none());
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.general.tick_interval_ms,
            config.general.tick_interval_ms
        );
        assert_eq!(parsed.content.start_shelf, config.content.start_shelf);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig = toml::from_str("[content]\nstart_shelf = \"anime\"").unwrap();
        assert_eq!(parsed.content.start_shelf, "anime");
        assert_eq!(parsed.general.tick_interval_ms, 500);
    }
}
