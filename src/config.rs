//! Start-up configuration.
//!
//! Read from the JSON file named by `POLL_DESK_CONFIG` when set, with
//! `POLL_DESK_THEME` overriding the theme. Missing fields take defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use log::warn;
use serde::Deserialize;

pub const CONFIG_ENV: &str = "POLL_DESK_CONFIG";
pub const THEME_ENV: &str = "POLL_DESK_THEME";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default = "default_theme")]
    pub theme: String,

    /// TTF/OTF file placed in front of the default proportional and monospace fonts.
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

fn default_title() -> String {
    "Interactive Poll System".to_string()
}

fn default_width() -> f32 {
    640.0
}

fn default_height() -> f32 {
    720.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            theme: default_theme(),
            font_path: None,
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Ok(theme) = std::env::var(THEME_ENV) {
            config.theme = theme;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            bail!("invalid timestamp_format {:?}", self.timestamp_format);
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        Ok(())
    }

    /// Parsed theme; unknown names fall back to the light theme.
    pub fn theme(&self) -> Theme {
        self.theme.parse().unwrap_or_else(|_| {
            warn!("Unknown theme {:?}, using light", self.theme);
            Theme::Light
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "latte" => Ok(Theme::Latte),
            "frappe" => Ok(Theme::Frappe),
            "macchiato" => Ok(Theme::Macchiato),
            "mocha" => Ok(Theme::Mocha),
            other => bail!("unknown theme {:?}", other),
        }
    }
}
