use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chart::model::DataSet;
use crate::chart::theme::{ChartTheme, HexColor};

/// Serialized theme settings. Every field is optional in the file; missing
/// fields keep the default theme's value.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub ring_color: HexColor,
    pub background_from: HexColor,
    pub background_to: HexColor,
    pub label_color: HexColor,
    pub label_font_family: String,
    pub label_font_size: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let theme = ChartTheme::default();
        Self {
            ring_color: theme.ring_color,
            background_from: theme.background_from,
            background_to: theme.background_to,
            label_color: theme.label_color,
            label_font_family: theme.label_font_family,
            label_font_size: theme.label_font_size,
        }
    }
}

impl ThemeConfig {
    pub fn into_theme(self) -> ChartTheme {
        ChartTheme {
            ring_color: self.ring_color,
            background_from: self.background_from,
            background_to: self.background_to,
            label_color: self.label_color,
            label_font_family: self.label_font_family,
            label_font_size: self.label_font_size,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "ringchart", "ringchart").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("theme.toml"))
}

/// Loads the theme from the given file (or the user config path), with
/// `RINGCHART_*` environment variables layered on top.
pub fn load_theme(path: Option<&Path>) -> Result<ThemeConfig, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("RINGCHART"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_theme_or_default(path: Option<&Path>) -> ThemeConfig {
    match load_theme(path) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("Falling back to the default theme: {e}");
            ThemeConfig::default()
        }
    }
}

/// Reads a chart data file (`data`, optional `labels` and `colors`).
pub fn load_chart_data(path: &Path) -> Result<DataSet, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()))
        .build()?;

    Ok(s.try_deserialize()?)
}
