use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::chart::PercentOverlay;
use crate::data::{ColorError, Palette};
use crate::core::Tab;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_tab: Tab,

    /// Input poll interval of the event loop
    pub tick_rate_ms: u64,

    /// Pie label offset past the outer radius, as a fraction of the radius
    pub pie_label_margin: f64,

    pub log_file: Option<String>,

    pub log_level: String,

    /// Chart colors as `#rrggbb`, indexed with wraparound
    pub palette: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_tab: Tab::Overview,
            tick_rate_ms: 200,
            pie_label_margin: PercentOverlay::default().margin,
            log_file: None,
            log_level: "info".to_string(),
            palette: Palette::DEFAULT_HEX.iter().map(|hex| hex.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(16, 5_000))
    }

    pub fn overlay(&self) -> PercentOverlay {
        if self.pie_label_margin.is_finite() && self.pie_label_margin >= 0.0 {
            PercentOverlay {
                margin: self.pie_label_margin,
            }
        } else {
            PercentOverlay::default()
        }
    }

    pub fn palette(&self) -> Result<Palette, ColorError> {
        Palette::from_hex(&self.palette)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .and_then(expand_path)
            .or_else(default_log_path)
    }
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

/// Load the config at `path`; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("QCDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("qcdash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("qcdash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "qcdash", "qcdash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("qcdash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("qcdash"));
    }
    directories::ProjectDirs::from("io", "qcdash", "qcdash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("qcdash.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config.initial_tab, Tab::Overview);
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
        assert_eq!(config.overlay(), PercentOverlay::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse(
            r#"
            initial_tab = "performance"
            tick_rate_ms = 100
            pie_label_margin = 0.5
            log_file = "/tmp/qcdash-test.log"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.initial_tab, Tab::Performance);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.overlay().margin, 0.5);
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/qcdash-test.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_palette_key() {
        assert_eq!(parse("").unwrap().palette(), Ok(Palette::default()));

        let config = parse(r##"palette = ["#ff0000", "#00ff00"]"##).unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color(2).to_string(), "#ff0000");

        let config = parse(r##"palette = ["#ff0000", "teal"]"##).unwrap();
        assert_eq!(config.palette(), Err(ColorError::InvalidHex("teal".to_string())));
        let config = parse("palette = []").unwrap();
        assert_eq!(config.palette(), Err(ColorError::EmptyPalette));
    }

    #[test]
    fn test_unknown_tab_rejected() {
        assert!(parse("initial_tab = \"trends\"").is_err());
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let config = parse("tick_rate_ms = 0\npie_label_margin = -1.0").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(16));
        assert_eq!(config.overlay(), PercentOverlay::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("qcdash-no-such-dir").join("config.toml");
        let config = load_from(&path).unwrap();
        assert_eq!(config.initial_tab, Tab::Overview);
    }
}
