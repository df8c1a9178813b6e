// src/config.rs
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "fileops.toml";

/// Paths and filters resolved once at startup and passed to every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_file: PathBuf,
    pub base_dir: PathBuf,
    pub out_dir: PathBuf,
    pub default_ext: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("data/input.txt"),
            base_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("out"),
            default_ext: String::from(".txt"),
        }
    }
}

/// On-disk shape of the config file. Every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawConfig {
    default_file: Option<String>,
    base_dir: Option<String>,
    out_dir: Option<String>,
    default_ext: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Parses TOML config text. Missing or empty keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            default_file: non_empty(raw.default_file).map_or(defaults.default_file, PathBuf::from),
            base_dir: non_empty(raw.base_dir).map_or(defaults.base_dir, PathBuf::from),
            out_dir: non_empty(raw.out_dir).map_or(defaults.out_dir, PathBuf::from),
            default_ext: non_empty(raw.default_ext).unwrap_or(defaults.default_ext),
        })
    }

    /// Loads the config file at `path`, falling back to the defaults when
    /// the file is missing or cannot be parsed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("config {} not read ({e}); using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_toml(&content) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("config {} is invalid ({e}); using defaults", path.display());
                Self::default()
            }
        }
    }
}
