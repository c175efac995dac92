use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

mod loader;
mod paths;

use super::commands::DEFAULT_MAX_TOKENS;
use super::prompt::DEFAULT_PROMPT_ID;
use crate::path::PathLimits;
use loader::ConfigLoader;
pub use paths::ConfigPaths;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt_id: String,
    pub max_tokens: usize,
    pub limits: PathLimits,
    pub history_size: usize,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_id: DEFAULT_PROMPT_ID.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            limits: PathLimits::default(),
            history_size: DEFAULT_HISTORY_SIZE,
            color: true,
        }
    }
}

impl Config {
    /// Loads `explicit` if given, otherwise `~/.explorerrc` when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let paths = match explicit {
            Some(path) => ConfigPaths::explicit(path),
            None => match ConfigPaths::new() {
                Ok(paths) => paths,
                Err(ConfigError::HomeDirNotFound) => {
                    debug!("no home directory, using default settings");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e),
            },
        };

        let mut config = Self::default();
        ConfigLoader::new(&paths).load_configs(&mut config)?;
        Ok(config)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "prompt_id" => self.prompt_id = value.to_string(),
            "max_tokens" => self.max_tokens = parse_bound(key, value)?,
            "max_path_len" => self.limits.max_path_len = parse_bound(key, value)?,
            "max_components" => self.limits.max_components = parse_bound(key, value)?,
            "max_component_len" => self.limits.max_component_len = parse_bound(key, value)?,
            "history_size" => {
                self.history_size = value.parse().map_err(|_| invalid(key, value))?
            }
            "color" => self.color = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bound(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid(key, value)),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
