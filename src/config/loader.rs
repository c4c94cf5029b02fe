use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Config picked up from the working directory when `--config` is not given.
///
/// Only TOML is discovered: sessions are stored as JSON and a session saved as
/// `resptime.json` must not be mistaken for configuration.
pub const DEFAULT_CONFIG_FILE: &str = "resptime.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            })),
            None => Err(AppError::config(ConfigError::MissingExtension)),
        }
    }

    fn parse(self, path: &Path, content: &str) -> AppResult<ConfigFile> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| {
                AppError::config(ConfigError::ParseToml {
                    path: path.to_path_buf(),
                    source: err,
                })
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| {
                AppError::config(ConfigError::ParseJson {
                    path: path.to_path_buf(),
                    source: err,
                })
            }),
        }
    }
}

/// Loads the config named by `--config`, or [`DEFAULT_CONFIG_FILE`] when present.
///
/// A discovered default that is also one of `session_files` (the `--restore` /
/// `--store` targets) is skipped.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>, session_files: &[&Path]) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        return load_config_file(Path::new(path)).map(Some);
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if !default_path.exists() {
        return Ok(None);
    }
    if session_files
        .iter()
        .any(|session_file| same_file(session_file, &default_path))
    {
        tracing::debug!(
            "Not reading {} as config: it is the session file of this run",
            default_path.display()
        );
        return Ok(None);
    }

    tracing::debug!("Using config file {}", default_path.display());
    load_config_file(&default_path).map(Some)
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    format.parse(path, &content)
}

fn same_file(left: &Path, right: &Path) -> bool {
    match (left.canonicalize(), right.canonicalize()) {
        (Ok(left_real), Ok(right_real)) => left_real == right_real,
        _ => left == right,
    }
}
