use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::args::RequestMethod;
use crate::error::{AppError, AppResult, SessionError};

use super::Session;

/// Bumped whenever the on-disk layout changes; older files are rejected.
pub const SESSION_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionFile {
    version: u32,
    target: String,
    method: Option<RequestMethod>,
    #[serde(default)]
    parameters: BTreeMap<String, String>,
    #[serde(default)]
    delays: Vec<u64>,
}

impl Session {
    /// Reads a session written by [`Session::save`].
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, is not a session file, or was
    /// written with a different format version.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read(path).map_err(|err| {
            AppError::session(SessionError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        })?;

        let probe: VersionProbe = serde_json::from_slice(&content).map_err(|err| {
            AppError::session(SessionError::Deserialize {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        if probe.version != SESSION_FORMAT_VERSION {
            return Err(AppError::session(SessionError::UnsupportedVersion {
                path: path.to_path_buf(),
                found: probe.version,
                expected: SESSION_FORMAT_VERSION,
            }));
        }

        let file: SessionFile = serde_json::from_slice(&content).map_err(|err| {
            AppError::session(SessionError::Deserialize {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        tracing::debug!(
            "Loaded session from {} ({} samples)",
            path.display(),
            file.delays.len()
        );

        Ok(Session::new(
            file.target,
            file.method,
            file.parameters,
            file.delays,
        ))
    }

    /// Writes the full session, including every delay sample, to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be encoded or written.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let file = SessionFile {
            version: SESSION_FORMAT_VERSION,
            target: self.target.clone(),
            method: self.method,
            parameters: self.parameters.clone(),
            delays: self.delays.clone(),
        };
        let json = serde_json::to_vec_pretty(&file)
            .map_err(|err| AppError::session(SessionError::Serialize { source: err }))?;
        std::fs::write(path, json).map_err(|err| {
            AppError::session(SessionError::Write {
                path: path.to_path_buf(),
                source: err,
            })
        })
    }
}
