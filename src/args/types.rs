use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ValidationError;

/// How the request parameters are sent.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
pub enum RequestMethod {
    /// GET with the parameters in the query string.
    #[serde(rename = "get")]
    #[value(name = "get")]
    Get,
    /// POST with a URL encoded form body.
    #[serde(rename = "fpost")]
    #[value(name = "fpost")]
    FormPost,
    /// POST with a JSON object body.
    #[serde(rename = "post")]
    #[value(name = "post")]
    JsonPost,
}

impl RequestMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestMethod::Get => "get",
            RequestMethod::FormPost => "fpost",
            RequestMethod::JsonPost => "post",
        }
    }

    #[must_use]
    pub const fn http_method(self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::FormPost | RequestMethod::JsonPost => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server certificate verification mode shared by every request of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TlsVerification {
    #[default]
    Enabled,
    Disabled,
    CustomRoots(PathBuf),
}

impl TlsVerification {
    /// Resolves the verification mode from `--no-verify` and `--cert`.
    ///
    /// # Errors
    ///
    /// Returns an error when both a certificate and `--no-verify` are given.
    pub fn resolve(no_verify: bool, cert: Option<&Path>) -> Result<Self, ValidationError> {
        match (no_verify, cert) {
            (true, Some(_)) => Err(ValidationError::CertWithNoVerify),
            (true, None) => Ok(TlsVerification::Disabled),
            (false, Some(path)) => Ok(TlsVerification::CustomRoots(path.to_path_buf())),
            (false, None) => Ok(TlsVerification::Enabled),
        }
    }
}
