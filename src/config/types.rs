use serde::Deserialize;
use std::path::PathBuf;

use crate::args::RequestMethod;

/// Options read from a TOML or JSON config file. Every field is optional and
/// only fills in what the command line left unset.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub method: Option<RequestMethod>,
    pub params: Option<Vec<String>>,
    pub append: Option<bool>,
    pub restore: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub nreqs: Option<u64>,
    /// Seconds, may be fractional.
    pub wait: Option<f64>,
    #[serde(alias = "http_proxy")]
    pub proxy: Option<String>,
    #[serde(alias = "https_proxy")]
    pub sproxy: Option<String>,
    pub cert: Option<PathBuf>,
    pub no_verify: Option<bool>,
}
