use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}' in '{url}'. Use http or https.")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Failed to encode JSON body: {source}")]
    EncodeJson {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read cert '{path}': {source}")]
    ReadCert {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid cert '{path}': {source}")]
    InvalidCert {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },
    #[error("Cert '{path}' contains no PEM certificates.")]
    EmptyCertBundle { path: PathBuf },
    #[error("Invalid proxy URL '{url}': {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request {index} of {total} failed: {source}")]
    RequestFailed {
        index: u64,
        total: u64,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to start runtime: {source}")]
    Runtime {
        #[source]
        source: std::io::Error,
    },
}
