//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{DEFAULT_NREQS, ProbeArgs};
pub use types::{RequestMethod, TlsVerification};

pub(crate) use parsers::{parse_params, wait_from_seconds};
