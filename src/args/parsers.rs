use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::ValidationError;

/// Splits a `key=value` entry. Exactly one `=` is accepted.
pub(crate) fn parse_param(s: &str) -> Result<(String, String), ValidationError> {
    let mut parts = s.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key.to_owned(), value.to_owned())),
        _ => Err(ValidationError::InvalidParameter {
            value: s.to_owned(),
        }),
    }
}

/// Builds a parameter map from `key=value` entries; later keys overwrite earlier ones.
pub(crate) fn parse_params<I, S>(entries: I) -> Result<BTreeMap<String, String>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = BTreeMap::new();
    for entry in entries {
        let (key, value) = parse_param(entry.as_ref())?;
        params.insert(key, value);
    }
    Ok(params)
}

pub(crate) fn wait_from_seconds(seconds: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(seconds).ok()
}

pub(super) fn parse_wait_seconds(s: &str) -> Result<Duration, ValidationError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .and_then(wait_from_seconds)
        .ok_or_else(|| ValidationError::InvalidWait {
            value: s.to_owned(),
        })
}
